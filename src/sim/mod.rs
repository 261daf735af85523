pub mod responses;

use std::time::{Duration, Instant};

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::sim::responses::{ResponseStyle, match_table};

/// Fake command execution: picks canned output for a submitted command.
/// The Incorrect-verdict path draws from the matched table's error lines;
/// everything else draws from the success lines.
pub struct Simulator {
    rng: SmallRng,
}

impl Simulator {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    #[allow(dead_code)] // Used by integration tests
    pub fn with_rng(rng: SmallRng) -> Self {
        Self { rng }
    }

    pub fn respond(&mut self, command: &str, failed: bool) -> String {
        let Some(table) = match_table(command) else {
            return "Command executed successfully".to_string();
        };

        if failed {
            let idx = self.rng.gen_range(0..table.error.len());
            return table.error[idx].to_string();
        }

        match table.style {
            ResponseStyle::RandomLine => {
                let idx = self.rng.gen_range(0..table.success.len());
                table.success[idx].to_string()
            }
            ResponseStyle::Joined => table.success.join("\n"),
        }
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

/// A transcript line waiting for its delay to elapse.
struct PendingOutput {
    due: Instant,
    text: String,
}

/// One-shot delayed outputs, drained on event ticks. No cancellation: rapid
/// submissions queue independent entries which fire in schedule order.
#[derive(Default)]
pub struct OutputQueue {
    pending: Vec<PendingOutput>,
}

impl OutputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, text: String) {
        self.pending.push(PendingOutput {
            due: now + delay,
            text,
        });
    }

    /// Remove and return every entry whose delay has elapsed, preserving
    /// schedule order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<String> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                due.push(self.pending.remove(i).text);
            } else {
                i += 1;
            }
        }
        due
    }

    #[allow(dead_code)] // Used by integration tests
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
