use std::path::Path;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::quiz::question;
use crate::quiz::session::{QuizSession, Verdict};
use crate::sim::{OutputQueue, Simulator};
use crate::transcript::{LineKind, Transcript};
use crate::ui::command_input::CommandInput;
use crate::ui::theme::Theme;

pub struct App {
    pub session: QuizSession,
    pub transcript: Transcript,
    pub input: CommandInput,
    pub feedback: Option<(LineKind, String)>,
    pub config: Config,
    pub theme: &'static Theme,
    pub should_quit: bool,
    simulator: Simulator,
    pending: OutputQueue,
}

impl App {
    pub fn new(questions_path: Option<&Path>) -> Self {
        let mut config = Config::load().unwrap_or_default();
        config.validate();
        Self::with_config(config, questions_path)
    }

    /// Build against an explicit config. `new` loads the on-disk config
    /// first; tests pass `Config::default()` to stay independent of the
    /// environment.
    pub fn with_config(config: Config, questions_path: Option<&Path>) -> Self {
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        let mut transcript = Transcript::new();
        let questions = match question::load_questions(questions_path) {
            Ok(questions) => Some(questions),
            Err(err) => {
                transcript.push(
                    LineKind::Error,
                    &format!("Error loading questions: {err}. Restart to retry."),
                );
                None
            }
        };
        let loaded = questions.is_some();

        let mut app = Self {
            session: QuizSession::new(questions.unwrap_or_default()),
            transcript,
            input: CommandInput::new(),
            feedback: None,
            config,
            theme,
            should_quit: false,
            simulator: Simulator::new(),
            pending: OutputQueue::new(),
        };

        // A failed load leaves the UI interactive with no questions; the
        // initial filter pass only runs after a successful load.
        if loaded {
            let difficulty = app.config.default_difficulty.clone();
            app.set_difficulty(&difficulty);
        }
        app
    }

    /// Activate a difficulty toggle: report the resulting count, then either
    /// draw a new question or show the explicit empty state. Never leaves a
    /// stale question displayed.
    pub fn set_difficulty(&mut self, tag: &str) {
        let count = self.session.set_difficulty(tag);
        self.transcript.push(
            LineKind::Info,
            &format!(
                "Difficulty set to: {} ({count} questions available)",
                tag.to_uppercase()
            ),
        );
        if count > 0 {
            self.next_question();
        } else {
            self.feedback = None;
            self.input.clear();
            self.transcript.push(
                LineKind::Error,
                &format!("No questions available for {tag} difficulty."),
            );
        }
    }

    pub fn next_question(&mut self) {
        self.transcript.push(LineKind::Info, "Loading new question...");
        let loaded = self.session.next_question().map(|q| {
            format!(
                "New question loaded ({}): {}",
                q.difficulty_label(),
                q.question
            )
        });
        match loaded {
            Some(line) => {
                self.feedback = None;
                self.input.clear();
                self.transcript.push(LineKind::Info, &line);
            }
            None => {
                self.transcript.push(
                    LineKind::Error,
                    "No questions available for current difficulty level.",
                );
            }
        }
    }

    /// Check the typed command. The verdict is computed synchronously; the
    /// simulated command output lands in the transcript after the configured
    /// delay, independent of the verdict feedback.
    pub fn submit(&mut self) {
        let raw = self.input.value().to_string();
        match self.session.submit(&raw) {
            Verdict::NoInput => {
                self.feedback = Some((
                    LineKind::Error,
                    "Please enter a command first.".to_string(),
                ));
            }
            Verdict::NoQuestion => {
                self.feedback = Some((
                    LineKind::Error,
                    "No question available. Please select a difficulty level.".to_string(),
                ));
            }
            verdict => {
                let command = raw.trim();
                self.transcript.push(LineKind::Command, &format!("$ {command}"));

                let failed = verdict == Verdict::Incorrect;
                let response = self.simulator.respond(command, failed);
                self.pending.schedule(
                    Instant::now(),
                    Duration::from_millis(self.config.response_delay_ms),
                    response,
                );

                if failed {
                    self.feedback =
                        Some((LineKind::Error, "Incorrect. Try again.".to_string()));
                    self.transcript
                        .push(LineKind::Error, "Command failed. Check your syntax.");
                } else {
                    self.feedback =
                        Some((LineKind::Success, "Correct! Well done!".to_string()));
                    self.transcript
                        .push(LineKind::Success, "Command executed successfully!");
                }
            }
        }
    }

    /// Show the expected answer without consuming a turn. Repeatable.
    pub fn reveal(&mut self) {
        match self.session.reveal() {
            Some(answer) => {
                let answer = answer.to_string();
                self.feedback = Some((LineKind::Info, format!("Answer: {answer}")));
                self.transcript
                    .push(LineKind::Info, &format!("Showing answer: {answer}"));
            }
            None => {
                self.feedback = Some((
                    LineKind::Error,
                    "No question available. Please select a difficulty level.".to_string(),
                ));
            }
        }
    }

    /// Put the most recently submitted command back into the input line.
    pub fn recall_last_command(&mut self) {
        if let Some(last) = self.session.last_command() {
            let last = last.to_string();
            self.input.set_text(&last);
        }
    }

    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    /// Drain delayed simulator outputs whose timers have elapsed. Pending
    /// entries from rapid submissions fire independently and may interleave
    /// with later transcript lines.
    pub fn tick(&mut self) {
        for text in self.pending.drain_due(Instant::now()) {
            self.transcript.push(LineKind::Output, &text);
        }
    }
}
