use chrono::Local;

/// Presentation tag for a transcript line. Styling only, no behavioral
/// effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Command,
    Output,
    Info,
    Error,
    Success,
}

#[derive(Clone, Debug)]
pub struct TranscriptLine {
    /// Local wall-clock time at append, pre-formatted.
    pub timestamp: String,
    pub kind: LineKind,
    /// May contain embedded newlines for multi-line canned output; the view
    /// expands them under a single timestamp.
    pub text: String,
}

/// Append-only simulated terminal log. Unbounded; lines are never removed
/// except by an explicit clear, which resets to a single sentinel line.
pub struct Transcript {
    lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    #[allow(dead_code)] // Used by tests
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push(&mut self, kind: LineKind, text: &str) {
        self.lines.push(TranscriptLine {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            kind,
            text: text.to_string(),
        });
    }

    /// Drop everything and leave a sentinel, then note the clear itself.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.push(LineKind::Command, "Terminal cleared");
        self.push(LineKind::Info, "Terminal output cleared.");
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
