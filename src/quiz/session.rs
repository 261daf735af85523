use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::quiz::question::QuestionRecord;

/// Outcome of a submitted answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    /// Trimmed input was empty; nothing was compared or recorded.
    NoInput,
    /// No current question (empty working set or nothing drawn yet).
    NoQuestion,
}

/// All quiz state for one run: the immutable question store, the active
/// difficulty filter, the derived working set, the current draw, and the
/// submitted-command history. Owning this explicitly (rather than globals)
/// keeps the logic unit-testable.
pub struct QuizSession {
    questions: Vec<QuestionRecord>,
    difficulty: String,
    /// Indices into `questions`, store order preserved.
    working_set: Vec<usize>,
    /// Index into `working_set`.
    current: Option<usize>,
    history: Vec<String>,
    rng: SmallRng,
}

impl QuizSession {
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        Self::with_rng(questions, SmallRng::from_entropy())
    }

    pub fn with_rng(questions: Vec<QuestionRecord>, rng: SmallRng) -> Self {
        let working_set = (0..questions.len()).collect();
        Self {
            questions,
            difficulty: "all".to_string(),
            working_set,
            current: None,
            history: Vec::new(),
            rng,
        }
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn working_len(&self) -> usize {
        self.working_set.len()
    }

    #[allow(dead_code)] // Used by integration tests
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn last_command(&self) -> Option<&str> {
        self.history.last().map(|s| s.as_str())
    }

    /// Working-set records in store order.
    #[allow(dead_code)] // Used by tests
    pub fn working_questions(&self) -> impl Iterator<Item = &QuestionRecord> {
        self.working_set.iter().map(|&i| &self.questions[i])
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.current
            .and_then(|i| self.working_set.get(i))
            .map(|&store_idx| &self.questions[store_idx])
    }

    /// Activate a difficulty tag. "all" keeps the full store; any other tag
    /// keeps the subsequence whose difficulty equals it, store order
    /// preserved. Clears the current question; the caller draws a new one
    /// (or shows the empty state) based on the returned count.
    pub fn set_difficulty(&mut self, tag: &str) -> usize {
        self.difficulty = tag.to_string();
        self.working_set = if tag == "all" {
            (0..self.questions.len()).collect()
        } else {
            self.questions
                .iter()
                .enumerate()
                .filter(|(_, q)| q.difficulty.as_deref() == Some(tag))
                .map(|(i, _)| i)
                .collect()
        };
        self.current = None;
        self.working_set.len()
    }

    /// Draw a uniformly random question from the working set, with
    /// replacement. Immediate repeats are valid. Returns the drawn record,
    /// or None when the working set is empty.
    pub fn next_question(&mut self) -> Option<&QuestionRecord> {
        if self.working_set.is_empty() {
            self.current = None;
            return None;
        }
        let idx = self.rng.gen_range(0..self.working_set.len());
        self.current = Some(idx);
        self.current_question()
    }

    /// Check a raw command against the current question's expected answer.
    /// Comparison is byte-exact string equality after trimming both sides;
    /// no case folding, no inner-whitespace normalization, no command
    /// parsing. A semantically equivalent but textually different command
    /// is Incorrect.
    pub fn submit(&mut self, raw: &str) -> Verdict {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Verdict::NoInput;
        }
        let correct = match self.current_question() {
            Some(q) => trimmed == q.answer.trim(),
            None => return Verdict::NoQuestion,
        };
        self.history.push(raw.to_string());
        if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    /// The expected answer for the current question, or None when there is
    /// no question. Does not touch the history or the current draw; safe to
    /// call any number of times.
    pub fn reveal(&self) -> Option<&str> {
        self.current_question().map(|q| q.answer.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(question: &str, answer: &str, difficulty: &str) -> QuestionRecord {
        QuestionRecord {
            question: question.to_string(),
            answer: answer.to_string(),
            hint: None,
            difficulty: Some(difficulty.to_string()),
        }
    }

    fn two_question_session() -> QuizSession {
        QuizSession::with_rng(
            vec![
                record("list files", "ls -la", "easy"),
                record("find text", "grep -r foo .", "hard"),
            ],
            SmallRng::seed_from_u64(7),
        )
    }

    #[test]
    fn filter_all_keeps_full_store() {
        let mut session = two_question_session();
        assert_eq!(session.set_difficulty("all"), 2);
        assert_eq!(session.working_len(), 2);
    }

    #[test]
    fn filter_is_stable_subsequence() {
        let mut session = QuizSession::with_rng(
            vec![
                record("a", "1", "easy"),
                record("b", "2", "hard"),
                record("c", "3", "easy"),
                record("d", "4", "easy"),
            ],
            SmallRng::seed_from_u64(1),
        );
        assert_eq!(session.set_difficulty("easy"), 3);
        // Exactly the matching subsequence, in store order
        let easy: Vec<&str> = session
            .working_questions()
            .map(|q| q.question.as_str())
            .collect();
        assert_eq!(easy, ["a", "c", "d"]);

        // "all" restores the full store unchanged
        session.set_difficulty("all");
        let all: Vec<&str> = session
            .working_questions()
            .map(|q| q.question.as_str())
            .collect();
        assert_eq!(all, ["a", "b", "c", "d"]);
    }

    #[test]
    fn filter_clears_current_question() {
        let mut session = two_question_session();
        session.next_question().unwrap();
        assert!(session.current_question().is_some());
        session.set_difficulty("hard");
        assert!(session.current_question().is_none());
    }

    #[test]
    fn empty_filter_yields_no_question() {
        let mut session = two_question_session();
        assert_eq!(session.set_difficulty("medium"), 0);
        assert!(session.next_question().is_none());
        assert_eq!(session.submit("ls"), Verdict::NoQuestion);
        assert!(session.reveal().is_none());
    }

    #[test]
    fn next_question_index_always_in_range() {
        let mut session = two_question_session();
        for _ in 0..50 {
            assert!(session.next_question().is_some());
            assert!(session.current_question().is_some());
        }
    }

    #[test]
    fn submit_empty_is_no_input_and_no_history() {
        let mut session = two_question_session();
        session.next_question();
        assert_eq!(session.submit(""), Verdict::NoInput);
        assert_eq!(session.submit("   "), Verdict::NoInput);
        assert!(session.history().is_empty());
    }

    #[test]
    fn submit_without_question_is_no_question() {
        let mut session = two_question_session();
        assert_eq!(session.submit("ls -la"), Verdict::NoQuestion);
        assert!(session.history().is_empty());
    }

    #[test]
    fn submit_is_trim_insensitive_but_otherwise_exact() {
        let mut session = two_question_session();
        session.set_difficulty("easy");
        session.next_question().unwrap();

        assert_eq!(session.submit("ls -la"), Verdict::Correct);
        assert_eq!(session.submit("ls -la "), Verdict::Correct);
        assert_eq!(session.submit("  ls -la"), Verdict::Correct);
        assert_eq!(session.submit("ls -lax"), Verdict::Incorrect);
        assert_eq!(session.submit("ls  -la"), Verdict::Incorrect);
        assert_eq!(session.submit("LS -LA"), Verdict::Incorrect);
    }

    #[test]
    fn submit_records_raw_history() {
        let mut session = two_question_session();
        session.set_difficulty("easy");
        session.next_question().unwrap();
        session.submit("ls");
        session.submit("ls -la ");
        assert_eq!(session.history(), &["ls", "ls -la "]);
        assert_eq!(session.last_command(), Some("ls -la "));
    }

    #[test]
    fn reveal_is_idempotent_and_side_effect_free() {
        let mut session = two_question_session();
        session.set_difficulty("easy");
        session.next_question().unwrap();

        let first = session.reveal().unwrap().to_string();
        let second = session.reveal().unwrap().to_string();
        assert_eq!(first, second);
        assert_eq!(first, "ls -la");
        assert!(session.history().is_empty());
        assert!(session.current_question().is_some());
    }

    // Scenario walk-through over a two-question store.
    #[test]
    fn two_question_scenario() {
        let mut session = two_question_session();

        assert_eq!(session.set_difficulty("easy"), 1);
        let q = session.next_question().unwrap();
        assert_eq!(q.question, "list files");
        assert_eq!(session.submit("ls -la"), Verdict::Correct);
        assert_eq!(session.submit("ls"), Verdict::Incorrect);

        assert_eq!(session.set_difficulty("hard"), 1);
        let q = session.next_question().unwrap();
        assert_eq!(q.question, "find text");

        assert_eq!(session.set_difficulty("medium"), 0);
        assert!(session.next_question().is_none());
        assert_eq!(session.submit("anything"), Verdict::NoQuestion);
    }
}
