use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use shellquiz::quiz::question::QuestionRecord;
use shellquiz::quiz::session::{QuizSession, Verdict};
use shellquiz::sim::{OutputQueue, Simulator};
use shellquiz::sim::responses::match_table;
use shellquiz::transcript::{LineKind, Transcript};

fn record(question: &str, answer: &str, difficulty: &str) -> QuestionRecord {
    QuestionRecord {
        question: question.to_string(),
        answer: answer.to_string(),
        hint: None,
        difficulty: Some(difficulty.to_string()),
    }
}

fn session() -> QuizSession {
    QuizSession::with_rng(
        vec![
            record("list files", "ls -la", "easy"),
            record("find text", "grep -r foo .", "hard"),
        ],
        SmallRng::seed_from_u64(99),
    )
}

/// The full walk-through: filter, draw, check, re-filter, empty state.
#[test]
fn quiz_walkthrough() {
    let mut session = session();

    assert_eq!(session.set_difficulty("easy"), 1);
    assert_eq!(session.next_question().unwrap().question, "list files");
    assert_eq!(session.submit("ls -la"), Verdict::Correct);
    assert_eq!(session.submit("ls"), Verdict::Incorrect);

    assert_eq!(session.set_difficulty("hard"), 1);
    assert_eq!(session.next_question().unwrap().question, "find text");

    assert_eq!(session.set_difficulty("medium"), 0);
    assert!(session.next_question().is_none());
    assert_eq!(session.submit("ls"), Verdict::NoQuestion);

    // History holds only the two real submissions, raw
    assert_eq!(session.history(), &["ls -la", "ls"]);
}

/// A submission drives the transcript and the delayed simulator output the
/// way the app wires them: command line immediately, verdict line
/// immediately, canned output after the delay.
#[test]
fn submission_transcript_flow() {
    let mut session = session();
    let mut transcript = Transcript::new();
    let mut simulator = Simulator::with_rng(SmallRng::seed_from_u64(3));
    let mut queue = OutputQueue::new();
    let delay = Duration::from_millis(500);

    session.set_difficulty("hard");
    session.next_question().unwrap();

    let command = "grep -r foo .";
    let verdict = session.submit(command);
    assert_eq!(verdict, Verdict::Correct);

    let start = Instant::now();
    transcript.push(LineKind::Command, &format!("$ {command}"));
    queue.schedule(start, delay, simulator.respond(command, false));
    transcript.push(LineKind::Success, "Command executed successfully!");

    // Nothing due yet; the verdict lines are already visible
    assert!(queue.drain_due(start).is_empty());
    assert_eq!(transcript.len(), 2);

    for text in queue.drain_due(start + delay) {
        transcript.push(LineKind::Output, &text);
    }
    assert_eq!(transcript.len(), 3);

    let output = &transcript.lines()[2];
    assert_eq!(output.kind, LineKind::Output);
    let grep = match_table(command).unwrap();
    assert!(grep.success.contains(&output.text.as_str()));
}

/// Rapid submissions queue independent delayed outputs; none cancel.
#[test]
fn rapid_submissions_interleave() {
    let mut simulator = Simulator::with_rng(SmallRng::seed_from_u64(5));
    let mut queue = OutputQueue::new();
    let start = Instant::now();

    queue.schedule(start, Duration::from_millis(500), simulator.respond("sort a.txt", false));
    queue.schedule(start, Duration::from_millis(500), simulator.respond("uniq a.txt", false));

    let drained = queue.drain_due(start + Duration::from_millis(500));
    assert_eq!(drained.len(), 2);
    assert!(drained[0].starts_with("apple"));
    assert!(drained[1].contains("error"));
}

/// An incorrect answer draws the canned failure output for the matched
/// command.
#[test]
fn incorrect_answer_gets_error_output() {
    let mut session = session();
    let mut simulator = Simulator::with_rng(SmallRng::seed_from_u64(8));

    session.set_difficulty("hard");
    session.next_question().unwrap();
    let verdict = session.submit("grep foo");
    assert_eq!(verdict, Verdict::Incorrect);

    let response = simulator.respond("grep foo", true);
    let grep = match_table("grep foo").unwrap();
    assert!(grep.error.contains(&response.as_str()));
}
