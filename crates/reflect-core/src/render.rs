//! Console rendering for the session screens.
//!
//! Every function writes to a caller-supplied writer so the controller can
//! drive a real terminal or an in-memory buffer in tests.

use std::io::{self, Write};

use crate::model::{AnswerMap, Question, QuestionBank};

const HEAVY_RULE: &str = "============================================================";
const LIGHT_RULE: &str = "------------------------------------------------------------";
const CLEAR: &str = "\x1b[2J\x1b[H";

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{CLEAR}")
}

pub fn welcome<W: Write>(out: &mut W, total: usize, answers_file: &str) -> io::Result<()> {
    writeln!(out, "\n  Welcome to Research Question Session")?;
    writeln!(out, "  ====================================")?;
    writeln!(out, "\n  {total} questions to explore.")?;
    writeln!(out, "  Your answers auto-save to: {answers_file}")?;
    writeln!(out, "\n  Type 'help' anytime for commands.")?;
    writeln!(out, "\n  Press Enter to begin...")
}

/// The screen for the question at zero-based `index`.
pub fn question<W: Write>(
    out: &mut W,
    question: &Question,
    index: usize,
    total: usize,
    answers: &AnswerMap,
) -> io::Result<()> {
    writeln!(out, "{HEAVY_RULE}")?;
    writeln!(out, "  Section: {}", question.section)?;
    writeln!(out, "  Question {} of {total}", index + 1)?;
    writeln!(out, "{HEAVY_RULE}")?;
    writeln!(out)?;
    writeln!(out, "  Q: {}\n", question.text)?;

    if let Some(previous) = answers.answer_at(index) {
        writeln!(out, "  [Previous answer]")?;
        writeln!(out, "  {previous}\n")?;
        writeln!(out, "  (Type new answer to replace, or press Enter to keep)")?;
    }

    writeln!(out, "{LIGHT_RULE}")
}

pub fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "  Your thoughts: ")?;
    out.flush()
}

pub fn pause<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "  Press Enter to continue...")?;
    out.flush()
}

pub fn help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n  Commands:")?;
    writeln!(out, "    [Enter]       - Save answer and continue")?;
    writeln!(out, "    'skip' or 's' - Skip to next question")?;
    writeln!(out, "    'back' or 'b' - Go to previous question")?;
    writeln!(out, "    'jump N'      - Jump to question N")?;
    writeln!(out, "    'list' or 'l' - Show all questions")?;
    writeln!(out, "    'save'        - Save and exit")?;
    writeln!(out, "    'quit' or 'q' - Quit without saving current")?;
    writeln!(out, "    'help' or 'h' - Show this help")?;
    writeln!(out)
}

/// Every question grouped by section, with an answered marker.
pub fn question_list<W: Write>(
    out: &mut W,
    bank: &QuestionBank,
    answers: &AnswerMap,
    preview_width: usize,
) -> io::Result<()> {
    writeln!(out, "{HEAVY_RULE}")?;
    writeln!(out, "  ALL QUESTIONS")?;
    writeln!(out, "{HEAVY_RULE}")?;

    for section in bank.sections() {
        writeln!(out, "\n  [{}]", section.name)?;
        for index in section.range {
            let Ok(q) = bank.get(index) else { continue };
            let status = if answers.is_answered(index) { 'v' } else { ' ' };
            writeln!(
                out,
                "    [{status}] {:>2}. {}",
                index + 1,
                preview(&q.text, preview_width)
            )?;
        }
    }
    writeln!(out)
}

pub fn completion<W: Write>(
    out: &mut W,
    answered: usize,
    total: usize,
    answers_file: &str,
) -> io::Result<()> {
    writeln!(out, "\n  Session Complete!")?;
    writeln!(out, "  =================")?;
    writeln!(out, "\n  You answered {answered} of {total} questions.")?;
    writeln!(out, "  Answers saved to: {answers_file}")?;
    writeln!(out, "\n  Run this again anytime to continue or revise.")
}

pub fn message<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "  {text}")
}

/// First `width` characters of `text`, with `...` when cut.
fn preview(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let cut: String = text.chars().take(width).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn preview_truncates_by_characters() {
        assert_eq!(preview("short", 50), "short");
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("éééé", 2), "éé...");
        assert_eq!(preview("abc", 3), "abc");
    }

    #[test]
    fn question_shows_previous_answer_only_when_present() {
        let q = Question::new("Scope & Framing", "Which factor is primary?");
        let mut answers = AnswerMap::new();

        let fresh = render(|out| question(out, &q, 0, 24, &answers));
        assert!(fresh.contains("Section: Scope & Framing"));
        assert!(fresh.contains("Question 1 of 24"));
        assert!(fresh.contains("Q: Which factor is primary?"));
        assert!(!fresh.contains("[Previous answer]"));

        answers.set(0, "I value monitoring");
        let again = render(|out| question(out, &q, 0, 24, &answers));
        assert!(again.contains("[Previous answer]"));
        assert!(again.contains("  I value monitoring"));
        assert!(again.contains("press Enter to keep"));
    }

    #[test]
    fn list_marks_answered_questions() {
        let bank = QuestionBank::new(vec![
            Question::new("A", "First question"),
            Question::new("B", "A rather long second question that goes on and on"),
        ])
        .unwrap();
        let mut answers = AnswerMap::new();
        answers.set(0, "yes");

        let text = render(|out| question_list(out, &bank, &answers, 10));
        assert!(text.contains("ALL QUESTIONS"));
        assert!(text.contains("  [A]"));
        assert!(text.contains("  [B]"));
        assert!(text.contains("[v]  1. First ques..."));
        assert!(text.contains("[ ]  2. A rather l..."));
    }

    #[test]
    fn completion_reports_counts() {
        let text = render(|out| completion(out, 3, 24, "my-answers.json"));
        assert!(text.contains("You answered 3 of 24 questions."));
        assert!(text.contains("Answers saved to: my-answers.json"));
    }

    #[test]
    fn help_lists_every_command() {
        let text = render(help);
        for keyword in ["skip", "back", "jump N", "list", "save", "quit", "help"] {
            assert!(text.contains(keyword), "missing {keyword}");
        }
    }
}
