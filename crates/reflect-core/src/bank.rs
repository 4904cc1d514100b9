//! The built-in research-reflection question bank.
//!
//! The bank is fixed at build time. Answers are keyed by position, so
//! reordering or inserting questions here changes what saved answers mean.

use crate::model::{Question, QuestionBank};

const BUILTIN: &[(&str, &str)] = &[
    ("Scope & Framing", "Which factor is primary? Are monitoring, mental model, and intent communication equally weighted, or does one underlie the others?"),
    ("Scope & Framing", "What's the relationship between R4 (fine-grained intent) and R5 (easy intent)? Is fine-grained control fundamentally at odds with ease of use?"),
    ("Scope & Framing", "Is 'appropriate reliance' a stable target? Should it vary by task type (brainstorming vs. polishing vs. professional writing)?"),
    ("Scope & Framing", "What distinguishes writing from other AI-assisted tasks? Why does reliance matter more (or differently) here?"),
    ("Self-Monitoring (R1)", "What granularity of monitoring helps? Word-level? Paragraph-level? Session-level? Idea-level?"),
    ("Self-Monitoring (R1)", "When do users actually want to review contribution history? What triggers that need?"),
    ("Self-Monitoring (R1)", "Does awareness of reliance change behavior? Or do users just feel guilty without acting differently?"),
    ("Self-Monitoring (R1)", "How do we balance transparency with cognitive burden? History is valuable but heavy."),
    ("Self-Monitoring (R1)", "What makes interpretability actionable? Knowing 'AI wrote 60%' - then what?"),
    ("Agency & Mental Model (R2, R3)", "Can AI 'say no' without frustrating users? What framing makes pushback acceptable?"),
    ("Agency & Mental Model (R2, R3)", "How do we detect when a user needs 'void for thinking' vs. genuine assistance?"),
    ("Agency & Mental Model (R2, R3)", "Can we scaffold the knowledge-telling to knowledge-transforming transition? Or is that beyond tool design?"),
    ("Agency & Mental Model (R2, R3)", "What do expert writers do differently with AI suggestions? How do they 'refine' rather than 'accept'?"),
    ("Agency & Mental Model (R2, R3)", "Should the system adapt its intervention level based on user expertise? How do we assess expertise?"),
    ("Intent Communication (R4, R5)", "What are the most common misalignments? Tone? Structure? Depth? Word choice? Voice?"),
    ("Intent Communication (R4, R5)", "What UI primitives are missing? Sliders? Constraints? Examples? Comparison views?"),
    ("Intent Communication (R4, R5)", "Is the problem input (expressing intent) or output (interpreting AI response)? Or both?"),
    ("Intent Communication (R4, R5)", "How much specification is too much? When does conveying intent become more work than writing?"),
    ("Design Trade-offs", "Who is the target user? Can one system serve both novice and expert writers?"),
    ("Design Trade-offs", "Is Prism the right testbed? Does its interaction model constrain or enable your explorations?"),
    ("Design Trade-offs", "What's the evaluation metric for 'appropriate reliance'? (quality, satisfaction, learning, ownership, engagement)"),
    ("Design Trade-offs", "What's the minimal intervention that shifts reliance patterns? Full redesign or small nudges?"),
    ("Your Contribution", "Which R (R1-R5) will you focus on? Or will you address interactions between multiple factors?"),
    ("Your Contribution", "What's the novel claim? What hasn't been said in prior work on AI-assisted writing?"),
    ("Your Contribution", "What artifact will you build? A new interface? A measurement tool? A design framework?"),
    ("Your Contribution", "What study design will validate your claims? Lab study? Longitudinal? Think-aloud?"),
];

/// The built-in research-reflection question bank.
pub fn builtin() -> QuestionBank {
    let questions = BUILTIN
        .iter()
        .map(|(section, text)| Question::new(*section, *text))
        .collect();
    QuestionBank::new(questions).expect("built-in question bank is non-empty")
}
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_26_questions_in_six_sections() {
        let bank = builtin();
        assert_eq!(bank.len(), 26);
        let sections: Vec<(&str, usize)> = bank
            .sections()
            .iter()
            .map(|s| (s.name, s.range.len()))
            .collect();
        assert_eq!(
            sections,
            vec![
                ("Scope & Framing", 4),
                ("Self-Monitoring (R1)", 5),
                ("Agency & Mental Model (R2, R3)", 5),
                ("Intent Communication (R4, R5)", 4),
                ("Design Trade-offs", 4),
                ("Your Contribution", 4),
            ]
        );
    }

    #[test]
    fn builtin_questions_are_distinct_and_non_blank() {
        let bank = builtin();
        let mut seen = std::collections::HashSet::new();
        for i in 0..bank.len() {
            let text = bank.get(i).unwrap().text.trim();
            assert!(!text.is_empty(), "question {} is blank", i + 1);
            assert!(seen.insert(text), "question {} repeats an earlier one", i + 1);
        }
    }
}
