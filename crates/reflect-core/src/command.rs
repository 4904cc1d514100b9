//! Classification of one line of user input.

/// What a line of input means at a question prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Empty line: keep any existing answer and move on.
    Keep,
    /// Free text to store as the answer.
    Answer(String),
    Skip,
    Back,
    /// `jump` with its raw argument, validated by the session.
    Jump(Option<String>),
    List,
    Save,
    Quit,
    Help,
}

impl Command {
    /// Classify a raw input line.
    ///
    /// Keywords match case-insensitively after trimming. Anything that is
    /// not a keyword is an answer, with its case preserved.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Command::Keep;
        }

        let lowered = trimmed.to_lowercase();
        match lowered.as_str() {
            "skip" | "s" => return Command::Skip,
            "back" | "b" => return Command::Back,
            "list" | "l" => return Command::List,
            "save" => return Command::Save,
            "quit" | "q" => return Command::Quit,
            "help" | "h" => return Command::Help,
            "jump" => return Command::Jump(None),
            _ => {}
        }

        let mut words = lowered.split_whitespace();
        if words.next() == Some("jump") {
            return Command::Jump(words.next().map(str::to_string));
        }

        Command::Answer(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(Command::parse("SKIP"), Command::Skip);
        assert_eq!(Command::parse(" s "), Command::Skip);
        assert_eq!(Command::parse("Back"), Command::Back);
        assert_eq!(Command::parse("b"), Command::Back);
        assert_eq!(Command::parse("LIST"), Command::List);
        assert_eq!(Command::parse("l"), Command::List);
        assert_eq!(Command::parse("Save"), Command::Save);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("QUIT"), Command::Quit);
        assert_eq!(Command::parse("h"), Command::Help);
        assert_eq!(Command::parse("help"), Command::Help);
    }

    #[test]
    fn blank_input_keeps() {
        assert_eq!(Command::parse(""), Command::Keep);
        assert_eq!(Command::parse("   \t"), Command::Keep);
    }

    #[test]
    fn jump_carries_its_argument() {
        assert_eq!(Command::parse("jump 5"), Command::Jump(Some("5".into())));
        assert_eq!(Command::parse("JUMP   12 "), Command::Jump(Some("12".into())));
        assert_eq!(Command::parse("jump abc"), Command::Jump(Some("abc".into())));
        assert_eq!(Command::parse("jump"), Command::Jump(None));
    }

    #[test]
    fn other_text_is_an_answer_with_case_kept() {
        assert_eq!(
            Command::parse("  I value Monitoring "),
            Command::Answer("I value Monitoring".into())
        );
        assert_eq!(Command::parse("skipping ahead"), Command::Answer("skipping ahead".into()));
        assert_eq!(Command::parse("jumper cables"), Command::Answer("jumper cables".into()));
        assert_eq!(Command::parse("save me"), Command::Answer("save me".into()));
    }
}
