//! Session navigation: the cursor state machine and the interactive loop.
//!
//! [`Session`] holds the cursor and the answers and applies one
//! [`Command`] at a time without doing any I/O. [`SessionController`] runs
//! the loop around it: render, read a line, apply, then carry out whatever
//! side effect the transition asks for (persist, show help, show the list,
//! report a bad jump, or end).

use std::collections::VecDeque;
use std::io::{self, Write};
use std::num::IntErrorKind;

use anyhow::Result;

use crate::command::Command;
use crate::config::SessionConfig;
use crate::error::{JumpError, StoreError};
use crate::model::AnswerMap;
use crate::render;
use crate::store::AnswerStore;

/// One event from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line of text, without its trailing newline.
    Line(String),
    /// Ctrl-C or end of input. Treated as "save and exit".
    Interrupted,
}

/// Where the controller gets its input from.
pub trait InputSource {
    /// Block until the next line or an interruption.
    fn next_input(&mut self) -> io::Result<Input>;
}

/// Replays a fixed list of lines, then reports an interruption.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    inputs: VecDeque<Input>,
}

impl ScriptedInput {
    pub fn new<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            inputs: lines.into_iter().map(|l| Input::Line(l.into())).collect(),
        }
    }

    /// Append an explicit interruption after the lines queued so far.
    pub fn then_interrupt(mut self) -> Self {
        self.inputs.push_back(Input::Interrupted);
        self
    }
}

impl InputSource for ScriptedInput {
    fn next_input(&mut self) -> io::Result<Input> {
        Ok(self.inputs.pop_front().unwrap_or(Input::Interrupted))
    }
}

/// What applying a command asks the controller to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Cursor updated (possibly unchanged); nothing to persist.
    Moved,
    /// A new answer was stored; persist before continuing.
    Answered,
    ShowHelp,
    ShowList,
    InvalidJump(JumpError),
    Save,
    Quit,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The cursor moved past the last question.
    Completed { answered: usize, total: usize },
    /// `save` was entered.
    Saved,
    /// `quit` was entered.
    Quit,
    /// Input was interrupted; answers were saved.
    Interrupted,
}

/// Cursor and answers for one run over a bank of `total` questions.
#[derive(Debug, Clone)]
pub struct Session {
    cursor: usize,
    total: usize,
    answers: AnswerMap,
}

impl Session {
    pub fn new(total: usize, answers: AnswerMap) -> Self {
        Self {
            cursor: 0,
            total,
            answers,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// True once the cursor has moved past the last question.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.total
    }

    /// Apply one command to the cursor and answers.
    pub fn apply(&mut self, command: Command) -> Transition {
        match command {
            Command::Keep | Command::Skip => {
                self.cursor += 1;
                Transition::Moved
            }
            Command::Answer(text) => {
                self.answers.set(self.cursor, text);
                self.cursor += 1;
                Transition::Answered
            }
            Command::Back => {
                self.cursor = self.cursor.saturating_sub(1);
                Transition::Moved
            }
            Command::Jump(arg) => match jump_target(arg.as_deref(), self.total) {
                Ok(index) => {
                    self.cursor = index;
                    Transition::Moved
                }
                Err(e) => Transition::InvalidJump(e),
            },
            Command::List => Transition::ShowList,
            Command::Help => Transition::ShowHelp,
            Command::Save => Transition::Save,
            Command::Quit => Transition::Quit,
        }
    }
}

/// Zero-based index for a `jump` argument naming a 1-based question.
pub fn jump_target(arg: Option<&str>, total: usize) -> Result<usize, JumpError> {
    let requested = match arg.ok_or(JumpError::Usage)?.parse::<i64>() {
        Ok(n) => n,
        // a number too large to hold is still a number, just not a question
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => return Err(JumpError::Usage),
        },
    };
    match usize::try_from(requested) {
        Ok(n) if (1..=total).contains(&n) => Ok(n - 1),
        _ => Err(JumpError::OutOfRange { requested, total }),
    }
}

/// Drives a [`Session`] against an input source, an output writer, and an
/// answer store.
pub struct SessionController<S, I, W> {
    config: SessionConfig,
    store: S,
    input: I,
    out: W,
    session: Session,
}

impl<S, I, W> SessionController<S, I, W>
where
    S: AnswerStore,
    I: InputSource,
    W: Write,
{
    /// Load saved answers and position the cursor at the first question.
    ///
    /// Fails if the store holds malformed data.
    pub fn new(config: SessionConfig, store: S, input: I, out: W) -> Result<Self, StoreError> {
        let answers = store.load()?;
        let session = Session::new(config.bank.len(), answers);
        Ok(Self {
            config,
            store,
            input,
            out,
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until the last question is passed or the user leaves.
    pub fn run(&mut self) -> Result<SessionEnd> {
        self.clear()?;
        render::welcome(
            &mut self.out,
            self.config.bank.len(),
            &self.config.answers_display(),
        )?;
        if !self.wait_for_enter()? {
            return self.interrupted();
        }

        while !self.session.is_finished() {
            self.clear()?;
            let index = self.session.cursor();
            let question = self.config.bank.get(index)?;
            render::question(
                &mut self.out,
                question,
                index,
                self.session.total(),
                self.session.answers(),
            )?;
            render::prompt(&mut self.out)?;

            let line = match self.input.next_input()? {
                Input::Line(line) => line,
                Input::Interrupted => return self.interrupted(),
            };

            let transition = self.session.apply(Command::parse(&line));
            tracing::debug!(
                from = index,
                to = self.session.cursor(),
                ?transition,
                "applied input"
            );

            match transition {
                Transition::Moved => {}
                Transition::Answered => self.store.save(self.session.answers())?,
                Transition::ShowHelp => {
                    render::help(&mut self.out)?;
                    if !self.pause()? {
                        return self.interrupted();
                    }
                }
                Transition::ShowList => {
                    self.clear()?;
                    render::question_list(
                        &mut self.out,
                        &self.config.bank,
                        self.session.answers(),
                        self.config.preview_width,
                    )?;
                    if !self.pause()? {
                        return self.interrupted();
                    }
                }
                Transition::InvalidJump(e) => {
                    render::message(&mut self.out, &e.to_string())?;
                    if !self.pause()? {
                        return self.interrupted();
                    }
                }
                Transition::Save => {
                    self.store.save(self.session.answers())?;
                    writeln!(self.out, "\n  Answers saved! Exiting...")?;
                    return Ok(SessionEnd::Saved);
                }
                Transition::Quit => {
                    writeln!(self.out, "\n  Exiting without saving current question...")?;
                    return Ok(SessionEnd::Quit);
                }
            }
        }

        let total = self.session.total();
        let answered = self.session.answers().answered_count(total);
        self.store.save(self.session.answers())?;
        self.clear()?;
        render::completion(
            &mut self.out,
            answered,
            total,
            &self.config.answers_display(),
        )?;
        tracing::debug!(answered, total, "session complete");
        Ok(SessionEnd::Completed { answered, total })
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.config.clear_screen {
            render::clear_screen(&mut self.out)?;
        }
        Ok(())
    }

    /// Show the "press Enter" hint and wait. Returns false if interrupted.
    fn pause(&mut self) -> io::Result<bool> {
        render::pause(&mut self.out)?;
        self.wait_for_enter()
    }

    fn wait_for_enter(&mut self) -> io::Result<bool> {
        self.out.flush()?;
        Ok(matches!(self.input.next_input()?, Input::Line(_)))
    }

    fn interrupted(&mut self) -> Result<SessionEnd> {
        writeln!(self.out, "\n\n  Saving and exiting...")?;
        self.store.save(self.session.answers())?;
        tracing::debug!(cursor = self.session.cursor(), "input interrupted, answers saved");
        Ok(SessionEnd::Interrupted)
    }
}
