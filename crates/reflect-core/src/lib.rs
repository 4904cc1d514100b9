//! reflect-core — Question bank, answer persistence, and session navigation.
//!
//! This crate holds everything the `reflect` questionnaire needs apart from
//! the terminal itself: the question model, the JSON answer store, command
//! classification, and the session state machine that ties them together.

pub mod bank;
pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod session;
pub mod store;

pub use config::{ReflectConfig, SessionConfig};
pub use error::{BankError, JumpError, StoreError};
pub use model::{AnswerMap, Question, QuestionBank};
pub use session::{Input, InputSource, ScriptedInput, Session, SessionController, SessionEnd};
pub use store::{AnswerStore, JsonFileStore, MemoryStore};
