//! Axion - document session core for a code editor shell
//!
//! The library owns the set of open documents, the active selection and
//! per-document modification state. Tab strips, editing surfaces and status
//! bars read projections from [`ui`] and send [`message::Message`]s back.

pub mod config;
pub mod error;
pub mod language;
pub mod message;
pub mod sample;
pub mod state;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use language::LanguageTag;
pub use message::{EditorMessage, Message, TabMessage};
pub use state::{Document, DocumentDescriptor, DocumentId, Session};
