//! State management module for Axion
//!
//! - `document`: open documents and their identifiers
//! - `session`: the ordered set of open documents and the active selection

mod document;
mod session;

pub use document::*;
pub use session::*;
