//! Dictionary loading
//!
//! The solver is dictionary-agnostic; any plain-text word list works. This
//! module turns such files into validated [`crate::core::Word`] lists.

pub mod loader;

pub use loader::{load_from_file, words_of_length};
