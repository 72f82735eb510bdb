//! `scribe-lang` - data-driven language modes for the scribe analysis pipeline.
//!
//! A [`LanguageMode`] is plain data: file extensions, comment tokens, keywords and an ordered
//! table of [`HighlightPattern`]s. The [`LanguageRegistry`] looks modes up by id or by file
//! extension; it is built once and read-only afterwards.
//!
//! This crate does not compile or run any of the patterns. That is `scribe-highlight`'s job.

#![warn(missing_docs)]

mod builtin;
mod comment;
mod error;
mod mode;
mod registry;
mod style;

pub use builtin::builtin_modes;
pub use comment::CommentConfig;
pub use error::RegistryError;
pub use mode::{HighlightPattern, LanguageDefinition, LanguageMode, LanguageModeBuilder};
pub use registry::{LanguageRegistry, RegistryBuilder, builtin_registry};
pub use style::StyleTag;
