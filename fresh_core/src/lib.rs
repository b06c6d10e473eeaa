//! `fresh_core` is the core library for the
//! [fresh-readme](https://github.com/fresh-readme/fresh-readme) documentation
//! synchronizer. It rewrites fenced code blocks in a markdown document with
//! the current content of the source files they were copied from, so examples
//! in a README never drift from the code they quote.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Markdown document
//!   → Directive matcher (classifies each line: <!-- [freshReadmeSource](path#tag) -->)
//!   → Document scanner (per-line state machine: directive → fence → placeholder → fence)
//!   → Snippet extractor / whole-file includer (produces the replacement payload)
//!   → Atomic rewrite (scratch file renamed over the original)
//! ```
//!
//! ## Key Types
//!
//! - [`SyncOptions`] — The marker conventions (directive name, snippet
//!   prefix) for one invocation.
//! - [`Directive`] — A parsed directive line: source path and optional tag.
//! - [`RefreshOutcome`] / [`CheckOutcome`] — Results of rewriting a document
//!   in place or checking it without writing.
//! - [`FreshError`] — All fatal conditions, each naming the offending file
//!   and 1-based line.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use fresh_core::SyncOptions;
//! use fresh_core::refresh_document;
//!
//! let options = SyncOptions::default();
//! let outcome = refresh_document(Path::new("README.md"), &options).unwrap();
//! if outcome.changed {
//!     eprintln!("README.md refreshed");
//! }
//! ```

pub use config::*;
pub use engine::*;
pub use error::*;
pub use parser::*;
pub use snippet::*;

pub mod config;
mod engine;
mod error;
mod parser;
mod snippet;

#[cfg(test)]
mod __fixtures;
