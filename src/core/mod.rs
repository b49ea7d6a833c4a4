//! Extraction engine.
//!
//! Data flows through one run as:
//!
//! 1. `file_scanner`: sorted list of source files under the root
//! 2. `remap`: capitalization overrides read from the remap source file
//! 3. `extract`: each file line by line, using `patterns`, `comments` and
//!    `normalize`, merged into the `catalog`
//! 4. `catalog::render`: the template text, written once at the end
//!
//! ## Module Structure
//!
//! - `catalog`: deduplicated message store, rendering, wrapping and diffing
//! - `comments`: translator annotation state machine
//! - `context`: configuration and wiring for one run
//! - `extract`: per-file orchestration
//! - `file_scanner`: directory walk
//! - `normalize`: property identifier to display phrase
//! - `patterns`: extraction rule registry
//! - `remap`: capitalization remap table loader

pub mod catalog;
pub mod comments;
pub mod context;
pub mod extract;
pub mod file_scanner;
pub mod normalize;
pub mod patterns;
pub mod remap;

pub use catalog::{Catalog, CatalogEntry, Message, SourceLocation, TemplateDiff};
pub use context::{ExtractContext, Extraction};
