//! potgen - translation template extractor for C++ source trees
//!
//! potgen scans a source tree for translatable strings (`TTR`, `RTR`,
//! `TTRC`, editor and project setting definitions, property and group
//! registrations) and writes them, deduplicated and annotated with source
//! references and translator comments, to a gettext `.pot` template.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (scan, match, normalize, catalog, render)
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
