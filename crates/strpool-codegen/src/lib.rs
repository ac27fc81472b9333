//! strpool-codegen - Symbolic enum generation for string-pool ids
//!
//! Reads a JSON string table of `{ "i": <id>, "str": <value> }` records and
//! writes a C enum that binds a readable name to every id:
//!
//! ```text
//! enum StrPoolCodes {
//! 	hello = 5,
//! 	empty = 6,
//! }
//! ```
//!
//! This crate provides:
//! - [`Generator`] for running the whole pipeline
//! - [`naming`] for turning a value into an identifier
//! - [`NameRegistry`] for keeping names unique within a run
//! - [`GeneratorConfig`] for paths, enum name and the reserved id range
//! - [`CodegenError`] for error handling

mod config;
mod emit;
mod entry;
mod error;
mod generate;
pub mod naming;
mod registry;

pub use config::GeneratorConfig;
pub use emit::{EnumRecord, StrPoolEnum, write_enum};
pub use entry::{DEFAULT_ID_LIMIT, Entry, load_entries, parse_entries};
pub use error::{CodegenError, CodegenResult};
pub use generate::{Generation, GenerationReport, Generator};
pub use registry::{Claim, MAX_SUFFIX, NameRegistry};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CodegenError, CodegenResult, Entry, Generator, GeneratorConfig};
}
