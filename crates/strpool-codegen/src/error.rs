//! Error types for enum generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating the string-pool enum.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// I/O error while reading the input table or writing the output file.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input table is not a valid JSON array of entries.
    #[error("Invalid string table {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Every suffix for a base name is already taken.
    #[error("No free name for '{base}': suffixes _1 to _{limit} are all taken")]
    SuffixesExhausted { base: String, limit: u32 },

    /// Generator configuration is invalid or could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for generation operations.
pub type CodegenResult<T> = Result<T, CodegenError>;

impl CodegenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn CodegenError___io___displays_path_and_cause() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = CodegenError::io("data/re/strs.json", io_err);

        let msg = err.to_string();
        assert!(msg.contains("data/re/strs.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn CodegenError___json___displays_path() {
        let json_err = serde_json::from_str::<u64>("nope").unwrap_err();
        let err = CodegenError::json("strs.json", json_err);

        assert!(err.to_string().starts_with("Invalid string table strs.json:"));
    }

    #[test]
    fn CodegenError___suffixes_exhausted___displays_base_and_limit() {
        let err = CodegenError::SuffixesExhausted {
            base: "foo".to_string(),
            limit: 999,
        };

        assert_eq!(
            err.to_string(),
            "No free name for 'foo': suffixes _1 to _999 are all taken"
        );
    }

    #[test]
    fn CodegenError___config___displays_message() {
        let err = CodegenError::Config("id_limit must be positive".to_string());

        assert_eq!(
            err.to_string(),
            "Invalid configuration: id_limit must be positive"
        );
    }
}
