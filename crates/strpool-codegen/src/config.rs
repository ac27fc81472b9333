//! Generator configuration

use crate::entry::DEFAULT_ID_LIMIT;
use crate::error::{CodegenError, CodegenResult};
use crate::naming::is_identifier;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings for one generation run.
///
/// Every field has a default, so an empty TOML file is a valid configuration
/// and reproduces the fixed-path behavior of an argument-less run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// JSON string table to read
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Enum file to write (overwritten if present)
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Name of the emitted enum
    #[serde(default = "default_enum_name")]
    pub enum_name: String,

    /// Entries with an id at or above this value are skipped
    #[serde(default = "default_id_limit")]
    pub id_limit: u64,
}

fn default_input() -> PathBuf {
    PathBuf::from("data/re/strs.json")
}

fn default_output() -> PathBuf {
    PathBuf::from("str_enum.h")
}

fn default_enum_name() -> String {
    "StrPoolCodes".to_string()
}

fn default_id_limit() -> u64 {
    DEFAULT_ID_LIMIT
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            enum_name: default_enum_name(),
            id_limit: default_id_limit(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> CodegenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CodegenError::io(path, e))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> CodegenResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CodegenError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_enum_name(mut self, enum_name: impl Into<String>) -> Self {
        self.enum_name = enum_name.into();
        self
    }

    pub fn with_id_limit(mut self, id_limit: u64) -> Self {
        self.id_limit = id_limit;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> CodegenResult<()> {
        if !is_identifier(&self.enum_name) {
            return Err(CodegenError::Config(format!(
                "enum_name '{}' is not a valid identifier",
                self.enum_name
            )));
        }

        if self.id_limit == 0 {
            return Err(CodegenError::Config(
                "id_limit must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn GeneratorConfig___default___uses_fixed_paths() {
        let config = GeneratorConfig::default();

        assert_eq!(config.input, PathBuf::from("data/re/strs.json"));
        assert_eq!(config.output, PathBuf::from("str_enum.h"));
        assert_eq!(config.enum_name, "StrPoolCodes");
        assert_eq!(config.id_limit, 10_000);
    }

    #[test]
    fn GeneratorConfig___default___is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn from_toml_str___empty___equals_default() {
        let config = GeneratorConfig::from_toml_str("").unwrap();

        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn from_toml_str___partial___fills_defaults() {
        let config = GeneratorConfig::from_toml_str(
            r#"
input = "pool/strings.json"
enum_name = "UiStrings"
"#,
        )
        .unwrap();

        assert_eq!(config.input, PathBuf::from("pool/strings.json"));
        assert_eq!(config.enum_name, "UiStrings");
        assert_eq!(config.output, PathBuf::from("str_enum.h"));
        assert_eq!(config.id_limit, 10_000);
    }

    #[test]
    fn from_toml_str___unknown_key___fails() {
        let result = GeneratorConfig::from_toml_str("max_len = 30");

        assert!(matches!(result, Err(CodegenError::Config(_))));
    }

    #[test]
    fn from_toml_str___invalid_enum_name___fails() {
        let result = GeneratorConfig::from_toml_str(r#"enum_name = "2Codes""#);

        assert!(matches!(result, Err(CodegenError::Config(_))));
    }

    #[test]
    fn validate___zero_id_limit___fails() {
        let config = GeneratorConfig::new().with_id_limit(0);

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("id_limit"));
    }

    #[test]
    fn validate___empty_enum_name___fails() {
        let config = GeneratorConfig::new().with_enum_name("");

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate___enum_name_with_symbol___fails() {
        let config = GeneratorConfig::new().with_enum_name("Str-Pool");

        assert!(matches!(config.validate(), Err(CodegenError::Config(_))));
    }

    #[test]
    fn validate___long_enum_name___accepted() {
        let config = GeneratorConfig::new().with_enum_name("AVeryLongEnumNameBeyondTwentyChars");

        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders___override_fields() {
        let config = GeneratorConfig::new()
            .with_input("in.json")
            .with_output("out.h")
            .with_id_limit(500);

        assert_eq!(config.input, PathBuf::from("in.json"));
        assert_eq!(config.output, PathBuf::from("out.h"));
        assert_eq!(config.id_limit, 500);
    }
}
