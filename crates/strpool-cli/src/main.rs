//! strpool CLI - String-pool enum generator
//!
//! Run without arguments to read `data/re/strs.json` and write `str_enum.h`.
//! Paths can be overridden with a TOML config file or individual flags.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use strpool_codegen::{Generator, GeneratorConfig};

mod logging;

#[derive(Parser, Debug)]
#[command(name = "strpool")]
#[command(author, version, about = "Generate a symbolic enum for string-pool ids", long_about = None)]
struct Cli {
    /// TOML file with generator settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON string table to read (overrides the config file)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Enum file to write (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log each renamed or truncated entry
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Resolve settings: flags override the config file, which overrides defaults.
    fn generator_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        if let Some(input) = &self.input {
            config = config.with_input(input);
        }
        if let Some(output) = &self.output {
            config = config.with_output(output);
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.generator_config()?;
    let input = config.input.clone();

    let generator = Generator::new(config).context("Invalid generator configuration")?;
    generator
        .run()
        .with_context(|| format!("Failed to generate enum from {}", input.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn Cli___no_arguments___uses_defaults() {
        let cli = Cli::try_parse_from(["strpool"]).unwrap();

        assert_eq!(cli.generator_config().unwrap(), GeneratorConfig::default());
        assert!(!cli.verbose);
    }

    #[test]
    fn Cli___path_flags___override_defaults() {
        let cli = Cli::try_parse_from(["strpool", "-i", "in.json", "--output", "out.h"]).unwrap();

        let config = cli.generator_config().unwrap();

        assert_eq!(config.input, PathBuf::from("in.json"));
        assert_eq!(config.output, PathBuf::from("out.h"));
    }

    #[test]
    fn Cli___flags___override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("strpool.toml");
        std::fs::write(
            &config_path,
            "input = \"from_file.json\"\noutput = \"from_file.h\"\nenum_name = \"Codes\"\n",
        )
        .unwrap();
        let config_arg = config_path.to_string_lossy().to_string();

        let cli = Cli::try_parse_from(["strpool", "-c", &config_arg, "-o", "flag.h"]).unwrap();
        let config = cli.generator_config().unwrap();

        assert_eq!(config.input, PathBuf::from("from_file.json"));
        assert_eq!(config.output, PathBuf::from("flag.h"));
        assert_eq!(config.enum_name, "Codes");
    }

    #[test]
    fn Cli___missing_config_file___fails() {
        let cli = Cli::try_parse_from(["strpool", "--config", "does/not/exist.toml"]).unwrap();

        let err = cli.generator_config().unwrap_err();

        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn Cli___unknown_flag___rejected() {
        assert!(Cli::try_parse_from(["strpool", "--lang", "java"]).is_err());
    }
}
