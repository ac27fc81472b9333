//! The generation pipeline: load, filter, name, deduplicate, sort, emit.

use crate::config::GeneratorConfig;
use crate::emit::{EnumRecord, StrPoolEnum, write_enum};
use crate::entry::{Entry, load_entries};
use crate::error::CodegenResult;
use crate::naming;
use crate::registry::NameRegistry;
use tracing::{debug, info, warn};

/// Counters describing what a run did to its input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Entries present in the input table
    pub entries_read: usize,

    /// Entries dropped because their id is in the reserved range
    pub reserved_skipped: usize,

    /// Names that needed a numeric suffix to stay unique
    pub names_suffixed: usize,

    /// Names cut down to the maximum length
    pub names_truncated: usize,

    /// Ids bound to more than one record, ascending
    pub duplicate_ids: Vec<u64>,
}

/// Result of building the enum in memory.
#[derive(Debug, Clone)]
pub struct Generation {
    pub codes: StrPoolEnum,
    pub report: GenerationReport,
}

/// Builds the string-pool enum from a table of entries.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> CodegenResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Turn entries into sorted enum records.
    ///
    /// Each call uses a fresh name registry. Entries sharing an id keep their
    /// input order.
    pub fn build(&self, entries: &[Entry]) -> CodegenResult<Generation> {
        let mut registry = NameRegistry::new();
        let mut report = GenerationReport {
            entries_read: entries.len(),
            ..GenerationReport::default()
        };
        let mut records = Vec::with_capacity(entries.len());

        for entry in entries {
            if entry.is_reserved(self.config.id_limit) {
                report.reserved_skipped += 1;
                continue;
            }

            let derived = naming::derive(&entry.value);
            if derived.truncated {
                report.names_truncated += 1;
                debug!(id = entry.id, name = %derived.name, "Truncated symbolic name");
            }

            let claim = registry.claim(&derived.name)?;
            if let Some(suffix) = claim.suffix {
                report.names_suffixed += 1;
                debug!(
                    id = entry.id,
                    base = %derived.name,
                    name = %claim.name,
                    suffix,
                    "Resolved name collision"
                );
            }

            records.push(EnumRecord {
                name: claim.name,
                id: entry.id,
            });
        }

        // sort_by_key is stable
        records.sort_by_key(|record| record.id);

        for pair in records.windows(2) {
            let id = pair[1].id;
            if pair[0].id == id && report.duplicate_ids.last() != Some(&id) {
                warn!(id, "Duplicate string id, keeping input order");
                report.duplicate_ids.push(id);
            }
        }

        Ok(Generation {
            codes: StrPoolEnum {
                name: self.config.enum_name.clone(),
                records,
            },
            report,
        })
    }

    /// Read the configured input, build the enum, and write the configured output.
    ///
    /// The output file is only touched once the enum has been built.
    pub fn run(&self) -> CodegenResult<GenerationReport> {
        info!(input = %self.config.input.display(), "Reading string table");
        let entries = load_entries(&self.config.input)?;

        let generation = self.build(&entries)?;
        let report = generation.report;

        write_enum(&self.config.output, &generation.codes)?;

        info!(
            output = %self.config.output.display(),
            variants = generation.codes.records.len(),
            skipped = report.reserved_skipped,
            suffixed = report.names_suffixed,
            truncated = report.names_truncated,
            "Generated {}",
            self.config.enum_name
        );

        Ok(report)
    }
}
