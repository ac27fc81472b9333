//! Per-run registry of assigned symbolic names.

use crate::error::{CodegenError, CodegenResult};
use crate::naming::MAX_NAME_LEN;
use std::collections::HashSet;

/// Highest numeric suffix tried when resolving a name collision.
pub const MAX_SUFFIX: u32 = 999;

/// Outcome of claiming a candidate name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    /// Name now owned by the caller
    pub name: String,

    /// Suffix appended to resolve a collision, if any
    pub suffix: Option<u32>,
}

/// Set of names already handed out during one generation run.
///
/// Names are only ever added. A fresh registry is created for every run.
#[derive(Debug, Default)]
pub struct NameRegistry {
    names: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `candidate`, or the first free `candidate_N` for N in `1..=MAX_SUFFIX`.
    ///
    /// When a suffix is needed the candidate is shortened so the result stays
    /// within [`MAX_NAME_LEN`] characters.
    pub fn claim(&mut self, candidate: &str) -> CodegenResult<Claim> {
        if self.names.insert(candidate.to_string()) {
            return Ok(Claim {
                name: candidate.to_string(),
                suffix: None,
            });
        }

        for n in 1..=MAX_SUFFIX {
            let name = with_suffix(candidate, n);
            if !self.names.contains(&name) {
                self.names.insert(name.clone());
                return Ok(Claim {
                    name,
                    suffix: Some(n),
                });
            }
        }

        Err(CodegenError::SuffixesExhausted {
            base: candidate.to_string(),
            limit: MAX_SUFFIX,
        })
    }
}

fn with_suffix(base: &str, n: u32) -> String {
    let suffix = format!("_{n}");
    let keep = MAX_NAME_LEN.saturating_sub(suffix.len());
    let mut name: String = base.chars().take(keep).collect();
    name.push_str(&suffix);
    name
}
