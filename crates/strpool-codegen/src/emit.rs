//! Text emission for the generated enum.

use crate::error::{CodegenError, CodegenResult};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// One `name = id` line of the enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumRecord {
    pub name: String,
    pub id: u64,
}

/// A complete enum, records already in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrPoolEnum {
    pub name: String,
    pub records: Vec<EnumRecord>,
}

impl StrPoolEnum {
    /// Render the enum as C source text.
    ///
    /// Each record sits on its own tab-indented line ending in a comma. The
    /// closing brace is the last character; there is no trailing newline.
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(32 + self.records.len() * 32);

        output.push_str(&format!("enum {} {{\n", self.name));
        for record in &self.records {
            output.push_str(&format!("\t{} = {},\n", record.name, record.id));
        }
        output.push('}');

        output
    }
}

/// Write the rendered enum to `path`, replacing any existing file.
///
/// The text goes to a temporary file next to `path` that is renamed over it
/// once complete, so a failed write never leaves a partial enum behind.
pub fn write_enum(path: impl AsRef<Path>, codes: &StrPoolEnum) -> CodegenResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| CodegenError::io(path, e))?;
    file.write_all(codes.render().as_bytes()).map_err(|e| CodegenError::io(path, e))?;
    file.as_file().sync_all().map_err(|e| CodegenError::io(path, e))?;
    file.persist(path).map_err(|e| CodegenError::io(path, e.error))?;

    Ok(())
}
