//! The resource index
//!
//! A plain-text log written next to the extracted files. It is the only link
//! between an extracted `dds_NNN.dds` and its byte offset in the container,
//! so repacking depends on it entirely.
//!
//! ```text
//! Extracted DDS Files Log for global.pab.xen
//! ===========================================
//!
//! dds_001.dds
//!   Offset: 2048 bytes (0x800)
//!   Format: DXT5
//!
//! ```

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Default file name of the index inside an extraction folder.
pub const DEFAULT_INDEX_NAME: &str = "dds_index.txt";

const BANNER_RULE: &str = "===========================================";

// A name line directly followed by its Offset line. The Format line is optional.
static ENTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        concat!(
            r"(?m)^(\S+)[ \t]*\r?\n",
            r"[ \t]*Offset:[ \t]*(\d+)[^\r\n]*",
            r"(?:\r?\n[ \t]*Format:[ \t]*([^\r\n]*))?",
        ),
    )
    .expect("valid index pattern")
});

/// One extracted resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Generated file name, e.g. `dds_001.dds`.
    pub name: String,
    /// Byte offset of the resource's magic in the original container.
    pub offset: u64,
    /// Format tag at extraction time. Informational only.
    pub format: Option<String>,
}

impl IndexEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, offset: u64, format: Option<String>) -> Self {
        Self {
            name: name.into(),
            offset,
            format,
        }
    }
}

/// Index of one extraction run, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceIndex {
    /// File name of the container the entries were extracted from.
    pub container_name: String,
    pub entries: Vec<IndexEntry>,
}

impl ResourceIndex {
    #[must_use]
    pub fn new(container_name: impl Into<String>) -> Self {
        Self {
            container_name: container_name.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: IndexEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the index text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Extracted DDS Files Log for {}", self.container_name);
        let _ = writeln!(out, "{BANNER_RULE}");
        out.push('\n');

        for entry in &self.entries {
            let _ = writeln!(out, "{}", entry.name);
            let _ = writeln!(out, "  Offset: {0} bytes (0x{0:X})", entry.offset);
            if let Some(format) = &entry.format {
                let _ = writeln!(out, "  Format: {format}");
            }
            out.push('\n');
        }
        out
    }

    /// Write the index to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }

    /// Parse index text into entries.
    ///
    /// Banner lines and anything else that is not a name/offset pair are
    /// ignored. A name that appears twice is rejected, since it would map one
    /// file to two places.
    pub fn parse(text: &str) -> Result<Vec<IndexEntry>> {
        let mut entries = Vec::new();
        let mut seen: HashMap<String, u64> = HashMap::new();

        for caps in ENTRY_PATTERN.captures_iter(text) {
            let name = caps[1].to_string();
            let offset_text = &caps[2];
            let offset = offset_text
                .parse::<u64>()
                .map_err(|_| Error::InvalidIndexOffset {
                    name: name.clone(),
                    value: offset_text.to_string(),
                })?;
            let format = caps
                .get(3)
                .map(|m| m.as_str().trim().to_string())
                .filter(|f| !f.is_empty());

            if let Some(&first) = seen.get(&name) {
                return Err(Error::DuplicateIndexEntry {
                    name,
                    first,
                    second: offset,
                });
            }
            seen.insert(name.clone(), offset);
            entries.push(IndexEntry::new(name, offset, format));
        }

        Ok(entries)
    }

    /// Read and parse the index at `path`.
    ///
    /// A missing file or one without entries aborts the repack of that
    /// container.
    pub fn read(path: &Path) -> Result<Vec<IndexEntry>> {
        if !path.is_file() {
            return Err(Error::IndexNotFound {
                path: path.to_path_buf(),
            });
        }

        let text = fs::read_to_string(path)?;
        let entries = Self::parse(&text)?;
        if entries.is_empty() {
            return Err(Error::EmptyIndex {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!("Read {} index entries from {}", entries.len(), path.display());
        Ok(entries)
    }
}
