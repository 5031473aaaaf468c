//! DDS extraction
//!
//! Splits a container at every DDS magic and writes each piece to its own
//! file, together with the index that records where each piece came from.

use std::fs;
use std::path::{Path, PathBuf};

use crate::dds::{FormatTag, inspect_header};
use crate::error::{Error, Result};
use crate::index::{DEFAULT_INDEX_NAME, IndexEntry, ResourceIndex};
use crate::progress::{ProgressCallback, SplicePhase, SpliceProgress};
use crate::scan::scan;

/// Options for extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// File name of the index written into the output folder
    pub index_name: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            index_name: DEFAULT_INDEX_NAME.to_string(),
        }
    }
}

/// One resource cut out of a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedResource<'a> {
    /// Generated file name
    pub name: String,
    /// Start offset in the container
    pub offset: usize,
    /// Bytes from `offset` up to the next resource or end of container
    pub data: &'a [u8],
    /// Format tag of the resource header
    pub format: FormatTag,
}

impl ExtractedResource<'_> {
    /// Index entry for this resource.
    #[must_use]
    pub fn index_entry(&self) -> IndexEntry {
        IndexEntry::new(
            self.name.clone(),
            self.offset as u64,
            Some(self.format.to_string()),
        )
    }
}

/// Result of extracting one container
#[derive(Debug, Clone)]
pub struct ExtractResult {
    /// The container that was read
    pub container: PathBuf,
    /// Folder holding the extracted files
    pub output_dir: PathBuf,
    /// Path of the written index
    pub index_path: PathBuf,
    /// Entries in discovery order
    pub index: ResourceIndex,
}

/// File name for the resource at 1-based `position`.
#[must_use]
pub fn resource_name(position: usize) -> String {
    format!("dds_{position:03}.dds")
}

/// Cut `data` into resources starting at each of `offsets`.
///
/// `offsets` must be ascending, as returned by [`scan`]. Each resource ends
/// where the next one starts; the last runs to the end of `data`.
#[must_use]
pub fn extract<'a>(data: &'a [u8], offsets: &[usize]) -> Vec<ExtractedResource<'a>> {
    offsets
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = offsets.get(i + 1).copied().unwrap_or(data.len());
            let slice = &data[start..end];
            ExtractedResource {
                name: resource_name(i + 1),
                offset: start,
                data: slice,
                format: inspect_header(slice).format,
            }
        })
        .collect()
}

/// Extract every DDS resource in `container` into `output_dir`.
///
/// The output folder is created if needed. The container itself is only
/// read.
pub fn extract_container(
    container: &Path,
    output_dir: &Path,
    options: &ExtractOptions,
    progress: ProgressCallback,
) -> Result<ExtractResult> {
    let container_name = file_name_of(container);

    progress(&SpliceProgress::with_file(
        SplicePhase::ReadingContainer,
        0,
        1,
        container_name.clone(),
    ));
    let data = fs::read(container)?;

    progress(&SpliceProgress::new(SplicePhase::Scanning, 0, 1));
    let offsets = scan(&data);
    if offsets.is_empty() {
        return Err(Error::NoResourcesFound {
            path: container.to_path_buf(),
        });
    }

    tracing::info!(
        "Found {} DDS headers in \"{}\"",
        offsets.len(),
        container_name
    );

    fs::create_dir_all(output_dir)?;

    let resources = extract(&data, &offsets);
    let total = resources.len();
    let mut index = ResourceIndex::new(container_name);

    for (i, resource) in resources.iter().enumerate() {
        progress(&SpliceProgress::with_file(
            SplicePhase::WritingResources,
            i + 1,
            total,
            resource.name.clone(),
        ));

        fs::write(output_dir.join(&resource.name), resource.data)?;
        tracing::debug!(
            "DDS found at 0x{:X} ({} bytes) -> \"{}\" [{}]",
            resource.offset,
            resource.offset,
            resource.name,
            resource.format
        );
        index.push(resource.index_entry());
    }

    let index_path = output_dir.join(&options.index_name);
    index.write(&index_path)?;

    progress(&SpliceProgress::new(SplicePhase::Complete, total, total));
    tracing::info!("All DDS files extracted and logged to: {}", index_path.display());

    Ok(ExtractResult {
        container: container.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        index_path,
        index,
    })
}

pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
