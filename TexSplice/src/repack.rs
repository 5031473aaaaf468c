//! Repacking edited DDS files into their container
//!
//! Each index entry is checked against the container being patched before
//! its replacement is written over the same bytes. Nothing is ever inserted or
//! moved: a replacement that would run past the end of the container is
//! rejected, and a shorter one leaves the tail of the old resource in place.
//! Anomalies go to the repair log and never stop the remaining entries.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::dds::{HEADER_SIZE, inspect_header};
use crate::error::Result;
use crate::extract::file_name_of;
use crate::index::{DEFAULT_INDEX_NAME, IndexEntry, ResourceIndex};
use crate::mipmap::MipmapRegenerator;
use crate::progress::{ProgressCallback, SplicePhase, SpliceProgress};

/// Default file name of the repair log inside an extraction folder.
pub const DEFAULT_REPAIR_LOG_NAME: &str = "dds_repair_log.txt";

/// Suffix appended to a container's name for the repacked output.
pub const REPACKED_SUFFIX: &str = "_repacked";

/// Options for repacking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepackOptions {
    /// Index file name inside the extraction folder
    pub index_name: String,
    /// Repair log file name, written into the extraction folder
    pub repair_log_name: String,
}

impl Default for RepackOptions {
    fn default() -> Self {
        Self {
            index_name: DEFAULT_INDEX_NAME.to_string(),
            repair_log_name: DEFAULT_REPAIR_LOG_NAME.to_string(),
        }
    }
}

/// Where replacement files are looked up by name.
pub trait ReplacementSource {
    /// Path of the replacement for `name`, or `None` if there is none.
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

/// Replacements stored as files in one folder, named as in the index.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ReplacementSource for DirectorySource {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let path = self.dir.join(name);
        path.is_file().then_some(path)
    }
}

/// What went wrong with one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairKind {
    /// No replacement file exists
    MissingFile,
    /// The replacement exists but could not be read
    ReadFailed(String),
    /// The container has no DDS header at the logged offset
    NoHeader,
    /// Mipmap regeneration failed; the replacement was used unchanged
    MipmapRegenerationFailed {
        /// Levels requested
        levels: u32,
        /// Tool error
        message: String,
    },
    /// Either header is too short or lacks the magic
    UndeterminedFormat,
    /// Formats differ. The replacement is still spliced.
    FormatMismatch {
        /// Format of the original resource
        expected: String,
        /// Format of the replacement
        found: String,
    },
    /// The replacement would run past the end of the container
    ExceedsFileSize {
        /// Replacement size
        size: usize,
        /// Bytes from the offset to the end of the container
        available: usize,
    },
}

/// One repair log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairEntry {
    pub name: String,
    pub offset: u64,
    pub kind: RepairKind,
}

impl RepairEntry {
    /// Whether this problem kept the replacement out of the container.
    #[must_use]
    pub fn is_skip(&self) -> bool {
        !matches!(
            self.kind,
            RepairKind::FormatMismatch { .. } | RepairKind::MipmapRegenerationFailed { .. }
        )
    }
}

impl fmt::Display for RepairEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.name;
        let offset = self.offset;
        match &self.kind {
            RepairKind::MissingFile => write!(f, "Missing file: {name} - skipping."),
            RepairKind::ReadFailed(err) => write!(
                f,
                "{name} at 0x{offset:X}: Could not read replacement ({err}) - skipping."
            ),
            RepairKind::NoHeader => write!(
                f,
                "{name} at 0x{offset:X}: No DDS header found in original file - skipping."
            ),
            RepairKind::MipmapRegenerationFailed { levels, message } => write!(
                f,
                "{name} at 0x{offset:X}: Regenerating {levels} mipmaps failed ({message}) - \
                 using file as-is."
            ),
            RepairKind::UndeterminedFormat => write!(
                f,
                "{name} at 0x{offset:X}: Could not determine DDS format - skipping."
            ),
            RepairKind::FormatMismatch { expected, found } => write!(
                f,
                "{name} at 0x{offset:X}: Format mismatch - expected {expected}, got {found}."
            ),
            RepairKind::ExceedsFileSize { size, available } => write!(
                f,
                "DDS {name} at 0x{offset:X} exceeds file size \
                 ({size} bytes, {available} available) - skipping."
            ),
        }
    }
}

/// Anomalies of one repack, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairLog {
    pub entries: Vec<RepairEntry>,
}

impl RepairLog {
    fn record(&mut self, name: &str, offset: u64, kind: RepairKind) {
        let entry = RepairEntry {
            name: name.to_string(),
            offset,
            kind,
        };
        // Entries are returned to the caller; only trace them here.
        tracing::debug!("{entry}");
        self.entries.push(entry);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of format mismatch lines.
    #[must_use]
    pub fn mismatch_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.kind, RepairKind::FormatMismatch { .. }))
            .count()
    }

    /// Log text: one line per entry, newline separated.
    #[must_use]
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write the log to `path`. An empty log still produces an empty file.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }
}

/// Result of [`repack`]
#[derive(Debug, Clone)]
pub struct RepackOutcome {
    /// Patched copy of the container
    pub data: Vec<u8>,
    pub repair_log: RepairLog,
    /// Names of entries whose replacement was written
    pub replaced: Vec<String>,
    /// Number of entries that were skipped
    pub skipped: usize,
}

/// Result of [`repack_container`]
#[derive(Debug, Clone)]
pub struct RepackResult {
    /// Written container
    pub output: PathBuf,
    /// Written repair log
    pub repair_log_path: PathBuf,
    pub repair_log: RepairLog,
    pub replaced: usize,
    pub skipped: usize,
    /// Number of index entries processed
    pub total: usize,
}

/// Splice replacements into a copy of `container`.
///
/// Entries are processed in order against the patched copy, so a splice that
/// runs past its own region is visible to the header checks of later
/// entries. `regenerator` is only called for
/// resources whose original header declares more than one mip level; with
/// `None`, replacements are used as they are.
pub fn repack(
    container: &[u8],
    entries: &[IndexEntry],
    replacements: &dyn ReplacementSource,
    regenerator: Option<&dyn MipmapRegenerator>,
    progress: ProgressCallback,
) -> RepackOutcome {
    let mut data = container.to_vec();
    let mut log = RepairLog::default();
    let mut replaced = Vec::new();
    let mut skipped = 0;
    let total = entries.len();

    for (i, entry) in entries.iter().enumerate() {
        progress(&SpliceProgress::with_file(
            SplicePhase::Splicing,
            i + 1,
            total,
            entry.name.clone(),
        ));

        if splice_entry(&mut data, entry, replacements, regenerator, &mut log) {
            replaced.push(entry.name.clone());
        } else {
            skipped += 1;
        }
    }

    RepackOutcome {
        data,
        repair_log: log,
        replaced,
        skipped,
    }
}

/// Validate and splice a single entry. Returns whether bytes were written.
fn splice_entry(
    data: &mut [u8],
    entry: &IndexEntry,
    replacements: &dyn ReplacementSource,
    regenerator: Option<&dyn MipmapRegenerator>,
    log: &mut RepairLog,
) -> bool {
    let name = entry.name.as_str();
    let offset = entry.offset;

    let Some(mut path) = replacements.resolve(name) else {
        log.record(name, offset, RepairKind::MissingFile);
        return false;
    };

    let orig = inspect_header(header_at(data, offset));
    if !orig.is_valid {
        log.record(name, offset, RepairKind::NoHeader);
        return false;
    }

    if orig.mipmap_count > 1 {
        match regenerator {
            Some(tool) => match tool.regenerate(&path, orig.mipmap_count) {
                Ok(regenerated) => path = regenerated,
                Err(e) => log.record(
                    name,
                    offset,
                    RepairKind::MipmapRegenerationFailed {
                        levels: orig.mipmap_count,
                        message: e.to_string(),
                    },
                ),
            },
            None => tracing::debug!(
                "{name}: original has {} mipmaps, regeneration disabled",
                orig.mipmap_count
            ),
        }
    }

    let replacement = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log.record(name, offset, RepairKind::ReadFailed(e.to_string()));
            return false;
        }
    };
    let new = inspect_header(&replacement);

    if !orig.format.is_determined() || !new.format.is_determined() {
        log.record(name, offset, RepairKind::UndeterminedFormat);
        return false;
    }

    if orig.format != new.format {
        log.record(
            name,
            offset,
            RepairKind::FormatMismatch {
                expected: orig.format.to_string(),
                found: new.format.to_string(),
            },
        );
    } else {
        tracing::debug!(
            "{name} matches format ({}), mipmaps: {}",
            orig.format,
            orig.mipmap_count
        );
    }

    // The header check above guarantees the offset lies inside the container.
    let start = offset as usize;
    let available = data.len() - start;
    if replacement.len() > available {
        log.record(
            name,
            offset,
            RepairKind::ExceedsFileSize {
                size: replacement.len(),
                available,
            },
        );
        return false;
    }

    data[start..start + replacement.len()].copy_from_slice(&replacement);
    tracing::debug!("Replaced DDS at 0x{offset:X} ({offset} bytes) with {name}");
    true
}

/// Up to [`HEADER_SIZE`] bytes of `container` at `offset`; empty when out of
/// range.
fn header_at(container: &[u8], offset: u64) -> &[u8] {
    usize::try_from(offset)
        .ok()
        .and_then(|start| container.get(start..))
        .map(|rest| &rest[..rest.len().min(HEADER_SIZE)])
        .unwrap_or_default()
}

/// Default output path: the container's own path with `_repacked` appended.
#[must_use]
pub fn default_output_path(container: &Path) -> PathBuf {
    let mut name = container
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(REPACKED_SUFFIX);
    container.with_file_name(name)
}

/// Repack `container` using the index and edited files in `extracted_dir`.
///
/// Writes the patched container to `output` and the repair log into
/// `extracted_dir`. The original container is never modified.
pub fn repack_container(
    container: &Path,
    extracted_dir: &Path,
    output: &Path,
    options: &RepackOptions,
    regenerator: Option<&dyn MipmapRegenerator>,
    progress: ProgressCallback,
) -> Result<RepackResult> {
    progress(&SpliceProgress::new(SplicePhase::ReadingIndex, 0, 1));
    let entries = ResourceIndex::read(&extracted_dir.join(&options.index_name))?;

    progress(&SpliceProgress::with_file(
        SplicePhase::ReadingContainer,
        0,
        1,
        file_name_of(container),
    ));
    let original = fs::read(container)?;
    tracing::info!(
        "Loaded original file: {} ({} bytes), {} DDS entries to replace",
        container.display(),
        original.len(),
        entries.len()
    );

    let source = DirectorySource::new(extracted_dir);
    let outcome = repack(&original, &entries, &source, regenerator, progress);

    progress(&SpliceProgress::new(SplicePhase::WritingOutput, 0, 1));
    fs::write(output, &outcome.data)?;
    let repair_log_path = extracted_dir.join(&options.repair_log_name);
    outcome.repair_log.write(&repair_log_path)?;

    progress(&SpliceProgress::new(SplicePhase::Complete, entries.len(), entries.len()));
    if !outcome.repair_log.is_empty() {
        tracing::warn!(
            "{} repair log entries for {}, see {}",
            outcome.repair_log.len(),
            file_name_of(container),
            repair_log_path.display()
        );
    }
    tracing::info!(
        "Repacking complete: {} replaced, {} skipped. New file saved as: {}",
        outcome.replaced.len(),
        outcome.skipped,
        output.display()
    );

    Ok(RepackResult {
        output: output.to_path_buf(),
        repair_log_path,
        replaced: outcome.replaced.len(),
        skipped: outcome.skipped,
        total: entries.len(),
        repair_log: outcome.repair_log,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::progress::no_progress;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn dds(fourcc: &[u8; 4], mipmaps: u32, len: usize, fill: u8) -> Vec<u8> {
        let mut buf = vec![fill; len.max(HEADER_SIZE)];
        buf[..4].copy_from_slice(b"DDS ");
        buf[28..32].copy_from_slice(&mipmaps.to_le_bytes());
        buf[84..88].copy_from_slice(fourcc);
        buf
    }

    /// Replacements held in temp files, keyed by name.
    struct Files {
        dir: tempfile::TempDir,
        names: HashMap<String, PathBuf>,
    }

    impl Files {
        fn new() -> Self {
            Self {
                dir: tempfile::tempdir().unwrap(),
                names: HashMap::new(),
            }
        }

        fn add(&mut self, name: &str, bytes: &[u8]) {
            let path = self.dir.path().join(name);
            fs::write(&path, bytes).unwrap();
            self.names.insert(name.to_string(), path);
        }
    }

    impl ReplacementSource for Files {
        fn resolve(&self, name: &str) -> Option<PathBuf> {
            self.names.get(name).cloned()
        }
    }

    #[derive(Default)]
    struct RecordingRegenerator {
        calls: Mutex<Vec<(PathBuf, u32)>>,
        fail: bool,
    }

    impl MipmapRegenerator for RecordingRegenerator {
        fn regenerate(&self, path: &Path, levels: u32) -> Result<PathBuf> {
            self.calls.lock().unwrap().push((path.to_path_buf(), levels));
            if self.fail {
                Err(Error::MipmapOutputMissing {
                    path: path.to_path_buf(),
                })
            } else {
                Ok(path.to_path_buf())
            }
        }
    }

    #[test]
    fn test_identical_replacement_is_noop() {
        let container = [dds(b"DXT1", 1, 200, 1), dds(b"DXT5", 1, 150, 2)].concat();
        let mut files = Files::new();
        files.add("dds_001.dds", &container[..200]);
        files.add("dds_002.dds", &container[200..]);
        let entries = vec![
            IndexEntry::new("dds_001.dds", 0, None),
            IndexEntry::new("dds_002.dds", 200, None),
        ];

        let outcome = repack(&container, &entries, &files, None, &no_progress);
        assert_eq!(outcome.data, container);
        assert!(outcome.repair_log.is_empty());
        assert_eq!(outcome.replaced.len(), 2);
    }

    #[test]
    fn test_edited_replacement_is_spliced() {
        let container = [vec![9u8; 16], dds(b"DXT1", 1, 200, 0)].concat();
        let mut files = Files::new();
        let edited = dds(b"DXT1", 1, 180, 7);
        files.add("dds_001.dds", &edited);
        let entries = vec![IndexEntry::new("dds_001.dds", 16, None)];

        let outcome = repack(&container, &entries, &files, None, &no_progress);
        assert_eq!(&outcome.data[..16], &[9u8; 16]);
        assert_eq!(&outcome.data[16..196], edited.as_slice());
        // tail of the old resource is left alone
        assert_eq!(&outcome.data[196..], &container[196..]);
        assert_eq!(outcome.data.len(), container.len());
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let container = dds(b"DXT1", 1, 128, 0);
        let entries = vec![IndexEntry::new("dds_001.dds", 0, None)];

        let outcome = repack(&container, &entries, &Files::new(), None, &no_progress);
        assert_eq!(outcome.data, container);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.repair_log.entries[0].kind, RepairKind::MissingFile);
        assert_eq!(
            outcome.repair_log.render(),
            "Missing file: dds_001.dds - skipping."
        );
    }

    #[test]
    fn test_no_header_at_offset() {
        let container = [dds(b"DXT1", 1, 128, 0), vec![0u8; 64]].concat();
        let mut files = Files::new();
        files.add("dds_001.dds", &dds(b"DXT1", 1, 128, 3));
        files.add("dds_002.dds", &dds(b"DXT1", 1, 128, 3));
        let entries = vec![
            IndexEntry::new("dds_001.dds", 130, None),
            IndexEntry::new("dds_002.dds", 10_000, None),
        ];

        let outcome = repack(&container, &entries, &files, None, &no_progress);
        assert_eq!(outcome.data, container);
        assert!(outcome.repair_log.entries.iter().all(|e| e.kind == RepairKind::NoHeader));
        assert_eq!(outcome.repair_log.len(), 2);
    }

    #[test]
    fn test_oversized_replacement_is_skipped() {
        let container = [vec![0u8; 8], dds(b"DXT1", 1, 128, 0)].concat();
        let mut files = Files::new();
        files.add("dds_001.dds", &dds(b"DXT1", 1, 129, 5));
        let entries = vec![IndexEntry::new("dds_001.dds", 8, None)];

        let outcome = repack(&container, &entries, &files, None, &no_progress);
        assert_eq!(outcome.data, container);
        assert_eq!(
            outcome.repair_log.entries[0].kind,
            RepairKind::ExceedsFileSize {
                size: 129,
                available: 128
            }
        );
    }

    #[test]
    fn test_format_mismatch_still_splices() {
        let container = dds(b"DXT1", 1, 256, 0);
        let mut files = Files::new();
        let edited = dds(b"DXT5", 1, 256, 4);
        files.add("dds_001.dds", &edited);
        let entries = vec![IndexEntry::new("dds_001.dds", 0, None)];

        let outcome = repack(&container, &entries, &files, None, &no_progress);
        assert_eq!(outcome.data, edited);
        assert_eq!(outcome.repair_log.mismatch_count(), 1);
        assert_eq!(outcome.repair_log.len(), 1);
        assert!(!outcome.repair_log.entries[0].is_skip());
        assert_eq!(
            outcome.repair_log.render(),
            "dds_001.dds at 0x0: Format mismatch - expected DXT1, got DXT5."
        );
    }

    #[test]
    fn test_undetermined_replacement_is_skipped() {
        let container = dds(b"DXT1", 1, 256, 0);
        let mut files = Files::new();
        files.add("dds_001.dds", b"not a texture");
        let entries = vec![IndexEntry::new("dds_001.dds", 0, None)];

        let outcome = repack(&container, &entries, &files, None, &no_progress);
        assert_eq!(outcome.data, container);
        assert_eq!(outcome.repair_log.entries[0].kind, RepairKind::UndeterminedFormat);
    }

    #[test]
    fn test_regenerator_called_with_original_levels() {
        let container = [dds(b"DXT1", 0, 128, 0), dds(b"DXT1", 10, 128, 0)].concat();
        let mut files = Files::new();
        files.add("dds_001.dds", &dds(b"DXT1", 1, 128, 0));
        files.add("dds_002.dds", &dds(b"DXT1", 1, 128, 0));
        let entries = vec![
            IndexEntry::new("dds_001.dds", 0, None),
            IndexEntry::new("dds_002.dds", 128, None),
        ];
        let regen = RecordingRegenerator::default();

        let outcome = repack(&container, &entries, &files, Some(&regen), &no_progress);
        let calls = regen.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, files.dir.path().join("dds_002.dds"));
        assert_eq!(calls[0].1, 10);
        assert!(outcome.repair_log.is_empty());
    }

    #[test]
    fn test_regenerator_failure_falls_back() {
        let container = dds(b"DXT1", 4, 256, 0);
        let mut files = Files::new();
        let edited = dds(b"DXT1", 1, 256, 8);
        files.add("dds_001.dds", &edited);
        let entries = vec![IndexEntry::new("dds_001.dds", 0, None)];
        let regen = RecordingRegenerator {
            fail: true,
            ..Default::default()
        };

        let outcome = repack(&container, &entries, &files, Some(&regen), &no_progress);
        assert_eq!(outcome.data, edited);
        assert_eq!(outcome.replaced, vec!["dds_001.dds".to_string()]);
        assert!(matches!(
            outcome.repair_log.entries[0].kind,
            RepairKind::MipmapRegenerationFailed { levels: 4, .. }
        ));
    }

    #[test]
    fn test_overrun_splice_hides_next_header() {
        // The first replacement runs over the second header, so the second
        // entry no longer finds a DDS header and its bytes stay as spliced.
        let container = [dds(b"DXT1", 1, 128, 0), dds(b"DXT1", 1, 128, 0)].concat();
        let mut first = dds(b"DXT1", 1, 256, 6);
        first[128..132].copy_from_slice(b"XXXX");
        let mut files = Files::new();
        files.add("dds_001.dds", &first);
        files.add("dds_002.dds", &dds(b"DXT1", 1, 128, 2));
        let entries = vec![
            IndexEntry::new("dds_001.dds", 0, None),
            IndexEntry::new("dds_002.dds", 128, None),
        ];

        let outcome = repack(&container, &entries, &files, None, &no_progress);
        assert_eq!(outcome.replaced, vec!["dds_001.dds".to_string()]);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.data, first);
        assert_eq!(&outcome.data[128..132], b"XXXX");
        assert_eq!(
            outcome.repair_log.render(),
            "dds_002.dds at 0x80: No DDS header found in original file - skipping."
        );
    }

    #[test]
    fn test_overrun_splice_is_checked_against_patched_header() {
        // A replacement that carries a valid header into the next region
        // decides the next entry's format and mip count.
        let container = [dds(b"DXT1", 1, 128, 0), dds(b"DXT1", 1, 128, 0)].concat();
        let first = [dds(b"DXT1", 1, 128, 6), dds(b"DXT5", 1, 128, 6)].concat();
        let mut files = Files::new();
        files.add("dds_001.dds", &first);
        files.add("dds_002.dds", &dds(b"DXT1", 1, 128, 2));
        let entries = vec![
            IndexEntry::new("dds_001.dds", 0, None),
            IndexEntry::new("dds_002.dds", 128, None),
        ];

        let outcome = repack(&container, &entries, &files, None, &no_progress);
        assert_eq!(outcome.replaced.len(), 2);
        assert_eq!(
            outcome.repair_log.render(),
            "dds_002.dds at 0x80: Format mismatch - expected DXT5, got DXT1."
        );
    }

    /// Collects formatted tracing output.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_repair_entries_not_logged_at_info() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();

        let container = dds(b"DXT1", 1, 128, 0);
        let entries = vec![IndexEntry::new("dds_001.dds", 0, None)];
        let outcome = tracing::subscriber::with_default(subscriber, || {
            repack(&container, &entries, &Files::new(), None, &no_progress)
        });

        assert_eq!(outcome.repair_log.len(), 1);
        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(!output.contains("Missing file"), "{output}");
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/games/gh3/global.pab.xen")),
            PathBuf::from("/games/gh3/global.pab.xen_repacked")
        );
    }

    #[test]
    fn test_repair_log_written_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        RepairLog::default().write(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
