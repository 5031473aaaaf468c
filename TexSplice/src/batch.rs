//! Batch extraction and repacking
//!
//! Every container in a folder is handled on its own: one failing container
//! is reported and the rest carry on. Containers are processed in parallel;
//! each one's own patch sequence stays sequential.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::extract::{ExtractOptions, extract_container, file_name_of};
use crate::mipmap::MipmapRegenerator;
use crate::progress::{SplicePhase, SpliceProgress, no_progress};
use crate::repack::{REPACKED_SUFFIX, RepackOptions, repack_container};

/// Suffix of the folder a container is extracted into.
pub const EXTRACTED_SUFFIX: &str = "_extracted";

/// Result of a batch operation
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Number of successful operations
    pub success_count: usize,
    /// Number of failed operations
    pub fail_count: usize,
    /// Messages for each container processed
    pub results: Vec<String>,
}

/// Regular files directly inside `dir`, sorted.
pub fn find_containers<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    immediate_children(dir.as_ref(), |path| path.is_file())
}

/// Immediate subfolders of `dir` whose name ends in `_extracted`, sorted.
pub fn find_extracted_folders<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    immediate_children(dir.as_ref(), |path| {
        path.is_dir() && file_name_of(path).ends_with(EXTRACTED_SUFFIX)
    })
}

fn immediate_children(dir: &Path, keep: impl Fn(&Path) -> bool) -> Vec<PathBuf> {
    let mut paths: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| keep(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();

    paths.sort();
    paths
}

/// Folder that `container` is extracted into during batch extraction:
/// `<stem>_extracted` next to it, where the stem drops the last extension.
#[must_use]
pub fn extraction_dir_for(container: &Path) -> PathBuf {
    let stem = container
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    container.with_file_name(format!("{stem}{EXTRACTED_SUFFIX}"))
}

/// The original container for the extraction base name `base` in `dir`.
///
/// Picks the first file, by name, that starts with `base` and is neither an
/// extraction folder nor a previous repack output.
pub fn find_original_container(dir: &Path, base: &str) -> Option<PathBuf> {
    find_containers(dir).into_iter().find(|path| {
        let name = file_name_of(path);
        name.starts_with(base)
            && !name.ends_with(EXTRACTED_SUFFIX)
            && !name.ends_with(REPACKED_SUFFIX)
    })
}

/// Pair each container with its extraction folder.
///
/// Containers sharing a stem (`a.pak`, `a.pab`) map to the same folder. The
/// first one by name keeps it; the others come back as errors so that no two
/// parallel extractions write into one folder.
fn assign_extraction_dirs(containers: &[PathBuf]) -> Vec<(&Path, Result<PathBuf>)> {
    let mut owners: HashMap<PathBuf, &Path> = HashMap::new();
    containers
        .iter()
        .map(|container| {
            let dir = extraction_dir_for(container);
            let assigned = match owners.get(&dir) {
                Some(owner) => Err(Error::ExtractionDirInUse {
                    container: file_name_of(container),
                    dir,
                    claimed_by: file_name_of(owner),
                }),
                None => {
                    owners.insert(dir.clone(), container);
                    Ok(dir)
                }
            };
            (container.as_path(), assigned)
        })
        .collect()
}

/// Extract every file in `dir` into its own `<stem>_extracted` folder.
pub fn batch_extract<F>(dir: &Path, options: &ExtractOptions, progress: F) -> BatchResult
where
    F: Fn(&SpliceProgress) + Send + Sync,
{
    let containers = find_containers(dir);
    let success_counter = AtomicUsize::new(0);
    let fail_counter = AtomicUsize::new(0);
    let processed = AtomicUsize::new(0);
    let total = containers.len();

    tracing::info!("Starting batch DDS extraction from {}", dir.display());

    let results: Vec<String> = assign_extraction_dirs(&containers)
        .into_par_iter()
        .map(|(container, output_dir)| {
            let display_name = file_name_of(container);
            let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
            progress(&SpliceProgress::with_file(
                SplicePhase::Batch,
                current,
                total,
                display_name.clone(),
            ));

            let outcome = output_dir
                .and_then(|dir| extract_container(container, &dir, options, &no_progress));
            match outcome {
                Ok(result) => {
                    success_counter.fetch_add(1, Ordering::SeqCst);
                    format!(
                        "Extracted: {display_name} ({} DDS files)",
                        result.index.len()
                    )
                }
                Err(e) => {
                    fail_counter.fetch_add(1, Ordering::SeqCst);
                    tracing::warn!("Failed {display_name}: {e}");
                    format!("Failed {display_name}: {e}")
                }
            }
        })
        .collect();

    BatchResult {
        success_count: success_counter.load(Ordering::SeqCst),
        fail_count: fail_counter.load(Ordering::SeqCst),
        results,
    }
}

/// Repack every `<base>_extracted` folder in `dir` against its original
/// container, writing `<base>_repacked` into `dir`.
pub fn batch_repack<F>(
    dir: &Path,
    options: &RepackOptions,
    regenerator: Option<&dyn MipmapRegenerator>,
    progress: F,
) -> BatchResult
where
    F: Fn(&SpliceProgress) + Send + Sync,
{
    let folders = find_extracted_folders(dir);
    let success_counter = AtomicUsize::new(0);
    let fail_counter = AtomicUsize::new(0);
    let processed = AtomicUsize::new(0);
    let total = folders.len();

    tracing::info!("Starting batch DDS repack from {}", dir.display());

    let results: Vec<String> = folders
        .par_iter()
        .map(|folder| {
            let folder_name = file_name_of(folder);
            let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
            progress(&SpliceProgress::with_file(
                SplicePhase::Batch,
                current,
                total,
                folder_name.clone(),
            ));

            let base = folder_name
                .strip_suffix(EXTRACTED_SUFFIX)
                .unwrap_or(&folder_name);
            let outcome = find_original_container(dir, base)
                .ok_or_else(|| Error::OriginalContainerNotFound {
                    folder: folder_name.clone(),
                })
                .and_then(|container| {
                    let output = dir.join(format!("{base}{REPACKED_SUFFIX}"));
                    repack_container(
                        &container,
                        folder,
                        &output,
                        options,
                        regenerator,
                        &no_progress,
                    )
                });

            match outcome {
                Ok(result) => {
                    success_counter.fetch_add(1, Ordering::SeqCst);
                    format!(
                        "Repacked: {folder_name} ({} of {} replaced, {} issues)",
                        result.replaced,
                        result.total,
                        result.repair_log.len()
                    )
                }
                Err(e) => {
                    fail_counter.fetch_add(1, Ordering::SeqCst);
                    tracing::warn!("Failed {folder_name}: {e}");
                    format!("Failed {folder_name}: {e}")
                }
            }
        })
        .collect();

    BatchResult {
        success_count: success_counter.load(Ordering::SeqCst),
        fail_count: fail_counter.load(Ordering::SeqCst),
        results,
    }
}
