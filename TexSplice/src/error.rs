//! Error types for `TexSplice`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `TexSplice` operations.
///
/// Only failures that abort a whole container are errors. Problems with a
/// single resource during repacking are collected in the repair log instead.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Container Errors ====================
    /// The container holds no occurrence of the DDS magic.
    #[error("no DDS files found in {path}")]
    NoResourcesFound {
        /// The scanned container.
        path: PathBuf,
    },

    /// No original container could be matched to an extracted folder.
    #[error("could not find original file for '{folder}'")]
    OriginalContainerNotFound {
        /// The `*_extracted` folder name.
        folder: String,
    },

    /// Another container in the same batch already extracts into this folder.
    #[error("{container} would extract into {dir}, already used by {claimed_by}")]
    ExtractionDirInUse {
        /// The container that was not extracted.
        container: String,
        /// The shared extraction folder.
        dir: PathBuf,
        /// The container that keeps the folder.
        claimed_by: String,
    },

    // ==================== Index Errors ====================
    /// The index file does not exist.
    #[error("could not find index file at \"{path}\"")]
    IndexNotFound {
        /// The expected index location.
        path: PathBuf,
    },

    /// The index file contains no recognisable entries.
    #[error("no DDS entries found in index file {path}")]
    EmptyIndex {
        /// The index file that was read.
        path: PathBuf,
    },

    /// An index entry carries an offset that cannot be represented.
    #[error("invalid offset for {name}: {value}")]
    InvalidIndexOffset {
        /// Resource name of the entry.
        name: String,
        /// The offset text as written in the index.
        value: String,
    },

    /// The same resource name appears twice in one index.
    #[error("duplicate index entry for {name} (offsets {first} and {second})")]
    DuplicateIndexEntry {
        /// Resource name of the entry.
        name: String,
        /// Offset of the first occurrence.
        first: u64,
        /// Offset of the repeated occurrence.
        second: u64,
    },

    // ==================== Mipmap Tool Errors ====================
    /// The mipmap tool could not be started.
    #[error("failed to run {program}: {source}")]
    MipmapToolSpawn {
        /// Program that was invoked.
        program: String,
        /// Underlying spawn error.
        source: std::io::Error,
    },

    /// The mipmap tool exited unsuccessfully.
    #[error("{program} failed ({status}): {stderr}")]
    MipmapToolFailed {
        /// Program that was invoked.
        program: String,
        /// Exit status description.
        status: String,
        /// Captured standard error output.
        stderr: String,
    },

    /// The mipmap tool reported success but produced no output file.
    #[error("regenerated file not found: {path}")]
    MipmapOutputMissing {
        /// Where the regenerated file was expected.
        path: PathBuf,
    },

    /// A mipmap level count below two was requested.
    #[error("invalid mipmap level count: {0}")]
    InvalidMipmapCount(u32),

    // ==================== Configuration Errors ====================
    /// The configuration file could not be parsed.
    #[error("invalid config {path}: {message}")]
    InvalidConfig {
        /// The config file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    // ==================== File System Errors ====================
    /// Invalid file path.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `TexSplice` operations.
pub type Result<T> = std::result::Result<T, Error>;
