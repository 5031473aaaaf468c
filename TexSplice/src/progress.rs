//! Progress reporting for extraction and repacking
//!
//! The library never prints. Callers pass a callback that receives
//! [`SpliceProgress`] updates and render them however they like.

/// Progress callback type for single-container operations
pub type ProgressCallback<'a> = &'a (dyn Fn(&SpliceProgress) + Sync + Send);

/// Progress information during extraction and repacking
#[derive(Debug, Clone)]
pub struct SpliceProgress {
    /// Current operation phase
    pub phase: SplicePhase,
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// Current resource or container being processed (if applicable)
    pub current_file: Option<String>,
}

impl SpliceProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: SplicePhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    /// Create a progress update with a file/item name
    #[must_use]
    pub fn with_file(
        phase: SplicePhase,
        current: usize,
        total: usize,
        file: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }

}

/// Phase of an extract or repack operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplicePhase {
    /// Reading the container into memory
    ReadingContainer,
    /// Searching for DDS headers
    Scanning,
    /// Writing extracted resources
    WritingResources,
    /// Reading the index file
    ReadingIndex,
    /// Validating and splicing replacements
    Splicing,
    /// Writing the repacked container and repair log
    WritingOutput,
    /// Processing containers in a batch
    Batch,
    /// Operation complete
    Complete,
}

impl SplicePhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadingContainer => "Reading container",
            Self::Scanning => "Scanning for DDS headers",
            Self::WritingResources => "Writing DDS files",
            Self::ReadingIndex => "Reading index",
            Self::Splicing => "Replacing DDS data",
            Self::WritingOutput => "Writing output",
            Self::Batch => "Processing",
            Self::Complete => "Complete",
        }
    }
}

/// Callback that ignores every update.
pub fn no_progress(_: &SpliceProgress) {}
