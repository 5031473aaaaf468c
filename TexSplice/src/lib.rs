//! # TexSplice
//!
//! Pull DDS textures out of opaque game-data containers and put edited ones
//! back at the same byte offsets.
//!
//! Containers are never parsed. Textures are found by their `"DDS "` magic,
//! each one running up to the next magic or the end of the file. Extraction
//! writes `dds_001.dds`, `dds_002.dds`, ... plus an index recording each
//! file's offset; repacking reads that index and overwrites the same ranges
//! in a copy of the container, refusing anything that would change its size.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use texsplice::prelude::*;
//!
//! let container = Path::new("global.pab.xen");
//! let folder = Path::new("global.pab_extracted");
//!
//! extract_container(container, folder, &ExtractOptions::default(), &no_progress)?;
//!
//! // ... edit the DDS files ...
//!
//! let texconv = Texconv::default();
//! let result = repack_container(
//!     container,
//!     folder,
//!     &default_output_path(container),
//!     &RepackOptions::default(),
//!     Some(&texconv),
//!     &no_progress,
//! )?;
//! println!("{} replaced, {} skipped", result.replaced, result.skipped);
//! # Ok::<(), texsplice::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `texsplice` command-line binary

pub mod batch;
pub mod config;
pub mod dds;
pub mod error;
pub mod extract;
pub mod index;
pub mod mipmap;
pub mod progress;
pub mod repack;
pub mod scan;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::dds::{DdsHeader, FormatTag, HeaderInfo, inspect_header};
    pub use crate::scan::scan;
    pub use crate::index::{IndexEntry, ResourceIndex};
    pub use crate::extract::{ExtractOptions, ExtractResult, extract, extract_container};
    pub use crate::repack::{
        DirectorySource, RepackOptions, RepackResult, RepairLog, ReplacementSource,
        default_output_path, repack, repack_container,
    };
    pub use crate::mipmap::{MipmapRegenerator, Texconv};
    pub use crate::batch::{BatchResult, batch_extract, batch_repack};
    pub use crate::config::TexSpliceConfig;
    pub use crate::progress::{SplicePhase, SpliceProgress, no_progress};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
