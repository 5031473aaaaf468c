//! Mipmap regeneration
//!
//! Edited textures often come back with a single level. Before splicing, the
//! replacement is given as many mip levels as the original had, using an
//! external tool. The tool sits behind [`MipmapRegenerator`] so repacking can
//! run (and be tested) without it.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Default program name for [`Texconv`].
pub const DEFAULT_TEXCONV: &str = "texconv";

/// Something that can rebuild the mip chain of a DDS file.
pub trait MipmapRegenerator: Send + Sync {
    /// Regenerate `path` with `levels` mip levels and return the path of the
    /// regenerated file. `levels` is always at least 2.
    ///
    /// Callers treat failure as non-fatal and fall back to the file as it was.
    fn regenerate(&self, path: &Path, levels: u32) -> Result<PathBuf>;
}

/// Microsoft `texconv` invoked as a subprocess.
///
/// Output goes to a scratch directory next to the input and is then moved
/// over the input file, so the regenerated texture replaces the edited one.
#[derive(Debug, Clone)]
pub struct Texconv {
    program: PathBuf,
}

impl Texconv {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl Default for Texconv {
    fn default() -> Self {
        Self::new(DEFAULT_TEXCONV)
    }
}

impl MipmapRegenerator for Texconv {
    fn regenerate(&self, path: &Path, levels: u32) -> Result<PathBuf> {
        if levels <= 1 {
            return Err(Error::InvalidMipmapCount(levels));
        }

        let stem = path
            .file_stem()
            .ok_or_else(|| Error::InvalidPath(path.display().to_string()))?;
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let scratch = tempfile::Builder::new()
            .prefix("_temp_mipmaps")
            .tempdir_in(parent)?;

        tracing::debug!(
            "Regenerating {} mipmaps for {}",
            levels,
            path.display()
        );

        let output = Command::new(&self.program)
            .arg("-m")
            .arg(levels.to_string())
            .arg("-nologo")
            .arg("-y")
            .arg("-o")
            .arg(scratch.path())
            .arg(path)
            .output()
            .map_err(|source| Error::MipmapToolSpawn {
                program: self.program_name(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::MipmapToolFailed {
                program: self.program_name(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // texconv writes an upper-case extension; accept either on
        // case-sensitive file systems.
        let regenerated = ["DDS", "dds"]
            .iter()
            .map(|ext| {
                let mut name = OsString::from(stem);
                name.push(".");
                name.push(ext);
                scratch.path().join(name)
            })
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| Error::MipmapOutputMissing {
                path: scratch.path().join(stem).with_extension("DDS"),
            })?;

        fs::rename(&regenerated, path)?;
        Ok(path.to_path_buf())
    }
}
