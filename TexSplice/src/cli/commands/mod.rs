use clap::Subcommand;
use std::path::PathBuf;

use crate::config::TexSpliceConfig;

pub mod batch;
pub mod extract;
pub mod info;
pub mod repack;
pub mod scan;

#[derive(Subcommand)]
pub enum Commands {
    /// Extract every DDS texture from a container
    Extract {
        /// Source container (e.g. global.pab.xen)
        #[arg(short, long)]
        source: PathBuf,

        /// Output directory (default from config: extracted_dds)
        #[arg(short, long)]
        destination: Option<PathBuf>,

        /// Index file name written into the output directory
        #[arg(long)]
        index: Option<String>,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Write edited DDS files back into a copy of the container
    Repack {
        /// Original container
        #[arg(short, long)]
        source: PathBuf,

        /// Folder with the extracted (edited) DDS files and index
        #[arg(short, long)]
        extracted: PathBuf,

        /// Output container (defaults to <source>_repacked)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Index file name inside the extracted folder
        #[arg(long)]
        index: Option<String>,

        /// Do not regenerate mipmaps before splicing
        #[arg(long)]
        no_mipmaps: bool,

        /// Path to texconv
        #[arg(long)]
        texconv: Option<PathBuf>,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// List DDS headers in a container without extracting
    Scan {
        /// Container to scan
        path: PathBuf,
    },

    /// Show header details of a DDS file
    Info {
        /// DDS file
        path: PathBuf,
    },

    /// Extract every file in a folder into <name>_extracted folders
    BatchExtract {
        /// Folder containing the containers
        dir: PathBuf,

        /// Index file name written into each output folder
        #[arg(long)]
        index: Option<String>,
    },

    /// Repack every <name>_extracted folder against its original container
    BatchRepack {
        /// Folder containing the containers and *_extracted folders
        dir: PathBuf,

        /// Index file name inside each extracted folder
        #[arg(long)]
        index: Option<String>,

        /// Do not regenerate mipmaps before splicing
        #[arg(long)]
        no_mipmaps: bool,

        /// Path to texconv
        #[arg(long)]
        texconv: Option<PathBuf>,
    },

    /// Write the current settings to a config file
    InitConfig {
        /// Where to write (defaults to texsplice/config.toml in the user config dir)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Answer prompts instead of passing arguments
    Interactive,
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying operation fails.
    pub fn execute(&self, config: &TexSpliceConfig) -> anyhow::Result<()> {
        match self {
            Commands::Extract {
                source,
                destination,
                index,
                quiet,
            } => {
                let config = with_index(config, index.as_deref());
                let destination = destination
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(&config.output_dir_name));
                extract::execute(source, &destination, &config, *quiet)
            }
            Commands::Repack {
                source,
                extracted,
                output,
                index,
                no_mipmaps,
                texconv,
                quiet,
            } => {
                let config = with_tool(
                    &with_index(config, index.as_deref()),
                    *no_mipmaps,
                    texconv.as_deref(),
                );
                let output = output
                    .clone()
                    .unwrap_or_else(|| crate::repack::default_output_path(source));
                repack::execute(source, extracted, &output, &config, *quiet)
            }
            Commands::Scan { path } => scan::execute(path),
            Commands::Info { path } => info::execute(path),
            Commands::BatchExtract { dir, index } => {
                batch::extract(dir, &with_index(config, index.as_deref()))
            }
            Commands::BatchRepack {
                dir,
                index,
                no_mipmaps,
                texconv,
            } => {
                let config = with_tool(
                    &with_index(config, index.as_deref()),
                    *no_mipmaps,
                    texconv.as_deref(),
                );
                batch::repack(dir, &config)
            }
            Commands::InitConfig { path, force } => init_config(config, path.as_deref(), *force),
            Commands::Interactive => super::interactive::run(config),
        }
    }
}

fn init_config(
    config: &TexSpliceConfig,
    path: Option<&std::path::Path>,
    force: bool,
) -> anyhow::Result<()> {
    let target = match path {
        Some(path) => path.to_path_buf(),
        None => TexSpliceConfig::default_path()
            .ok_or_else(|| anyhow::anyhow!("no platform config directory; pass a path"))?,
    };
    if target.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", target.display());
    }
    config.save_to(&target)?;
    println!("Config written to: {}", target.display());
    Ok(())
}

/// Config with the index file name overridden, if given.
fn with_index(config: &TexSpliceConfig, index: Option<&str>) -> TexSpliceConfig {
    let mut config = config.clone();
    if let Some(name) = index.filter(|n| !n.is_empty()) {
        config.index_file_name = name.to_string();
    }
    config
}

/// Config with mipmap tool flags applied.
fn with_tool(
    config: &TexSpliceConfig,
    no_mipmaps: bool,
    texconv: Option<&std::path::Path>,
) -> TexSpliceConfig {
    let mut config = config.clone();
    if no_mipmaps {
        config.regenerate_mipmaps = false;
    }
    if let Some(path) = texconv {
        config.texconv_path = path.to_path_buf();
    }
    config
}
