//! CLI command for extracting DDS files from a container

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{LOOKING_GLASS, PACKAGE, print_done, print_step, simple_bar, update_bar};
use crate::config::TexSpliceConfig;
use crate::extract::extract_container;
use crate::progress::SplicePhase;

pub fn execute(
    source: &Path,
    destination: &Path,
    config: &TexSpliceConfig,
    quiet: bool,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let options = config.extract_options();

    print_step(1, 2, LOOKING_GLASS, &format!("Scanning {}...", source.display()));

    let result = if quiet {
        extract_container(source, destination, &options, &|_| {})?
    } else {
        let pb = simple_bar(0, "Extracting");
        let result = extract_container(source, destination, &options, &|progress| {
            if progress.phase == SplicePhase::WritingResources {
                update_bar(&pb, progress);
            }
        });
        pb.finish_and_clear();
        result?
    };

    print_step(
        2,
        2,
        PACKAGE,
        &format!(
            "Extracted {} DDS files to {}",
            result.index.len(),
            result.output_dir.display()
        ),
    );

    if !quiet {
        for entry in &result.index.entries {
            println!(
                "  {} at 0x{:X} ({} bytes) [{}]",
                entry.name,
                entry.offset,
                entry.offset,
                entry.format.as_deref().unwrap_or("UNKNOWN")
            );
        }
    }

    println!("Index written to: {}", result.index_path.display());
    print_done(started.elapsed());
    Ok(())
}
