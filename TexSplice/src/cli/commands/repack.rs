//! CLI command for repacking edited DDS files

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{
    DISK, LOOKING_GLASS, WARNING, print_done, print_step, simple_bar, update_bar,
};
use crate::config::TexSpliceConfig;
use crate::mipmap::MipmapRegenerator;
use crate::progress::{SplicePhase, SpliceProgress};
use crate::repack::repack_container;

pub fn execute(
    source: &Path,
    extracted: &Path,
    output: &Path,
    config: &TexSpliceConfig,
    quiet: bool,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let options = config.repack_options();
    let texconv = config.regenerator();
    let regenerator = texconv.as_ref().map(|t| t as &dyn MipmapRegenerator);

    print_step(
        1,
        2,
        LOOKING_GLASS,
        &format!("Reading {} from {}...", options.index_name, extracted.display()),
    );

    let result = if quiet {
        repack_container(source, extracted, output, &options, regenerator, &|_| {})?
    } else {
        let pb = simple_bar(0, "Repacking");
        let on_progress = |progress: &SpliceProgress| {
            if progress.phase == SplicePhase::Splicing {
                update_bar(&pb, progress);
            }
        };
        let result =
            repack_container(source, extracted, output, &options, regenerator, &on_progress);
        pb.finish_and_clear();
        result?
    };

    print_step(
        2,
        2,
        DISK,
        &format!(
            "Replaced {} of {} DDS files ({} skipped)",
            result.replaced, result.total, result.skipped
        ),
    );

    for entry in &result.repair_log.entries {
        println!("  {WARNING}{entry}");
    }

    println!("New file saved as: {}", result.output.display());
    println!("Repair log written to: {}", result.repair_log_path.display());
    print_done(started.elapsed());
    Ok(())
}
