//! CLI commands for batch extraction and repacking

use std::path::Path;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use crate::batch::{BatchResult, batch_extract, batch_repack};
use crate::cli::progress::{TRUCK, print_done, print_step};
use crate::config::TexSpliceConfig;
use crate::mipmap::MipmapRegenerator;

fn batch_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .expect("valid template")
            .progress_chars("##-"),
    );
    pb
}

fn print_summary(label: &str, result: &BatchResult) {
    println!();
    println!("{label} complete:");
    println!("  Success: {}", result.success_count);
    println!("  Failed: {}", result.fail_count);

    if result.fail_count > 0 {
        println!();
        println!("Failures:");
        for msg in result.results.iter().filter(|r| r.starts_with("Failed")) {
            println!("  {msg}");
        }
    }
}

/// Batch extract every file in `dir`
pub fn extract(dir: &Path, config: &TexSpliceConfig) -> anyhow::Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("{} is not a directory", dir.display());
    }

    let total = crate::batch::find_containers(dir).len();
    if total == 0 {
        println!("No files found in: {}", dir.display());
        return Ok(());
    }

    let started = Instant::now();
    print_step(1, 1, TRUCK, &format!("Extracting {total} files"));

    let pb = batch_bar(total);
    let result = batch_extract(dir, &config.extract_options(), |progress| {
        pb.set_position(progress.current as u64);
        if let Some(ref name) = progress.current_file {
            pb.set_message(name.clone());
        }
    });
    pb.finish_and_clear();

    print_summary("Extraction", &result);
    print_done(started.elapsed());
    Ok(())
}

/// Batch repack every `*_extracted` folder in `dir`
pub fn repack(dir: &Path, config: &TexSpliceConfig) -> anyhow::Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("{} is not a directory", dir.display());
    }

    let total = crate::batch::find_extracted_folders(dir).len();
    if total == 0 {
        println!("No *_extracted folders found in: {}", dir.display());
        return Ok(());
    }

    let started = Instant::now();
    print_step(1, 1, TRUCK, &format!("Repacking {total} folders"));

    let texconv = config.regenerator();
    let regenerator = texconv.as_ref().map(|t| t as &dyn MipmapRegenerator);

    let pb = batch_bar(total);
    let result = batch_repack(dir, &config.repack_options(), regenerator, |progress| {
        pb.set_position(progress.current as u64);
        if let Some(ref name) = progress.current_file {
            pb.set_message(name.clone());
        }
    });
    pb.finish_and_clear();

    for msg in result.results.iter().filter(|r| !r.starts_with("Failed")) {
        println!("  {msg}");
    }
    print_summary("Repack", &result);
    print_done(started.elapsed());
    Ok(())
}
