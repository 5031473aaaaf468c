//! CLI command for listing DDS headers in a container

use std::path::Path;

use crate::cli::progress::{LOOKING_GLASS, simple_spinner};
use crate::dds::inspect_header;
use crate::extract::{ExtractedResource, extract};
use crate::scan::scan;

pub fn execute(path: &Path) -> anyhow::Result<()> {
    let spinner = simple_spinner(&format!("{LOOKING_GLASS}Scanning {}...", path.display()));
    let scanned = std::fs::read(path).map(|data| {
        let offsets = scan(&data);
        (data, offsets)
    });
    spinner.finish_and_clear();
    let (data, offsets) = scanned?;

    if offsets.is_empty() {
        println!("No DDS files found in {}.", path.display());
        return Ok(());
    }

    println!("Found {} DDS headers in \"{}\":", offsets.len(), path.display());
    for (i, resource) in extract(&data, &offsets).iter().enumerate() {
        print_resource(i + 1, resource);
    }
    Ok(())
}

fn print_resource(position: usize, resource: &ExtractedResource<'_>) {
    let header = inspect_header(resource.data);
    println!(
        "  {position}. 0x{:X} ({} bytes) -> \"{}\" [{}] {} bytes, {} mipmaps",
        resource.offset,
        resource.offset,
        resource.name,
        resource.format,
        resource.data.len(),
        header.mipmap_count
    );
}
