//! CLI command for DDS header details

use std::path::Path;

use crate::cli::progress::PICTURE;
use crate::dds::{DdsHeader, HEADER_SIZE, inspect_header};

/// Show info about a DDS file
pub fn execute(path: &Path) -> anyhow::Result<()> {
    let data = std::fs::read(path)?;

    let Some(header) = DdsHeader::parse(&data) else {
        anyhow::bail!(
            "{} is not a DDS file (needs \"DDS \" magic and at least {HEADER_SIZE} bytes)",
            path.display()
        );
    };
    let info = inspect_header(&data);

    println!("{PICTURE}DDS Information: {}", path.display());
    println!();
    println!("Dimensions: {}x{}", header.width, header.height);
    println!("Depth: {}", header.depth);
    println!(
        "Mip levels: {} (stored: {})",
        info.mipmap_count, header.mipmap_count
    );
    println!("Pitch/linear size: {}", header.pitch_or_linear_size);
    println!("Pixel format flags: 0x{:08X}", header.pixel_format_flags);
    println!("FourCC: {}", info.format);

    // ddsfile gives the full D3D/DXGI format where it recognises one
    match ddsfile::Dds::read(&mut std::io::Cursor::new(data.as_slice())) {
        Ok(dds) => {
            if let Some(dxgi) = dds.get_dxgi_format() {
                println!("Format: {dxgi:?} (DXGI)");
            } else if let Some(d3d) = dds.get_d3d_format() {
                println!("Format: {d3d:?} (D3D)");
            }
            println!("Array layers: {}", dds.get_num_array_layers());
            if let Ok(surface) = dds.get_data(0) {
                println!("Data size (mip 0): {} bytes", surface.len());
            }
        }
        Err(e) => println!("Format: not decodable ({e})"),
    }

    println!("File size: {} bytes", data.len());
    Ok(())
}
