use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use pretty_assertions::assert_eq;
use tempfile::tempdir;
use texsplice::batch::{batch_extract, batch_repack};
use texsplice::prelude::*;
use texsplice::repack::RepairKind;

/// A DDS-looking blob: magic, mip count, FourCC, filled to `len`.
fn dds(fourcc: &[u8; 4], mipmaps: u32, len: usize, fill: u8) -> Vec<u8> {
    let mut buf = vec![fill; len.max(128)];
    buf[..4].copy_from_slice(b"DDS ");
    buf[28..32].copy_from_slice(&mipmaps.to_le_bytes());
    buf[84..88].copy_from_slice(fourcc);
    buf
}

fn sample_container() -> Vec<u8> {
    [
        vec![0xAB; 64],
        dds(b"DXT1", 0, 300, 1),
        dds(b"DXT5", 0, 200, 2),
        dds(b"ATI2", 0, 160, 3),
    ]
    .concat()
}

#[derive(Default)]
struct FakeRegenerator {
    calls: Mutex<Vec<(PathBuf, u32)>>,
}

impl MipmapRegenerator for FakeRegenerator {
    fn regenerate(&self, path: &Path, levels: u32) -> texsplice::Result<PathBuf> {
        self.calls.lock().unwrap().push((path.to_path_buf(), levels));
        Ok(path.to_path_buf())
    }
}

fn extract_to(dir: &Path, container: &[u8]) -> (PathBuf, PathBuf) {
    let container_path = dir.join("global.pab.xen");
    fs::write(&container_path, container).unwrap();
    let extracted = dir.join("global.pab_extracted");
    extract_container(&container_path, &extracted, &ExtractOptions::default(), &no_progress)
        .unwrap();
    (container_path, extracted)
}

#[test]
fn test_two_header_scenario() {
    let mut container = Vec::new();
    container.extend_from_slice(b"DDS ");
    container.extend_from_slice(&[0u8; 124]);
    container.extend_from_slice(b"DDS ");
    container.extend_from_slice(&[0u8; 124]);
    assert_eq!(container.len(), 256);
    assert_eq!(scan(&container), vec![0, 128]);

    let dir = tempdir().unwrap();
    let (_, extracted) = extract_to(dir.path(), &container);

    assert_eq!(fs::read(extracted.join("dds_001.dds")).unwrap(), &container[..128]);
    assert_eq!(fs::read(extracted.join("dds_002.dds")).unwrap(), &container[128..]);

    let entries = ResourceIndex::read(&extracted.join("dds_index.txt")).unwrap();
    let pairs: Vec<_> = entries.iter().map(|e| (e.name.as_str(), e.offset)).collect();
    assert_eq!(pairs, vec![("dds_001.dds", 0), ("dds_002.dds", 128)]);
}

#[test]
fn test_extract_then_repack_is_identity() {
    let dir = tempdir().unwrap();
    let original = sample_container();
    let (container_path, extracted) = extract_to(dir.path(), &original);
    let output = dir.path().join("out.bin");

    let result = repack_container(
        &container_path,
        &extracted,
        &output,
        &RepackOptions::default(),
        None,
        &no_progress,
    )
    .unwrap();

    assert_eq!(fs::read(&output).unwrap(), original);
    assert_eq!(result.replaced, 3);
    assert_eq!(result.skipped, 0);
    assert_eq!(fs::read_to_string(&result.repair_log_path).unwrap(), "");
    // original untouched
    assert_eq!(fs::read(&container_path).unwrap(), original);
}

#[test]
fn test_repack_with_edits() {
    let dir = tempdir().unwrap();
    let original = sample_container();
    let (container_path, extracted) = extract_to(dir.path(), &original);

    // same size, same format
    let edited_1 = dds(b"DXT1", 0, 300, 9);
    fs::write(extracted.join("dds_001.dds"), &edited_1).unwrap();
    // different format, smaller
    let edited_2 = dds(b"DXT1", 0, 150, 8);
    fs::write(extracted.join("dds_002.dds"), &edited_2).unwrap();
    // last resource grown past the end of the container
    fs::write(extracted.join("dds_003.dds"), dds(b"ATI2", 0, 161, 7)).unwrap();

    let output = dir.path().join("out.bin");
    let result = repack_container(
        &container_path,
        &extracted,
        &output,
        &RepackOptions::default(),
        None,
        &no_progress,
    )
    .unwrap();
    let patched = fs::read(&output).unwrap();

    assert_eq!(patched.len(), original.len());
    assert_eq!(&patched[64..364], edited_1.as_slice());
    assert_eq!(&patched[364..514], edited_2.as_slice());
    assert_eq!(&patched[514..564], &original[514..564]);
    assert_eq!(&patched[564..], &original[564..]);

    assert_eq!(result.replaced, 2);
    assert_eq!(result.skipped, 1);
    assert_eq!(result.repair_log.mismatch_count(), 1);

    let log = fs::read_to_string(&result.repair_log_path).unwrap();
    let lines: Vec<_> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "dds_002.dds at 0x16C: Format mismatch - expected DXT5, got DXT1."
    );
    assert!(lines[1].starts_with("DDS dds_003.dds at 0x234 exceeds file size"));
}

#[test]
fn test_missing_replacement_does_not_block_others() {
    let dir = tempdir().unwrap();
    let original = sample_container();
    let (container_path, extracted) = extract_to(dir.path(), &original);
    fs::remove_file(extracted.join("dds_001.dds")).unwrap();
    let edited = dds(b"DXT5", 0, 200, 4);
    fs::write(extracted.join("dds_002.dds"), &edited).unwrap();

    let output = dir.path().join("out.bin");
    let result = repack_container(
        &container_path,
        &extracted,
        &output,
        &RepackOptions::default(),
        None,
        &no_progress,
    )
    .unwrap();

    assert_eq!(result.repair_log.entries[0].kind, RepairKind::MissingFile);
    assert_eq!(&fs::read(&output).unwrap()[364..564], edited.as_slice());
}

#[test]
fn test_regeneration_only_for_multi_level_originals() {
    let dir = tempdir().unwrap();
    let original = [
        dds(b"DXT1", 0, 128, 0),
        dds(b"DXT1", 1, 128, 0),
        dds(b"DXT1", 8, 128, 0),
    ]
    .concat();
    let (container_path, extracted) = extract_to(dir.path(), &original);
    let regen = FakeRegenerator::default();

    repack_container(
        &container_path,
        &extracted,
        &dir.path().join("out.bin"),
        &RepackOptions::default(),
        Some(&regen),
        &no_progress,
    )
    .unwrap();

    let calls = regen.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], (extracted.join("dds_003.dds"), 8));
}

#[test]
fn test_repack_without_index() {
    let dir = tempdir().unwrap();
    let container_path = dir.path().join("global.pab.xen");
    fs::write(&container_path, sample_container()).unwrap();

    let err = repack_container(
        &container_path,
        dir.path(),
        &dir.path().join("out.bin"),
        &RepackOptions::default(),
        None,
        &no_progress,
    )
    .unwrap_err();
    assert!(matches!(err, Error::IndexNotFound { .. }));
    assert!(!dir.path().join("out.bin").exists());
}

#[test]
fn test_custom_index_name() {
    let dir = tempdir().unwrap();
    let container_path = dir.path().join("a.bin");
    fs::write(&container_path, sample_container()).unwrap();
    let extracted = dir.path().join("a_extracted");
    let extract_options = ExtractOptions {
        index_name: "textures.txt".to_string(),
    };
    extract_container(&container_path, &extracted, &extract_options, &no_progress).unwrap();
    assert!(extracted.join("textures.txt").is_file());

    let options = RepackOptions {
        index_name: "textures.txt".to_string(),
        ..RepackOptions::default()
    };
    let result = repack_container(
        &container_path,
        &extracted,
        &dir.path().join("out.bin"),
        &options,
        None,
        &no_progress,
    )
    .unwrap();
    assert_eq!(result.total, 3);
}

#[test]
fn test_batch_round_trip() {
    let dir = tempdir().unwrap();
    let first = sample_container();
    let second = [vec![0u8; 10], dds(b"DXT3", 0, 140, 6)].concat();
    fs::write(dir.path().join("first.pak"), &first).unwrap();
    fs::write(dir.path().join("second.pab.xen"), &second).unwrap();
    fs::write(dir.path().join("notes.txt"), b"no textures here").unwrap();

    let extracted = batch_extract(dir.path(), &ExtractOptions::default(), |_| {});
    assert_eq!(extracted.success_count, 2);
    assert_eq!(extracted.fail_count, 1);
    assert!(dir.path().join("first_extracted").join("dds_003.dds").is_file());
    assert!(dir.path().join("second.pab_extracted").join("dds_001.dds").is_file());

    let repacked = batch_repack(dir.path(), &RepackOptions::default(), None, |_| {});
    assert_eq!(repacked.success_count, 2, "{:?}", repacked.results);
    assert_eq!(fs::read(dir.path().join("first_repacked")).unwrap(), first);
    assert_eq!(fs::read(dir.path().join("second.pab_repacked")).unwrap(), second);
}
