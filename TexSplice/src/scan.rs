//! Signature scanning
//!
//! Containers are treated as unstructured bytes. A resource starts wherever
//! the DDS magic occurs; there is no length field, so a magic that happens to
//! appear inside a payload also starts a new resource.

use crate::dds::DDS_MAGIC;

/// Find every DDS magic in `data`, in ascending order.
#[must_use]
pub fn scan(data: &[u8]) -> Vec<usize> {
    find_all(data, DDS_MAGIC)
}

/// Non-overlapping occurrences of `needle`, left to right.
///
/// Each search resumes just past the previous match.
#[must_use]
pub fn find_all(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
    let mut offsets = Vec::new();
    if needle.is_empty() {
        return offsets;
    }

    let mut start = 0;
    while let Some(pos) = find_from(haystack, needle, start) {
        offsets.push(pos);
        start = pos + needle.len();
    }
    offsets
}

fn find_from(haystack: &[u8], needle: &[u8], start: usize) -> Option<usize> {
    haystack
        .get(start..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| start + pos)
}
