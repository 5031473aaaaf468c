//! Header inspection for embedded DDS resources
//!
//! Layout of the fields read here (byte offsets into the resource):
//!
//! | offset | size | field                 |
//! |--------|------|-----------------------|
//! | 0      | 4    | magic `"DDS "`        |
//! | 12     | 4    | height                |
//! | 16     | 4    | width                 |
//! | 20     | 4    | pitch or linear size  |
//! | 24     | 4    | depth                 |
//! | 28     | 4    | mipmap count          |
//! | 80     | 4    | pixel format flags    |
//! | 84     | 4    | `FourCC` format tag   |

use std::fmt;

use byteorder::{ByteOrder, LittleEndian};

/// Magic marker at the start of every DDS resource.
pub const DDS_MAGIC: &[u8; 4] = b"DDS ";

/// Size of the header, magic included.
pub const HEADER_SIZE: usize = 128;

/// Tag used when the `FourCC` field is blank (uncompressed formats).
pub const UNKNOWN_FORMAT: &str = "UNKNOWN";

const HEIGHT_OFFSET: usize = 12;
const WIDTH_OFFSET: usize = 16;
const PITCH_OFFSET: usize = 20;
const DEPTH_OFFSET: usize = 24;
const MIPMAP_COUNT_OFFSET: usize = 28;
const PIXEL_FLAGS_OFFSET: usize = 80;
const FOURCC_OFFSET: usize = 84;

/// Format tag of a resource header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatTag {
    /// No well-formed header was present, so no format can be reported.
    Undetermined,
    /// Decoded `FourCC`, or [`UNKNOWN_FORMAT`] when the field is blank.
    Known(String),
}

impl FormatTag {
    /// Whether a header was present to read the tag from.
    #[must_use]
    pub fn is_determined(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Undetermined => "undetermined",
            Self::Known(tag) => tag,
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`inspect_header`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Buffer is at least [`HEADER_SIZE`] bytes and starts with [`DDS_MAGIC`].
    pub is_valid: bool,
    pub format: FormatTag,
    /// Number of mip levels, never zero.
    pub mipmap_count: u32,
}

impl HeaderInfo {
    /// Sentinel reported for anything that is not a well-formed header.
    #[must_use]
    pub fn undetermined() -> Self {
        Self {
            is_valid: false,
            format: FormatTag::Undetermined,
            mipmap_count: 1,
        }
    }
}

/// Inspect the start of `buffer` as a DDS header.
///
/// Never fails: short buffers and buffers without the magic report
/// [`HeaderInfo::undetermined`].
#[must_use]
pub fn inspect_header(buffer: &[u8]) -> HeaderInfo {
    match DdsHeader::parse(buffer) {
        Some(header) => HeaderInfo {
            is_valid: true,
            format: FormatTag::Known(header.format_tag()),
            mipmap_count: header.effective_mipmap_count(),
        },
        None => HeaderInfo::undetermined(),
    }
}

/// Raw view of the header fields, used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsHeader {
    pub height: u32,
    pub width: u32,
    pub pitch_or_linear_size: u32,
    pub depth: u32,
    /// Mipmap count exactly as stored; zero means a single level.
    pub mipmap_count: u32,
    pub pixel_format_flags: u32,
    pub fourcc: [u8; 4],
}

impl DdsHeader {
    /// Parse the header at the start of `buffer`.
    ///
    /// Returns `None` if the buffer is shorter than [`HEADER_SIZE`] or does
    /// not start with [`DDS_MAGIC`].
    #[must_use]
    pub fn parse(buffer: &[u8]) -> Option<Self> {
        if !has_header(buffer) {
            return None;
        }

        let read = |offset: usize| LittleEndian::read_u32(&buffer[offset..offset + 4]);
        let mut fourcc = [0u8; 4];
        fourcc.copy_from_slice(&buffer[FOURCC_OFFSET..FOURCC_OFFSET + 4]);

        Some(Self {
            height: read(HEIGHT_OFFSET),
            width: read(WIDTH_OFFSET),
            pitch_or_linear_size: read(PITCH_OFFSET),
            depth: read(DEPTH_OFFSET),
            mipmap_count: read(MIPMAP_COUNT_OFFSET),
            pixel_format_flags: read(PIXEL_FLAGS_OFFSET),
            fourcc,
        })
    }

    /// Mipmap count with the implicit single level applied.
    #[must_use]
    pub fn effective_mipmap_count(&self) -> u32 {
        self.mipmap_count.max(1)
    }

    /// `FourCC` as text: non-ASCII bytes dropped, whitespace and control
    /// bytes trimmed, blank -> [`UNKNOWN_FORMAT`].
    #[must_use]
    pub fn format_tag(&self) -> String {
        let decoded: String = self
            .fourcc
            .iter()
            .filter(|b| b.is_ascii())
            .map(|&b| char::from(b))
            .collect();
        let trimmed =
            decoded.trim_matches(|c: char| c.is_ascii_whitespace() || c.is_ascii_control());

        if trimmed.is_empty() {
            UNKNOWN_FORMAT.to_string()
        } else {
            trimmed.to_string()
        }
    }
}

fn has_header(buffer: &[u8]) -> bool {
    buffer.len() >= HEADER_SIZE && buffer.starts_with(DDS_MAGIC)
}
