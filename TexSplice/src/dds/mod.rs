//! DDS resource headers
//!
//! Only the fixed 128-byte header at the start of each embedded resource is
//! ever parsed. Everything else in a container stays opaque.

mod header;

pub use header::{
    DdsHeader, FormatTag, HeaderInfo, inspect_header, DDS_MAGIC, HEADER_SIZE, UNKNOWN_FORMAT,
};
