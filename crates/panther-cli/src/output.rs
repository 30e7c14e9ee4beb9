//! Result persistence
//!
//! Writes JSON with 4-space indentation. The whole document is serialized
//! before the target is opened, so a serialization failure never touches an
//! existing output file. The target is then written in place: its
//! permissions, owner and any symlink at the path are kept, and a new file
//! gets the usual umask-derived mode.

use crate::error::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;
use tracing::debug;

const INDENT: &[u8] = b"    ";

/// Render a value as 4-space indented JSON
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write a value as indented JSON to `path`, replacing any existing content
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let content = to_json_pretty(value)?;

    std::fs::write(path, &content)?;

    debug!(path = %path.display(), bytes = content.len(), "Wrote output file");
    Ok(())
}
