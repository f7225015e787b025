use crate::app::error::CollectError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the document to `path`, truncating whatever was there.
pub fn write_document(document: &str, path: &Path) -> Result<(), CollectError> {
    let to_write_error = |source| CollectError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(document.as_bytes())
        .map_err(to_write_error)?;
    writer.flush().map_err(to_write_error)
}
