use crate::error::Result;
use archview_model::Model;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `model` as pretty-printed JSON to `path`.
///
/// Failures are returned to the caller, never swallowed; a failed write
/// leaves no usable output file behind.
pub fn write_model(model: &Model, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    log::info!("writing projected model to {}", path.display());

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, model)?;
    writer.flush()?;

    Ok(())
}
