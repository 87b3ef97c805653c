// File: src/persistence.rs
use crate::core::model::NaiveBayesModel;
use crate::error::Result;
use bincode::Options;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Upper bound on bytes read or written for one model file.
const MAX_MODEL_BYTES: u64 = 256 * 1024 * 1024;

// Fixed-width integers keep the layout of plain `bincode::serialize`.
fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
        .with_limit(MAX_MODEL_BYTES)
}

/// Writes the model to `path` atomically: the bytes go to a temporary file
/// in the same directory, which is then renamed over the target.
pub fn save_to_disk(model: &NaiveBayesModel, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        codec().serialize_into(&mut writer, model)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    info!(
        path = %path.display(),
        categories = model.categories().count(),
        vocabulary = model.vocabulary_size(),
        "saved model"
    );
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<NaiveBayesModel> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut model: NaiveBayesModel = codec().deserialize_from(reader)?;
    model.rebuild_index()?;

    info!(
        path = %path.display(),
        categories = model.categories().count(),
        vocabulary = model.vocabulary_size(),
        "loaded model"
    );
    Ok(model)
}
