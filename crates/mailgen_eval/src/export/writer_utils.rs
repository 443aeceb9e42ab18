use std::fs::File;
use std::path::{Path, PathBuf};

pub(crate) fn create_output_file(
    path: impl AsRef<Path>,
) -> Result<File, Box<dyn std::error::Error>> {
    Ok(File::create(path)?)
}

pub(crate) fn ensure_directory(
    path: impl AsRef<Path>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    std::fs::create_dir_all(path)?;
    Ok(path.to_path_buf())
}
