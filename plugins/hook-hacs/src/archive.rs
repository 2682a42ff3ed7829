//! Zip archive creation.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::HacsResult;

/// Zips the contents of `source_dir` into `output_path`.
///
/// Entries are stored relative to `source_dir`, so the directory's own name
/// never appears in the archive. The archive is assembled in a temporary
/// file next to `output_path` and only moved into place once complete; on
/// failure no file is left at `output_path`.
///
/// Symbolic links are stored as links, not followed, so a link to a
/// directory or a dangling link is archived like any other entry.
///
/// Returns the number of files and links added.
///
/// # Errors
///
/// Returns an error if the directory cannot be walked, a file cannot be
/// read, or the archive cannot be written.
pub fn zip_directory(source_dir: &Path, output_path: &Path) -> HacsResult<usize> {
    let output_dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let staging = NamedTempFile::new_in(output_dir)?;
    let skip = [output_path.to_path_buf(), staging.path().to_path_buf()];

    let mut archive = ZipWriter::new(staging);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    let mut files = 0;

    for entry in WalkDir::new(source_dir)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();

        if skip.iter().any(|s| same_path(s, path)) {
            continue;
        }

        let name = entry_name(path.strip_prefix(source_dir).unwrap_or(path));
        debug!("archiving: {name}");

        let file_type = entry.file_type();
        if file_type.is_symlink() {
            let target = fs::read_link(path)?;
            archive.add_symlink(name, target.to_string_lossy().into_owned(), options)?;
            files += 1;
        } else if file_type.is_dir() {
            archive.add_directory(name, options)?;
        } else {
            archive.start_file(name, options)?;
            let mut file = File::open(path)?;
            io::copy(&mut file, &mut archive)?;
            files += 1;
        }
    }

    let mut staging = archive.finish()?;
    staging.flush()?;
    staging.persist(output_path).map_err(|e| e.error)?;

    Ok(files)
}

/// Archive entry name: `/`-separated regardless of platform.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn same_path(a: &Path, b: &Path) -> bool {
    a == b || canonical(a).is_some_and(|a| canonical(b).is_some_and(|b| a == b))
}

fn canonical(path: &Path) -> Option<PathBuf> {
    path.canonicalize().ok()
}
