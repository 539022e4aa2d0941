//! Read the top level of a real directory into a FileMap.

use crate::error::{Error, Result};
use crate::filemap::FileMap;
use crate::logger::Logger;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Read every regular file directly under `dir`.
///
/// Not recursive. Subdirectories, and anything else that isn't a regular
/// file once symlinks are followed, get a `skip=` notice and are left out.
/// Listing order is whatever the OS gives us; the FileMap sorts it.
pub fn scan(dir: impl AsRef<Path>, log: &mut Logger<impl Write, impl Write>) -> Result<FileMap> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::NotFound(dir.into()));
    }

    let mut entries: Vec<(String, PathBuf)> = vec![];
    for entry in std::fs::read_dir(dir).map_err(Error::read(dir))? {
        let entry = entry.map_err(Error::read(dir))?;
        let name = entry
            .file_name()
            .into_string()
            .map_err(|os| Error::InvalidFileName(os.to_string_lossy().into_owned()))?;
        entries.push((name, entry.path()));
    }
    let names: Vec<&str> = entries.iter().map(|(name, _)| name.as_str()).collect();
    writeln!(log.debug(), "found={:?}", names)?;

    let mut map = FileMap::new();
    for (name, path) in entries {
        writeln!(log.debug(), "process='{}'", path.display())?;
        if is_regular_file(&path) {
            let content = std::fs::read_to_string(&path).map_err(Error::read(&path))?;
            writeln!(log.debug(), "add='{}'", name)?;
            map.insert(name, content);
        } else {
            writeln!(log.notice(), "skip='{}'", path.display())?;
        }
    }
    Ok(map)
}

fn is_regular_file(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}
