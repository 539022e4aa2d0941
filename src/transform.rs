//! The two directions: directory -> document, and document -> directory.

use crate::document::{decode, encode};
use crate::error::{Error, Result};
use crate::filemap::FileMap;
use crate::logger::Logger;
use crate::scan::scan;
use crate::write::write;
use std::io::Write;
use std::path::Path;

/// Scan `dir` and save it as the document at `doc_path`.
///
/// The document is encoded even on a dry run, it just isn't saved.
pub fn pack(
    dir: impl AsRef<Path>,
    doc_path: impl AsRef<Path>,
    dry: bool,
    log: &mut Logger<impl Write, impl Write>,
) -> Result<FileMap> {
    let map = scan(dir, log)?;
    let doc = encode(&map)?;
    if !dry {
        let doc_path = doc_path.as_ref();
        std::fs::write(doc_path, doc).map_err(Error::write(doc_path))?;
    }
    Ok(map)
}

/// Load the document at `doc_path` and recreate its files under `dir`.
pub fn unpack(
    doc_path: impl AsRef<Path>,
    dir: impl AsRef<Path>,
    dry: bool,
    log: &mut Logger<impl Write, impl Write>,
) -> Result<FileMap> {
    let doc_path = doc_path.as_ref();
    let doc = std::fs::read_to_string(doc_path).map_err(Error::read(doc_path))?;
    let map = decode(&doc)?;
    let names: Vec<&String> = map.keys().collect();
    writeln!(log.debug(), "found={:?}", names)?;

    write(dir, &map, dry, log)?;
    Ok(map)
}
