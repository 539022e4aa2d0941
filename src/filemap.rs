use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// File name -> file contents, for the top level of one directory.
///
/// A BTreeMap keeps keys sorted, which is what makes encoding deterministic.
pub type FileMap = BTreeMap<String, String>;

/// Check that a key can be used as a file directly inside a directory.
///
/// Rejects anything that would land somewhere other than `dir/name`.
pub fn check_name(name: &str) -> Result<()> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains(std::path::MAIN_SEPARATOR)
        || name.contains('\0');
    if bad {
        Err(Error::InvalidFileName(name.to_owned()))
    } else {
        Ok(())
    }
}
