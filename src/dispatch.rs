//! Decide which way to go based on what the source path is.
//!
//! A file is taken to be a document and gets unpacked. A directory gets
//! packed. Without an explicit destination, one is made up from the source:
//!
//! ```
//! use dirjson::dispatch::{default_dest, Direction};
//! use std::path::Path;
//!
//! assert_eq!(default_dest(Direction::Pack, "conf/foo"), Path::new("conf/foo.dir.json"));
//! assert_eq!(default_dest(Direction::Unpack, "conf/foo.dir.json"), Path::new("foo.dir.json"));
//! ```

use crate::error::{Error, Result};
use crate::filemap::FileMap;
use crate::logger::Logger;
use crate::transform::{pack, unpack};
use serde::{Serialize, Serializer};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use strum_macros::{EnumIter, IntoStaticStr};

pub const DOC_SUFFIX: &str = ".dir.json";

#[derive(Copy, Clone, Debug, PartialEq, Serialize, EnumIter, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Directory -> document.
    Pack,
    /// Document -> directory.
    Unpack,
}

/// One pending run: where from, where to, and whether to touch the disk.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformRequest {
    pub src: PathBuf,
    pub dest: Option<PathBuf>,
    pub dry: bool,
}

impl TransformRequest {
    pub fn new(src: impl Into<PathBuf>) -> Self {
        Self {
            src: src.into(),
            dest: None,
            dry: false,
        }
    }

    pub fn dest(mut self, dest: impl Into<PathBuf>) -> Self {
        self.dest = Some(dest.into());
        self
    }

    pub fn dry(mut self, dry: bool) -> Self {
        self.dry = dry;
        self
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Meta {
    pub kind: &'static str,
    pub op: Direction,
    #[serde(serialize_with = "lossy_path")]
    pub pwd: PathBuf,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Data {
    pub info: FileMap,
    #[serde(serialize_with = "lossy_path")]
    pub dest: PathBuf,
}

// The filesystem work is already done by the time we report it, so a path
// that isn't UTF-8 must not fail the report.
fn lossy_path<S: Serializer>(path: &Path, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(&path.to_string_lossy())
}

/// What a run did, for reporting. Never written anywhere but the log.
#[derive(Debug, PartialEq, Serialize)]
pub struct ResultEnvelope {
    #[serde(rename = "_meta")]
    pub meta: Meta,
    pub data: Data,
}

/// Which direction `src` calls for, or why it can't be used at all.
pub fn inspect(src: impl AsRef<Path>) -> Result<Direction> {
    let src = src.as_ref();
    if !src.exists() {
        Err(Error::NotFound(src.into()))
    } else if src.is_file() {
        Ok(Direction::Unpack)
    } else if src.is_dir() {
        Ok(Direction::Pack)
    } else {
        Err(Error::InvalidInput(src.into()))
    }
}

/// Destination to use when the caller didn't give one.
///
/// Packing appends `.dir.json` to the directory path. Unpacking uses the
/// document's own file name, unchanged, as a directory in the working
/// directory: `foo.dir.json` unpacks into a directory called `foo.dir.json`.
pub fn default_dest(direction: Direction, src: impl AsRef<Path>) -> PathBuf {
    let src = src.as_ref();
    match direction {
        Direction::Pack => {
            let mut s: OsString = trim_trailing_separators(src).into_os_string();
            s.push(DOC_SUFFIX);
            s.into()
        }
        Direction::Unpack => src
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| src.into()),
    }
}

// "foo/" should pack into "foo.dir.json", not "foo/.dir.json". Rebuilding
// from components drops trailing separators whatever the encoding.
fn trim_trailing_separators(p: &Path) -> PathBuf {
    p.components().collect()
}

/// Run a request to completion.
pub fn run(
    req: &TransformRequest,
    log: &mut Logger<impl Write, impl Write>,
) -> Result<ResultEnvelope> {
    let pwd = std::env::current_dir().map_err(Error::WorkingDir)?;
    let op = inspect(&req.src)?;
    let dest = req
        .dest
        .clone()
        .unwrap_or_else(|| default_dest(op, &req.src));
    writeln!(
        log.debug(),
        "op='{}' src='{}' dest='{}' dry={}",
        <&str>::from(op),
        req.src.display(),
        dest.display(),
        req.dry
    )?;

    let info = match op {
        Direction::Pack => pack(&req.src, &dest, req.dry, log)?,
        Direction::Unpack => unpack(&req.src, &dest, req.dry, log)?,
    };

    Ok(ResultEnvelope {
        meta: Meta {
            kind: "pack_info",
            op,
            pwd,
        },
        data: Data { info, dest },
    })
}
