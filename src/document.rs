//! The on-disk document: a JSON object of file name -> contents.
//!
//! Output is canonical. Keys are sorted, indentation is four spaces, and
//! there is no trailing newline, so the same map always produces the same
//! bytes and documents diff cleanly.
//!
//! ```
//! use dirjson::document::{decode, encode};
//! use dirjson::FileMap;
//!
//! let mut map = FileMap::new();
//! map.insert("b.txt".into(), "second".into());
//! map.insert("a.txt".into(), "first\n".into());
//!
//! let doc = encode(&map)?;
//! assert_eq!(doc, "{\n    \"a.txt\": \"first\\n\",\n    \"b.txt\": \"second\"\n}");
//! assert_eq!(decode(&doc)?, map);
//! # Ok::<(), dirjson::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::filemap::FileMap;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

pub const INDENT: &[u8] = b"    ";

/// Render a FileMap as a document.
pub fn encode(map: &FileMap) -> Result<String> {
    to_canonical(map)
}

/// Parse a document into a FileMap.
///
/// Only a flat object of strings is accepted. Lists, numbers, nulls and
/// nested objects are all a Parse error, however valid the JSON is.
pub fn decode(doc: &str) -> Result<FileMap> {
    serde_json::from_str(doc).map_err(Error::Parse)
}

/// Render any serializable value the same way documents are rendered.
///
/// Going through `serde_json::Value` first sorts the keys of every object,
/// including ones that came from struct fields.
pub fn to_canonical<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(value).map_err(Error::Encode)?;
    let mut buf: Vec<u8> = vec![];
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser).map_err(Error::Encode)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
