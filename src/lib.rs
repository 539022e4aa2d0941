//! Pack a flat directory of text files into one JSON document, and back.
//!
//! A document is just an object of file name -> file contents:
//!
//! ```text
//! {
//!     "app.conf": "port = 8080\n",
//!     "hosts": "127.0.0.1 localhost\n"
//! }
//! ```
//!
//! Only the top level of a directory is packed. Subdirectories are skipped,
//! and every file has to be valid UTF-8 text.

pub mod cli;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod filemap;
pub mod logger;
pub mod scan;
pub mod transform;
pub mod write;

#[cfg(test)]
mod test_tools;

pub use dispatch::{run, Direction, ResultEnvelope, TransformRequest};
pub use error::{Error, Result};
pub use filemap::FileMap;
pub use logger::Logger;
