//! Write a FileMap out as files in a real directory.

use crate::error::{Error, Result};
use crate::filemap::{check_name, FileMap};
use crate::logger::Logger;
use std::fs::create_dir_all;
use std::io::Write;
use std::path::Path;

/// Write each entry of `map` to `dir/<name>`, creating `dir` if needed.
///
/// Every name is checked before anything touches the disk, dry run or not.
/// Existing files are overwritten. The first failure stops the rest; files
/// already written stay written.
pub fn write(
    dir: impl AsRef<Path>,
    map: &FileMap,
    dry: bool,
    log: &mut Logger<impl Write, impl Write>,
) -> Result<()> {
    let dir = dir.as_ref();
    for name in map.keys() {
        check_name(name)?;
    }

    if !dry && !dir.exists() {
        create_dir_all(dir).map_err(Error::write(dir))?;
        writeln!(log.debug(), "created='{}'", dir.display())?;
    }

    for (name, content) in map {
        writeln!(log.debug(), "process='{}'", name)?;
        if !dry {
            let dest = dir.join(name);
            std::fs::write(&dest, content).map_err(Error::write(&dest))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::logger::vec_logger;
    use crate::test_tools::*;

    #[test]
    fn write_creates_missing_parents() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let dest = tmp.path().join("several/levels/deep");
        let map = file_map(&[("a.txt", "alpha"), ("b.txt", "beta\n")]);

        let mut log = vec_logger();
        write(&dest, &map, false, &mut log)?;
        assert_eq!(std::fs::read_to_string(dest.join("a.txt"))?, "alpha");
        assert_eq!(std::fs::read_to_string(dest.join("b.txt"))?, "beta\n");
        assert_eq!(
            log.recorded().1,
            format!(
                "created='{}'\nprocess='a.txt'\nprocess='b.txt'\n",
                dest.display()
            )
        );
        Ok(())
    }

    #[test]
    fn write_overwrites_and_keeps_strangers() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        std::fs::write(tmp.path().join("a.txt"), "old and much longer")?;
        std::fs::write(tmp.path().join("other.txt"), "untouched")?;

        write(tmp.path(), &file_map(&[("a.txt", "new")]), false, &mut vec_logger())?;
        assert_eq!(std::fs::read_to_string(tmp.path().join("a.txt"))?, "new");
        assert_eq!(
            std::fs::read_to_string(tmp.path().join("other.txt"))?,
            "untouched"
        );
        Ok(())
    }

    #[test]
    fn write_dry_touches_nothing() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let dest = tmp.path().join("out");
        write(&dest, &file_map(&[("a.txt", "x")]), true, &mut vec_logger())?;
        assert!(!dest.exists());
        Ok(())
    }

    #[test]
    fn write_rejects_bad_names_before_writing() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let dest = tmp.path().join("out");
        let map = file_map(&[("a.txt", "fine"), ("../escape.txt", "not fine")]);

        for dry in [true, false] {
            assert!(matches!(
                write(&dest, &map, dry, &mut vec_logger()),
                Err(Error::InvalidFileName(n)) if n == "../escape.txt"
            ));
        }
        assert!(!dest.exists());
        assert!(!tmp.path().join("escape.txt").exists());
        Ok(())
    }

    #[test]
    fn write_into_a_file_fails() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "I am a file")?;

        assert!(matches!(
            write(&blocker, &file_map(&[("a.txt", "x")]), false, &mut vec_logger()),
            Err(Error::Write { .. })
        ));
        Ok(())
    }

    #[test]
    fn write_then_scan() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        write(tmp.path(), &fixture_map(), false, &mut vec_logger())?;
        assert_eq!(
            crate::scan::scan(tmp.path(), &mut vec_logger())?,
            fixture_map()
        );
        Ok(())
    }
}
