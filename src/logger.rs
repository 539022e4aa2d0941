//! Diagnostics for the transforms, routed by channel.
//!
//! There is no global logger. `main` builds one around the real stdout and
//! stderr, and everything that wants to say something takes it by `&mut`.
//! Tests build one around two `Vec<u8>` buffers instead and inspect what
//! was written.
//!
//! ```
//! use dirjson::logger::{Logger, Policy};
//! use std::io::Write;
//!
//! let mut log = Logger::new(Vec::<u8>::new(), Vec::<u8>::new());
//! log.pol.debug = Policy::Stdout;
//! writeln!(log.debug(), "found={:?}", ["a.txt"])?;
//! assert_eq!(log.recorded(), ("found=[\"a.txt\"]\n".to_owned(), String::new()));
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, Result, Write};

/// Controls where logs for a specific channel are routed to
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Policy {
    Stdout,
    Stderr,
    Silent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Policies {
    /// Step-by-step trace of a transform (`found=`, `process=`, `add=`...).
    pub debug: Policy,
    /// Things we chose not to do, like skipping a subdirectory.
    pub notice: Policy,
    /// The final envelope describing what was packed or unpacked.
    pub report: Policy,
    /// Why the process is about to exit non-zero.
    pub error: Policy,
}

impl Default for Policies {
    fn default() -> Self {
        Self {
            debug: Policy::Silent,
            notice: Policy::Stderr,
            report: Policy::Stderr,
            error: Policy::Stderr,
        }
    }
}

impl Policies {
    pub fn verbose() -> Self {
        Self {
            debug: Policy::Stderr,
            ..Self::default()
        }
    }

    pub fn quiet() -> Self {
        Self {
            notice: Policy::Silent,
            report: Policy::Silent,
            ..Self::default()
        }
    }

    pub fn silent() -> Self {
        Self {
            debug: Policy::Silent,
            notice: Policy::Silent,
            report: Policy::Silent,
            error: Policy::Silent,
        }
    }
}

pub enum LogWriter<'a, OUT, ERR>
where
    OUT: Write,
    ERR: Write,
{
    Stdout(&'a mut OUT),
    Stderr(&'a mut ERR),
    Silent,
}
impl<'a, OUT, ERR> Write for LogWriter<'a, OUT, ERR>
where
    OUT: Write,
    ERR: Write,
{
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        match self {
            Self::Stdout(w) => w.write(bytes),
            Self::Stderr(w) => w.write(bytes),
            Self::Silent => Ok(bytes.len()),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::Stderr(w) => w.flush(),
            Self::Silent => Ok(()),
        }
    }
}

pub struct Logger<OUT, ERR>
where
    OUT: Write,
    ERR: Write,
{
    pub stdout: OUT,
    pub stderr: ERR,
    pub pol: Policies,
}

impl<OUT, ERR> Logger<OUT, ERR>
where
    OUT: Write,
    ERR: Write,
{
    pub fn new(stdout: OUT, stderr: ERR) -> Self {
        Self {
            stdout,
            stderr,
            pol: Policies::default(),
        }
    }

    pub fn with_policies(mut self, pol: Policies) -> Self {
        self.pol = pol;
        self
    }

    fn lw_for(&mut self, pol: Policy) -> LogWriter<OUT, ERR> {
        match pol {
            Policy::Stdout => LogWriter::Stdout(&mut self.stdout),
            Policy::Stderr => LogWriter::Stderr(&mut self.stderr),
            Policy::Silent => LogWriter::Silent,
        }
    }

    pub fn debug(&mut self) -> LogWriter<OUT, ERR> {
        self.lw_for(self.pol.debug)
    }
    pub fn notice(&mut self) -> LogWriter<OUT, ERR> {
        self.lw_for(self.pol.notice)
    }
    pub fn report(&mut self) -> LogWriter<OUT, ERR> {
        self.lw_for(self.pol.report)
    }
    pub fn error(&mut self) -> LogWriter<OUT, ERR> {
        self.lw_for(self.pol.error)
    }
}

impl Logger<io::Stdout, io::Stderr> {
    pub fn new_real() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl Logger<io::Sink, io::Sink> {
    /// For callers that don't care about diagnostics at all.
    pub fn new_silent() -> Self {
        Self::new(io::sink(), io::sink()).with_policies(Policies::silent())
    }
}

impl Logger<Vec<u8>, Vec<u8>> {
    /// Everything written so far, as (stdout, stderr).
    pub fn recorded(&self) -> (String, String) {
        (
            String::from_utf8_lossy(&self.stdout).into_owned(),
            String::from_utf8_lossy(&self.stderr).into_owned(),
        )
    }
}

/// Logger that records into memory, with every channel enabled.
#[cfg(test)]
pub fn vec_logger() -> Logger<Vec<u8>, Vec<u8>> {
    Logger::new(vec![], vec![]).with_policies(Policies::verbose())
}

#[cfg(test)]
mod test {
    use super::*;

    fn recorder() -> Logger<Vec<u8>, Vec<u8>> {
        Logger::new(vec![], vec![])
    }

    #[test]
    fn test_routing() -> Result<()> {
        let mut log = recorder();
        log.pol.debug = Policy::Stdout;
        write!(log.debug(), "Writing to {}...", "stdout")?;
        write!(log.notice(), "Writing to {}...", "stderr")?;
        assert_eq!(
            log.recorded(),
            ("Writing to stdout...".into(), "Writing to stderr...".into())
        );
        Ok(())
    }

    #[test]
    fn test_debug_silent_by_default() -> Result<()> {
        let mut log = recorder();
        writeln!(log.debug(), "found=[]")?;
        assert_eq!(log.recorded(), (String::new(), String::new()));
        Ok(())
    }

    #[test]
    fn test_verbose() -> Result<()> {
        let mut log = recorder().with_policies(Policies::verbose());
        writeln!(log.debug(), "add='a.txt'")?;
        assert_eq!(log.recorded(), (String::new(), "add='a.txt'\n".into()));
        Ok(())
    }

    #[test]
    fn test_quiet() -> Result<()> {
        let mut log = recorder().with_policies(Policies::quiet());
        writeln!(log.notice(), "skip='sub'")?;
        writeln!(log.report(), "{{}}")?;
        writeln!(log.error(), "Failed to execute: nope")?;
        assert_eq!(
            log.recorded(),
            (String::new(), "Failed to execute: nope\n".into())
        );
        Ok(())
    }

    #[test]
    fn test_silent() -> Result<()> {
        let mut log = Logger::new_silent();
        writeln!(log.error(), "nobody hears this")?;
        writeln!(log.report(), "or this")?;
        Ok(())
    }
}
