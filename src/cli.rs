use crate::dispatch::{run, TransformRequest};
use crate::document::to_canonical;
use crate::error::Result;
use crate::logger::{Logger, Policies};
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Pack a directory of text files into one JSON document, or unpack one.
///
/// A directory SRC is packed into a document, a file SRC is unpacked into a
/// directory. The report of what happened goes to stderr.
#[derive(Parser, Debug, PartialEq)]
#[command(name = "dirjson", version)]
pub struct Args {
    /// Document or directory to transform
    pub src: PathBuf,

    /// Where to put the result [default: SRC.dir.json when packing, the
    /// document's file name when unpacking]
    #[arg(long)]
    pub dest: Option<PathBuf>,

    /// Do everything except write to the filesystem
    #[arg(long)]
    pub dry: bool,

    /// Trace each step of the transform
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn request(&self) -> TransformRequest {
        let req = TransformRequest::new(&self.src).dry(self.dry);
        match &self.dest {
            Some(dest) => req.dest(dest),
            None => req,
        }
    }

    pub fn policies(&self) -> Policies {
        if self.verbose {
            Policies::verbose()
        } else if self.quiet {
            Policies::quiet()
        } else {
            Policies::default()
        }
    }
}

/// What we decide to do based on CLI arguments
#[derive(Debug)]
pub enum Behavior {
    Run(Args),
    /// Help, version, or bad arguments. Print the message and stop.
    Exit(clap::Error),
}

/// Parse a full argv, program name first.
pub fn parse<I, T>(args: I) -> Behavior
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => Behavior::Run(args),
        Err(e) => Behavior::Exit(e),
    }
}

pub fn execute(behavior: Behavior, log: &mut Logger<impl Write, impl Write>) -> ExitCode {
    ExitCode::from(status(behavior, log))
}

fn status(behavior: Behavior, log: &mut Logger<impl Write, impl Write>) -> u8 {
    match behavior {
        Behavior::Exit(e) => {
            let rendered = e.render().to_string();
            // The exit code still says what happened if the message can't be shown.
            let _ = if e.use_stderr() {
                write!(log.stderr, "{}", rendered)
            } else {
                write!(log.stdout, "{}", rendered)
            };
            u8::try_from(e.exit_code()).unwrap_or(2)
        }
        Behavior::Run(args) => {
            log.pol = args.policies();
            match execute_request(&args.request(), log) {
                Ok(()) => 0,
                Err(e) => {
                    // Nowhere left to report a failed write of the failure itself.
                    let _ = writeln!(log.error(), "Failed to execute: {}", e);
                    1
                }
            }
        }
    }
}

fn execute_request(req: &TransformRequest, log: &mut Logger<impl Write, impl Write>) -> Result<()> {
    let envelope = run(req, log)?;
    writeln!(log.report(), "{}", to_canonical(&envelope)?)?;
    Ok(())
}
