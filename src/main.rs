use dirjson::cli;
use dirjson::logger::Logger;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut logger = Logger::new_real();
    let behavior = cli::parse(std::env::args_os());
    cli::execute(behavior, &mut logger)
}
