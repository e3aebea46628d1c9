//! CLI entry point for the pointybox editor

use std::io::Write;
use std::process::ExitCode;

use boxedit::io::cli::{EditorApp, Invocation, parse_args};
use boxedit::io::logging;

fn main() -> ExitCode {
    let cli = match parse_args(std::env::args_os()) {
        Invocation::Run(cli) => cli,
        Invocation::Usage(text) => return report(std::io::stdout(), &text, ExitCode::SUCCESS),
    };

    if let Err(error) = logging::init(cli.log_level()) {
        return report(std::io::stderr(), &error.to_string(), ExitCode::FAILURE);
    }

    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();
    match EditorApp::new(cli).run(&mut input, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

/// Print a message outside the logger, failing if it cannot be written
fn report(mut out: impl Write, text: &str, code: ExitCode) -> ExitCode {
    match writeln!(out, "{text}") {
        Ok(()) => code,
        Err(_) => ExitCode::FAILURE,
    }
}
