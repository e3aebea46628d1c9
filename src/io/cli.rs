//! Command-line entry: argument parsing, startup checks and the save at exit

use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::path::Path;

use clap::Parser;
use clap::error::ErrorKind;
use log::LevelFilter;

use crate::io::configuration::{CONFIRMATION_TOKEN, PROGRAM_TITLE};
use crate::io::console::Console;
use crate::io::error::{FormatError, PointyboxError, Result};
use crate::io::image::GuideImage;
use crate::io::logging::level_for;
use crate::session::editor::EditorSession;
use crate::session::mode::LoadStatus;

#[derive(Parser, Debug)]
#[command(name = "boxedit")]
#[command(
    author,
    version,
    about = "Edit collision boxes, light points and occlusion edges of a pointybox file"
)]
/// Command-line arguments for the editor
pub struct Cli {
    /// Pointybox file to edit, written back on exit
    #[arg(value_name = "PB_FILE")]
    pub pointybox: std::path::PathBuf,

    /// Image to trace shapes over
    #[arg(value_name = "GUIDE_IMAGE")]
    pub guide: Option<std::path::PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Log debug details
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Log level selected by the verbosity flags
    pub const fn log_level(&self) -> LevelFilter {
        level_for(self.quiet, self.verbose)
    }
}

/// What the process should do after argument parsing
#[derive(Debug)]
pub enum Invocation {
    /// Start the editor
    Run(Cli),
    /// Print this text and exit successfully
    Usage(String),
}

/// One-line usage summary
pub fn usage(program: &str) -> String {
    format!("{PROGRAM_TITLE} pointybox editor\nUsage: {program} pb_file [guide_file]")
}

/// Parse arguments; wrong argument counts turn into a usage message
pub fn parse_args<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Invocation::Run(cli),
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Invocation::Usage(error.to_string())
        }
        Err(error) => {
            log::debug!("Argument error: {error}");
            Invocation::Usage(usage("boxedit"))
        }
    }
}

/// Ask whether an unreadable pointybox file may be replaced
///
/// Only a first word of exactly `YES` confirms; anything else, including end
/// of input, declines.
///
/// # Errors
///
/// Returns an error if the prompt cannot be written or the answer read.
pub fn confirm_replacement<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    path: &Path,
    problem: &FormatError,
) -> Result<bool> {
    writeln!(
        output,
        "Error: {} is not a valid pointybox file ({problem})! By proceeding, this file will be replaced! \
         Proceed? Anything which isn't exactly {CONFIRMATION_TOKEN} will exit the program.",
        path.display()
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.split_whitespace().next() == Some(CONFIRMATION_TOKEN))
}

/// Runs one editing session from startup to the final save
pub struct EditorApp {
    cli: Cli,
}

impl EditorApp {
    /// Create an app for the parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load, edit through the console, then save
    ///
    /// The guide image is checked first so a bad image aborts before any
    /// prompt. An invalid pointybox file needs confirmation before the
    /// session continues on an empty model.
    ///
    /// # Errors
    ///
    /// Returns an error if the guide image cannot be loaded, the user declines
    /// to replace an invalid file, console I/O fails, or the final save fails.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        let guide = self
            .cli
            .guide
            .as_deref()
            .map(GuideImage::open)
            .transpose()?;

        let path = self.cli.pointybox.as_path();
        let mut session = EditorSession::default();
        if let LoadStatus::UsingDefaults(problem) = session.load(path) {
            if !confirm_replacement(input, output, path, &problem)? {
                return Err(PointyboxError::Aborted {
                    path: path.to_path_buf(),
                });
            }
            log::info!("Starting {} from an empty model", path.display());
        }

        let mut console = Console::new(session, guide);
        console.run(input, output)?;
        console.into_session().save(path)
    }
}
