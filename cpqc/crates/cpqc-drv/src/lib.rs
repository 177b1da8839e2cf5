//! cpqc-drv - Compiler driver.
//!
//! The driver is the only component that touches the outside world. It
//! validates the command line, reads the source file, runs the
//! scanner/parser core, and - only when the diagnostic handler is free of
//! errors - writes the QUAD listing with the trailing signature line.
//!
//! ```text
//! source.ou --> [scan + parse + emit] --> source.qud
//!                       |
//!                       v
//!               diagnostics (stderr)
//! ```
//!
//! Any terminal condition (bad arguments, missing input, a compilation
//! with errors) surfaces as a single CRITICAL diagnostic of the form
//! `CRITICAL: <reason>, not creating .qud file`, and no output file is
//! produced.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use thiserror::Error;

use cpqc_par::Parser;
use cpqc_qud::QuadProgram;
use cpqc_util::Handler;

/// Required suffix of input files.
pub const INPUT_SUFFIX: &str = ".ou";

/// Suffix of generated output files.
pub const OUTPUT_SUFFIX: &str = ".qud";

/// Compiler signature: printed as a banner at startup and appended as the
/// final line of every generated listing.
pub const SIGNATURE: &str = concat!("cpqc v", env!("CARGO_PKG_VERSION"));

/// Terminal driver conditions.
///
/// The `Display` strings double as the CRITICAL reasons shown to the
/// user, so they are worded the way the diagnostic stream expects.
#[derive(Debug, Error)]
pub enum DriverError {
    /// No command line argument at all.
    #[error("no file was given")]
    NoInput,

    /// More than one command line argument.
    #[error("too many arguments")]
    TooManyArguments,

    /// The input path does not end in `.ou`.
    #[error("wrong file type")]
    WrongFileType,

    /// The `.qud` sibling already exists; it is never overwritten.
    #[error("output file already exists")]
    OutputFileExists,

    /// The input path does not exist.
    #[error("input file doesn't exist")]
    InputFileMissing,

    /// The scanner or parser reported at least one error.
    #[error("encountered errors during compilation")]
    CompilationFailed,

    /// An unexpected I/O failure, with path context attached.
    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

/// Compilation configuration: the validated input and output paths.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the `.ou` source file.
    pub input: PathBuf,

    /// Path of the `.qud` listing to create.
    pub output: PathBuf,
}

impl Config {
    /// Validates the command line.
    ///
    /// Checks run in a fixed order: argument count, the `.ou` suffix,
    /// absence of the `.qud` sibling, existence of the input. The first
    /// failed check decides the reported reason.
    pub fn from_args(args: &[String]) -> Result<Self, DriverError> {
        let input = match args {
            [] => return Err(DriverError::NoInput),
            [one] => one.as_str(),
            _ => return Err(DriverError::TooManyArguments),
        };

        let stem = input
            .strip_suffix(INPUT_SUFFIX)
            .ok_or(DriverError::WrongFileType)?;
        let output = PathBuf::from(format!("{}{}", stem, OUTPUT_SUFFIX));

        if output.exists() {
            return Err(DriverError::OutputFileExists);
        }
        if !Path::new(input).exists() {
            return Err(DriverError::InputFileMissing);
        }

        Ok(Self {
            input: PathBuf::from(input),
            output,
        })
    }
}

/// One compiler invocation: configuration plus the shared diagnostic sink.
pub struct Session {
    /// Validated paths.
    pub config: Config,

    /// Diagnostic sink shared with the scanner and parser.
    pub handler: Handler,
}

impl Session {
    /// Creates a new session.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            handler: Handler::new(),
        }
    }

    /// Runs the pipeline: read, translate, gate on the error flag, write.
    ///
    /// The output file is written only when no `ERROR` was recorded; a
    /// failed compilation leaves the filesystem untouched.
    pub fn compile(&mut self) -> Result<(), DriverError> {
        let source = fs::read_to_string(&self.config.input)
            .with_context(|| format!("failed to read {}", self.config.input.display()))?;

        let program = translate(&source, &self.handler);

        if self.handler.has_errors() {
            return Err(DriverError::CompilationFailed);
        }

        write_listing(&self.config.output, program.code())?;
        Ok(())
    }
}

/// Runs the scanner and parser over `source`.
///
/// This is the whole single-threaded core: no I/O happens here beyond
/// diagnostics recorded on the handler, and the returned listing always
/// ends in `HALT`.
pub fn translate(source: &str, handler: &Handler) -> QuadProgram {
    Parser::new(source, handler).parse_program()
}

/// Writes the listing to `path`, one instruction per line, with the
/// signature as the final line.
fn write_listing(path: &Path, listing: &[String]) -> Result<(), DriverError> {
    let mut text = String::new();
    for line in listing {
        text.push_str(line);
        text.push('\n');
    }
    text.push_str(SIGNATURE);
    text.push('\n');

    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Entry point for the `cpqc` binary.
pub fn main() -> Result<(), DriverError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    run(&args, &mut io::stderr())
}

/// Driver core with the argument list and diagnostic stream passed in.
///
/// Prints the signature banner first, then runs the pipeline. Every
/// collected diagnostic - including the CRITICAL for a terminal condition
/// - is rendered to `err_out` in emission order before returning.
pub fn run(args: &[String], err_out: &mut dyn Write) -> Result<(), DriverError> {
    let _ = writeln!(err_out, "{}", SIGNATURE);

    match Config::from_args(args) {
        Ok(config) => {
            let mut session = Session::new(config);
            let result = session.compile();
            if let Err(error) = &result {
                session
                    .handler
                    .critical(format!("{}, not creating {} file", error, OUTPUT_SUFFIX));
            }
            let _ = session.handler.render(err_out);
            result
        },
        Err(error) => {
            let handler = Handler::new();
            handler.critical(format!("{}, not creating {} file", error, OUTPUT_SUFFIX));
            let _ = handler.render(err_out);
            Err(error)
        },
    }
}
