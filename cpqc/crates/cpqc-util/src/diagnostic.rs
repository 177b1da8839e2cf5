//! Diagnostic reporting infrastructure.
//!
//! Every message the compiler produces - lexical errors, semantic errors,
//! redundant-cast warnings, driver-level criticals - flows through a single
//! [`Handler`]. The handler is an append-only sink: phases record
//! diagnostics as ordinary side effects and keep going, and the driver
//! renders the collected list to stderr once the run is over.
//!
//! Rendered form is line-oriented:
//!
//! ```text
//! ERROR: lexical error - bad character @ at line 3
//! WARNING: redundant cast to int at line 7
//! CRITICAL: wrong file type, not creating .qud file
//! ```
//!
//! The `at line N` suffix is omitted when no source line applies.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::io::{self, Write};

/// Diagnostic severity level.
///
/// # Examples
///
/// ```
/// use cpqc_util::Level;
///
/// assert_eq!(format!("{}", Level::Error), "ERROR");
/// assert!(Level::Error.is_error());
/// assert!(!Level::Warning.is_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Suspicious but valid code; never blocks output generation.
    Warning,
    /// A lexical or semantic error. Parsing continues, but the driver
    /// refuses to write an output file.
    Error,
    /// A driver-level condition that prevents compilation entirely.
    Critical,
}

impl Level {
    /// Returns true if this level blocks output generation.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error | Level::Critical)
    }

    /// Returns the canonical name for this level.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single diagnostic message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub level: Level,
    /// Main diagnostic message.
    pub message: String,
    /// Source line the diagnostic refers to, if any.
    pub line: Option<u32>,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(level: Level, message: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            level,
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;
        if let Some(line) = self.line {
            write!(f, " at line {}", line)?;
        }
        Ok(())
    }
}

/// The shared diagnostic sink.
///
/// The scanner, the parser, and the driver all hold `&Handler` and record
/// diagnostics through it; interior mutability keeps the borrow story
/// simple while the parser drives the scanner. Diagnostics are kept in
/// emission order.
///
/// # Examples
///
/// ```
/// use cpqc_util::Handler;
///
/// let handler = Handler::new();
/// handler.error("x not in symbol table", Some(4));
/// handler.warning("redundant cast to int", Some(9));
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.diagnostics().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics, in emission order.
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Creates a new, empty handler.
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Records an `ERROR` diagnostic.
    pub fn error(&self, message: impl Into<String>, line: Option<u32>) {
        self.emit(Diagnostic::new(Level::Error, message, line));
    }

    /// Records a `WARNING` diagnostic. Warnings never set the error flag.
    pub fn warning(&self, message: impl Into<String>, line: Option<u32>) {
        self.emit(Diagnostic::new(Level::Warning, message, line));
    }

    /// Records a `CRITICAL` diagnostic. Criticals carry no source line.
    pub fn critical(&self, message: impl Into<String>) {
        self.emit(Diagnostic::new(Level::Critical, message, None));
    }

    /// Records a pre-built diagnostic.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Returns true if any `ERROR` or `CRITICAL` has been recorded.
    ///
    /// This is the flag the driver checks before writing the output file.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level.is_error())
    }

    /// Returns the number of recorded diagnostics of the given level.
    pub fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Borrows the collected diagnostics, in emission order.
    pub fn diagnostics(&self) -> Ref<'_, Vec<Diagnostic>> {
        self.diagnostics.borrow()
    }

    /// Renders every collected diagnostic to the given writer, one per line.
    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        for diagnostic in self.diagnostics.borrow().iter() {
            writeln!(out, "{}", diagnostic)?;
        }
        Ok(())
    }
}
