//! cpqc-util - Foundation types for the CPQ compiler.
//!
//! This crate holds the pieces every phase of the compiler shares:
//!
//! - [`diagnostic`] - the diagnostic sink (`Handler`) and the three severity
//!   levels the compiler reports at (`WARNING`, `ERROR`, `CRITICAL`).
//! - [`scalar`] - the two CPL scalar types and the promotion rule between
//!   them.
//!
//! The scanner and parser never print anything themselves; they record
//! diagnostics on a shared [`Handler`] and the driver decides at the end
//! whether the compilation was clean enough to produce output.

pub mod diagnostic;
pub mod scalar;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use scalar::ScalarType;

// Fast hash map used for the symbol table.
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
