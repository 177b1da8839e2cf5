//! The symbol table: declared identifiers and their scalar types.

use cpqc_util::{FxHashMap, ScalarType};
use thiserror::Error;

/// Error type for symbol table operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymbolError {
    /// The identifier was declared before.
    #[error("{0} already defined")]
    AlreadyDefined(String),
}

/// A flat mapping from identifier name to scalar type.
///
/// Populated only by declarations; queried, never mutated, by expressions
/// and statements. CPL has a single global scope, so there is no nesting.
///
/// # Examples
///
/// ```
/// use cpqc_qud::SymbolTable;
/// use cpqc_util::ScalarType;
///
/// let mut symbols = SymbolTable::new();
/// symbols.declare("a", ScalarType::Float).unwrap();
///
/// assert_eq!(symbols.lookup("a"), Some(ScalarType::Float));
/// assert_eq!(symbols.lookup("b"), None);
/// assert!(symbols.declare("a", ScalarType::Int).is_err());
/// ```
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: FxHashMap<String, ScalarType>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an identifier with the given type.
    ///
    /// A duplicate declaration is rejected and the existing entry is left
    /// unchanged.
    pub fn declare(&mut self, name: &str, ty: ScalarType) -> Result<(), SymbolError> {
        if self.entries.contains_key(name) {
            return Err(SymbolError::AlreadyDefined(name.to_string()));
        }
        self.entries.insert(name.to_string(), ty);
        Ok(())
    }

    /// Looks up the declared type of an identifier.
    pub fn lookup(&self, name: &str) -> Option<ScalarType> {
        self.entries.get(name).copied()
    }

    /// Returns true if the identifier is declared.
    ///
    /// Also used by the temporary allocator to keep `tN` names disjoint
    /// from declared identifiers.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of declared identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
