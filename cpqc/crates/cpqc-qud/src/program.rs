//! The QUAD program under construction.

use cpqc_util::ScalarType;

use crate::symtab::SymbolTable;

/// The append-only QUAD listing plus its temporary and label allocators.
///
/// Instructions are appended in source order as the parser reduces; nothing
/// is ever rewritten. The two counters start at 1 and only grow, so the
/// same input always yields the same numbering.
///
/// # Examples
///
/// ```
/// use cpqc_qud::{QuadProgram, SymbolTable};
/// use cpqc_util::ScalarType;
///
/// let mut program = QuadProgram::new();
/// let symbols = SymbolTable::new();
///
/// let t = program.fresh_temp(&symbols);
/// program.emit_binary(ScalarType::Int, "ADD", &t, "a", "1");
/// program.emit_halt();
///
/// assert_eq!(program.code(), ["IADD t1 a 1", "HALT"]);
/// ```
#[derive(Debug, Default)]
pub struct QuadProgram {
    /// Emitted instruction lines, in order.
    code: Vec<String>,

    /// Next temporary number to try.
    next_temp: u32,

    /// Next label number.
    next_label: u32,
}

impl QuadProgram {
    /// Creates an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh temporary name.
    ///
    /// Candidates are `t1`, `t2`, ... in order; any candidate that
    /// collides with a declared identifier is skipped, so temporaries stay
    /// disjoint from the symbol table.
    pub fn fresh_temp(&mut self, symbols: &SymbolTable) -> String {
        loop {
            self.next_temp += 1;
            let candidate = format!("t{}", self.next_temp);
            if !symbols.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Allocates a fresh label name (`L1`, `L2`, ...).
    pub fn fresh_label(&mut self) -> String {
        self.next_label += 1;
        format!("L{}", self.next_label)
    }

    /// Appends one instruction line.
    fn emit(&mut self, line: String) {
        self.code.push(line);
    }

    /// Emits a typed three-address instruction: `{I|R}{OP} dest lhs rhs`.
    pub fn emit_binary(
        &mut self,
        ty: ScalarType,
        mnemonic: &str,
        dest: &str,
        lhs: &str,
        rhs: &str,
    ) {
        self.emit(format!(
            "{}{} {} {} {}",
            ty.prefix(),
            mnemonic,
            dest,
            lhs,
            rhs
        ));
    }

    /// Emits a conversion into `dest`: `ITOR` when widening to real,
    /// `RTOI` when truncating to integer.
    pub fn emit_convert(&mut self, target: ScalarType, dest: &str, value: &str) {
        let opcode = match target {
            ScalarType::Float => "ITOR",
            ScalarType::Int => "RTOI",
        };
        self.emit(format!("{} {} {}", opcode, dest, value));
    }

    /// Emits `{I|R}ASN id value`.
    pub fn emit_assign(&mut self, ty: ScalarType, id: &str, value: &str) {
        self.emit(format!("{}ASN {} {}", ty.prefix(), id, value));
    }

    /// Emits `{I|R}INP id`.
    pub fn emit_input(&mut self, ty: ScalarType, id: &str) {
        self.emit(format!("{}INP {}", ty.prefix(), id));
    }

    /// Emits `{I|R}PRT value`.
    pub fn emit_print(&mut self, ty: ScalarType, value: &str) {
        self.emit(format!("{}PRT {}", ty.prefix(), value));
    }

    /// Emits a label definition site. The trailing colon-space is part of
    /// the QUAD format.
    pub fn emit_label(&mut self, label: &str) {
        self.emit(format!("{}: ", label));
    }

    /// Emits `JUMP label`.
    pub fn emit_jump(&mut self, label: &str) {
        self.emit(format!("JUMP {}", label));
    }

    /// Emits `JMPZ label cond` - jump when `cond` is zero.
    pub fn emit_jump_zero(&mut self, label: &str, cond: &str) {
        self.emit(format!("JMPZ {} {}", label, cond));
    }

    /// Emits the terminating `HALT`.
    pub fn emit_halt(&mut self) {
        self.emit("HALT".to_string());
    }

    /// The listing emitted so far.
    pub fn code(&self) -> &[String] {
        &self.code
    }

    /// Consumes the program, returning the listing.
    pub fn into_code(self) -> Vec<String> {
        self.code
    }
}
