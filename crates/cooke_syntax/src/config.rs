//! Parser configuration for Cooke.
//!
//! The defaults reproduce the classic validator: one statement per program and single-token skip recovery.
//! Line numbers are the one place where the default deliberately differs (see [`LineTracking`]).

/// How the token stream counts lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineTracking {
    /// Count every `\n` in the separator run before each lexeme, so diagnostics carry real line numbers.
    #[default]
    Separators,
    /// Never advance the counter; every diagnostic reports line 1. This is what a reader that throws
    /// separators away before looking at them produces.
    Fixed,
}

/// Which top-level rule the grammar engine applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgramShape {
    /// `Program ::= Statement`. Anything after the first statement is ignored.
    #[default]
    SingleStatement,
    /// `Program ::= Statement*`, consuming statements until the input is exhausted.
    StatementList,
}

/// Grammar engine configuration.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// How line numbers are counted.
    pub line_tracking: LineTracking,
    /// Top-level program rule.
    pub program_shape: ProgramShape,
}

impl ParserConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line tracking mode
    pub fn with_line_tracking(mut self, line_tracking: LineTracking) -> Self {
        self.line_tracking = line_tracking;
        self
    }

    /// Set the top-level program rule
    pub fn with_program_shape(mut self, program_shape: ProgramShape) -> Self {
        self.program_shape = program_shape;
        self
    }
}
