// Parser core types and entrypoint.
//
// This chunk defines the `Parser` session type, its `Verdict`, and the `Parser::parse()` entrypoint.
// It is `include!`'d into `crate::parser` to keep all parser methods in a single module.

/// Marker returned by a rule that hit a mismatch.
///
/// By the time a rule sees it, the mismatch has been reported, counted, and the offending token skipped.
/// The rule only has to stop and return to its caller.
struct Recovered;

type ParseResult = Result<(), Recovered>;

/// Outcome of one validation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No syntax errors were found.
    Validated,
    /// At least one syntax error was reported.
    Failed { errors: usize },
}

impl Verdict {
    /// Build the verdict for a finished session.
    pub fn from_error_count(errors: usize) -> Self {
        if errors == 0 {
            Verdict::Validated
        } else {
            Verdict::Failed { errors }
        }
    }

    pub fn is_validated(&self) -> bool {
        matches!(self, Verdict::Validated)
    }

    /// Number of syntax errors reported during the session.
    pub fn error_count(&self) -> usize {
        match self {
            Verdict::Validated => 0,
            Verdict::Failed { errors } => *errors,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Validated => f.write_str("Syntax Validated"),
            Verdict::Failed { errors } => write!(f, "Syntax validation failed with {} error(s)", errors),
        }
    }
}

/// Parser session state.
///
/// ## Notes
/// - One `Parser` validates exactly one source text and is consumed by [`Parser::parse`].
/// - Recovery is "report and skip one token": every mismatch is reported once, counted once, and the
///   offending token is discarded before control returns to the calling rule. There is no
///   resynchronization, so an early error may cascade into later ones.
pub struct Parser<'src, 'sink> {
    tokens: TokenStream<'src>,
    config: ParserConfig,
    error_count: usize,
    sink: &'sink mut dyn DiagnosticSink,
}

impl<'src, 'sink> Parser<'src, 'sink> {
    /// Create a session over `source`, reporting diagnostics to `sink`.
    ///
    /// The first lexeme is pulled immediately.
    pub fn new(source: &'src str, config: ParserConfig, sink: &'sink mut dyn DiagnosticSink) -> Self {
        Self {
            tokens: TokenStream::new(source, config.line_tracking),
            config,
            error_count: 0,
            sink,
        }
    }

    /// Run the `Program` rule and return the verdict.
    pub fn parse(mut self) -> Verdict {
        self.program();

        if !self.tokens.is_exhausted() {
            tracing::debug!(
                lexeme = self.peek().lexeme,
                line = self.peek().line,
                "input after the program statement is not checked"
            );
        }

        let verdict = Verdict::from_error_count(self.error_count);
        tracing::debug!(errors = self.error_count, "validation finished");
        verdict
    }
}
