/// Validate `source` with the default configuration, collecting diagnostics.
///
/// This is the main public entrypoint for one-shot validation.
///
/// ## Errors
/// Returns `Err(Vec<SyntaxError>)` holding every diagnostic, in source order, if the program is invalid.
#[tracing::instrument(skip_all, fields(bytes = source.len()))]
pub fn parse(source: &str) -> Result<(), Vec<SyntaxError>> {
    let mut errors: Vec<SyntaxError> = Vec::new();
    let verdict = Parser::new(source, ParserConfig::default(), &mut errors).parse();
    if verdict.is_validated() { Ok(()) } else { Err(errors) }
}

/// Validate `source`, streaming each diagnostic to `sink` as it is found.
#[tracing::instrument(skip_all, fields(bytes = source.len(), shape = ?config.program_shape))]
pub fn validate(source: &str, config: ParserConfig, sink: &mut dyn DiagnosticSink) -> Verdict {
    Parser::new(source, config, sink).parse()
}
