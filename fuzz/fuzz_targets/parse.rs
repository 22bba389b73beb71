#![no_main]

use libfuzzer_sys::fuzz_target;
use cooke::diagnostics::SyntaxError;
use cooke::lexer::{self, parse_token_line};
use cooke::{LineTracking, ParserConfig, ProgramShape, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Every token must slice back out of the source and survive the listing format
        for token in lexer::lex(s) {
            assert_eq!(&s[token.span.start..token.span.end], token.lexeme);
            let line = token.to_string();
            if let Ok((lexeme, kind)) = parse_token_line(&line) {
                assert_eq!(lexeme, token.lexeme);
                assert_eq!(kind, token.kind);
            }
        }

        // The grammar engine must terminate and agree with its own diagnostics
        for shape in [ProgramShape::SingleStatement, ProgramShape::StatementList] {
            for tracking in [LineTracking::Separators, LineTracking::Fixed] {
                let config = ParserConfig::new().with_program_shape(shape).with_line_tracking(tracking);
                let mut errors: Vec<SyntaxError> = Vec::new();
                let verdict = parser::validate(s, config, &mut errors);
                assert_eq!(verdict.error_count(), errors.len());
            }
        }
    }
});
