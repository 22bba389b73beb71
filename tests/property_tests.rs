//! Property-based tests for the Cooke front end
//!
//! These tests use proptest to check the classifier and grammar engine against randomly generated
//! lexemes and programs.

use cooke::diagnostics::SyntaxError;
use cooke::lexer::{self, TokenKind, parse_token_line};
use cooke::parser::{self, Verdict};
use cooke::{LineTracking, ParserConfig, ProgramShape};
use cooke_core::lang::{keywords, operators, punctuation};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,8}".prop_filter("Not a keyword", |s| keywords::from_str(s).is_none())
}

fn operand_strategy() -> impl Strategy<Value = String> {
    prop_oneof![ident_strategy(), "[0-9]{1,6}"]
}

fn separator_strategy() -> impl Strategy<Value = String> {
    "[ \t\n\r]{1,3}"
}

/// Every spelling the vocabulary registries know about.
fn vocabulary() -> Vec<&'static str> {
    operators::OPERATORS
        .iter()
        .map(|info| info.canonical)
        .chain(punctuation::PUNCTUATION.iter().map(|info| info.canonical))
        .chain(keywords::KEYWORDS.iter().map(|info| info.canonical))
        .collect()
}

fn lexeme_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vocabulary()).prop_map(|s| s.to_string()),
        operand_strategy(),
        "[^ \t\n\r\x0b\x0c]{1,4}",
    ]
}

/// `IDENT = operand (+|- operand)* ;`, one separator between tokens.
fn assignment_strategy() -> impl Strategy<Value = Vec<String>> {
    (
        ident_strategy(),
        operand_strategy(),
        prop::collection::vec((prop::sample::select(vec!["+", "-"]), operand_strategy()), 0..5),
    )
        .prop_map(|(target, first, rest)| {
            let mut tokens = vec![target, "=".to_string(), first];
            for (op, operand) in rest {
                tokens.push(op.to_string());
                tokens.push(operand);
            }
            tokens.push(";".to_string());
            tokens
        })
}

fn join_with(tokens: &[String], separators: &[String]) -> String {
    let mut source = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            source.push_str(&separators[i % separators.len()]);
        }
        source.push_str(token);
    }
    source
}

// =============================================================================
// Classifier properties
// =============================================================================

proptest! {
    #[test]
    fn digit_strings_are_int_literals(digits in "[0-9]{1,20}") {
        prop_assert_eq!(lexer::classify(&digits), TokenKind::IntLit);
    }

    #[test]
    fn letter_led_words_are_identifiers(word in ident_strategy()) {
        prop_assert_eq!(lexer::classify(&word), TokenKind::Ident);
    }

    #[test]
    fn digit_led_mixed_words_are_unknown(word in "[0-9]{1,4}[a-zA-Z_][a-zA-Z0-9_]{0,4}") {
        prop_assert_eq!(lexer::classify(&word), TokenKind::Unknown);
    }

    #[test]
    fn classify_is_context_free(lexeme in lexeme_strategy()) {
        let alone = lexer::classify(&lexeme);
        let source = format!("x = {} ;", lexeme);
        let tokens = lexer::lex(&source);
        prop_assert_eq!(tokens.len(), 4);
        prop_assert_eq!(tokens[2].lexeme, lexeme.as_str());
        prop_assert_eq!(tokens[2].kind, alone);
    }
}

// =============================================================================
// Lexer properties
// =============================================================================

proptest! {
    #[test]
    fn listing_lines_read_back(
        lexemes in prop::collection::vec(lexeme_strategy(), 1..12),
        separators in prop::collection::vec(separator_strategy(), 1..4),
    ) {
        let source = join_with(&lexemes, &separators);
        let tokens = lexer::lex(&source);
        prop_assert_eq!(tokens.len(), lexemes.len());

        for (token, lexeme) in tokens.iter().zip(&lexemes) {
            let line = token.to_string();
            let (read_lexeme, read_kind) = parse_token_line(&line).unwrap();
            prop_assert_eq!(read_lexeme, lexeme.as_str());
            prop_assert_eq!(read_kind, token.kind);
        }
    }

    #[test]
    fn spans_slice_back_to_lexemes(source in "[ -~\t\n]{0,60}") {
        for token in lexer::lex(&source) {
            prop_assert_eq!(&source[token.span.start..token.span.end], token.lexeme);
        }
    }

    #[test]
    fn line_numbers_count_preceding_newlines(source in "[a-z0-9;= \n]{0,60}") {
        for token in lexer::lex(&source) {
            let newlines = source[..token.span.start].matches('\n').count();
            prop_assert_eq!(token.line, newlines + 1);
        }
    }
}

// =============================================================================
// Grammar engine properties
// =============================================================================

proptest! {
    #[test]
    fn generated_assignments_validate(
        tokens in assignment_strategy(),
        separators in prop::collection::vec(separator_strategy(), 1..4),
    ) {
        let source = join_with(&tokens, &separators);
        prop_assert!(parser::parse(&source).is_ok(), "{:?}", source);
    }

    #[test]
    fn generated_statement_lists_validate(
        statements in prop::collection::vec(assignment_strategy(), 1..5),
    ) {
        let source = statements.iter().map(|tokens| tokens.join(" ")).collect::<Vec<_>>().join("\n");
        let config = ParserConfig::new().with_program_shape(ProgramShape::StatementList);
        let mut errors: Vec<SyntaxError> = Vec::new();
        prop_assert_eq!(parser::validate(&source, config, &mut errors), Verdict::Validated);
        prop_assert!(errors.is_empty());
    }

    #[test]
    fn verdict_always_matches_reported_errors(
        lexemes in prop::collection::vec(lexeme_strategy(), 0..16),
        list in any::<bool>(),
        fixed in any::<bool>(),
    ) {
        let source = lexemes.join(" ");
        let mut config = ParserConfig::new();
        if list {
            config = config.with_program_shape(ProgramShape::StatementList);
        }
        if fixed {
            config = config.with_line_tracking(LineTracking::Fixed);
        }

        let mut errors: Vec<SyntaxError> = Vec::new();
        let verdict = parser::validate(&source, config, &mut errors);
        prop_assert_eq!(verdict.error_count(), errors.len());
        prop_assert_eq!(verdict.is_validated(), errors.is_empty());
        if fixed {
            prop_assert!(errors.iter().all(|e| e.line == 1));
        }
    }
}
