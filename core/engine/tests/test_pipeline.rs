//! FILENAME: tests/test_pipeline.rs
//! End-to-end tests: string --> tokens --> RPN --> AST / value.

mod common;

use common::{builtin_parser, codes, sample_parser, SAMPLE};
use mathexpr_engine::{
    rpn_to_string, MathParser, Node, OperatorSet, ParserConfig, Settings, Token, TokenKind,
};

#[test]
fn test_sample_rpn_and_value() {
    let parser = sample_parser();
    let mut parsed = parser.parse(SAMPLE);

    assert_eq!(
        rpn_to_string(parsed.rpn()),
        "y 3 pow x 2 max z 5 min y pow + * 12.5 + 5 2 ^ +"
    );
    assert_eq!(parsed.evaluate(), 125.5);
    assert!(parsed.errors().is_empty());
}

#[test]
fn test_sample_tokens_use_canonical_marks() {
    let parser = sample_parser();
    let parsed = parser.parse("{y} + 1");
    assert_eq!(parsed.source(), "[y] + 1");
    assert_eq!(
        parsed.tokens(),
        &[Token::variable("y"), Token::operator("+"), Token::number("1")]
    );
}

#[test]
fn test_division_ast() {
    let parser = sample_parser();
    let mut parsed = parser.parse("4 / 2");
    let expected = Node::new(
        Token::operator("/"),
        vec![Node::leaf(Token::number("4")), Node::leaf(Token::number("2"))],
    );
    assert_eq!(parsed.ast(), Some(expected));
}

#[test]
fn test_sample_ast_shape() {
    let parser = sample_parser();
    let mut parsed = parser.parse(SAMPLE);
    let root = parsed.ast().unwrap();

    assert_eq!(root.token, Token::operator("+"));
    assert_eq!(root.operands.len(), 2);
    let power = &root.operands[1];
    assert_eq!(power.token, Token::operator("^"));
    let call = &root.operands[0].operands[0].operands[0];
    assert_eq!(call.token, Token::function("pow"));
    assert_eq!(call.operands[0], Node::leaf(Token::variable("y")));
    assert_eq!(call.operands[1], Node::leaf(Token::number("3")));
    assert!(parsed.is_valid());
}

#[test]
fn test_ast_round_trip_preserves_value() {
    let parser = sample_parser();
    let inputs = [
        SAMPLE,
        "2^3^2",
        "2 + 3 * 4",
        "-(4 - 6) / 2",
        "max(-1, pow(2, 0.5)) - 8 / 4 / 2",
    ];
    for input in inputs {
        let mut parsed = parser.parse(input);
        let expected = parsed.evaluate();
        let rendered = parsed.ast().unwrap().to_string();

        let mut reparsed = parser.parse(&rendered);
        assert_eq!(reparsed.evaluate(), expected, "{} --> {}", input, rendered);
        assert!(reparsed.is_valid(), "{}: {:?}", rendered, reparsed.errors());
    }
}

#[test]
fn test_precedence_and_associativity() {
    let parser = builtin_parser();
    assert_eq!(parser.evaluate("2 + 3 * 4").value, 14.0);
    assert_eq!(parser.evaluate("2^3^2").value, 512.0);
    assert_eq!(parser.evaluate("(2^3)^2").value, 64.0);
}

#[test]
fn test_builtins_and_dates() {
    let parser = builtin_parser();
    assert_eq!(parser.evaluate("sqrt(16) + abs(-2)").value, 6.0);
    assert_eq!(parser.evaluate("round(lg(1000))").value, 3.0);

    let days = parser.evaluate("(#17/03/2020# - #16/03/2020#) / 86400000");
    assert_eq!(days.value, 1.0);
    assert!(days.is_valid());
}

#[test]
fn test_extended_operator_set() {
    let config = ParserConfig::new().with_operators(OperatorSet::Extended);
    let parser = MathParser::new(config).unwrap();

    assert_eq!(parser.evaluate("2 ** 3 ** 2").value, 512.0);
    assert_eq!(parser.evaluate("5 ^ 1").value, 4.0);
    assert_eq!(parser.evaluate("(1 << 3) | 1").value, 9.0);

    let report = parser.validate("1 <<");
    assert_eq!(codes(report.errors()), vec![40]);
}

#[test]
fn test_settings_configure_parser() {
    let json = r#"{
        "variables": { "rate": 0.25 },
        "delimiters": ["<<", ">>"],
        "builtins": true
    }"#;
    let settings: Settings = serde_json::from_str(json).unwrap();
    let parser = MathParser::new(settings.into()).unwrap();

    let evaluation = parser.evaluate("max(<<rate>>, 0.1) * 4");
    assert_eq!(evaluation.value, 1.0);
    assert!(evaluation.is_valid());
}

#[test]
fn test_parses_are_independent() {
    let parser = sample_parser();
    let first = parser.parse("1 +");
    let mut second = parser.parse("1 + 1");

    assert!(!first.is_valid());
    assert!(second.is_valid());
    assert_eq!(second.evaluate(), 2.0);
    assert!(first.tokens().is_empty());
}

#[test]
fn test_shared_parser_across_threads() {
    let parser = std::sync::Arc::new(sample_parser());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let parser = parser.clone();
            std::thread::spawn(move || parser.evaluate(&format!("{{z}} * {}", i)).value)
        })
        .collect();

    let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![0.0, 3.0, 6.0, 9.0]);
}

#[test]
fn test_tokens_serialize_for_renderers() {
    let parser = sample_parser();
    let parsed = parser.parse("pow({x}, 2)");
    let json = serde_json::to_value(parsed.tokens()).unwrap();

    assert_eq!(json[0]["kind"], "FunctionName");
    assert_eq!(json[2]["kind"], "Variable");
    assert_eq!(json[2]["text"], "x");
    assert!(parsed.tokens().iter().any(|t| t.is(TokenKind::FunctionArgumentSeparator)));
}
