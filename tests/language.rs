use aplet::{
    ast::BinaryOperator,
    error::{Error, ParseError, RuntimeError},
    evaluate_line,
    interpreter::{cursor::TokenCursor, evaluator::core::Environment, lexer::Token, value::Value},
};
use logos::Logos;

/// Runs `lines` in order against a fresh environment and returns the value
/// of the last line.
fn eval_script(lines: &[&str]) -> Result<Value, Error> {
    let mut env = Environment::new();
    let mut last = None;

    for line in lines {
        last = Some(evaluate_line(line, &mut env)?);
    }

    Ok(last.expect("script must contain at least one line"))
}

fn assert_value(lines: &[&str], expected: &Value) {
    match eval_script(lines) {
        Ok(value) => assert_eq!(&value, expected, "script: {lines:?}"),
        Err(e) => panic!("script {lines:?} failed: {e}"),
    }
}

fn assert_int(lines: &[&str], expected: i64) {
    assert_value(lines, &Value::Int(expected));
}

fn assert_vector(lines: &[&str], expected: &[i64]) {
    assert_value(lines, &Value::Vector(expected.to_vec()));
}

#[test]
fn token_classification() {
    fn lex(source: &str) -> Vec<Result<Token, ()>> {
        Token::lexer(source).collect()
    }

    assert_eq!(lex("a_42"), vec![Ok(Token::Identifier("a_42".to_string()))]);
    assert_eq!(lex("min"), vec![Ok(Token::Min)]);
    assert_eq!(lex("max"), vec![Ok(Token::Max)]);
    // A reserved word is only reserved once the whole identifier matches it.
    assert_eq!(lex("minx"), vec![Ok(Token::Identifier("minx".to_string()))]);
    assert_eq!(lex("="), vec![Ok(Token::Assign)]);
    assert_eq!(lex("+/"), vec![Ok(Token::SumReduce)]);
    assert_eq!(lex("+\\"), vec![Ok(Token::SumScan)]);
    assert_eq!(lex("*/"), vec![Ok(Token::ProductReduce)]);
    assert_eq!(lex("*\\"), vec![Ok(Token::ProductScan)]);
    assert_eq!(lex("**"), vec![Ok(Token::StarStar)]);
    assert_eq!(lex("+ -"), vec![Ok(Token::Plus), Ok(Token::Space), Ok(Token::Minus)]);
    assert_eq!(lex("1 \t 2"),
               vec![Ok(Token::Number(1)), Ok(Token::Space), Ok(Token::Number(2))]);
    assert_eq!(lex("#"), vec![Err(())]);
}

#[test]
fn cursor_replays_retracted_tokens_in_stream_order() {
    let mut cursor = TokenCursor::new("1 + 2");

    assert_eq!(cursor.scan(), Token::Number(1));
    assert_eq!(cursor.scan_skip_space(), Token::Plus);

    cursor.unscan().unwrap();
    cursor.unscan().unwrap();

    assert_eq!(cursor.scan(), Token::Space);
    assert_eq!(cursor.scan(), Token::Plus);
    assert_eq!(cursor.scan_skip_space(), Token::Number(2));
    assert_eq!(cursor.scan(), Token::Eof);
}

#[test]
fn cursor_reports_retraction_exhaustion() {
    let mut cursor = TokenCursor::new("1 2");
    assert_eq!(cursor.unscan(), Err(ParseError::RetractionExhausted));

    assert_eq!(cursor.scan(), Token::Number(1));
    cursor.unscan().unwrap();
    assert_eq!(cursor.unscan(), Err(ParseError::RetractionExhausted));
}

#[test]
fn addition_commutes_over_bound_integers() {
    assert_int(&["a = 3", "b = 4", "a + b"], 7);
    assert_int(&["a = 3", "b = 4", "b + a"], 7);
}

#[test]
fn assignment_round_trip() {
    assert_int(&["x = 5", "x"], 5);
    assert_int(&["x = 5"], 5);
    assert_int(&["b = 42", "a = b", "a"], 42);
}

#[test]
fn vector_broadcast() {
    assert_vector(&["1 2 3 4 + 1 2 3 4"], &[2, 4, 6, 8]);
    assert_vector(&["1 2 3 - 3 2 1"], &[-2, 0, 2]);
    assert_vector(&["2 3 4 * 5 6 7"], &[10, 18, 28]);
}

#[test]
fn reduce_and_scan() {
    assert_int(&["+/ 1 2 3 4"], 10);
    assert_vector(&["+\\ 1 2 3 4"], &[1, 3, 6, 10]);
    assert_int(&["*/ 1 2 3 4"], 24);
    assert_vector(&["*\\ 1 2 3 4"], &[1, 2, 6, 24]);
}

#[test]
fn reduce_and_scan_of_a_scalar_are_identity() {
    assert_int(&["+/ 5"], 5);
    assert_int(&["*\\ 7"], 7);
}

#[test]
fn fold_mid_chain_wraps_the_accumulator() {
    assert_int(&["1 2 3 4 +/"], 10);
    assert_int(&["1 2 3 4 +/ + 5"], 15);
}

#[test]
fn chains_fold_left_to_right() {
    assert_int(&["a = 1", "a + a - a + a"], 2);
    // Uniform precedence: `*` does not bind tighter than `+`.
    assert_int(&["2 + 3 * 4"], 20);
}

#[test]
fn power_min_max() {
    assert_int(&["2 ** 10"], 1024);
    assert_int(&["3 min 5"], 3);
    assert_int(&["3 max 5"], 5);
    assert_vector(&["1 5 min 4 2"], &[1, 2]);
    assert_vector(&["1 5 max 4 2"], &[4, 5]);
}

#[test]
fn negative_literal_requires_adjacency() {
    assert_int(&["-1 + 2"], 1);
    assert_vector(&["1 -2"], &[1, -2]);
    assert_int(&["1 - 2"], -1);

    assert!(matches!(eval_script(&["- 1"]),
                     Err(Error::Parse(ParseError::DanglingMinus))));
}

#[test]
fn undefined_variable() {
    assert!(matches!(eval_script(&["c"]),
                     Err(Error::Runtime(RuntimeError::UnknownVariable { name })) if name == "c"));
    assert!(eval_script(&["c + 1"]).is_err());
    assert!(eval_script(&["1 + c"]).is_err());
}

#[test]
fn assignment_target_must_be_an_identifier() {
    assert!(matches!(eval_script(&["2 = 2"]), Err(Error::Parse(_))));
}

#[test]
fn assignment_right_hand_side_is_a_single_token() {
    assert!(matches!(eval_script(&["x = 1 + 2"]), Err(Error::Parse(_))));
}

#[test]
fn failed_assignment_leaves_no_partial_write() {
    let mut env = Environment::new();
    assert!(evaluate_line("y = z", &mut env).is_err());
    assert!(!env.is_bound("y"));
}

#[test]
fn lookup_is_idempotent() {
    let mut env = Environment::new();
    evaluate_line("x = 5", &mut env).unwrap();

    let first = evaluate_line("x", &mut env).unwrap();
    let second = evaluate_line("x", &mut env).unwrap();
    assert_eq!(first, second);
}

#[test]
fn incompatible_operand_shapes() {
    assert!(matches!(eval_script(&["1 2 + 3"]),
                     Err(Error::Runtime(RuntimeError::MixedOperands { op: BinaryOperator::Add }))));
    assert!(matches!(eval_script(&["1 2 + 1 2 3"]),
                     Err(Error::Runtime(RuntimeError::LengthMismatch { op:    BinaryOperator::Add,
                                                                       left:  2,
                                                                       right: 3, }))));
}

#[test]
fn division_is_not_supported() {
    assert!(matches!(eval_script(&["1 / 2"]),
                     Err(Error::Parse(ParseError::UnsupportedOperator { token })) if token == "/"));
}

#[test]
fn unrecognized_characters_are_lexical_errors() {
    assert!(matches!(eval_script(&["#"]),
                     Err(Error::Parse(ParseError::UnrecognizedToken { token })) if token == "#"));
    assert!(eval_script(&["1 + #"]).is_err());
}

#[test]
fn arithmetic_overflow_is_an_error() {
    assert!(matches!(eval_script(&["9223372036854775807 + 1"]),
                     Err(Error::Runtime(RuntimeError::Overflow))));
}

#[test]
fn vector_rendering_is_space_separated() {
    let value = eval_script(&["1 2 3 4 + 1 2 3 4"]).unwrap();
    assert_eq!(value.to_string(), "2 4 6 8");
    assert_eq!(Value::Int(-3).to_string(), "-3");
}
