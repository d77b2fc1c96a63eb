use std::fs::{self};

use mixradix::{
    error::{Error, ErrorKind, ParseError, RuntimeError},
    evaluate, evaluate_to_decimal, to_postfix_string,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in extract_example_lines(&content) {
            count += 1;
            let parts: Vec<&str> = line.split("=>").map(str::trim).collect();
            let &[expression, base, expected] = parts.as_slice() else {
                panic!("Example in {path:?} is not `expression => base => result`: {line}");
            };
            let base = base.parse().unwrap_or_else(|e| panic!("Bad base in {path:?}: {e}"));
            match evaluate(expression, base) {
                Ok(result) => assert_eq!(result, expected, "{line} in {path:?}"),
                Err(e) => panic!("Example in {path:?} failed:\n{line}\nError: {e:?}"),
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_example_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```mixradix") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines
}

fn assert_result(expression: &str, base: i64, expected: &str) {
    match evaluate(expression, base) {
        Ok(result) => assert_eq!(result, expected, "{expression} in base {base}"),
        Err(e) => panic!("{expression} failed: {e}"),
    }
}

fn assert_kind(expression: &str, base: i64, kind: ErrorKind) {
    match evaluate(expression, base) {
        Ok(result) => panic!("{expression} succeeded with {result} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "{expression}: {e}"),
    }
}

#[test]
fn precedence() {
    assert_result("2(10)+3(10)*4(10)", 10, "14");
    assert_result("2(10)*3(10)+4(10)", 10, "10");
    assert_result("1(10) - 6(10) % 4(10)", 10, "-1");
}

#[test]
fn mixed_base_addition() {
    assert_result("1010(2)+F(16)", 10, "25");
    assert_result("1010(2)+F(16)", 16, "19");
    assert_result("10(36) + 10(2) + 10(8)", 10, "46");
}

#[test]
fn floor_and_truncating_division_differ() {
    assert_result("-7(10)/2(10)", 10, "-3");
    assert_result("-7(10)//2(10)", 10, "-4");
    assert_result("7(10)/-2(10)", 10, "-3");
    assert_result("7(10)//-2(10)", 10, "-4");
    assert_result("-8(10)/2(10)", 10, "-4");
    assert_result("-8(10)//2(10)", 10, "-4");
}

#[test]
fn modulo_follows_floor_division() {
    assert_result("-7(10)%2(10)", 10, "1");
    assert_result("7(10)%-2(10)", 10, "-1");
    assert_result("-7(10)%-2(10)", 10, "-1");

    for (a, b) in [(-7, 2), (7, -2), (-7, -2), (13, 5), (-13, 5)] {
        let q = evaluate_to_decimal(&format!("{a}(10) // {b}(10)")).unwrap();
        let r = evaluate_to_decimal(&format!("{a}(10) % {b}(10)")).unwrap();
        assert_eq!(q * b + r, a, "{a} and {b}");
    }
}

#[test]
fn division_by_zero_is_error() {
    assert_kind("5(10)/0(10)", 10, ErrorKind::DivisionByZero);
    assert_kind("5(10)//0(2)", 10, ErrorKind::DivisionByZero);
    assert_kind("5(10)%-0(16)", 10, ErrorKind::DivisionByZero);
    assert_kind("5(10)/(1(10)-1(10))", 10, ErrorKind::MalformedLiteral);
    assert_kind("5(10) / 1(10) - 1(10) + 3(10) % 0(10)", 10, ErrorKind::DivisionByZero);
}

#[test]
fn invalid_digit_rejection() {
    assert_kind("2(2)+1(10)", 10, ErrorKind::InvalidDigit);
    assert_kind("G(16)", 10, ErrorKind::InvalidDigit);
    assert_kind("1.5(10)", 10, ErrorKind::InvalidDigit);

    let Err(Error::Parse(ParseError::InvalidDigit { digit, base, .. })) = evaluate("2(2)+1(10)", 10)
    else {
        panic!("expected an invalid digit error");
    };
    assert_eq!((digit, base), ('2', 2));
}

#[test]
fn base_boundaries() {
    assert_kind("1(1)", 10, ErrorKind::InvalidBase);
    assert_kind("1(37)", 10, ErrorKind::InvalidBase);
    assert_kind("1(-10)", 10, ErrorKind::InvalidBase);
    assert_kind("1(10)", 1, ErrorKind::InvalidBase);
    assert_kind("1(10)", 37, ErrorKind::InvalidBase);

    assert_result("1(2)", 2, "1");
    assert_result("Z(36)", 36, "Z");
    assert_result("11(2)", 36, "3");
}

#[test]
fn output_base_is_checked_before_the_expression() {
    assert_eq!(evaluate("garbage", 0),
               Err(Error::Runtime(RuntimeError::InvalidBase { base: 0 })));
}

#[test]
fn empty_operands_and_malformed_literals() {
    assert_kind("(10)", 10, ErrorKind::EmptyOperand);
    assert_kind("1(10) + (16)", 10, ErrorKind::EmptyOperand);
    assert_kind("12", 10, ErrorKind::MalformedLiteral);
    assert_kind("12(10", 10, ErrorKind::MalformedLiteral);
    assert_kind("12(x)", 10, ErrorKind::MalformedLiteral);
    assert_kind("12)", 10, ErrorKind::MalformedLiteral);
}

#[test]
fn structural_errors_are_reported_early() {
    assert_kind("", 10, ErrorKind::StructuralError);
    assert_kind("1(10) 2(10)", 10, ErrorKind::StructuralError);
    assert_kind("1(10) +", 10, ErrorKind::StructuralError);
    assert_kind("* 1(10)", 10, ErrorKind::StructuralError);
    assert_kind("1(10) * * 2(10)", 10, ErrorKind::StructuralError);
    assert_kind("--1(10)", 10, ErrorKind::StructuralError);
}

#[test]
fn overflow_is_reported() {
    let max = i128::MAX.to_string();
    assert_result(&format!("{max}(10)"), 10, &max);
    assert_kind(&format!("{max}(10) + 1(10)"), 10, ErrorKind::Overflow);
    assert_kind(&format!("{max}(10) * 2(10)"), 10, ErrorKind::Overflow);
    assert_kind(&format!("{max}0(10)"), 10, ErrorKind::Overflow);

    let min = i128::MIN.to_string();
    assert_result(&format!("{min}(10)"), 10, &min);
    assert_kind(&format!("{min}(10) // -1(10)"), 10, ErrorKind::Overflow);
    assert_result(&format!("{min}(10) % -1(10)"), 10, "0");
}

#[test]
fn whitespace_is_insignificant() {
    assert_result(" 1010(2)\t+\nF(16) ", 10, "25");
    assert_result("9(10)//2(10)", 10, "4");
    assert_result("9(10) // 2(10)", 10, "4");
}

#[test]
fn re_evaluation_is_idempotent() {
    let expression = "zz(36) * -11(2) // 7(8) % 1F(16)";
    let first = evaluate(expression, 7);
    let second = evaluate(expression, 7);
    assert!(first.is_ok());
    assert_eq!(first, second);
}

#[test]
fn postfix_form() {
    assert_eq!(to_postfix_string("2(10)+3(10)*4(10)").unwrap(), "2(10) 3(10) 4(10) * +");
    assert_eq!(to_postfix_string("-a(16) // 3(10) - 1(2)").unwrap(),
               "-a(16) 3(10) // 1(2) -");
    assert!(to_postfix_string("1(10) +").is_err());
}

#[test]
fn errors_render_context() {
    let message = evaluate("1(10) + 2(2)", 10).unwrap_err().to_string();
    assert!(message.contains("offset 8"), "{message}");
    assert!(message.contains("base 2"), "{message}");

    let message = evaluate("1(10) // 0(10)", 10).unwrap_err().to_string();
    assert!(message.contains("'//'"), "{message}");
}

#[test]
fn unclosed_literals_are_malformed() {
    for source in ["12(10", "12(", "abc(", "1(1(10))", "1(10) + 2(16"] {
        assert_kind(source, 10, ErrorKind::MalformedLiteral);
    }
}

#[test]
fn unicode_whitespace_is_insignificant() {
    assert_result("1(10)\u{a0}+ 2(10)", 10, "3");
    assert_result("1(10)\u{b}+2(10)", 10, "3");
}

#[test]
fn oversized_literal_carries_its_offset() {
    let huge = "z".repeat(30);
    match evaluate(&format!("1(10) * {huge}(36)"), 10) {
        Err(Error::Parse(ParseError::LiteralTooLarge { position, .. })) => assert_eq!(position, 8),
        other => panic!("expected an oversized literal error, got {other:?}"),
    }
}

#[test]
fn sign_may_be_spaced_from_its_digits() {
    assert_result("- 7(10)", 10, "-7");
    assert_result("5(10) - - 3(10)", 10, "8");
}
