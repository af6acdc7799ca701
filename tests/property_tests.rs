// Algebraic properties of the stack words and of word expansion, checked over a spread of inputs.

use mforth::evaluate;
use test_case::test_case;

fn numbers(values: &[i64]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn run(statements: &[String]) -> Vec<i64> {
    evaluate(statements).unwrap()
}

#[test_case(&[7]; "single value")]
#[test_case(&[-3, 9]; "two values")]
#[test_case(&[1, 2, 3, 4]; "several values")]
fn dup_then_drop_is_a_no_op(stack: &[i64]) {
    let result = run(&[format!("{} DUP DROP", numbers(stack))]);

    assert_eq!(result, stack);
}

#[test_case(&[1, 2]; "two values")]
#[test_case(&[5, -5, 0]; "three values")]
#[test_case(&[10, 20, 30, 40]; "four values")]
fn swap_is_its_own_inverse(stack: &[i64]) {
    let result = run(&[format!("{} SWAP SWAP", numbers(stack))]);

    assert_eq!(result, stack);
}

#[test_case(&[1, 2]; "two values")]
#[test_case(&[9, 8, 7]; "three values")]
#[test_case(&[0, -1, 4, 6]; "four values")]
fn over_copies_the_second_value(stack: &[i64]) {
    let result = run(&[format!("{} OVER", numbers(stack))]);

    let mut expected = stack.to_vec();
    expected.push(stack[stack.len() - 2]);

    assert_eq!(result, expected);
}

#[test_case(6, 3; "exact")]
#[test_case(7, 2; "truncated")]
#[test_case(-7, 2; "negative dividend")]
#[test_case(7, -2; "negative divisor")]
#[test_case(-100, 7; "larger values")]
fn binary_operators_use_postfix_order(a: i64, b: i64) {
    let result = run(&[format!("{a} {b} + {a} {b} - {a} {b} * {a} {b} /")]);

    assert_eq!(result, vec![a + b, a - b, a * b, a / b]);
}

#[test_case("DUP *", "3"; "square")]
#[test_case("OVER OVER + SWAP DROP", "4 5"; "shuffles")]
#[test_case("1 + 2 *", "10"; "arithmetic")]
#[test_case("SWAP -", "1 9 20"; "swapped subtract")]
fn defined_word_matches_inlined_body(body: &str, setup: &str) {
    let defined = run(&[
        format!(": word-under-test {} ;", body),
        format!("{} word-under-test word-under-test", setup),
    ]);
    let inlined = run(&[format!("{} {} {}", setup, body, body)]);

    assert_eq!(defined, inlined);
}

#[test]
fn redefinition_only_changes_later_uses() {
    let result = run(&[
        ": value 1 ;".to_string(),
        "value value".to_string(),
        ": value 2 ;".to_string(),
        "value".to_string(),
    ]);

    assert_eq!(result, vec![1, 1, 2]);
}
