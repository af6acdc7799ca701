// Batch evaluation through the public `evaluate` entry point.

use mforth::{DefinitionError, ErrorKind, evaluate};
use test_case::test_case;

fn eval_ok(statements: &[&str]) -> Vec<i64> {
    match evaluate(statements) {
        Ok(stack) => stack,
        Err(error) => panic!("Evaluation of {:?} failed: {}", statements, error),
    }
}

fn eval_err(statements: &[&str]) -> ErrorKind {
    match evaluate(statements) {
        Ok(stack) => panic!("Evaluation of {:?} succeeded with {:?}", statements, stack),
        Err(error) => error.kind().clone(),
    }
}

#[test_case(&["1 2 3 4 5"], &[1, 2, 3, 4, 5]; "numbers are pushed")]
#[test_case(&["-1 -2 -3"], &[-1, -2, -3]; "negative numbers")]
#[test_case(&["1 2 +"], &[3]; "addition")]
#[test_case(&["3 4 -"], &[-1]; "subtraction")]
#[test_case(&["2 4 *"], &[8]; "multiplication")]
#[test_case(&["12 3 /"], &[4]; "division")]
#[test_case(&["8 3 /"], &[2]; "division truncates")]
#[test_case(&["-7 2 /"], &[-3]; "division truncates toward zero")]
#[test_case(&["1 2 + 4 -"], &[-1]; "addition and subtraction")]
#[test_case(&["2 4 * 3 /"], &[2]; "multiplication and division")]
#[test_case(&["5 1 2 + 4 * + 3 -"], &[14]; "nested postfix expression")]
#[test_case(&["1 DUP"], &[1, 1]; "dup")]
#[test_case(&["1 2 DUP"], &[1, 2, 2]; "dup copies the top")]
#[test_case(&["1 DROP"], &[]; "drop")]
#[test_case(&["1 2 DROP"], &[1]; "drop removes the top")]
#[test_case(&["1 2 SWAP"], &[2, 1]; "swap")]
#[test_case(&["1 2 3 SWAP"], &[1, 3, 2]; "swap only the top two")]
#[test_case(&["1 2 OVER"], &[1, 2, 1]; "over")]
#[test_case(&["1 2 3 OVER"], &[1, 2, 3, 2]; "over copies the second")]
#[test_case(&["1 DUP Dup dup"], &[1, 1, 1, 1]; "built-ins ignore case")]
#[test_case(&["1 2 sWaP"], &[2, 1]; "swap ignores case")]
#[test_case(&[""], &[]; "empty statement")]
#[test_case(&["   ", "\t"], &[]; "blank statements")]
#[test_case(&["1\t2\x0B3\x0C+\r\0+"], &[6]; "control characters separate tokens")]
#[test_case(&["1", "2", "+"], &[3]; "statements share a stack")]
#[test_case(&["9223372036854775807 1 +"], &[i64::MIN]; "addition wraps")]
#[test_case(&["-9223372036854775808 -1 /"], &[i64::MIN]; "division wraps")]
fn evaluates_to(statements: &[&str], expected: &[i64]) {
    assert_eq!(eval_ok(statements), expected);
}

#[test_case(&[": dup-twice DUP DUP ;", "1 dup-twice"], &[1, 1, 1]; "user word expands")]
#[test_case(&[": foo 1 2 ;", "foo foo"], &[1, 2, 1, 2]; "user word used twice")]
#[test_case(&[": foo dup ;", ": foo dup dup ;", "1 foo"], &[1, 1, 1]; "redefinition wins")]
#[test_case(&[": foo 5 ;", "foo", ": foo 6 ;", "foo"], &[5, 6]; "redefinition leaves earlier uses")]
#[test_case(&[": square DUP * ;", ": fourth square square ;", "2 fourth"], &[16]; "words use words")]
#[test_case(&[": foo 5 ;", ": bar foo ;", ": foo 6 ;", "bar foo"], &[6, 6]; "bodies look up words when used")]
#[test_case(&[": FOO 5 ;", "foo Foo"], &[5, 5]; "user words ignore case")]
#[test_case(&[": 1+ 1 + ;", "41 1+"], &[42]; "names can start with digits")]
#[test_case(&["  :   inc\t1 + ;  ", "1 inc"], &[2]; "definition with extra whitespace")]
#[test_case(&["3", ": add3 3 + ;", "add3"], &[6]; "definition keeps the stack")]
fn user_words(statements: &[&str], expected: &[i64]) {
    assert_eq!(eval_ok(statements), expected);
}

#[test_case(&["+"], 2, 0; "add on empty stack")]
#[test_case(&["1 +"], 2, 1; "add with one value")]
#[test_case(&["-"], 2, 0; "subtract on empty stack")]
#[test_case(&["1 *"], 2, 1; "multiply with one value")]
#[test_case(&["1 /"], 2, 1; "divide with one value")]
#[test_case(&["DUP"], 1, 0; "dup on empty stack")]
#[test_case(&["drop"], 1, 0; "drop on empty stack")]
#[test_case(&["1 SWAP"], 2, 1; "swap with one value")]
#[test_case(&["1 over"], 2, 1; "over with one value")]
#[test_case(&["1 2 DROP DROP DROP"], 1, 0; "underflow after drops")]
fn stack_underflow(statements: &[&str], needed: usize, available: usize) {
    assert_eq!(
        eval_err(statements),
        ErrorKind::StackUnderflow { needed, available }
    );
}

#[test_case(&["1 0 /"]; "divide by zero")]
#[test_case(&[": zero 0 ;", "5 zero /"]; "divide by zero from a word")]
fn divide_by_zero(statements: &[&str]) {
    assert_eq!(eval_err(statements), ErrorKind::DivideByZero);
}

#[test_case(&[": foo ;"], DefinitionError::TooShort; "no body")]
#[test_case(&[":"], DefinitionError::TooShort; "bare colon")]
#[test_case(&[": foo 1"], DefinitionError::TooShort; "three tokens")]
#[test_case(&[": foo 1 2"], DefinitionError::MissingTerminator; "missing semicolon")]
#[test_case(&[": foo 1 ; 2"], DefinitionError::MissingTerminator; "tokens after semicolon")]
#[test_case(&[": 1 2 ;"], DefinitionError::NumberName("1".to_string()); "number name")]
#[test_case(&[": -1 2 ;"], DefinitionError::NumberName("-1".to_string()); "negative number name")]
#[test_case(&[": swap dup ;"], DefinitionError::BuiltInName("swap".to_string()); "built-in name")]
#[test_case(&[": + * ;"], DefinitionError::BuiltInName("+".to_string()); "operator name")]
fn invalid_definition(statements: &[&str], reason: DefinitionError) {
    assert_eq!(eval_err(statements), ErrorKind::InvalidDefinition(reason));
}

#[test_case(&["foo"], "foo"; "undefined word")]
#[test_case(&["1 2 bar +"], "bar"; "undefined word mid statement")]
#[test_case(&[": foo 1 ;", "2 ;"], ";"; "stray terminator")]
#[test_case(&["1 : foo 2 ;"], ":"; "colon not first")]
#[test_case(&[": foo 1 bar ;", "foo"], "bar"; "undefined word inside a body")]
#[test_case(&["99999999999999999999"], "99999999999999999999"; "literal too large")]
fn unknown_token(statements: &[&str], token: &str) {
    assert_eq!(eval_err(statements), ErrorKind::UnknownToken(token.to_string()));
}

#[test]
fn first_error_stops_the_batch() {
    assert_eq!(eval_err(&["1 0 /", "foo", ": 1 2 ;"]), ErrorKind::DivideByZero);
}

#[test]
fn sessions_do_not_share_words() {
    assert_eq!(eval_ok(&[": foo 1 ;", "foo"]), vec![1]);
    assert_eq!(eval_err(&["foo"]), ErrorKind::UnknownToken("foo".to_string()));
}

#[test]
fn accepts_owned_statements() {
    let statements = vec![String::from("2 3"), String::from("*")];

    assert_eq!(evaluate(statements.as_slice()).unwrap(), vec![6]);
}
