use crate::runtime::{
    built_ins::BuiltInTable,
    error::{self, ErrorKind, script_error},
    interpreter::Interpreter,
};

/// Helper function to handle the binary math operations.  The right hand value is on top of the
/// stack so it's popped first, then the result of `a op b` is pushed back.
fn math_op(interpreter: &mut dyn Interpreter, op: fn(i64, i64) -> i64) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    interpreter.push(op(a, b));
    Ok(())
}

/// Add the top two values.
///
/// Signature: `a b -- a+b`
fn word_add(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    math_op(interpreter, |a, b| a.wrapping_add(b))
}

/// Subtract the top value from the one below it.
///
/// Signature: `a b -- a-b`
fn word_subtract(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    math_op(interpreter, |a, b| a.wrapping_sub(b))
}

/// Multiply the top two values.
///
/// Signature: `a b -- a*b`
fn word_multiply(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    math_op(interpreter, |a, b| a.wrapping_mul(b))
}

/// Divide the second value by the top value, truncating toward zero.  A zero divisor is an error
/// and leaves both values on the stack.
///
/// Signature: `a b -- a/b`
fn word_divide(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    if interpreter.peek(0)? == 0 {
        return script_error(interpreter, ErrorKind::DivideByZero);
    }

    math_op(interpreter, |a, b| a.wrapping_div(b))
}

/// Register the arithmetic words.
pub fn register_arithmetic_words(table: &mut BuiltInTable) {
    add_built_in_word!(table, "+", 2, word_add, "Add the top two values.", "a b -- sum");

    add_built_in_word!(
        table,
        "-",
        2,
        word_subtract,
        "Subtract the top value from the one below it.",
        "a b -- difference"
    );

    add_built_in_word!(
        table,
        "*",
        2,
        word_multiply,
        "Multiply the top two values.",
        "a b -- product"
    );

    add_built_in_word!(
        table,
        "/",
        2,
        word_divide,
        "Divide the second value by the top value, truncating toward zero.",
        "a b -- quotient"
    );
}
