use crate::runtime::{built_ins::BuiltInTable, error, interpreter::Interpreter};

/// Duplicate the top value on the data stack.
///
/// Signature: `value -- value value`
fn word_dup(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    interpreter.push(value);
    interpreter.push(value);

    Ok(())
}

/// Drop the top value on the data stack.
///
/// Signature: `value -- `
fn word_drop(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let _ = interpreter.pop()?;

    Ok(())
}

/// Swap the top 2 values on the data stack.
///
/// Signature: `a b -- b a`
fn word_swap(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    interpreter.push(b);
    interpreter.push(a);

    Ok(())
}

/// Copy the second value over the top one.
///
/// Signature: `a b -- a b a`
fn word_over(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let a = interpreter.peek(1)?;

    interpreter.push(a);

    Ok(())
}

/// Register the stack manipulation words.
pub fn register_stack_words(table: &mut BuiltInTable) {
    add_built_in_word!(
        table,
        "DUP",
        1,
        word_dup,
        "Duplicate the top value on the data stack.",
        "value -- value value"
    );

    add_built_in_word!(
        table,
        "DROP",
        1,
        word_drop,
        "Discard the top value on the data stack.",
        "value -- "
    );

    add_built_in_word!(
        table,
        "SWAP",
        2,
        word_swap,
        "Swap the top 2 values on the data stack.",
        "a b -- b a"
    );

    add_built_in_word!(
        table,
        "OVER",
        2,
        word_over,
        "Copy the second value over the top of the stack.",
        "a b -- a b a"
    );
}
