use iceoryx2_bb_log::{LogLevel, debug, set_log_level_from_env_or};
use mforth::{
    lang::tokenizing::tokenize_statement,
    runtime::{
        built_ins::built_in_words,
        error,
        interpreter::{
            CodeManagement, Interpreter, InterpreterStack, forth_interpreter::ForthInterpreter,
        },
    },
};
use std::{
    env::args,
    fs::read_to_string,
    io::{self, stdin},
};

/// Name used for statements read from standard input.
const STDIN_PATH: &str = "<stdin>";

fn print_usage() {
    println!("Usage: mforth [--tokens] [--words] [script]");
    println!();
    println!("Evaluates the statements in the script, one per line, or read from standard input");
    println!("when no script is given.  The final stack is printed bottom to top.");
    println!();
    println!("  --tokens  Print each statement's tokens instead of evaluating.");
    println!("  --words   Print the user defined words after evaluation.");
    println!();
    println!("Built-in words:");

    for word in built_in_words() {
        println!("  {:6}  ( {} )  {}", word.name(), word.signature(), word.description());
    }
}

/// Read the whole script, or all of standard input.
fn read_source(filename: Option<&String>) -> io::Result<(String, String)> {
    match filename {
        Some(filename) => Ok((filename.clone(), read_to_string(filename)?)),
        None => Ok((STDIN_PATH.to_string(), io::read_to_string(stdin())?)),
    }
}

fn dump_tokens(path: &str, source: &str) {
    for (index, line) in source.lines().enumerate() {
        for token in tokenize_statement(path, index + 1, line) {
            println!("{:?}", token);
        }
    }
}

fn main() -> error::Result<()> {
    // The IOX2_LOG_LEVEL environment variable can raise the verbosity for debugging.
    set_log_level_from_env_or(LogLevel::Info);

    let args: Vec<String> = args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return Ok(());
    }

    let tokens_only = args.contains(&"--tokens".to_string());
    let show_words = args.contains(&"--words".to_string());

    // The first non-flag argument is the script, otherwise we read from stdin.
    let filename = args.iter().skip(1).find(|arg| !arg.starts_with('-'));
    let (path, source) = read_source(filename)?;

    if tokens_only {
        dump_tokens(&path, &source);
        return Ok(());
    }

    let mut interpreter = ForthInterpreter::new_with_path(&path);
    let statements: Vec<&str> = source.lines().collect();

    debug!("Evaluating {} statement(s) from {}.", statements.len(), path);

    interpreter.process_statements(&statements)?;

    let stack: Vec<String> = interpreter.stack().iter().map(|value| value.to_string()).collect();
    println!("{}", stack.join(" "));

    debug!("Maximum stack depth was {}.", interpreter.stack_max_depth());

    if show_words {
        print!("{}", interpreter.dictionary());
    }

    Ok(())
}
