/// `ask` command: prompt on the terminal and print the answer.
use minion_cli::{Console, ConsoleError, Platform, Stream};

use crate::cli::OutputCtx;
use crate::cli::args::AskArgs;
use crate::cli::output::write_answer;
use crate::types::AnswerOutput;

/// Run `minion ask`.
///
/// The prompt goes to stderr so stdout carries only the answer.
///
/// # Errors
///
/// Returns `ConsoleError::EndOfInput` if stdin closes before an accepted
/// answer, or `ConsoleError::Io` on a stream failure.
pub fn run<P: Platform>(
    args: &AskArgs,
    console: &mut Console<P>,
    ctx: &OutputCtx,
) -> Result<(), ConsoleError> {
    console.set_stdout(&Stream::stderr());
    let output = ask(args, console)?;
    write_answer(&output, ctx);
    Ok(())
}

fn ask<P: Platform>(
    args: &AskArgs,
    console: &mut Console<P>,
) -> Result<AnswerOutput, ConsoleError> {
    let options: Vec<&str> = args.options.iter().map(String::as_str).collect();
    let answer = console.read(&args.prompt, &options, args.default.as_deref())?;
    Ok(AnswerOutput {
        prompt: args.prompt.clone(),
        answer,
    })
}
