//! Yes/no confirmation before destructive actions.

use std::io::{self, BufRead, Write};

/// Asks `question [y/N]` on `output` and reads one line from `input`.
/// Only `y`/`yes` (any case) confirm; EOF declines.
pub(crate) fn confirm_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;
    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// [`confirm_with`] on the terminal; `assume_yes` skips the question.
pub(crate) fn confirm(question: &str, assume_yes: bool) -> io::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    let stdin = io::stdin();
    let mut input = stdin.lock();
    confirm_with(&mut input, &mut io::stdout(), question)
}
