use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use wordmatch::{alphabet, is_match};

/// Pattern offered by the first menu option.
const BUILTIN_PATTERN: &str = "(a|b)*a(ab)*";

fn main() -> Result<()> {
    println!("This program matches a word against a regular expression.");
    println!("It supports union (a|b), concatenation (ab), plus (a)+ and Kleene star (a)*.");
    println!();
    println!("1 ... Test a word against the built-in pattern {BUILTIN_PATTERN}");
    println!("2 ... Test a word against a pattern of your own");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let choice = prompt(&mut lines, "Choose: ")?;
    let (word, pattern) = match choice.as_str() {
        "1" => (
            prompt(&mut lines, "Enter a word: ")?,
            BUILTIN_PATTERN.to_string(),
        ),
        "2" => {
            let word = prompt(&mut lines, "Enter a word: ")?;
            let pattern = prompt(&mut lines, "Enter a pattern: ")?;
            (word, pattern)
        }
        other => bail!("unknown option {other:?} - expected 1 or 2"),
    };

    let symbols: Vec<char> = word.chars().collect();
    alphabet::validate(&symbols, &pattern).context("inputs rejected before matching")?;

    if is_match(&word, &pattern)? {
        println!("The word '{word}' and pattern '{pattern}' are matching!");
    } else {
        println!("The word '{word}' and pattern '{pattern}' are not matching!");
    }
    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let line = lines.next().context("unexpected end of input")??;
    Ok(line.trim().to_string())
}
