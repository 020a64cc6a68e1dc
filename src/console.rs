//! Line-based console input: prompts and retry-until-valid loops.
//!
//! All validation recovers locally by re-prompting; nothing here surfaces
//! bad user input as an error. The only errors are terminal read/write
//! failures, which propagate.

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Prints a prompt line in the `==> message` house style.
pub fn prompt(message: &str) {
    println!("==> {message}");
    println!();
}

/// Reads one trimmed line from stdin.
pub fn read_line() -> Result<String> {
    io::stdout().flush().context("flushing stdout")?;
    let mut buffer = String::new();
    io::stdin()
        .read_line(&mut buffer)
        .context("reading from stdin")?;
    Ok(buffer.trim().to_string())
}

/// Prompts until the player types a non-empty line.
pub fn read_nonempty(message: &str, retry: &str) -> Result<String> {
    prompt(message);
    loop {
        let input = read_line()?;
        if !input.is_empty() {
            return Ok(input);
        }
        prompt(retry);
    }
}

/// Prompts until the player types one of the allowed answers.
pub fn read_choice(message: &str, retry: &str, allowed: &[&str]) -> Result<String> {
    prompt(message);
    loop {
        let input = read_line()?;
        if allowed.contains(&input.as_str()) {
            return Ok(input);
        }
        prompt(retry);
    }
}

/// Prompts for a y/n answer; returns true for yes.
pub fn confirm(message: &str, retry: &str) -> Result<bool> {
    prompt(message);
    loop {
        let input = read_line()?.to_lowercase();
        match input.as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => prompt(retry),
        }
    }
}

/// Clears the screen and homes the cursor.
pub fn clear_screen() -> Result<()> {
    crossterm::execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
        .context("clearing terminal")?;
    Ok(())
}

/// Joins items for prose: "1", "1 or 2", "1, 2, or 3".
pub fn joiner(items: &[String], delimiter: &str, word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} {word} {second}"),
        [head @ .., last] => {
            let mut joined = head.join(delimiter);
            joined.push_str(delimiter);
            joined.push_str(word);
            joined.push(' ');
            joined.push_str(last);
            joined
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_joiner_empty() {
        assert_eq!(joiner(&[], ", ", "or"), "");
    }

    #[test]
    fn test_joiner_one() {
        assert_eq!(joiner(&strings(&["5"]), ", ", "or"), "5");
    }

    #[test]
    fn test_joiner_two() {
        assert_eq!(joiner(&strings(&["1", "9"]), ", ", "or"), "1 or 9");
    }

    #[test]
    fn test_joiner_many() {
        assert_eq!(
            joiner(&strings(&["1", "3", "5", "9"]), ", ", "or"),
            "1, 3, 5, or 9"
        );
    }
}
