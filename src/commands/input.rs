//! Line input for the interactive commands

use std::io::{self, BufRead, Write};

/// Get user input with a prompt; `None` once stdin is closed
pub(crate) fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Words that leave the current game
pub(crate) fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit")
}

/// Ask a yes/no question; closed stdin counts as no
pub(crate) fn confirm(prompt: &str) -> io::Result<bool> {
    Ok(get_user_input(prompt)?
        .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "yes" | "y")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_words() {
        assert!(is_quit("Q"));
        assert!(is_quit("exit"));
        assert!(!is_quit("quiet"));
    }
}
