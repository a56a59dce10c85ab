use std::io::{self, Write};

use colored::Colorize;
use eyre::Result;

/// First candidate that is present and not blank.
pub fn first_filled<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

pub fn ask(label: &str) -> Result<String> {
    print!("{}", format!("{}: ", label).cyan());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

/// Like [`ask`] but without echoing what is typed.
pub fn ask_secret(label: &str) -> Result<String> {
    let input = rpassword::prompt_password(format!("{}: ", label).cyan().to_string())?;

    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_filled_skips_blank_and_missing() {
        let picked = first_filled([None, Some("  ".to_string()), Some("ada".to_string())]);
        assert_eq!(picked.as_deref(), Some("ada"));
    }

    #[test]
    fn test_first_filled_prefers_earlier() {
        let picked = first_filled([Some("cli".to_string()), Some("config".to_string())]);
        assert_eq!(picked.as_deref(), Some("cli"));
    }

    #[test]
    fn test_first_filled_nothing() {
        assert_eq!(first_filled([None, Some(String::new())]), None);
    }
}
