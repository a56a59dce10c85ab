use std::sync::LazyLock;

use regex::Regex;

static PROFILE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:[\w-]+\.)?linkedin\.com/in(?:/([^/?#]*))?(?:[/?#].*)?$")
        .expect("profile url pattern is valid")
});

/// Accepts a bare public identifier or a full profile URL and returns the identifier.
/// A profile URL without an identifier yields an empty string.
pub fn normalize(input: &str) -> String {
    let input = input.trim();

    match PROFILE_URL.captures(input) {
        Some(caps) => caps.get(1).map_or("", |id| id.as_str()).to_string(),
        None => input.trim_matches('/').to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_identifier_is_kept() {
        assert_eq!(normalize("ada-lovelace"), "ada-lovelace");
        assert_eq!(normalize("  ada-lovelace \n"), "ada-lovelace");
    }

    #[test]
    fn test_profile_urls() {
        assert_eq!(
            normalize("https://www.linkedin.com/in/ada-lovelace/"),
            "ada-lovelace"
        );
        assert_eq!(
            normalize("linkedin.com/in/ada-lovelace?trk=public_profile"),
            "ada-lovelace"
        );
        assert_eq!(
            normalize("http://uk.linkedin.com/in/ada-lovelace#experience"),
            "ada-lovelace"
        );
    }

    #[test]
    fn test_profile_url_without_id_is_blank() {
        assert_eq!(normalize("https://www.linkedin.com/in/"), "");
        assert_eq!(normalize("https://www.linkedin.com/in"), "");
        assert_eq!(normalize("linkedin.com/in/?trk=nav"), "");
    }

    #[test]
    fn test_blank_stays_blank() {
        assert_eq!(normalize("   "), "");
    }
}
