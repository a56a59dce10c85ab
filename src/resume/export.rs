use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use eyre::Result;
use log::{debug, info};
use regex::Regex;

pub const CONTENT_TYPE: &str = "text/plain";

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]").expect("file name pattern is valid"));

/// `<target>_resume.txt`, with anything unsafe for a file name replaced by `_`.
pub fn file_name(target: &str) -> String {
    format!("{}_resume.txt", UNSAFE_CHARS.replace_all(target, "_"))
}

pub async fn save(directory: &Path, target: &str, resume: &str) -> Result<PathBuf> {
    if !directory.exists() {
        tokio::fs::create_dir_all(directory).await?;
        info!("created output directory: {}", directory.display());
    }

    let path = directory.join(file_name(target));
    debug!("writing {} bytes of {} to {}", resume.len(), CONTENT_TYPE, path.display());
    tokio::fs::write(&path, resume).await?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_public_id() {
        assert_eq!(file_name("ada-lovelace"), "ada-lovelace_resume.txt");
    }

    #[test]
    fn test_file_name_replaces_path_separators() {
        assert_eq!(file_name("../etc/passwd"), ".._etc_passwd_resume.txt");
        assert_eq!(file_name("jos\u{e9} m"), "jos__m_resume.txt");
    }

    #[tokio::test]
    async fn test_save_writes_resume_body() {
        let dir = std::env::temp_dir().join(format!("profile-resume-{}", std::process::id()));
        let path = save(&dir, "ada", "Ada Lovelace\n").await.unwrap();

        assert_eq!(path, dir.join("ada_resume.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Ada Lovelace\n");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
