use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "profile-resume")]
#[command(about = "Turn a LinkedIn profile into a plain-text resume", long_about = None)]
pub struct Args {
    /// Public identifier or profile URL of the person to build a resume for
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,

    /// LinkedIn login username (usually an email address)
    #[arg(short, long, value_name = "USERNAME", env = "LINKEDIN_USERNAME")]
    pub username: Option<String>,

    /// LinkedIn login password
    #[arg(long, value_name = "PASSWORD", env = "LINKEDIN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    pub config: PathBuf,

    /// Directory the resume is written to (overrides the config file)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Only print the resume, do not write a file
    #[arg(long)]
    pub no_save: bool,

    /// Never prompt for missing inputs
    #[arg(long)]
    pub no_prompt: bool,

    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["profile-resume", "ada-lovelace"]).unwrap();
        assert_eq!(args.target.as_deref(), Some("ada-lovelace"));
        assert_eq!(args.config, PathBuf::from("config.toml"));
        assert_eq!(args.verbosity, LevelFilter::Info);
        assert!(!args.no_save && !args.no_prompt);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "profile-resume",
            "-u",
            "me@example.com",
            "-o",
            "out",
            "--no-save",
            "--no-prompt",
            "-v",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.target, None);
        assert_eq!(args.username.as_deref(), Some("me@example.com"));
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        assert!(args.no_save && args.no_prompt);
        assert_eq!(args.verbosity, LevelFilter::Debug);
    }
}
