use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use submit_logging::LogDestination;

#[derive(Parser, Debug)]
#[command(author, version, about = "Upload a resume for analysis", long_about = None)]
pub struct Cli {
    /// Email address that receives the analysis.
    pub email: String,
    /// Resume file to upload.
    pub resume: PathBuf,
    /// Override the analysis endpoint.
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Declare the media type instead of guessing from the extension.
    #[arg(long = "media-type")]
    pub media_type: Option<String>,
    /// Where log output goes.
    #[arg(long, value_enum, default_value = "file")]
    pub log: LogTarget,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

impl LogTarget {
    pub fn destination(self) -> LogDestination {
        match self {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_email_and_resume() {
        let cli = Cli::try_parse_from(["submitter_app", "a@b.co", "resume.pdf"]).unwrap();
        assert_eq!(cli.email, "a@b.co");
        assert_eq!(cli.resume, PathBuf::from("resume.pdf"));
        assert_eq!(cli.endpoint, None);
        assert_eq!(cli.log, LogTarget::File);
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "submitter_app",
            "a@b.co",
            "resume.bin",
            "--endpoint",
            "http://localhost:8080",
            "--media-type",
            "application/pdf",
            "--log",
            "terminal",
        ])
        .unwrap();
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:8080"));
        assert_eq!(cli.media_type.as_deref(), Some("application/pdf"));
        assert_eq!(cli.log, LogTarget::Terminal);
    }

    #[test]
    fn resume_path_is_required() {
        assert!(Cli::try_parse_from(["submitter_app", "a@b.co"]).is_err());
    }
}
