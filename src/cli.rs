use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::{ReportFormat, DEFAULT_POLICY_FILE};
use crate::config::ConfigFile;
use crate::shared::Result;

const DEFAULT_SBOM_FILE: &str = "sbom.json";
const DEFAULT_SUMMARY_FILE: &str = "summary.json";

/// Evaluate a CycloneDX SBOM against a license policy
#[derive(Parser, Debug)]
#[command(name = "clearbom")]
#[command(version)]
#[command(
    about = "Evaluate a CycloneDX SBOM against a license policy and gate CI on violations",
    long_about = None
)]
pub struct Args {
    /// Path to the CycloneDX JSON SBOM [default: sbom.json]
    #[arg(short, long, value_name = "FILE")]
    pub sbom: Option<PathBuf>,

    /// Path to the policy file [default: .clearbom.yml]
    #[arg(long, value_name = "FILE")]
    pub policy: Option<PathBuf>,

    /// Where to write the summary JSON [default: summary.json]
    #[arg(long, value_name = "FILE")]
    pub summary: Option<PathBuf>,

    /// Also write a Markdown report to this file
    #[arg(long, value_name = "FILE")]
    pub markdown: Option<PathBuf>,

    /// Report format on stdout: text, markdown or json [default: text]
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Exit with code 1 when error-severity violations are found (default)
    #[arg(long, overrides_with = "no_fail_on_violation")]
    pub fail_on_violation: bool,

    /// Report violations but exit 0 regardless
    #[arg(long, overrides_with = "fail_on_violation")]
    pub no_fail_on_violation: bool,

    /// Suppress everything except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to a config file [default: ./clearbom.config.yml if present]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// `--fail-on-violation` / `--no-fail-on-violation`, if either was given
    fn fail_on_violation_flag(&self) -> Option<bool> {
        if self.no_fail_on_violation {
            Some(false)
        } else if self.fail_on_violation {
            Some(true)
        } else {
            None
        }
    }
}

/// Fully resolved settings for one scan
///
/// Precedence: command-line flag, then config file, then built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    pub sbom_path: PathBuf,
    pub policy_path: PathBuf,
    pub summary_path: PathBuf,
    pub markdown_path: Option<PathBuf>,
    pub format: ReportFormat,
    pub fail_on_violation: bool,
    pub quiet: bool,
}

impl ScanSettings {
    pub fn resolve(args: Args, config: Option<&ConfigFile>) -> Result<Self> {
        let fail_on_violation = args.fail_on_violation_flag();
        let default_config = ConfigFile::default();
        let config = config.unwrap_or(&default_config);

        let format = match args.format {
            Some(format) => format,
            None => config.report_format()?.unwrap_or_default(),
        };

        Ok(Self {
            sbom_path: args
                .sbom
                .or_else(|| config.sbom.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SBOM_FILE)),
            policy_path: args
                .policy
                .or_else(|| config.policy.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_POLICY_FILE)),
            summary_path: args
                .summary
                .or_else(|| config.summary.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SUMMARY_FILE)),
            markdown_path: args.markdown.or_else(|| config.markdown.clone()),
            format,
            fail_on_violation: fail_on_violation
                .or(config.fail_on_violation)
                .unwrap_or(true),
            quiet: args.quiet || config.quiet.unwrap_or(false),
        })
    }
}
