use clearbom::adapters::outbound::console::StderrProgressReporter;
use clearbom::adapters::outbound::filesystem::FileSystemReader;
use clearbom::application::dto::{ReportFormat, ScanRequest, ScanResponse};
use clearbom::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use clearbom::application::use_cases::EvaluatePolicyUseCase;
use clearbom::cli::{Args, ScanSettings};
use clearbom::config::{self, ConfigFile, CONFIG_FILENAME};
use clearbom::ports::outbound::{OutputPresenter, ProgressReporter, ReportFormatter};
use clearbom::shared::error::ExitCode;
use clearbom::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let auto_discovered = args.config.is_none();
    let config = load_config(args.config.as_deref())?;
    let settings = ScanSettings::resolve(args, config.as_ref())?;

    let reporter = StderrProgressReporter::new(settings.quiet);
    if let Some(config) = &config {
        if auto_discovered {
            reporter.report(&format!(
                "Auto-discovered config file: {}",
                CONFIG_FILENAME
            ));
        }
        for key in config.unknown_keys() {
            reporter.report_warning(&format!(
                "Unknown config field '{}' will be ignored.",
                key
            ));
        }
    }

    // Create use case with injected dependencies
    let use_case = EvaluatePolicyUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        StderrProgressReporter::new(settings.quiet),
    );

    let request = ScanRequest::builder()
        .sbom_path(settings.sbom_path.clone())
        .policy_path(settings.policy_path.clone())
        .build()?;

    let response = use_case.execute(request)?;

    write_outputs(&response, &settings, &reporter)?;

    Ok(decide_exit_code(&response, settings.fail_on_violation, &reporter))
}

/// Explicit `--config` must exist; otherwise look for one in the working directory
fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}

fn write_outputs(
    response: &ScanResponse,
    settings: &ScanSettings,
    reporter: &StderrProgressReporter,
) -> Result<()> {
    let summary_json = FormatterFactory::create(ReportFormat::Json).format(&response.summary)?;
    PresenterFactory::create(PresenterType::File(settings.summary_path.clone()))
        .present(&summary_json)?;
    reporter.report_success(&format!(
        "Summary written to {}",
        settings.summary_path.display()
    ));

    if let Some(markdown_path) = &settings.markdown_path {
        let markdown =
            FormatterFactory::create(ReportFormat::Markdown).format(&response.summary)?;
        PresenterFactory::create(PresenterType::File(markdown_path.clone())).present(&markdown)?;
        reporter.report_success(&format!(
            "Markdown report written to {}",
            markdown_path.display()
        ));
    }

    if !settings.quiet {
        let report = FormatterFactory::create(settings.format).format(&response.summary)?;
        PresenterFactory::create(PresenterType::Stdout).present(&report)?;
    }

    Ok(())
}

fn decide_exit_code(
    response: &ScanResponse,
    fail_on_violation: bool,
    reporter: &StderrProgressReporter,
) -> ExitCode {
    if !response.has_blocking_violations() {
        reporter.report_success("No blocking license policy violations");
        return ExitCode::Success;
    }

    let errors = response.summary.error_count();
    if fail_on_violation {
        reporter.report_error(&format!(
            "{} license policy violation(s) with error severity",
            errors
        ));
        ExitCode::ViolationsDetected
    } else {
        reporter.report_warning(&format!(
            "{} license policy violation(s) with error severity (not failing: --no-fail-on-violation)",
            errors
        ));
        ExitCode::Success
    }
}
