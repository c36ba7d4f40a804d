/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod formatter;
pub mod output_presenter;
pub mod policy_reader;
pub mod progress_reporter;
pub mod sbom_reader;

pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use policy_reader::PolicyReader;
pub use progress_reporter::ProgressReporter;
pub use sbom_reader::SbomReader;
