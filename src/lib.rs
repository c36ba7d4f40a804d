//! clearbom - license policy engine for CycloneDX SBOMs
//!
//! This library evaluates the components of a Software Bill of Materials
//! against a license policy (allow/warn/deny lists, unknown-license handling,
//! component exclusions), classifies every component's license, and
//! aggregates the outcome into a risk summary suitable for gating CI.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`policy_engine`): Pure policy logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use clearbom::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = EvaluatePolicyUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(false),
//! );
//!
//! // Execute
//! let request = ScanRequest::builder()
//!     .sbom_path("sbom.json")
//!     .policy_path(".clearbom.yml")
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let output = MarkdownFormatter::new().format(&response.summary)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod policy_engine;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::cyclonedx::CycloneDxParser;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::application::dto::{ReportFormat, ScanRequest, ScanResponse};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::EvaluatePolicyUseCase;
    pub use crate::policy_engine::domain::{
        Component, ExcludePattern, LicenseCategory, LicenseClaim, LicenseCounts, Policy,
        RiskCounts, RiskLevel, Severity, Summary, UnknownAction, Violation,
    };
    pub use crate::policy_engine::policies::{LicenseClassifier, LicenseExtraction};
    pub use crate::policy_engine::services::{
        ComponentFilter, FilterOutcome, PolicyEvaluator, SummaryAggregator,
    };
    pub use crate::ports::outbound::{
        OutputPresenter, PolicyReader, ProgressReporter, ReportFormatter, SbomReader,
    };
    pub use crate::shared::error::{ClearbomError, ExitCode};
    pub use crate::shared::Result;
}
