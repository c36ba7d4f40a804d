/// Mock implementations for testing
mod mock_policy_reader;
mod mock_progress_reporter;
mod mock_sbom_reader;

pub use mock_policy_reader::MockPolicyReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_sbom_reader::MockSbomReader;
