/// ProgressReporter port for user-facing diagnostics during a scan
///
/// This port abstracts feedback to the operator (e.g., to stderr) so the
/// use case can narrate what it does without knowing where text goes.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports a non-fatal warning
    ///
    /// # Arguments
    /// * `message` - The warning, such as an unmatched exclusion pattern
    fn report_warning(&self, message: &str);

    /// Reports an error message
    ///
    /// Implementations must emit errors even when otherwise silenced.
    fn report_error(&self, message: &str);

    /// Reports successful completion of a step
    fn report_success(&self, message: &str);
}
