/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the single use case is driven
/// directly by the binary.
pub mod outbound;
