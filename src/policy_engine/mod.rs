//! Policy engine - the pure core of clearbom.
//!
//! Nothing in here performs I/O or logs. Every operation is a deterministic
//! function of its inputs, so evaluations can run side by side on any number
//! of threads as long as each owns (or borrows) its own inputs.
pub mod domain;
pub mod policies;
pub mod services;
