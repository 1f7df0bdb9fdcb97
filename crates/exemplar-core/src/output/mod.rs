//! Output Generation
//!
//! Category statistics and the JSON report handed to plotting tools.

pub mod report;
pub mod stats;

pub use report::*;
pub use stats::*;
