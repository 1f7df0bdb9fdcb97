//! Update Rules
//!
//! Monte-Carlo dynamics over exemplar pools:
//! - [`external`]: each pool is updated only from itself (no variant trading)
//! - [`competitive`]: tokens from either pool go to whichever mean is closer

pub mod competitive;
pub mod external;

pub use competitive::{Assignment, CompetitiveUpdate, PoolSide, TradeTally};
pub use external::ExternalUpdate;
