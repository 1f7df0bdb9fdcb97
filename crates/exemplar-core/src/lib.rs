//! Exemplar dynamics: singleton and geminate closure durations under
//! exemplar-based learning.
//!
//! Two pools of durations are updated by repeated production. Under the
//! external rule each pool only ever learns from itself. Under the competitive
//! rule produced tokens are stored with whichever category they sound closer
//! to, which lets exemplars trade between categories.

pub mod config;
pub mod driver;
pub mod error;
pub mod output;
pub mod params;
pub mod pool;
pub mod rules;
pub mod sampler;

pub use config::{default_config_toml, Config, RunConfig};
pub use driver::{SimulationDriver, SimulationOutcome};
pub use error::{ConfigError, ExemplarError, ReportError};
pub use params::SimulationParameters;
pub use pool::ExemplarPool;
pub use rules::{Assignment, CompetitiveUpdate, ExternalUpdate, PoolSide, TradeTally};
pub use sampler::EntrenchmentSampler;

pub use exemplar_report::InitialPoolPolicy;
