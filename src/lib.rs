#[macro_use]
mod macros;

pub mod error;
pub mod flush;
pub mod generate;
pub mod model;
pub mod names;
pub mod reference;
pub mod reputation;
pub mod sampling;

pub use error::{ConfigError, GenError, SampleError, SamplingError};
pub use generate::{GeneratorConfig, LeagueGenerator};
pub use model::{League, Player, RecordBuilder, RecordSet, Stadium, Team};
pub use names::{NameAttemptState, resolve_unique_name};
pub use reputation::{
    RangeConfig, Reputation, ReputationBounds, ScoreRange, generate_reputation,
    map_reputation_to_range,
};
pub use sampling::{
    Distribution, DistributionSampler, DistributionSpec, SeededRandomSource, WeightedOption,
};
