pub mod distribution;
pub mod sampler;
pub mod source;
pub mod weighted;

pub use distribution::{Distribution, DistributionSpec, GeneratedAttribute};
pub use sampler::{DistributionSampler, EXPONENTIAL_NORMALIZATION, MAX_REJECTION_ITERATIONS};
pub use source::SeededRandomSource;
pub use weighted::WeightedOption;
