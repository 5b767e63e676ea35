pub mod resolver;
pub mod templates;

pub use resolver::{
    MAX_NAME_ATTEMPTS, MAX_NAME_SUFFIX, NameAttemptState, NameOutcome, ResolvedName,
    resolve_unique_name,
};
pub use templates::PersonName;
