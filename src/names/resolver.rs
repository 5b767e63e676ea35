use std::collections::HashSet;

use crate::error::ConfigError;

/// Generated candidates tried before falling back to numeric suffixes.
pub const MAX_NAME_ATTEMPTS: u32 = 50;

/// Highest numeric suffix tried before the name space counts as exhausted.
pub const MAX_NAME_SUFFIX: u32 = 10_000;

/// How a name was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOutcome {
    /// A generated candidate was free after `attempts` tries.
    Fresh { attempts: u32 },
    /// Every attempt collided; the last candidate got `" {suffix}"` appended.
    Suffixed { suffix: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub name: String,
    pub outcome: NameOutcome,
}

/// Names issued during one generation call.
///
/// Create one per league or team batch and drop it when the call ends.
#[derive(Debug, Default)]
pub struct NameAttemptState {
    used: HashSet<String>,
}

impl NameAttemptState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Mark a name as taken without generating it (e.g. a fixed league name).
    pub fn reserve(&mut self, name: impl Into<String>) -> bool {
        self.used.insert(name.into())
    }

    /// Produce a name not yet issued in this run and record it.
    pub fn resolve<F>(&mut self, candidate: F) -> Result<ResolvedName, ConfigError>
    where
        F: FnMut() -> String,
    {
        let resolved = resolve_against(&self.used, candidate)?;
        self.used.insert(resolved.name.clone());
        Ok(resolved)
    }
}

fn resolve_against<F>(used: &HashSet<String>, mut candidate: F) -> Result<ResolvedName, ConfigError>
where
    F: FnMut() -> String,
{
    let mut last = String::new();
    for attempt in 1..=MAX_NAME_ATTEMPTS {
        last = candidate();
        if !used.contains(&last) {
            return Ok(ResolvedName {
                name: last,
                outcome: NameOutcome::Fresh { attempts: attempt },
            });
        }
    }

    tracing::warn!(base = %last, "name candidates exhausted, falling back to numeric suffix");
    for suffix in 2..=MAX_NAME_SUFFIX {
        let name = format!("{last} {suffix}");
        if !used.contains(&name) {
            return Ok(ResolvedName {
                name,
                outcome: NameOutcome::Suffixed { suffix },
            });
        }
    }

    Err(ConfigError::NameSpaceExhausted {
        base: last,
        suffixes: MAX_NAME_SUFFIX - 1,
    })
}

/// Resolve a unique name against a caller-held set, inserting the result.
pub fn resolve_unique_name<F>(candidate: F, used: &mut HashSet<String>) -> Result<String, ConfigError>
where
    F: FnMut() -> String,
{
    let resolved = resolve_against(used, candidate)?;
    used.insert(resolved.name.clone());
    Ok(resolved.name)
}
