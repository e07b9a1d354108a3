//! Round-robin rotation over provider API keys.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::LlmError;

/// An ordered, non-empty set of API keys handed out in strict round-robin order.
///
/// The cursor is shared by every caller holding the pool, so concurrent
/// requests interleave on a single rotation.
pub struct CredentialPool {
    keys: Box<[String]>,
    cursor: AtomicUsize,
}

impl CredentialPool {
    pub fn new(keys: Vec<String>) -> Result<Self, LlmError> {
        if keys.is_empty() {
            return Err(LlmError::ProviderConfiguration(
                "No API keys configured. At least one key is required.".to_string(),
            ));
        }

        Ok(Self {
            keys: keys.into_boxed_slice(),
            cursor: AtomicUsize::new(0),
        })
    }

    /// Load `{prefix}1`, `{prefix}2`, ... from the environment, stopping at the first gap.
    pub fn from_env(prefix: &str) -> Result<Self, LlmError> {
        Self::from_lookup(prefix, |name| std::env::var(name).ok())
    }

    /// Same as [`CredentialPool::from_env`] but with a caller-supplied variable source.
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let keys: Vec<String> = (1..)
            .map(|idx| lookup(&format!("{prefix}{idx}")))
            .take_while(Option::is_some)
            .flatten()
            .collect();

        if keys.is_empty() {
            return Err(LlmError::ProviderConfiguration(format!(
                "No API keys found. Set {prefix}1, {prefix}2, ..."
            )));
        }

        tracing::debug!(count = keys.len(), prefix, "Loaded API keys");
        Self::new(keys)
    }

    /// Hand out the next key.
    pub fn next(&self) -> &str {
        let slot = self.cursor.fetch_add(1, Ordering::Relaxed) % self.keys.len();
        tracing::trace!(slot, "Selected API key");
        &self.keys[slot]
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl fmt::Debug for CredentialPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPool")
            .field("keys", &format_args!("[{} redacted]", self.keys.len()))
            .field("cursor", &self.cursor.load(Ordering::Relaxed))
            .finish()
    }
}
