use std::num::NonZeroUsize;

use super::error::SystemError;

/// Startup settings for a [`RegistrySystem`](super::RegistrySystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Capacity of the request channel in front of the store actor.
    pub buffer_size: NonZeroUsize,
    /// Ids are issued as `<id_prefix>_<n>`, numbered per registry.
    pub id_prefix: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            buffer_size: NonZeroUsize::new(32).unwrap_or(NonZeroUsize::MIN),
            id_prefix: "user".to_string(),
        }
    }
}

impl RegistryConfig {
    /// Fails on 0; the request channel needs room for at least one message.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Result<Self, SystemError> {
        self.buffer_size = NonZeroUsize::new(buffer_size).ok_or(SystemError::ZeroBufferSize)?;
        Ok(self)
    }

    pub fn with_id_prefix(mut self, id_prefix: impl Into<String>) -> Self {
        self.id_prefix = id_prefix.into();
        self
    }
}
