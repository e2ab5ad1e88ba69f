//! Session configuration.

/// Settings carried by a [`super::Session`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Output face size. `None` follows the resolution policy; other values
    /// are clamped to the supported range when an export runs.
    pub size: Option<u32>,
}

impl SessionConfig {
    /// Configuration with a fixed output size, clamped to the supported
    /// range.
    pub fn with_size(size: u32) -> Self {
        Self {
            size: Some(crate::resolution::clamp_size(size)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_follows_policy() {
        assert_eq!(SessionConfig::default().size, None);
    }

    #[test]
    fn test_with_size_clamps() {
        assert_eq!(SessionConfig::with_size(64).size, Some(512));
        assert_eq!(SessionConfig::with_size(2048).size, Some(2048));
    }
}
