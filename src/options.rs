use serde::Deserialize;

/// Options accepted by [`crate::TemporalAge::age`] and
/// [`crate::TemporalAge::elapsed_time`].
///
/// Only `format` is recognized; other keys in a deserialized options bag
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub format: Option<String>,
}

impl FormatOptions {
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: Some(format.into()),
        }
    }

    pub(crate) fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }
}
