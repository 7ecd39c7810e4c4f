//! Error types for icon lookups and catalog export.

use thiserror::Error;

/// Main error type for the icon table.
#[derive(Debug, Error)]
pub enum IconError {
    /// An identifier outside the closed set of known icons was requested.
    #[error("Unknown icon identifier: {identifier:?}")]
    UnknownVariant {
        /// The identifier as supplied by the caller.
        identifier: String,
    },

    /// Catalog configuration could not be read or parsed.
    #[error("Config error: {message}")]
    Config {
        /// Human-readable error message.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Writing exported data failed.
    #[error("IO error: {message}")]
    Io {
        /// Human-readable error message.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl IconError {
    // ========== Constructors ==========

    /// Create a new unknown variant error.
    pub fn unknown_variant(identifier: impl Into<String>) -> Self {
        Self::UnknownVariant { identifier: identifier.into() }
    }

    /// Create a new config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into(), source: None }
    }

    /// Create a new config error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config { message: message.into(), source: Some(Box::new(source)) }
    }

    // ========== Methods ==========

    /// Check if this error is a lookup of an unknown identifier.
    pub fn is_unknown_variant(&self) -> bool {
        matches!(self, Self::UnknownVariant { .. })
    }

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownVariant { .. } => "Lookup",
            Self::Config { .. } => "Config",
            Self::Io { .. } => "IO",
        }
    }

    /// Get actionable hint for the user.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::UnknownVariant { .. } => {
                Some("Identifiers are camelCase, e.g. \"accessibilityBold\"")
            }
            Self::Config { .. } => Some("Check that the config file is valid JSON"),
            Self::Io { .. } => None,
        }
    }
}

// ========== Error Conversions ==========

/// Convert from std::io::Error to IconError.
impl From<std::io::Error> for IconError {
    fn from(err: std::io::Error) -> Self {
        IconError::Io { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

/// Convert from serde_json::Error to IconError.
impl From<serde_json::Error> for IconError {
    fn from(err: serde_json::Error) -> Self {
        IconError::Config { message: format!("JSON error: {err}"), source: Some(Box::new(err)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_message() {
        let err = IconError::unknown_variant("zoomSideways");
        assert!(err.is_unknown_variant());
        assert_eq!(err.to_string(), "Unknown icon identifier: \"zoomSideways\"");
        assert_eq!(err.category(), "Lookup");
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: IconError = io.into();
        assert_eq!(err.category(), "IO");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: IconError = json_err.into();
        assert!(matches!(err, IconError::Config { .. }));
        assert!(err.to_string().starts_with("Config error: JSON error"));
    }
}
