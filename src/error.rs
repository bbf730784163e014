use thiserror::Error;

/// Result type alias using `DesignError`
pub type Result<T> = std::result::Result<T, DesignError>;

/// Errors raised while designing a filter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    /// A parameter is outside the range the formulas are defined for
    #[error("Invalid parameter `{name}` ({value}): {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,

        /// The rejected value
        value: f64,

        /// What the value should have been
        reason: &'static str,
    },

    /// A filter kind tag that does not name any supported response
    #[error("Unsupported filter kind: {0}")]
    UnsupportedFilterKind(String),
}

impl DesignError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// Check if this error rejected a parameter value
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_parameter_name_and_value() {
        let error = DesignError::invalid("q", -1.0, "must be greater than zero");
        assert_eq!(
            error.to_string(),
            "Invalid parameter `q` (-1): must be greater than zero"
        );
        assert!(error.is_invalid_parameter());
    }

    #[test]
    fn displays_unknown_tag() {
        let error = DesignError::UnsupportedFilterKind("bandstop".to_owned());
        assert_eq!(error.to_string(), "Unsupported filter kind: bandstop");
        assert!(!error.is_invalid_parameter());
    }
}
