//! Validation errors raised before any enumeration begins.

/// An operand of the wrong kind was passed to the mapper.
///
/// Only loosely-typed entrypoints can produce these; the typed [`crate::map_keys`]
/// enforces both argument kinds at compile time. Errors raised by the transform
/// itself are never converted into this type.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapKeysError {
    /// The source is `null`, `undefined`, or a primitive/function rather than
    /// an object or array.
    #[error("invalid argument. First argument must be an object. Value: `{value}`.")]
    InvalidSourceKind {
        /// Rendering of the rejected operand.
        value: String,
    },
    /// The transform cannot be invoked.
    #[error("invalid argument. Second argument must be a function. Value: `{value}`.")]
    InvalidTransformKind {
        /// Rendering of the rejected operand.
        value: String,
    },
}

impl MapKeysError {
    /// Returns `true` for argument-kind failures, which is every variant.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidSourceKind { .. } | Self::InvalidTransformKind { .. }
        )
    }

    /// Returns the rendering of the rejected operand.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidSourceKind { value } | Self::InvalidTransformKind { value } => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MapKeysError;

    #[test]
    fn messages_identify_the_offending_value() {
        let err = MapKeysError::InvalidSourceKind {
            value: "5".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid argument. First argument must be an object. Value: `5`."
        );

        let err = MapKeysError::InvalidTransformKind {
            value: "[object Object]".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid argument. Second argument must be a function. Value: `[object Object]`."
        );
        assert_eq!(err.value(), "[object Object]");
        assert!(err.is_invalid_argument());
    }
}
