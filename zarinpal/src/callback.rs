//! Parameters of the gateway's return redirect.
//!
//! After the payer finishes on the gateway's side, the gateway redirects
//! them back to the merchant with the transaction identifier appended to
//! the return URL. The calling application hands those parameters to the
//! verification flow through [`CallbackRequest`], making the dependency
//! explicit instead of reaching into an ambient request context.

use serde_json::{Map, Value};

/// Validation failure for a callback-supplied field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallbackValidationError {
    /// The field is absent or empty.
    #[error("callback field `{field}` is required")]
    Missing {
        /// Name of the offending field.
        field: String,
    },

    /// The field is present but not a string.
    #[error("callback field `{field}` must be a string")]
    NotAString {
        /// Name of the offending field.
        field: String,
    },
}

/// The inbound request of a gateway-initiated redirect flow.
#[derive(Debug, Clone, Default)]
pub struct CallbackRequest {
    params: Map<String, Value>,
}

impl CallbackRequest {
    /// Creates an empty callback request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a callback request from already-parsed parameters.
    #[must_use]
    pub const fn from_params(params: Map<String, Value>) -> Self {
        Self { params }
    }

    /// Sets one parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Returns `true` if the inbound request supplied this field.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.params.contains_key(field)
    }

    /// Validates that `field` carries a non-empty string and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CallbackValidationError::Missing`] when the field is
    /// absent, null, or empty, and [`CallbackValidationError::NotAString`]
    /// when it carries any other value kind.
    pub fn validated_string(&self, field: &str) -> Result<String, CallbackValidationError> {
        match self.params.get(field) {
            None | Some(Value::Null) => Err(CallbackValidationError::Missing {
                field: field.to_owned(),
            }),
            Some(Value::String(value)) if value.is_empty() => {
                Err(CallbackValidationError::Missing {
                    field: field.to_owned(),
                })
            }
            Some(Value::String(value)) => Ok(value.clone()),
            Some(_) => Err(CallbackValidationError::NotAString {
                field: field.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_present_strings() {
        let callback = CallbackRequest::new().with_param("Authority", "A000123");
        assert!(callback.has("Authority"));
        assert_eq!(
            callback.validated_string("Authority").unwrap(),
            "A000123"
        );
    }

    #[test]
    fn rejects_missing_empty_and_non_string_fields() {
        let callback = CallbackRequest::new()
            .with_param("Empty", "")
            .with_param("Number", 42);

        assert_eq!(
            callback.validated_string("Absent"),
            Err(CallbackValidationError::Missing {
                field: "Absent".into()
            })
        );
        assert_eq!(
            callback.validated_string("Empty"),
            Err(CallbackValidationError::Missing {
                field: "Empty".into()
            })
        );
        assert_eq!(
            callback.validated_string("Number"),
            Err(CallbackValidationError::NotAString {
                field: "Number".into()
            })
        );
    }
}
