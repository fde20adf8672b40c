/*!
# Index Errors

Errors raised while loading documents and building an index. A lookup miss
is never an error: searching for an unknown term yields an empty result.
*/
use serde_json::Value;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Result alias for fallible index operations.
pub type Result<T, E = IndexError> = std::result::Result<T, E>;

/// Represents the ways loading or indexing a document collection can fail.
#[derive(Debug)]
pub enum IndexError {
    /// The input source could not be read.
    Io {
        /// Path of the input, or `None` when reading from a stream.
        path: Option<PathBuf>,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The input is not valid JSON.
    Parse(serde_json::Error),
    /// The root JSON value is not an array.
    NotAnArray {
        /// Kind of the value found at the root.
        found: &'static str,
    },
    /// An element of the root array is not an object.
    NotAnObject {
        /// Zero-based position of the offending element.
        position: usize,
        /// Kind of the value found at that position.
        found: &'static str,
    },
}

impl IndexError {
    /// Returns `true` for errors caused by the shape of otherwise valid JSON.
    #[must_use]
    pub const fn is_schema_error(&self) -> bool {
        matches!(self, Self::NotAnArray { .. } | Self::NotAnObject { .. })
    }
}

impl Error for IndexError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::NotAnArray { .. } | Self::NotAnObject { .. } => None,
        }
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path: Some(path), ..
            } => write!(f, "failed to read {}", path.display()),
            Self::Io { path: None, .. } => write!(f, "failed to read input"),
            Self::Parse(err) => write!(f, "invalid JSON: {err}"),
            Self::NotAnArray { found } => write!(
                f,
                "expected a top-level array of objects, found {found}"
            ),
            Self::NotAnObject { position, found } => write!(
                f,
                "expected an object at document {position}, found {found}"
            ),
        }
    }
}

impl From<serde_json::Error> for IndexError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Names the kind of a JSON value for error messages.
#[must_use]
pub const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schema_errors_are_classified() {
        assert!(IndexError::NotAnArray { found: "object" }.is_schema_error());
        assert!(
            IndexError::NotAnObject {
                position: 3,
                found: "string"
            }
            .is_schema_error()
        );

        let parse = serde_json::from_str::<Value>("{").unwrap_err();
        assert!(!IndexError::from(parse).is_schema_error());
    }

    #[test]
    fn display_names_position_and_kind() {
        let err = IndexError::NotAnObject {
            position: 2,
            found: "number",
        };
        assert_eq!(
            err.to_string(),
            "expected an object at document 2, found number"
        );
    }

    #[test]
    fn io_error_exposes_source() {
        let err = IndexError::Io {
            path: Some(PathBuf::from("plans.json")),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "failed to read plans.json");
        assert!(err.source().is_some());
    }

    #[test]
    fn kinds() {
        assert_eq!(kind_of(&json!(null)), "null");
        assert_eq!(kind_of(&json!(true)), "boolean");
        assert_eq!(kind_of(&json!(1.5)), "number");
        assert_eq!(kind_of(&json!("x")), "string");
        assert_eq!(kind_of(&json!([])), "array");
        assert_eq!(kind_of(&json!({})), "object");
    }
}
