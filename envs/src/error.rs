//! Error types for environment variable binding

use std::num::ParseIntError;

/// Errors that can occur when binding environment variables into a record.
///
/// Binding is not transactional: when an error is returned, fields bound
/// before the failure keep their new values.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The binding target is not a structured record.
    ///
    /// Occurs when a primitive such as `&mut String` or `&mut i32` is passed
    /// to [`bind`](crate::bind). No field is inspected.
    #[error("Binding target must be a structured record, found {found}")]
    InvalidTargetKind {
        /// Kind of the value that was passed instead
        found: &'static str,
    },

    /// An annotated field cannot be mutated through the target reference.
    ///
    /// Shared references and shared-ownership pointers (`&T`, `Rc<T>`,
    /// `Arc<T>`) are read-only from the binder's point of view.
    #[error("Field '{field}' cannot be assigned through the binding target")]
    UnassignableField {
        /// Name of the offending field
        field: String,
    },

    /// An annotated field has a type the binder does not handle.
    #[error("Field '{field}' has unsupported type {type_name}")]
    UnsupportedFieldType {
        /// Name of the offending field
        field: String,
        /// Fully qualified type name of the field
        type_name: &'static str,
    },

    /// Failed to parse an environment variable value into an integer field.
    #[error("Failed to parse environment variable '{key}' value '{value}' as integer: {source}")]
    InvalidIntegerValue {
        /// Name of the environment variable
        key: String,
        /// Raw value read from the environment
        value: String,
        /// Underlying parse error
        source: ParseIntError,
    },

    /// Binding a nested record failed.
    #[error("Failed to bind nested field '{field}': {source}")]
    Nested {
        /// Name of the nested field in the enclosing record
        field: String,
        /// Error raised while binding the nested record
        source: Box<BindError>,
    },
}

impl BindError {
    pub(crate) fn nested(field: impl Into<String>, source: BindError) -> Self {
        Self::Nested {
            field: field.into(),
            source: Box::new(source),
        }
    }

    /// Dotted path of the field that caused the error, if any.
    ///
    /// For `Nested` errors the path walks down to the innermost field,
    /// e.g. `database.pool.max_size`.
    pub fn path(&self) -> Option<String> {
        match self {
            Self::InvalidTargetKind { .. } | Self::InvalidIntegerValue { .. } => None,
            Self::UnassignableField { field } | Self::UnsupportedFieldType { field, .. } => {
                Some(field.clone())
            }
            Self::Nested { field, source } => match source.path() {
                Some(rest) => Some(format!("{field}.{rest}")),
                None => Some(field.clone()),
            },
        }
    }

    /// The innermost error, unwrapping any `Nested` layers.
    pub fn root_cause(&self) -> &BindError {
        match self {
            Self::Nested { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
