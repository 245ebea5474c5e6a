//! The binding algorithm
//!
//! Binding runs in two passes over the descriptor tree. The first pass rejects
//! fields that can never be assigned, before any environment variable is read.
//! The second pass reads, parses and assigns, depth-first in declaration order,
//! and stops at the first parse failure without undoing earlier assignments.

use crate::environment::{Environment, ProcessEnv};
use crate::error::BindError;
use crate::field::{EnvField, Field, Slot};

/// Bind environment variables from the host process into `target`.
///
/// See [`bind_with`] for the rules.
pub fn bind<T>(target: &mut T) -> Result<(), BindError>
where
    T: EnvField + ?Sized,
{
    bind_with(target, &ProcessEnv)
}

/// Bind variables from `env` into `target`.
///
/// For each annotated field, in declaration order:
///
/// - nested records are bound recursively
/// - fields whose variable is unset or empty keep their current value
/// - text is assigned verbatim, integers are parsed base-10, booleans are
///   `true` only for the exact string `"true"`
///
/// # Errors
///
/// - `target` is not a structured record
/// - An annotated field is read-only or of an unsupported type; nothing is
///   assigned in that case
/// - An integer value fails to parse; fields assigned before it stay assigned
pub fn bind_with<T, E>(target: &mut T, env: &E) -> Result<(), BindError>
where
    T: EnvField + ?Sized,
    E: Environment + ?Sized,
{
    let fields = match target.slot() {
        Slot::Nested(fields) => fields,
        other => {
            return Err(BindError::InvalidTargetKind {
                found: other.kind(),
            })
        }
    };

    tracing::debug!(fields = fields.len(), "loading envs");
    validate(&fields)?;
    assign(fields, env)?;
    tracing::debug!("done loading envs");

    Ok(())
}

fn validate(fields: &[Field<'_>]) -> Result<(), BindError> {
    for field in fields {
        if !field.annotation.is_bindable() {
            continue;
        }

        match &field.slot {
            Slot::Nested(inner) => {
                validate(inner).map_err(|e| BindError::nested(field.name, e))?;
            }
            _ if field.annotation.key().is_none() => {}
            Slot::ReadOnly => {
                return Err(BindError::UnassignableField {
                    field: field.name.to_string(),
                });
            }
            Slot::Unsupported(type_name) => {
                return Err(BindError::UnsupportedFieldType {
                    field: field.name.to_string(),
                    type_name: *type_name,
                });
            }
            Slot::Text(_) | Slot::Integer(_) | Slot::Boolean(_) => {}
        }
    }

    Ok(())
}

fn assign<E>(fields: Vec<Field<'_>>, env: &E) -> Result<(), BindError>
where
    E: Environment + ?Sized,
{
    for Field {
        name,
        annotation,
        slot,
    } in fields
    {
        if !annotation.is_bindable() {
            tracing::trace!(field = name, "field is not bindable, skipping");
            continue;
        }

        let slot = match slot {
            Slot::Nested(inner) => {
                assign(inner, env).map_err(|e| BindError::nested(name, e))?;
                continue;
            }
            leaf => leaf,
        };

        let Some(key) = annotation.key() else {
            continue;
        };

        let value = match env.lookup(key) {
            Some(value) if !value.is_empty() => value,
            _ => {
                tracing::debug!(
                    field = name,
                    key,
                    "environment variable is not set, keeping current value"
                );
                continue;
            }
        };

        match slot {
            Slot::Text(text) => *text = value,
            Slot::Integer(number) => {
                number
                    .assign_str(&value)
                    .map_err(|source| BindError::InvalidIntegerValue {
                        key: key.to_string(),
                        value,
                        source,
                    })?;
            }
            Slot::Boolean(flag) => *flag = value == "true",
            // rejected by validate
            Slot::Nested(_) | Slot::ReadOnly | Slot::Unsupported(_) => continue,
        }

        tracing::trace!(field = name, key, "field bound");
    }

    Ok(())
}
