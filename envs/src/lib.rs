//! Bind environment variables into annotated configuration structs
//!
//! `envs` fills the fields of an existing configuration value from environment
//! variables, in place. Each field opts in with an `#[envs("KEY")]` annotation;
//! fields whose variable is unset or empty keep the value they already had, so
//! defaults are simply whatever the struct was constructed with.
//!
//! # Features
//!
//! - **Declarative**: Binding descriptors generated with `#[derive(Envs)]`
//! - **Default preserving**: Unset and empty variables never clear a field
//! - **Nested records**: Annotated struct fields are bound recursively
//! - **Injectable store**: Bind from the process or from any [`Environment`]
//!
//! # Value Parsing
//!
//! - Text (`String`): assigned verbatim
//! - Integers (`i8`..`i128`, `u8`..`u128`, `isize`, `usize`): base-10
//! - Booleans: `true` only for the exact string `"true"`, otherwise `false`
//!
//! Any other field type is rejected with [`BindError::UnsupportedFieldType`]
//! before a single variable is read.
//!
//! # Example
//!
//! ```rust
//! use envs::Envs;
//! use std::collections::HashMap;
//!
//! #[derive(Debug, Default, Envs)]
//! struct Config {
//!     #[envs("APP_PORT")]
//!     pub port: u16,
//!
//!     #[envs("APP_NAME")]
//!     pub name: String,
//!
//!     #[envs("APP_DEBUG")]
//!     pub debug: bool,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let env = HashMap::from([
//!     ("APP_PORT".to_string(), "8080".to_string()),
//!     ("APP_DEBUG".to_string(), "true".to_string()),
//! ]);
//!
//! let mut config = Config {
//!     name: "demo".to_string(),
//!     ..Default::default()
//! };
//! envs::bind_with(&mut config, &env)?;
//!
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.name, "demo");
//! assert!(config.debug);
//! # Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[envs("KEY")]`
//!
//! Read the field from the `KEY` environment variable. `#[envs = "KEY"]` is
//! accepted as well. Fields without an `#[envs]` attribute are never read,
//! unless their type is itself a record deriving `Envs` (see below).
//!
//! ## `#[envs("-")]`
//!
//! Explicitly exclude a field. Excluded fields may have any type.
//!
//! ## Nested records
//!
//! Struct fields that derive `Envs` themselves are bound recursively, with a
//! bare `#[envs]` or with no attribute at all. The key, if any, is ignored for
//! nested records; `#[envs("-")]` still excludes them.
//!
//! ```rust
//! # use envs::Envs;
//! # use std::collections::BTreeMap;
//! #[derive(Debug, Default, Envs)]
//! struct Database {
//!     #[envs("DB_URL")]
//!     pub url: String,
//! }
//!
//! #[derive(Debug, Default, Envs)]
//! struct Config {
//!     #[envs]
//!     pub database: Database,
//!
//!     pub replica: Database,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let env = BTreeMap::from([("DB_URL".to_string(), "postgres://localhost/db".to_string())]);
//! let mut config = Config::default();
//! envs::bind_with(&mut config, &env)?;
//! assert_eq!(config.database.url, "postgres://localhost/db");
//! assert_eq!(config.replica.url, "postgres://localhost/db");
//! # Ok(())
//! # }
//! ```
//!
//! ## `#[envs(prefix = "PREFIX_")]`
//!
//! On the struct itself, prepend a prefix to every key declared on that struct.
//! Nested records keep their own prefix.
//!
//! ```rust
//! # use envs::Envs;
//! #[derive(Envs)]
//! #[envs(prefix = "MYAPP_")]
//! struct Config {
//!     // Reads MYAPP_PORT
//!     #[envs("PORT")]
//!     pub port: u16,
//! }
//! ```
//!
//! # Errors
//!
//! Binding is not transactional. When an integer fails to parse, fields bound
//! before it keep their new values; see [`BindError`].

mod binder;
#[doc(hidden)]
pub mod dispatch;
mod environment;
mod error;
mod field;

pub use binder::{bind, bind_with};
pub use environment::{Environment, ProcessEnv};
pub use envs_derive::Envs;
pub use error::BindError;
pub use field::{Annotation, EnvField, Envs, Field, Integer, Slot, SKIP_MARKER};
