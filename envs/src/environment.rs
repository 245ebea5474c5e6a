//! Environment stores the binder reads from

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::hash::BuildHasher;

/// Read-only key/value lookup used by the binder.
pub trait Environment {
    /// Value of `key`, or `None` if it is not set.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The host process environment.
///
/// Values that are not valid UTF-8 are converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}
