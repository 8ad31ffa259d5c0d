use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use thiserror::Error;

/// Immutable snapshot of environment variables with Windows-style lookup.
///
/// The Windows environment block treats variable names case-insensitively, and
/// hosts export the folder root variables (`UserProfile`, `ProgramFiles(x86)`,
/// ...) in varying casings. Lookups therefore try the exact key first and fall
/// back to an ASCII-case-folded match.
///
/// A snapshot is never mutated after construction, so resolving against the
/// same snapshot always yields the same answer.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<OsString, OsString>,

    folded_vars: HashMap<OsString, OsString>,
}

/// Errors encountered when reading a variable as a string.
#[derive(Debug, Clone, Error)]
pub enum EnvVarError {
    /// There is no variable named `Missing.0` in the snapshot.
    #[error("there is no environment variable `{0:?}`")]
    Missing(OsString),

    /// The variable named `NotUnicode.0` holds a non-unicode value.
    #[error("environment variable `{0:?}` is not valid unicode")]
    NotUnicode(OsString),
}

impl EnvSnapshot {
    /// Capture the current process environment via [`std::env::vars_os`].
    pub fn capture() -> Self {
        std::env::vars_os().collect()
    }

    fn fold_key(key: impl AsRef<OsStr>) -> OsString {
        key.as_ref().to_ascii_uppercase()
    }

    /// Get the raw value of the variable named `key`.
    ///
    /// The exact key wins; otherwise the ASCII-case-folded key is tried, per
    /// Windows environment-block convention.
    ///
    /// # Examples
    /// ```rust
    /// use windirs::os::env::EnvSnapshot;
    ///
    /// let env: EnvSnapshot = [("UserProfile", "/home/u")].into_iter().collect();
    /// assert!(env.get_os("USERPROFILE").is_some());
    /// ```
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        match self.vars.get(key) {
            Some(value) => Some(value),
            None => self
                .folded_vars
                .get(&Self::fold_key(key))
                .map(|value| value.as_ref()),
        }
    }

    /// Get the value of the variable named `key` as a string slice.
    ///
    /// # Returns
    /// `Ok` for an existing unicode variable, otherwise an [`EnvVarError`]
    /// naming the failing key.
    ///
    /// # Examples
    /// ```rust
    /// use windirs::os::env::EnvSnapshot;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let env: EnvSnapshot = [("SystemRoot", "C:\\Windows")].into_iter().collect();
    /// let _root = env.get("SystemRoot")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn get(&self, key: impl AsRef<OsStr>) -> Result<&str, EnvVarError> {
        let key = key.as_ref();
        self.get_os(key)
            .ok_or_else(|| EnvVarError::Missing(key.to_os_string()))?
            .to_str()
            .ok_or_else(|| EnvVarError::NotUnicode(key.to_os_string()))
    }
}

impl<K: Into<OsString>, V: Into<OsString>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars: HashMap<OsString, OsString> = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        let folded_vars = vars
            .iter()
            .map(|(key, value)| (Self::fold_key(key), value.clone()))
            .collect();
        Self { vars, folded_vars }
    }
}
