//! Name derivations used by the generated files.
//!
//! Example names are kebab-case (`blind-auction`). Generated artifacts need a
//! package name, a heading, a Solidity contract name, and a category heading
//! derived from them.

use crate::error::ConfigError;

/// Prefix of every generated package name.
pub const PACKAGE_PREFIX: &str = "fhevm-example-";

/// Upper-cases the first character and leaves the rest untouched.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Heading for an example README: `blind-auction` becomes `Blind auction`.
#[must_use]
pub fn display_title(name: &str) -> String {
    capitalize(name).replace('-', " ")
}

/// Contract name for the single-example generator: `counter` becomes `Counter`.
#[must_use]
pub fn contract_name(name: &str) -> String {
    capitalize(name)
}

/// Package manifest name: `counter` becomes `fhevm-example-counter`.
#[must_use]
pub fn package_name(name: &str) -> String {
    format!("{PACKAGE_PREFIX}{name}")
}

/// Checks that `value` can be used as a single directory name.
///
/// # Errors
///
/// Returns `ConfigError::InvalidName` if the value is empty, is `.` or `..`,
/// or contains a path separator.
pub fn validate_component(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let reason = if value.trim().is_empty() {
        Some("must not be empty")
    } else if value == "." || value == ".." {
        Some("must not be a relative path marker")
    } else if value.contains(['/', '\\']) {
        Some("must not contain path separators")
    } else {
        None
    };

    reason.map_or(Ok(()), |reason| {
        Err(ConfigError::InvalidName {
            field,
            value: value.to_string(),
            reason,
        })
    })
}
