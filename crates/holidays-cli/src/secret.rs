//! Secret references in `config.toml`.
//!
//! A credential value may point outside the file instead of holding the secret
//! itself:
//!
//! - `env::SALLING_TOKEN` reads the environment variable
//! - `pass::salling/holidays` takes the first line of `pass show salling/holidays`
//!
//! Anything else is the secret in plain text.

use std::process::Command;

/// Where a credential value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretRef<'a> {
    Plain(&'a str),
    Env(&'a str),
    Pass(&'a str),
}

impl<'a> SecretRef<'a> {
    pub fn parse(value: &'a str) -> Self {
        if let Some(var) = value.strip_prefix("env::") {
            Self::Env(var)
        } else if let Some(entry) = value.strip_prefix("pass::") {
            Self::Pass(entry)
        } else {
            Self::Plain(value)
        }
    }

    /// Whether the value is a reference rather than the secret itself.
    pub fn is_reference(&self) -> bool {
        !matches!(self, Self::Plain(_))
    }

    fn fetch(self) -> Result<String, String> {
        match self {
            Self::Plain(value) => Ok(value.to_string()),
            Self::Env(var) => std::env::var(var)
                .map_err(|_| format!("environment variable `{}` is not set", var)),
            Self::Pass(entry) => pass_first_line(entry),
        }
    }
}

/// Resolves the credential `field` (e.g. `auth.token`), naming it on failure.
pub fn resolve(field: &str, value: &str) -> Result<String, String> {
    SecretRef::parse(value)
        .fetch()
        .map_err(|e| format!("cannot resolve {}: {}", field, e))
}

fn pass_first_line(entry: &str) -> Result<String, String> {
    let output = Command::new("pass")
        .args(["show", entry])
        .output()
        .map_err(|e| format!("cannot run pass: {}", e))?;

    if !output.status.success() {
        return Err(format!(
            "pass entry `{}` unavailable: {}",
            entry,
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    match stdout.lines().next().map(str::trim) {
        Some(line) if !line.is_empty() => Ok(line.to_string()),
        _ => Err(format!("pass entry `{}` is empty", entry)),
    }
}
