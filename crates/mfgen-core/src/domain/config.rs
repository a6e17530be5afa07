//! The validated configuration model.
//!
//! [`RawConfig`] is the untyped shape supplied by the input collaborator
//! (CLI flags, interactive prompts, or a deserialized file). [`ConfigModel`]
//! is only constructible through [`ConfigModel::from_raw`], which runs the
//! full validation sequence, so no partially valid model ever escapes this
//! module.
//!
//! Ports are `u16` throughout, so the ≤65535 upper bound is enforced by the
//! type; `0` is rejected as non-positive.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── Raw input shape ──────────────────────────────────────────────────────────

/// Untyped configuration as supplied by the outside world.
///
/// This is the core's only contract with the input collaborator:
/// `{ appName, hostPort, microfrontends: [{name, port}] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    pub app_name: String,
    pub host_port: u16,
    #[serde(default)]
    pub microfrontends: Vec<RawMicrofrontend>,
}

/// One raw microfrontend entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMicrofrontend {
    pub name: String,
    pub port: u16,
}

// ── Validated model ──────────────────────────────────────────────────────────

/// Immutable, validated description of what to generate.
///
/// Owned by the top-level run and passed by shared reference to every
/// component; nothing below this type mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigModel {
    app_name: String,
    host_port: u16,
    microfrontends: Vec<MicrofrontendDescriptor>,
}

/// A validated `{name, port}` microfrontend descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MicrofrontendDescriptor {
    name: String,
    port: u16,
}

impl MicrofrontendDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl ConfigModel {
    /// Validate a raw configuration and construct the model.
    ///
    /// Checks, in order:
    /// 1. `appName` non-empty and filesystem-safe
    /// 2. `hostPort` positive
    /// 3. every microfrontend port positive
    /// 4. all ports (host + microfrontends) pairwise distinct
    /// 5. all microfrontend names pairwise distinct and filesystem-safe
    ///
    /// Any violation returns a [`DomainError::Configuration`] naming the
    /// offending field and value; generation must not proceed.
    pub fn from_raw(raw: RawConfig) -> Result<Self, DomainError> {
        validate_name("appName", &raw.app_name)?;
        validate_port("hostPort", raw.host_port)?;

        for mf in &raw.microfrontends {
            validate_port("microfrontends.port", mf.port)?;
        }

        // Ports pairwise distinct (host included). O(n²) is fine here: the
        // descriptor list is human-entered and tiny.
        let mut ports = vec![("hostPort", raw.host_port)];
        for mf in &raw.microfrontends {
            if let Some((other_field, _)) = ports.iter().find(|(_, p)| *p == mf.port) {
                return Err(DomainError::configuration(
                    "microfrontends.port",
                    mf.port.to_string(),
                    format!("port {} is already used by {}", mf.port, other_field),
                ));
            }
            ports.push(("microfrontends.port", mf.port));
        }

        // Names pairwise distinct and filesystem-safe.
        for (i, mf) in raw.microfrontends.iter().enumerate() {
            validate_name("microfrontends.name", &mf.name)?;
            if raw.microfrontends[..i].iter().any(|m| m.name == mf.name) {
                return Err(DomainError::configuration(
                    "microfrontends.name",
                    mf.name.clone(),
                    "microfrontend names must be unique",
                ));
            }
        }

        Ok(Self {
            app_name: raw.app_name,
            host_port: raw.host_port,
            microfrontends: raw
                .microfrontends
                .into_iter()
                .map(|m| MicrofrontendDescriptor {
                    name: m.name,
                    port: m.port,
                })
                .collect(),
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn host_port(&self) -> u16 {
        self.host_port
    }

    /// The descriptors in prompt order. Order is preserved through generation
    /// but carries no semantic weight.
    pub fn microfrontends(&self) -> &[MicrofrontendDescriptor] {
        &self.microfrontends
    }
}

// ── Validation helpers ───────────────────────────────────────────────────────

/// A name must be usable both as a directory name and a package-manifest
/// name: non-empty, no path separators, no leading dot, portable charset.
fn validate_name(field: &'static str, name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::configuration(
            field,
            name,
            "name cannot be empty",
        ));
    }
    if name.starts_with('.') {
        return Err(DomainError::configuration(
            field,
            name,
            "name cannot start with '.'",
        ));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(DomainError::configuration(
            field,
            name,
            "name cannot contain path separators",
        ));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(DomainError::configuration(
            field,
            name,
            "name may only contain letters, digits, '-' and '_'",
        ));
    }
    Ok(())
}

fn validate_port(field: &'static str, port: u16) -> Result<(), DomainError> {
    if port == 0 {
        return Err(DomainError::configuration(
            field,
            "0",
            "port must be positive",
        ));
    }
    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────────
