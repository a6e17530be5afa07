//! Render contexts and the cross-reference resolver.
//!
//! Most generated files only need data from their own unit. The ones that
//! don't (the host manifest, webpack config, entry point and declaration
//! stubs) need one entry per microfrontend, and the *format* of those
//! entries must byte-match what each microfrontend's own config emits.
//! [`RemoteReference::url`] is the single place that format is defined.

use std::collections::BTreeMap;
use std::collections::HashSet;

use crate::domain::config::{ConfigModel, MicrofrontendDescriptor};
use crate::domain::error::DomainError;
use crate::domain::plan::{GenerationKind, GenerationTarget, TargetScope};

// ── RenderContext ────────────────────────────────────────────────────────────

/// Variable substitution context for one template.
///
/// Backed by a `BTreeMap` so iteration order, and therefore any diagnostic
/// output derived from it, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }
}

// ── RemoteReference ──────────────────────────────────────────────────────────

/// A microfrontend's externally addressable location, as the host sees it.
///
/// Computed fresh per generation run; never persisted independently of the
/// rendered file that embodies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteReference {
    name: String,
    port: u16,
}

impl RemoteReference {
    pub fn new(descriptor: &MicrofrontendDescriptor) -> Self {
        Self {
            name: descriptor.name().to_string(),
            port: descriptor.port(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The module-federation remote URL.
    ///
    /// This is the byte-format contract of the whole system: the port digits
    /// emitted here must equal the digits the microfrontend's own webpack
    /// config binds. Scheme and host literal are fixed.
    pub fn url(&self) -> String {
        format!("{}@http://localhost:{}/remoteEntry.js", self.name, self.port)
    }
}

// ── CrossReferenceResolver ───────────────────────────────────────────────────

/// Produces the data context for every rendered template.
///
/// Pure: reads the [`ConfigModel`], writes nothing. If the model it receives
/// violates the uniqueness invariants that validation should have caught,
/// it fails fast with [`DomainError::InvariantViolation`] rather than
/// generating an inconsistent tree.
pub struct CrossReferenceResolver;

impl CrossReferenceResolver {
    /// Context for one generation target.
    ///
    /// Static copies get an empty context; host targets share the full host
    /// context; microfrontend targets get only their own descriptor's data.
    pub fn context_for(
        config: &ConfigModel,
        target: &GenerationTarget,
    ) -> Result<RenderContext, DomainError> {
        if target.kind == GenerationKind::StaticCopy {
            return Ok(RenderContext::new());
        }
        match target.scope {
            TargetScope::Host => Self::host_context(config),
            TargetScope::Microfrontend(index) => {
                let descriptor = config.microfrontends().get(index).ok_or_else(|| {
                    DomainError::InvariantViolation {
                        detail: format!(
                            "target references microfrontend index {index} but the model has {}",
                            config.microfrontends().len()
                        ),
                    }
                })?;
                Ok(Self::microfrontend_context(descriptor))
            }
        }
    }

    /// Context shared by all rendered host targets.
    pub fn host_context(config: &ConfigModel) -> Result<RenderContext, DomainError> {
        Self::assert_uniqueness(config)?;

        let remotes: Vec<RemoteReference> = config
            .microfrontends()
            .iter()
            .map(RemoteReference::new)
            .collect();

        let remote_entries = remotes
            .iter()
            .map(|r| format!("        '{}': '{}',", r.name(), r.url()))
            .collect::<Vec<_>>()
            .join("\n");

        let remote_imports = remotes
            .iter()
            .map(|r| {
                format!(
                    "const {} = lazy(() => import('{}/App'));",
                    pascal_case(r.name()),
                    r.name()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let remote_outlets = remotes
            .iter()
            .map(|r| format!("      <{} />", pascal_case(r.name())))
            .collect::<Vec<_>>()
            .join("\n");

        let remote_declarations = remotes
            .iter()
            .map(|r| format!("declare module '{}/App';", r.name()))
            .collect::<Vec<_>>()
            .join("\n");

        // Inserted inside a JSON string value, hence the escaped quotes.
        let start_all = remotes
            .iter()
            .map(|r| format!("\\\"npm start --prefix {}\\\"", r.name()))
            .collect::<Vec<_>>()
            .join(" ");

        Ok(RenderContext::new()
            .with("APP_NAME", config.app_name())
            .with("HOST_PORT", config.host_port().to_string())
            .with("REMOTE_ENTRIES", remote_entries)
            .with("REMOTE_IMPORTS", remote_imports)
            .with("REMOTE_OUTLETS", remote_outlets)
            .with("REMOTE_DECLARATIONS", remote_declarations)
            .with("START_ALL", start_all))
    }

    /// Context for one microfrontend's own targets. No cross-unit data: the
    /// port string here and the one in the host's remote entry both come
    /// verbatim from the same descriptor field.
    pub fn microfrontend_context(descriptor: &MicrofrontendDescriptor) -> RenderContext {
        RenderContext::new()
            .with("MF_NAME", descriptor.name())
            .with("MF_PORT", descriptor.port().to_string())
    }

    /// Re-check of the uniqueness invariants validation already enforces.
    fn assert_uniqueness(config: &ConfigModel) -> Result<(), DomainError> {
        let mut ports = HashSet::new();
        ports.insert(config.host_port());
        let mut names = HashSet::new();
        for mf in config.microfrontends() {
            if !ports.insert(mf.port()) {
                return Err(DomainError::InvariantViolation {
                    detail: format!("duplicate port {} reached the resolver", mf.port()),
                });
            }
            if !names.insert(mf.name()) {
                return Err(DomainError::InvariantViolation {
                    detail: format!("duplicate name '{}' reached the resolver", mf.name()),
                });
            }
        }
        Ok(())
    }
}

/// `cart` → `Cart`, `order-history` → `OrderHistory`.
fn pascal_case(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────────────────
