//! The generation plan: an explicit, statically checkable table of targets.
//!
//! The source of truth for *what files exist* in a generated tree. The host
//! target set is fixed; the microfrontend target set is instantiated once
//! per descriptor. Template *contents* live in the adapters crate, keyed by
//! [`TemplateId`]; this module only knows identities and paths.

use std::path::PathBuf;

use crate::domain::config::ConfigModel;

// ── Template identities ──────────────────────────────────────────────────────

/// Identifier of one template in the built-in catalog.
///
/// The catalog is fixed at build time; an id that the renderer does not
/// recognize is an internal defect, never a user-facing condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    HostManifest,
    HostWebpackConfig,
    HostIndexHtml,
    HostEntry,
    HostDeclarations,
    MfManifest,
    MfWebpackConfig,
    MfIndexHtml,
    MfApp,
    MfBootstrap,
    MfEntry,
    Tsconfig,
    StylesMain,
}

impl TemplateId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HostManifest => "host/package.json",
            Self::HostWebpackConfig => "host/webpack.config.js",
            Self::HostIndexHtml => "host/public/index.html",
            Self::HostEntry => "host/src/index.tsx",
            Self::HostDeclarations => "host/src/declarations.d.ts",
            Self::MfManifest => "microfrontend/package.json",
            Self::MfWebpackConfig => "microfrontend/webpack.config.js",
            Self::MfIndexHtml => "microfrontend/public/index.html",
            Self::MfApp => "microfrontend/src/App.tsx",
            Self::MfBootstrap => "microfrontend/src/bootstrap.tsx",
            Self::MfEntry => "microfrontend/src/index.tsx",
            Self::Tsconfig => "shared/tsconfig.json",
            Self::StylesMain => "shared/src/styles/main.scss",
        }
    }

    /// Every id in the catalog, for startup-time verification.
    pub const ALL: &'static [TemplateId] = &[
        Self::HostManifest,
        Self::HostWebpackConfig,
        Self::HostIndexHtml,
        Self::HostEntry,
        Self::HostDeclarations,
        Self::MfManifest,
        Self::MfWebpackConfig,
        Self::MfIndexHtml,
        Self::MfApp,
        Self::MfBootstrap,
        Self::MfEntry,
        Self::Tsconfig,
        Self::StylesMain,
    ];
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Targets ──────────────────────────────────────────────────────────────────

/// Whether a target is copied verbatim or rendered with a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    /// Byte content copied verbatim from the catalog.
    StaticCopy,
    /// Rendered through the template renderer with a resolver-built context.
    Rendered,
}

/// Which unit a target belongs to, and therefore which context it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetScope {
    Host,
    /// Index into `ConfigModel::microfrontends`.
    Microfrontend(usize),
}

/// One file to produce: its output path (relative to the app root), the
/// template that supplies its content, and its data dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTarget {
    pub path: PathBuf,
    pub template: TemplateId,
    pub kind: GenerationKind,
    pub scope: TargetScope,
}

/// The complete set of directories and file targets for one configuration.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    /// Directories to create before any file is written, app-root relative,
    /// in creation order.
    pub directories: Vec<PathBuf>,
    pub targets: Vec<GenerationTarget>,
}

/// Fixed host target table: (relative path, template, kind).
const HOST_TARGETS: &[(&str, TemplateId, GenerationKind)] = &[
    ("package.json", TemplateId::HostManifest, GenerationKind::Rendered),
    ("webpack.config.js", TemplateId::HostWebpackConfig, GenerationKind::Rendered),
    ("tsconfig.json", TemplateId::Tsconfig, GenerationKind::StaticCopy),
    ("public/index.html", TemplateId::HostIndexHtml, GenerationKind::Rendered),
    ("src/index.tsx", TemplateId::HostEntry, GenerationKind::Rendered),
    ("src/declarations.d.ts", TemplateId::HostDeclarations, GenerationKind::Rendered),
    ("src/styles/main.scss", TemplateId::StylesMain, GenerationKind::StaticCopy),
];

/// Fixed per-microfrontend target table, paths relative to the unit dir.
const MF_TARGETS: &[(&str, TemplateId, GenerationKind)] = &[
    ("package.json", TemplateId::MfManifest, GenerationKind::Rendered),
    ("webpack.config.js", TemplateId::MfWebpackConfig, GenerationKind::Rendered),
    ("tsconfig.json", TemplateId::Tsconfig, GenerationKind::StaticCopy),
    ("public/index.html", TemplateId::MfIndexHtml, GenerationKind::Rendered),
    ("src/App.tsx", TemplateId::MfApp, GenerationKind::Rendered),
    ("src/bootstrap.tsx", TemplateId::MfBootstrap, GenerationKind::StaticCopy),
    ("src/index.tsx", TemplateId::MfEntry, GenerationKind::StaticCopy),
    ("src/styles/main.scss", TemplateId::StylesMain, GenerationKind::StaticCopy),
];

const UNIT_SKELETON: &[&str] = &["public", "src", "src/styles"];

impl GenerationPlan {
    /// Build the plan for a validated configuration.
    ///
    /// Deterministic: identical configurations yield identical plans.
    pub fn for_config(config: &ConfigModel) -> Self {
        let mut directories = Vec::new();
        let mut targets = Vec::new();

        for dir in UNIT_SKELETON {
            directories.push(PathBuf::from(dir));
        }
        for (path, template, kind) in HOST_TARGETS {
            targets.push(GenerationTarget {
                path: PathBuf::from(path),
                template: *template,
                kind: *kind,
                scope: TargetScope::Host,
            });
        }

        for (index, mf) in config.microfrontends().iter().enumerate() {
            let unit = PathBuf::from(mf.name());
            directories.push(unit.clone());
            for dir in UNIT_SKELETON {
                directories.push(unit.join(dir));
            }
            for (path, template, kind) in MF_TARGETS {
                targets.push(GenerationTarget {
                    path: unit.join(path),
                    template: *template,
                    kind: *kind,
                    scope: TargetScope::Microfrontend(index),
                });
            }
        }

        Self {
            directories,
            targets,
        }
    }

    pub fn file_count(&self) -> usize {
        self.targets.len()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{ConfigModel, RawConfig, RawMicrofrontend};

    fn config(mfs: &[(&str, u16)]) -> ConfigModel {
        ConfigModel::from_raw(RawConfig {
            app_name: "shop".into(),
            host_port: 3000,
            microfrontends: mfs
                .iter()
                .map(|(n, p)| RawMicrofrontend {
                    name: (*n).into(),
                    port: *p,
                })
                .collect(),
        })
        .unwrap()
    }

    #[test]
    fn host_only_plan_has_fixed_target_set() {
        let plan = GenerationPlan::for_config(&config(&[]));
        assert_eq!(plan.file_count(), HOST_TARGETS.len());
        assert!(plan.targets.iter().all(|t| t.scope == TargetScope::Host));
    }

    #[test]
    fn per_microfrontend_targets_are_instantiated_once_per_descriptor() {
        let plan = GenerationPlan::for_config(&config(&[("cart", 3001), ("catalog", 3002)]));
        assert_eq!(
            plan.file_count(),
            HOST_TARGETS.len() + 2 * MF_TARGETS.len()
        );

        let cart_paths: Vec<_> = plan
            .targets
            .iter()
            .filter(|t| t.scope == TargetScope::Microfrontend(0))
            .map(|t| t.path.clone())
            .collect();
        assert!(cart_paths.contains(&PathBuf::from("cart/webpack.config.js")));
        assert!(cart_paths.contains(&PathBuf::from("cart/src/bootstrap.tsx")));
    }

    #[test]
    fn plan_covers_the_minimum_contract_paths() {
        let plan = GenerationPlan::for_config(&config(&[("cart", 3001)]));
        let paths: Vec<String> = plan
            .targets
            .iter()
            .map(|t| t.path.display().to_string())
            .collect();
        for expected in [
            "package.json",
            "public/index.html",
            "webpack.config.js",
            "tsconfig.json",
            "src/index.tsx",
            "src/declarations.d.ts",
            "src/styles/main.scss",
            "cart/package.json",
            "cart/public/index.html",
            "cart/webpack.config.js",
            "cart/tsconfig.json",
            "cart/src/App.tsx",
            "cart/src/index.tsx",
            "cart/src/bootstrap.tsx",
            "cart/src/styles/main.scss",
        ] {
            assert!(paths.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn directories_precede_unit_files() {
        let plan = GenerationPlan::for_config(&config(&[("cart", 3001)]));
        assert!(plan.directories.contains(&PathBuf::from("cart/src/styles")));
        assert!(plan.directories.contains(&PathBuf::from("src/styles")));
    }

    #[test]
    fn no_duplicate_target_paths() {
        let plan = GenerationPlan::for_config(&config(&[("cart", 3001), ("catalog", 3002)]));
        let mut paths: Vec<_> = plan.targets.iter().map(|t| &t.path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), plan.file_count());
    }
}
