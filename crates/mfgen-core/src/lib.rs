//! mfgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the mfgen
//! micro-frontend scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           mfgen-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerateService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Filesystem, Render, Install)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     mfgen-adapters (Infrastructure)     │
//! │  (LocalFilesystem, SimpleRenderer, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ConfigModel, GenerationPlan, Resolver) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mfgen_core::{
//!     application::GenerateService,
//!     domain::{ConfigModel, RawConfig, RawMicrofrontend},
//! };
//!
//! // 1. Validate the raw configuration
//! let raw = RawConfig {
//!     app_name: "shop".into(),
//!     host_port: 3000,
//!     microfrontends: vec![RawMicrofrontend { name: "cart".into(), port: 3001 }],
//! };
//! let config = ConfigModel::from_raw(raw).unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = GenerateService::new(renderer, filesystem);
//! let written = service.generate(&config, "./output").unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService,
        ports::{Filesystem, PostGenerationHook, TemplateRenderer},
    };
    pub use crate::domain::{
        ConfigModel, CrossReferenceResolver, GenerationKind, GenerationPlan, GenerationTarget,
        MicrofrontendDescriptor, RawConfig, RawMicrofrontend, RemoteReference, RenderContext,
        TargetScope, TemplateId,
    };
    pub use crate::error::{GenError, GenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
