//! Domain layer: pure logic, no I/O, no external dependencies.
//!
//! - [`config`]: the validated configuration model (app name, host port,
//!   microfrontend descriptors) and its raw input shape.
//! - [`plan`]: the fixed catalog of generation targets for a configuration.
//! - [`context`]: render contexts and the cross-reference resolver that
//!   keeps host and microfrontend configs consistent.
//! - [`error`]: domain error taxonomy.

pub mod config;
pub mod context;
pub mod error;
pub mod plan;

pub use config::{ConfigModel, MicrofrontendDescriptor, RawConfig, RawMicrofrontend};
pub use context::{CrossReferenceResolver, RemoteReference, RenderContext};
pub use error::{DomainError, ErrorCategory};
pub use plan::{GenerationKind, GenerationPlan, GenerationTarget, TargetScope, TemplateId};
