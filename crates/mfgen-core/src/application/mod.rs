//! Application layer: use-case orchestration over the domain.
//!
//! Defines the driven ports (implemented by `mfgen-adapters`) and the
//! [`GenerateService`] that walks a [`crate::domain::GenerationPlan`] and
//! materializes it.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::GenerateService;
