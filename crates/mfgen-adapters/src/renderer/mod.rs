//! Template rendering adapters.

pub mod simple;

pub use simple::SimpleRenderer;
