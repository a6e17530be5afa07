//! Simple variable substitution renderer over the built-in catalog.

use mfgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{RenderContext, TemplateId},
    error::GenResult,
};
use tracing::instrument;

use crate::catalog;

/// Renderer using basic `{{VAR}}` substitution.
///
/// Deterministic: the same template id and context always produce
/// byte-identical output. Any catalog inconsistency (an unknown id, or a
/// required variable absent from the context) is an internal defect and
/// aborts the run.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(template = %id))]
    fn render(&self, id: TemplateId, context: &RenderContext) -> GenResult<String> {
        let entry = catalog::entry(id).ok_or_else(|| ApplicationError::UnknownTemplate {
            id: id.as_str().to_string(),
        })?;

        let mut output = entry.text.to_string();
        for variable in entry.required {
            let value =
                context
                    .get(variable)
                    .ok_or_else(|| ApplicationError::MissingVariable {
                        template: id.as_str().to_string(),
                        variable,
                    })?;
            output = output.replace(&format!("{{{{{variable}}}}}"), value);
        }

        Ok(output)
    }
}
