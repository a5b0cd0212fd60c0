//! Page rendering with Handlebars.
//!
//! Templates are compiled into the binary. Values are HTML-escaped by the
//! default Handlebars escape function, so tool metadata can never inject markup.

mod colophon;
mod index;

pub use colophon::{COLOPHON_PAGE, ColophonRenderer};
pub use index::{INDEX_PAGE, IndexRenderer, UNCATEGORIZED};

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{Result, ToolsiteError};

/// Thin wrapper over a Handlebars registry
pub struct Templates {
    handlebars: Handlebars<'static>,
}

impl Default for Templates {
    fn default() -> Self {
        Self::new()
    }
}

impl Templates {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        Self { handlebars }
    }

    /// Register a named template for later use
    pub fn register(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| ToolsiteError::Template(format!("Failed to register template '{}': {}", name, e)))
    }

    /// Render a previously registered template with any serializable context
    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(name, context)
            .map_err(|e| ToolsiteError::Template(format!("Failed to render template '{}': {}", name, e)))
    }
}
