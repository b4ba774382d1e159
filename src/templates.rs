//! HTML page rendering over embedded minijinja templates.
//!
//! Both page templates are compiled into the binary with `include_str!`,
//! so the process has no runtime file dependencies. Auto-escaping applies
//! to every interpolated value (`.html` template names).

use minijinja::{Environment, context};

use crate::error::BoardError;
use crate::persistence::models::ContactMessage;

const INDEX_HTML: &str = include_str!("../templates/index.html");
const MESSAGES_HTML: &str = include_str!("../templates/messages.html");

/// Template engine holding the two page templates.
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Compiles the embedded templates into a fresh environment.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Template`] if a template fails to parse.
    pub fn new() -> Result<Self, BoardError> {
        let mut env = Environment::new();
        env.add_template("index.html", INDEX_HTML)
            .map_err(|e| BoardError::Template(e.to_string()))?;
        env.add_template("messages.html", MESSAGES_HTML)
            .map_err(|e| BoardError::Template(e.to_string()))?;
        Ok(Self { env })
    }

    /// Renders the home page with the contact form.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Template`] on render failure.
    pub fn render_index(&self) -> Result<String, BoardError> {
        self.render("index.html", context! {})
    }

    /// Renders the listing page for the given records.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Template`] on render failure.
    pub fn render_messages(&self, contacts: &[ContactMessage]) -> Result<String, BoardError> {
        self.render("messages.html", context! { contacts })
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, BoardError> {
        self.env
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(|e| BoardError::Template(e.to_string()))
    }
}
