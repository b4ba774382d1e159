//! Page handlers: home, form submission, message listing.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::error::BoardError;
use crate::persistence::models::NewContact;

/// Form body for `POST /contact`.
///
/// Every field is optional at the wire level; presence is enforced by
/// [`NewContact::from_form`], not by deserialization, so an absent field
/// becomes a clean validation error instead of a framework rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    /// Submitter name.
    #[serde(default)]
    pub name: Option<String>,
    /// Submitter email.
    #[serde(default)]
    pub email: Option<String>,
    /// Message body.
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /` — Home page with the contact form.
///
/// No persistence access.
///
/// # Errors
///
/// Returns [`BoardError::Template`] if rendering fails.
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, BoardError> {
    let body = state.templates.render_index()?;
    Ok(Html(body))
}

/// `POST /contact` — Accepts a submission and redirects to the home page.
///
/// An absent field is rejected before the store is touched; a
/// present-but-empty one goes through verbatim.
///
/// # Errors
///
/// Returns [`BoardError::Validation`] on a missing or oversized field and
/// [`BoardError::Persistence`] on database failure.
pub async fn submit_contact(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<impl IntoResponse, BoardError> {
    let contact = NewContact::from_form(form.name, form.email, form.message)?;
    let id = state.store.create(&contact).await?;

    tracing::info!(id, "contact stored");
    Ok(Redirect::to("/"))
}

/// `GET /messages` — Lists every stored submission.
///
/// An empty store renders an empty list, not an error.
///
/// # Errors
///
/// Returns [`BoardError::Persistence`] on database failure and
/// [`BoardError::Template`] if rendering fails.
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, BoardError> {
    let contacts = state.store.list_all().await?;
    let body = state.templates.render_messages(&contacts)?;
    Ok(Html(body))
}

/// Page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/contact", post(submit_contact))
        .route("/messages", get(list_messages))
}
