//! # contact-board
//!
//! Minimal contact-form web application: a home page with a form, a
//! submission endpoint that persists one record per POST, and a listing
//! page that renders everything submitted so far.
//!
//! Control flow is strictly request-response — each request performs at
//! most one persistence operation and returns. There is no background
//! work and no cross-request state beyond the database pool.
//!
//! ## Architecture
//!
//! ```text
//! Browser (HTML forms)
//!     │
//!     ├── Page Handlers (web/)
//!     │
//!     ├── Templates (minijinja)
//!     │
//!     ├── ContactStore (persistence/)
//!     │
//!     └── MySQL
//! ```

pub mod app_state;
pub mod config;
pub mod error;
pub mod persistence;
pub mod templates;
pub mod web;
