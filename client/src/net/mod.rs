//! Networking helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the `/api/analyze` proxy and supplies the browser-side
//! registration collaborator.

pub mod api;
