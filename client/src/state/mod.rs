//! Page-level UI state.
//!
//! DESIGN
//! ======
//! Plain structs held in `RwSignal`s by the pages. Keeping them free of
//! signals lets the rendering rules be unit-tested without a browser.

pub mod demo;
pub mod registration;
