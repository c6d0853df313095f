//! Session wiring for the CineVerse catalog.
//!
//! This crate sits between raw input events and the filter pipeline:
//! the [`Debouncer`] bounds how often the pipeline runs while the user
//! is typing, and the [`CatalogSession`] owns the loaded catalog, reacts
//! to events, and emits render-ready views.

pub mod debounce;
pub mod session;

pub use debounce::Debouncer;
pub use session::{CatalogSession, CatalogView, DEFAULT_DEBOUNCE, InputEvent};
