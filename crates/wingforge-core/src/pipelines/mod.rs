//! Pipeline step composition.
//!
//! Assembles the ordered step sequences for the two pipeline shapes every
//! sub-library gets: pull-request validation and release/publish.

mod composer;

pub use composer::{compose_release, compose_validation};
