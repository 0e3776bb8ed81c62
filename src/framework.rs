//! Boundary types shared with the declarative-resource framework that drives the provider.
//!
//! The framework owns plan diffing, state persistence, and import orchestration. This module
//! models only what crosses the boundary: `diagnostics` (user-facing errors and warnings),
//! `schema` (attribute declarations), `state` (plan/state containers with typed get/set), and
//! `resource` (the [`Resource`] contract every adapter implements plus its request/response
//! envelopes).

pub mod diagnostics;
pub mod resource;
pub mod schema;
pub mod state;

pub use diagnostics::*;
pub use resource::*;
pub use schema::*;
pub use state::*;
