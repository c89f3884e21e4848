//! Convoy - a deployment-order planner for interdependent services.
//!
//! Convoy reads a declarative dependency manifest, computes a safe
//! dependencies-first deployment order, partitions services into
//! independently-deployable clusters, and derives filtered deployment
//! plans for local development. It computes and emits plans only; it
//! never executes a deployment.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod cluster;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod plan;
pub mod resolve;

// Public CLI module (needed by binary)
pub mod cli;

// Console reporting
pub mod output;

pub use error::{Error, Result};
