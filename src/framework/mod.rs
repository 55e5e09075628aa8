//! Generic actor framework for component management.
//!
//! This module provides the building blocks every component actor is made of.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that component types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns all instances of one component kind
//! - [`ResourceClient`] - Type-safe handle for sending requests to a `ResourceActor`
//! - [`FrameworkError`] - Mailbox-level error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test actors against scripted dependencies.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
