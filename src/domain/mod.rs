//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`aggregate`] - Pure summary statistics over blog posts
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define contracts implemented by the
//! infrastructure layer; business logic lives in
//! [`crate::application::services`].

pub mod aggregate;
pub mod entities;
pub mod repositories;
