//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! inputs use separate structs (`NewBlog`, `NewUser`) so that persisted
//! records and not-yet-persisted input never mix.

pub mod blog;
pub mod user;

pub use blog::{Blog, NewBlog, UpdateBlog};
pub use user::{NewUser, User};
