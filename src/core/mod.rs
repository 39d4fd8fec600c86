//! Core types and domain logic: the front matter codec, metadata schemas,
//! and the merge policy. Everything in here is pure and I/O-free.

pub mod frontmatter;
pub mod merge;
pub mod schema;

pub use frontmatter::{decode, encode, Fields, FENCE};
pub use merge::{compute, Context};
pub use schema::{DefaultRule, FieldSpec, Policy, Schema, Source};
