//! SeaORM entities mirroring the domain types.

pub mod author;
pub mod post;
