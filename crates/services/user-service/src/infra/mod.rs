//! Infrastructure layer - loading users into the in-memory store.

mod seed;

pub use seed::{load_seed, parse_seed};
