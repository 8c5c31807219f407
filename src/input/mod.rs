mod seed;

pub use seed::{Seed, SeedError};
