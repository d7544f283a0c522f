pub mod resolve_election;

pub use resolve_election::*;
