pub mod market;
pub mod bet_record;

pub use market::*;
pub use bet_record::*;
