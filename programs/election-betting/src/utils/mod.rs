pub mod math;
pub mod escrow;

pub use math::*;
pub use escrow::*;
