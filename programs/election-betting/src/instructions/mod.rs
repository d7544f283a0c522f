pub mod admin;
pub mod betting;
pub mod arbiter;
pub mod views;

pub use admin::*;
pub use betting::*;
pub use arbiter::*;
pub use views::*;
