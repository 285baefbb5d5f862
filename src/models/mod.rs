pub mod user;
pub mod watchlist;

pub use user::*;
pub use watchlist::*;
