pub mod auth_service;
pub mod token_service;
pub mod watchlist_service;

pub use token_service::TokenService;
