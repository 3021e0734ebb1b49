pub mod authorization_service;
pub mod book_store;

pub use authorization_service::AuthorizationService;
pub use book_store::BookStore;
