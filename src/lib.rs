pub mod clubs;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod feed;
pub mod fixtures;
pub mod models;
pub mod requests;
pub mod session;
pub mod storage;
pub mod validation;

pub use session::Session;
pub use storage::DataStore;
