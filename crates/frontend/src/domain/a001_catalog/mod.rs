pub mod api;
pub mod error;
pub mod store;
pub mod ui;
