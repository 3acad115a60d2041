pub mod api;
pub mod attendance;
pub mod billing;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod model;
pub mod notify;
pub mod routes;
pub mod state;
pub mod store;
pub mod upload;
