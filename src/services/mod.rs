pub mod auth_gate;
pub mod feed_store;
pub mod response;
