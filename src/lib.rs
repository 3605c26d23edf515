pub mod adapters;
pub mod app;
pub mod common;
pub mod config;
pub mod dependencies;
pub mod domain;
pub mod routes;
pub mod services;
pub mod views;

pub use crate::app::App;
