pub mod configuration;
pub mod domain;
pub mod error;
pub mod render;
pub mod routes;
pub mod services;
pub mod startup;
