//! REST CRUD service for a `users` resource stored in MongoDB.

pub mod config;
pub mod constants;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
