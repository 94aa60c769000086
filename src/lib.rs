//! Web front-end over a single S3 bucket: HTML directory listings, object
//! streaming, presigned download redirects and a sequential episode player.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;
