/// Related-Content Service Library
///
/// Resolves "related posts" for a source post (published posts sharing at
/// least one category, newest first) and projects them into a stable
/// public JSON shape for the hydrating card-grid frontend.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and boundary validation
/// - `models`: store row shapes, validated queries, public projections
/// - `services`: resolver, response formatter, date-format rendering
/// - `db`: content-store read API and its PostgreSQL implementation
/// - `error`: error types and handling
/// - `config`: configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
