//! The `herodex` library crate.
//!
//! A character catalog API: CRUD over characters, per-user favorite lists,
//! and JWT-based authentication. This crate contains the configuration
//! loader, domain models, repositories, services, the entity-to-DTO mapping
//! layer, authentication mechanisms, routing configuration, and error
//! handling. The binary (`main.rs`) is the composition root that wires all
//! of it together.

pub mod auth;
pub mod config;
pub mod error;
pub mod mapping;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
