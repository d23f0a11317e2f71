//! Database integration for Estatify
//!
//! This crate provides a database client that is designed to be database
//! agnostic, using SQLx as the underlying database library, plus the
//! appointment store built on top of it. It supports SQLite, PostgreSQL, and
//! MySQL databases through feature flags.
//!
//! # Example
//!
//! ```rust,no_run
//! use estatify_config::load_config;
//! use estatify_db::DbClient;
//! use std::sync::Arc;
//!
//! async fn setup_db() -> Result<DbClient, Box<dyn std::error::Error>> {
//!     let config = Arc::new(load_config()?);
//!     let db_client = DbClient::new(&config).await?;
//!     Ok(db_client)
//! }
//! ```

pub mod client;
pub mod error;
pub mod factory;
pub mod repositories;

// Re-export the client and factory for ease of use
pub use client::DbClient;
pub use error::DbError;
pub use factory::DbClientFactory;

// Re-export the repositories module components for ease of use
pub use repositories::{
    Appointment, AppointmentRepository, AppointmentRepositoryFactory, AppointmentStatus,
    InMemoryAppointmentRepository, SqlAppointmentRepository,
};
