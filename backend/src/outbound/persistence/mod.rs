//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of the domain repository
//! ports backed by SQLite via Diesel, with async support through
//! `diesel-async`'s `SyncConnectionWrapper`.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between Diesel models
//!   and domain types. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **One connection**: SQLite serialises writers, so every repository
//!   shares the single [`Database`] handle.
//! - **Typed errors**: every engine failure passes through
//!   [`error_mapping::translate`] before reaching the domain.
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use storefront::outbound::persistence::{Database, DatabaseConfig, DieselProductRepository};
//!
//! let database = Database::open(DatabaseConfig::new("data/storefront.db")).await?;
//! let products = DieselProductRepository::new(database.clone());
//! # drop(products);
//! database.close().await;
//! # Ok(())
//! # }
//! ```

mod crud_macros;
mod database;
mod diesel_catalogue_repository;
mod diesel_delivery_repository;
mod diesel_location_repository;
mod diesel_order_repository;
pub mod error_mapping;
mod models;
mod schema;

pub use database::{
    Database, DatabaseClosed, DatabaseConfig, DatabaseOpenError, SqliteAsyncConnection,
};
pub use diesel_catalogue_repository::{DieselProductRepository, DieselSupplierRepository};
pub use diesel_delivery_repository::{
    DieselDeliveryRepository, DieselOrderDetailDeliveryRepository,
};
pub use diesel_location_repository::{DieselBranchRepository, DieselHeadquartersRepository};
pub use diesel_order_repository::{DieselOrderDetailRepository, DieselOrderRepository};
