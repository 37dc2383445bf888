//! HTTP inbound adapter exposing REST endpoints.
//!
//! Every resource family lives under `/api`; see [`configure`].

pub mod catalogue;
pub mod deliveries;
pub mod error;
pub mod health;
pub mod locations;
pub mod orders;
pub mod resources;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

use catalogue::{ProductRoutes, SupplierRoutes};
use deliveries::{OrderDetailDeliveryRoutes, deliveries_scope};
use locations::{BranchRoutes, headquarters_scope};
use orders::{OrderDetailRoutes, OrderRoutes};
use resources::resource_scope;

/// Register the `/api` scope with every resource family.
///
/// Requires an [`HttpState`](state::HttpState) in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(validation::json_config())
            .app_data(validation::path_config())
            .service(resource_scope::<ProductRoutes>("/products"))
            .service(resource_scope::<SupplierRoutes>("/suppliers"))
            .service(resource_scope::<OrderRoutes>("/orders"))
            .service(resource_scope::<OrderDetailRoutes>("/order-details"))
            .service(resource_scope::<BranchRoutes>("/branches"))
            .service(headquarters_scope())
            .service(deliveries_scope())
            .service(resource_scope::<OrderDetailDeliveryRoutes>(
                "/order-detail-deliveries",
            )),
    );
}
