//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::App;
use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::web;

use crate::domain::ports::FixtureDeliveryNotifier;
use crate::inbound::http::error::error_boundary;
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use crate::outbound::persistence::{
    Database, DatabaseConfig, DieselBranchRepository, DieselDeliveryRepository,
    DieselHeadquartersRepository, DieselOrderDetailDeliveryRepository,
    DieselOrderDetailRepository, DieselOrderRepository, DieselProductRepository,
    DieselSupplierRepository,
};

/// Open a fresh in-memory database and wire every repository to it.
///
/// The notifier is a fixture; tests replace `state.notifier` as needed.
pub async fn sqlite_state() -> (Database, HttpState) {
    let database = Database::open(DatabaseConfig::in_memory())
        .await
        .expect("in-memory database opens");
    let deliveries = Arc::new(DieselDeliveryRepository::new(database.clone()));
    let state = HttpState {
        suppliers: Arc::new(DieselSupplierRepository::new(database.clone())),
        products: Arc::new(DieselProductRepository::new(database.clone())),
        headquarters: Arc::new(DieselHeadquartersRepository::new(database.clone())),
        branches: Arc::new(DieselBranchRepository::new(database.clone())),
        orders: Arc::new(DieselOrderRepository::new(database.clone())),
        order_details: Arc::new(DieselOrderDetailRepository::new(database.clone())),
        deliveries: deliveries.clone(),
        delivery_status: deliveries,
        order_detail_deliveries: Arc::new(DieselOrderDetailDeliveryRepository::new(
            database.clone(),
        )),
        notifier: Arc::new(FixtureDeliveryNotifier),
    };
    (database, state)
}

/// App serving the API routes with production middleware.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(error_boundary())
        .wrap(Trace)
        .configure(super::configure)
}
