//! Shared helpers for storefront integration tests.
//!
//! Integration tests compile as separate crates, so the app wiring used by
//! the binary is rebuilt here from the library's public surface.

use std::sync::Arc;

use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use storefront::Trace;
use storefront::domain::ports::FixtureDeliveryNotifier;
use storefront::inbound::http::configure;
use storefront::inbound::http::error::error_boundary;
use storefront::inbound::http::health::{HealthState, live, ready};
use storefront::inbound::http::state::HttpState;
use storefront::outbound::persistence::{
    Database, DatabaseConfig, DieselBranchRepository, DieselDeliveryRepository,
    DieselHeadquartersRepository, DieselOrderDetailDeliveryRepository,
    DieselOrderDetailRepository, DieselOrderRepository, DieselProductRepository,
    DieselSupplierRepository,
};

/// Open an in-memory database and wire every repository to it.
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

/// App with the same middleware stack and routes as the server binary.
pub fn storefront_app(
    state: HttpState,
    health: web::Data<HealthState>,
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
        .app_data(health)
        .app_data(web::Data::new(state))
        .wrap(error_boundary())
        .wrap(Trace)
        .configure(configure)
        .service(ready)
        .service(live)
}
