//! Builders for HTTP state ports.

use std::sync::Arc;

use storefront::domain::ports::DeliveryNotifier;
use storefront::inbound::http::state::HttpState;
use storefront::outbound::persistence::{
    Database, DieselBranchRepository, DieselDeliveryRepository, DieselHeadquartersRepository,
    DieselOrderDetailDeliveryRepository, DieselOrderDetailRepository, DieselOrderRepository,
    DieselProductRepository, DieselSupplierRepository,
};

/// Wire every resource family to the shared database handle.
pub(super) fn build_http_state(
    database: &Database,
    notifier: Arc<dyn DeliveryNotifier>,
) -> HttpState {
    let deliveries = Arc::new(DieselDeliveryRepository::new(database.clone()));
    HttpState {
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
        notifier,
    }
}
