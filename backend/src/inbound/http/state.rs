//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BranchRepository, DeliveryNotifier, DeliveryRepository, DeliveryStatusRepository,
    HeadquartersRepository, OrderDetailDeliveryRepository, OrderDetailRepository,
    OrderRepository, ProductRepository, SupplierRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub suppliers: Arc<SupplierRepository>,
    pub products: Arc<ProductRepository>,
    pub headquarters: Arc<HeadquartersRepository>,
    pub branches: Arc<BranchRepository>,
    pub orders: Arc<OrderRepository>,
    pub order_details: Arc<OrderDetailRepository>,
    pub deliveries: Arc<DeliveryRepository>,
    pub delivery_status: Arc<dyn DeliveryStatusRepository>,
    pub order_detail_deliveries: Arc<OrderDetailDeliveryRepository>,
    pub notifier: Arc<dyn DeliveryNotifier>,
}
