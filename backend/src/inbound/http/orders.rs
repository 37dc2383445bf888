//! Order and order line routes.

use std::sync::Arc;

use crate::domain::ports::CrudRepository;
use crate::domain::{Order, OrderDetail, OrderDetailDraft, OrderDraft};
use crate::inbound::http::resources::ResourceRoutes;
use crate::inbound::http::state::HttpState;

/// `/api/orders`.
pub struct OrderRoutes;

impl ResourceRoutes for OrderRoutes {
    type Entity = Order;
    type Draft = OrderDraft;

    const LABEL: &'static str = "Order";

    fn repository(
        state: &HttpState,
    ) -> &Arc<dyn CrudRepository<Entity = Order, Draft = OrderDraft>> {
        &state.orders
    }
}

/// `/api/order-details`.
pub struct OrderDetailRoutes;

impl ResourceRoutes for OrderDetailRoutes {
    type Entity = OrderDetail;
    type Draft = OrderDetailDraft;

    const LABEL: &'static str = "OrderDetail";

    fn repository(
        state: &HttpState,
    ) -> &Arc<dyn CrudRepository<Entity = OrderDetail, Draft = OrderDetailDraft>> {
        &state.order_details
    }
}
