//! SQLite-backed order and order line repositories.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::{Order, OrderDetail, OrderDetailDraft, OrderDraft};

use super::crud_macros::impl_crud_repository;
use super::models::{OrderChanges, OrderDetailChanges, OrderDetailRow, OrderRow};
use super::schema::{order_details, orders};

impl_crud_repository!(
    /// Diesel-backed order repository.
    DieselOrderRepository {
        label: "Order",
        entity: Order,
        draft: OrderDraft,
        row: OrderRow,
        changes: OrderChanges,
        table: orders,
        id: order_id,
    }
);

impl_crud_repository!(
    /// Diesel-backed order line repository.
    DieselOrderDetailRepository {
        label: "OrderDetail",
        entity: OrderDetail,
        draft: OrderDetailDraft,
        row: OrderDetailRow,
        changes: OrderDetailChanges,
        table: order_details,
        id: order_detail_id,
    }
);
