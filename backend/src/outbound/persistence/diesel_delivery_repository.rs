//! SQLite-backed delivery repositories.
//!
//! Besides the shared CRUD operations, deliveries support an in-place status
//! change used by the status route.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::DeliveryStatusRepository;
use crate::domain::{
    Delivery, DeliveryDraft, Error, OrderDetailDelivery, OrderDetailDeliveryDraft,
};

use super::crud_macros::impl_crud_repository;
use super::error_mapping::{FailureContext, StorageFailure, translate};
use super::models::{
    DeliveryChanges, DeliveryRow, OrderDetailDeliveryChanges, OrderDetailDeliveryRow,
};
use super::schema::{deliveries, order_detail_deliveries};

impl_crud_repository!(
    /// Diesel-backed delivery repository.
    DieselDeliveryRepository {
        label: "Delivery",
        entity: Delivery,
        draft: DeliveryDraft,
        row: DeliveryRow,
        changes: DeliveryChanges,
        table: deliveries,
        id: delivery_id,
    }
);

impl_crud_repository!(
    /// Diesel-backed repository for delivery allocations.
    DieselOrderDetailDeliveryRepository {
        label: "OrderDetailDelivery",
        entity: OrderDetailDelivery,
        draft: OrderDetailDeliveryDraft,
        row: OrderDetailDeliveryRow,
        changes: OrderDetailDeliveryChanges,
        table: order_detail_deliveries,
        id: order_detail_delivery_id,
    }
);

#[async_trait]
impl DeliveryStatusRepository for DieselDeliveryRepository {
    async fn update_status(&self, id: i64, status: &str) -> Result<Delivery, Error> {
        let context = Some(FailureContext::new("Delivery", id));
        let mut conn = self
            .database
            .connection()
            .await
            .map_err(|err| translate(err, context))?;
        let row = diesel::update(deliveries::table.find(id))
            .set(deliveries::status.eq(status))
            .returning(DeliveryRow::as_returning())
            .get_result(&mut *conn)
            .await
            .optional()
            .map_err(|err| translate(err, context))?;
        row.map(Delivery::from)
            .ok_or_else(|| translate(StorageFailure::no_rows_affected(), context))
    }
}
