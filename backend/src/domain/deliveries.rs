//! Supplier deliveries and their allocation to order lines.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;
use crate::domain::validation::{
    FieldName, Validate, calendar_date, positive_count, reference_id, require_text,
};

/// Shipment dispatched by a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    #[schema(example = 1)]
    pub delivery_id: i64,
    #[schema(example = 1)]
    pub supplier_id: i64,
    #[schema(example = "2025-03-04")]
    pub delivery_date: String,
    #[schema(example = "March feeder shipment")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = "in-transit")]
    pub status: String,
}

/// Request body used to create or replace a [`Delivery`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDraft {
    pub supplier_id: i64,
    pub delivery_date: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
}

impl Validate for DeliveryDraft {
    fn validate(&self) -> Result<(), Error> {
        reference_id(FieldName::new("supplierId"), self.supplier_id)?;
        calendar_date(FieldName::new("deliveryDate"), &self.delivery_date)?;
        require_text(FieldName::new("name"), &self.name)?;
        require_text(FieldName::new("status"), &self.status)
    }
}

/// Body of `PUT /api/deliveries/{id}/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryStatusChange {
    /// New delivery status.
    pub status: String,
    /// Partner to notify once the status is stored.
    #[serde(default)]
    pub delivery_partner: Option<String>,
}

impl DeliveryStatusChange {
    /// Partner to notify, if any. A blank name means no partner.
    #[must_use]
    pub fn partner(&self) -> Option<&str> {
        self.delivery_partner
            .as_deref()
            .filter(|partner| !partner.trim().is_empty())
    }
}

impl Validate for DeliveryStatusChange {
    fn validate(&self) -> Result<(), Error> {
        require_text(FieldName::new("status"), &self.status)
    }
}

/// Quantity of an order line fulfilled by a delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailDelivery {
    #[schema(example = 1)]
    pub order_detail_delivery_id: i64,
    #[schema(example = 1)]
    pub order_detail_id: i64,
    #[schema(example = 1)]
    pub delivery_id: i64,
    #[schema(example = 2)]
    pub quantity: i64,
    pub notes: Option<String>,
}

/// Request body used to create or replace an [`OrderDetailDelivery`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailDeliveryDraft {
    pub order_detail_id: i64,
    pub delivery_id: i64,
    pub quantity: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Validate for OrderDetailDeliveryDraft {
    fn validate(&self) -> Result<(), Error> {
        reference_id(FieldName::new("orderDetailId"), self.order_detail_id)?;
        reference_id(FieldName::new("deliveryId"), self.delivery_id)?;
        positive_count(FieldName::new("quantity"), self.quantity)
    }
}
