//! Branch orders and their line items.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;
use crate::domain::validation::{
    FieldName, Validate, calendar_date, non_negative_amount, optional_text, positive_count,
    reference_id, require_text,
};

/// Purchase order placed by a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[schema(example = 1)]
    pub order_id: i64,
    #[schema(example = 1)]
    pub branch_id: i64,
    #[schema(example = "2025-03-01")]
    pub order_date: String,
    #[schema(example = "Spring restock")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = "pending")]
    pub status: String,
}

/// Request body used to create or replace an [`Order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub branch_id: i64,
    pub order_date: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
}

impl Validate for OrderDraft {
    fn validate(&self) -> Result<(), Error> {
        reference_id(FieldName::new("branchId"), self.branch_id)?;
        calendar_date(FieldName::new("orderDate"), &self.order_date)?;
        require_text(FieldName::new("name"), &self.name)?;
        require_text(FieldName::new("status"), &self.status)
    }
}

/// Line item of an [`Order`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[schema(example = 1)]
    pub order_detail_id: i64,
    #[schema(example = 1)]
    pub order_id: i64,
    #[schema(example = 1)]
    pub product_id: i64,
    #[schema(example = 4)]
    pub quantity: i64,
    #[schema(example = 129.99)]
    pub unit_price: f64,
    pub notes: Option<String>,
}

/// Request body used to create or replace an [`OrderDetail`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailDraft {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Validate for OrderDetailDraft {
    fn validate(&self) -> Result<(), Error> {
        reference_id(FieldName::new("orderId"), self.order_id)?;
        reference_id(FieldName::new("productId"), self.product_id)?;
        positive_count(FieldName::new("quantity"), self.quantity)?;
        non_negative_amount(FieldName::new("unitPrice"), self.unit_price)?;
        optional_text(FieldName::new("notes"), self.notes.as_deref())
    }
}
