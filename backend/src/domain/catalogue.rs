//! Suppliers and the products they sell.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;
use crate::domain::validation::{
    FieldName, Validate, non_negative_amount, optional_email, optional_fraction, optional_text,
    reference_id, require_text,
};

/// Company supplying products and dispatching deliveries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[schema(example = 1)]
    pub supplier_id: i64,
    #[schema(example = "Catnip Logistics")]
    pub name: String,
    pub description: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Request body used to create or replace a [`Supplier`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Validate for SupplierDraft {
    fn validate(&self) -> Result<(), Error> {
        require_text(FieldName::new("name"), &self.name)?;
        optional_text(FieldName::new("contactPerson"), self.contact_person.as_deref())?;
        optional_email(FieldName::new("email"), self.email.as_deref())
    }
}

/// Sellable product.
///
/// `sku` is unique across the catalogue; `discount` is a fraction applied to
/// `price` by the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[schema(example = 1)]
    pub product_id: i64,
    #[schema(example = 1)]
    pub supplier_id: i64,
    #[schema(example = "SmartFeeder One")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = 129.99)]
    pub price: f64,
    #[schema(example = "CAT-FEED-001")]
    pub sku: String,
    pub unit: Option<String>,
    pub img_name: Option<String>,
    #[schema(example = 0.25)]
    pub discount: Option<f64>,
}

/// Request body used to create or replace a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub supplier_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub sku: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub img_name: Option<String>,
    #[serde(default)]
    pub discount: Option<f64>,
}

impl Validate for ProductDraft {
    fn validate(&self) -> Result<(), Error> {
        reference_id(FieldName::new("supplierId"), self.supplier_id)?;
        require_text(FieldName::new("name"), &self.name)?;
        require_text(FieldName::new("sku"), &self.sku)?;
        non_negative_amount(FieldName::new("price"), self.price)?;
        optional_fraction(FieldName::new("discount"), self.discount)
    }
}
