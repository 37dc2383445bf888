//! Domain primitives and ports.
//!
//! Purpose: define the storefront entities, the request drafts that create
//! them, and the typed error taxonomy every layer reports failures with.
//! Types here are free of HTTP and SQL concerns; adapters in `inbound` and
//! `outbound` translate at the edges.
//!
//! Public surface:
//! - Error / ErrorCode: typed failure and its machine-readable code.
//! - Entities and drafts for suppliers, products, headquarters, branches,
//!   orders, order lines, deliveries and delivery allocations.
//! - Validate: content rules applied to drafts before persistence.

pub mod catalogue;
pub mod deliveries;
pub mod error;
pub mod locations;
pub mod orders;
pub mod ports;
pub mod validation;

pub use self::catalogue::{Product, ProductDraft, Supplier, SupplierDraft};
pub use self::deliveries::{
    Delivery, DeliveryDraft, DeliveryStatusChange, OrderDetailDelivery, OrderDetailDeliveryDraft,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::locations::{
    Branch, BranchDraft, Headquarters, HeadquartersDraft, HeadquartersMetrics, location_label,
};
pub use self::orders::{Order, OrderDetail, OrderDetailDraft, OrderDraft};
pub use self::validation::Validate;
