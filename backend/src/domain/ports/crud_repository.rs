//! Driven port for resource persistence.
//!
//! Every storefront resource is stored through the same five operations.
//! Adapters report failures as typed domain errors; a missing row on
//! `update` or `delete` surfaces as [`ErrorCode::NotFound`].
//!
//! [`ErrorCode::NotFound`]: crate::domain::ErrorCode::NotFound

use async_trait::async_trait;

use crate::domain::{
    Branch, BranchDraft, Delivery, DeliveryDraft, Error, Headquarters, HeadquartersDraft, Order,
    OrderDetail, OrderDetailDelivery, OrderDetailDeliveryDraft, OrderDetailDraft, OrderDraft,
    Product, ProductDraft, Supplier, SupplierDraft,
};

/// CRUD contract shared by all resource repositories.
#[async_trait]
pub trait CrudRepository: Send + Sync {
    /// Stored representation returned to callers.
    type Entity: Send + 'static;
    /// Validated request body used to create or replace an entity.
    type Draft: Send + 'static;

    /// Every stored entity, ordered by identifier.
    async fn find_all(&self) -> Result<Vec<Self::Entity>, Error>;

    /// The entity with `id`, or `None` when absent.
    async fn find_by_id(&self, id: i64) -> Result<Option<Self::Entity>, Error>;

    /// Insert a new entity and return it with its assigned identifier.
    async fn create(&self, draft: Self::Draft) -> Result<Self::Entity, Error>;

    /// Replace every field of the entity with `id`.
    ///
    /// Fails with a not-found error when no such entity exists.
    async fn update(&self, id: i64, draft: Self::Draft) -> Result<Self::Entity, Error>;

    /// Remove the entity with `id`.
    ///
    /// Fails with a not-found error when no such entity exists.
    async fn delete(&self, id: i64) -> Result<(), Error>;
}

/// Supplier persistence port.
pub type SupplierRepository = dyn CrudRepository<Entity = Supplier, Draft = SupplierDraft>;
/// Product persistence port.
pub type ProductRepository = dyn CrudRepository<Entity = Product, Draft = ProductDraft>;
/// Headquarters persistence port.
pub type HeadquartersRepository =
    dyn CrudRepository<Entity = Headquarters, Draft = HeadquartersDraft>;
/// Branch persistence port.
pub type BranchRepository = dyn CrudRepository<Entity = Branch, Draft = BranchDraft>;
/// Order persistence port.
pub type OrderRepository = dyn CrudRepository<Entity = Order, Draft = OrderDraft>;
/// Order line persistence port.
pub type OrderDetailRepository = dyn CrudRepository<Entity = OrderDetail, Draft = OrderDetailDraft>;
/// Delivery persistence port.
pub type DeliveryRepository = dyn CrudRepository<Entity = Delivery, Draft = DeliveryDraft>;
/// Delivery allocation persistence port.
pub type OrderDetailDeliveryRepository =
    dyn CrudRepository<Entity = OrderDetailDelivery, Draft = OrderDetailDeliveryDraft>;

/// Status updates for deliveries.
#[async_trait]
pub trait DeliveryStatusRepository: Send + Sync {
    /// Store `status` on the delivery with `id` and return the updated row.
    ///
    /// Fails with a not-found error when no such delivery exists.
    async fn update_status(&self, id: i64, status: &str) -> Result<Delivery, Error>;
}
