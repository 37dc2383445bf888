//! Supplier and product routes.

use std::sync::Arc;

use crate::domain::ports::CrudRepository;
use crate::domain::{Product, ProductDraft, Supplier, SupplierDraft};
use crate::inbound::http::resources::ResourceRoutes;
use crate::inbound::http::state::HttpState;

/// `/api/suppliers`.
pub struct SupplierRoutes;

impl ResourceRoutes for SupplierRoutes {
    type Entity = Supplier;
    type Draft = SupplierDraft;

    const LABEL: &'static str = "Supplier";

    fn repository(
        state: &HttpState,
    ) -> &Arc<dyn CrudRepository<Entity = Supplier, Draft = SupplierDraft>> {
        &state.suppliers
    }
}

/// `/api/products`.
pub struct ProductRoutes;

impl ResourceRoutes for ProductRoutes {
    type Entity = Product;
    type Draft = ProductDraft;

    const LABEL: &'static str = "Product";

    fn repository(
        state: &HttpState,
    ) -> &Arc<dyn CrudRepository<Entity = Product, Draft = ProductDraft>> {
        &state.products
    }
}
