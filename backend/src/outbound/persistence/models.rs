//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Each table has a `*Row` read through
//! `RETURNING`/`SELECT` and a `*Changes` struct written on insert and update.
//! Changes treat `None` as `NULL` so a `PUT` clears omitted optional columns.

use diesel::prelude::*;

use super::schema::{
    branches, deliveries, headquarters, order_detail_deliveries, order_details, orders, products,
    suppliers,
};
use crate::domain::{
    Branch, BranchDraft, Delivery, DeliveryDraft, Headquarters, HeadquartersDraft, Order,
    OrderDetail, OrderDetailDelivery, OrderDetailDeliveryDraft, OrderDetailDraft, OrderDraft,
    Product, ProductDraft, Supplier, SupplierDraft,
};

/// Declare the row and changes structs for one table.
///
/// The row converts into the domain entity field by field; the changes
/// struct is built from the matching draft.
macro_rules! table_models {
    (
        $table:ident,
        row: $row:ident => $entity:ident { $id:ident, $($field:ident: $ty:ty),+ $(,)? },
        changes: $changes:ident <= $draft:ident $(,)?
    ) => {
        #[derive(Debug, Clone, Queryable, Selectable)]
        #[diesel(table_name = $table)]
        #[diesel(check_for_backend(diesel::sqlite::Sqlite))]
        pub(crate) struct $row {
            pub $id: i64,
            $(pub $field: $ty,)+
        }

        impl From<$row> for $entity {
            fn from(row: $row) -> Self {
                Self {
                    $id: row.$id,
                    $($field: row.$field,)+
                }
            }
        }

        #[derive(Debug, Clone, Insertable, AsChangeset)]
        #[diesel(table_name = $table)]
        #[diesel(treat_none_as_null = true)]
        pub(crate) struct $changes {
            $(pub $field: $ty,)+
        }

        impl From<$draft> for $changes {
            fn from(draft: $draft) -> Self {
                Self {
                    $($field: draft.$field,)+
                }
            }
        }
    };
}

table_models!(
    suppliers,
    row: SupplierRow => Supplier {
        supplier_id,
        name: String,
        description: Option<String>,
        contact_person: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    },
    changes: SupplierChanges <= SupplierDraft,
);

table_models!(
    products,
    row: ProductRow => Product {
        product_id,
        supplier_id: i64,
        name: String,
        description: Option<String>,
        price: f64,
        sku: String,
        unit: Option<String>,
        img_name: Option<String>,
        discount: Option<f64>,
    },
    changes: ProductChanges <= ProductDraft,
);

table_models!(
    headquarters,
    row: HeadquartersRow => Headquarters {
        headquarters_id,
        name: String,
        description: Option<String>,
        address: String,
        contact_person: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        city: Option<String>,
        country: Option<String>,
        floor_count: Option<i64>,
        capacity: Option<i64>,
    },
    changes: HeadquartersChanges <= HeadquartersDraft,
);

table_models!(
    branches,
    row: BranchRow => Branch {
        branch_id,
        headquarters_id: i64,
        name: String,
        description: Option<String>,
        address: Option<String>,
        contact_person: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    },
    changes: BranchChanges <= BranchDraft,
);

table_models!(
    orders,
    row: OrderRow => Order {
        order_id,
        branch_id: i64,
        order_date: String,
        name: String,
        description: Option<String>,
        status: String,
    },
    changes: OrderChanges <= OrderDraft,
);

table_models!(
    order_details,
    row: OrderDetailRow => OrderDetail {
        order_detail_id,
        order_id: i64,
        product_id: i64,
        quantity: i64,
        unit_price: f64,
        notes: Option<String>,
    },
    changes: OrderDetailChanges <= OrderDetailDraft,
);

table_models!(
    deliveries,
    row: DeliveryRow => Delivery {
        delivery_id,
        supplier_id: i64,
        delivery_date: String,
        name: String,
        description: Option<String>,
        status: String,
    },
    changes: DeliveryChanges <= DeliveryDraft,
);

table_models!(
    order_detail_deliveries,
    row: OrderDetailDeliveryRow => OrderDetailDelivery {
        order_detail_delivery_id,
        order_detail_id: i64,
        delivery_id: i64,
        quantity: i64,
        notes: Option<String>,
    },
    changes: OrderDetailDeliveryChanges <= OrderDetailDeliveryDraft,
);
