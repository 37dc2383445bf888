//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match `backend/migrations` exactly. SQLite stores
//! `INTEGER` columns as 64-bit values, so every identifier and count maps to
//! `BigInt`.

diesel::table! {
    /// Suppliers providing products and deliveries.
    suppliers (supplier_id) {
        supplier_id -> BigInt,
        name -> Text,
        description -> Nullable<Text>,
        contact_person -> Nullable<Text>,
        email -> Nullable<Text>,
        phone -> Nullable<Text>,
    }
}

diesel::table! {
    /// Head offices.
    headquarters (headquarters_id) {
        headquarters_id -> BigInt,
        name -> Text,
        description -> Nullable<Text>,
        address -> Text,
        contact_person -> Nullable<Text>,
        email -> Nullable<Text>,
        phone -> Nullable<Text>,
        city -> Nullable<Text>,
        country -> Nullable<Text>,
        floor_count -> Nullable<BigInt>,
        capacity -> Nullable<BigInt>,
    }
}

diesel::table! {
    /// Branches; `headquarters_id` references `headquarters`.
    branches (branch_id) {
        branch_id -> BigInt,
        headquarters_id -> BigInt,
        name -> Text,
        description -> Nullable<Text>,
        address -> Nullable<Text>,
        contact_person -> Nullable<Text>,
        email -> Nullable<Text>,
        phone -> Nullable<Text>,
    }
}

diesel::table! {
    /// Catalogue products; `sku` is unique.
    products (product_id) {
        product_id -> BigInt,
        supplier_id -> BigInt,
        name -> Text,
        description -> Nullable<Text>,
        price -> Double,
        sku -> Text,
        unit -> Nullable<Text>,
        img_name -> Nullable<Text>,
        discount -> Nullable<Double>,
    }
}

diesel::table! {
    /// Orders placed by branches.
    orders (order_id) {
        order_id -> BigInt,
        branch_id -> BigInt,
        order_date -> Text,
        name -> Text,
        description -> Nullable<Text>,
        status -> Text,
    }
}

diesel::table! {
    /// Order line items.
    order_details (order_detail_id) {
        order_detail_id -> BigInt,
        order_id -> BigInt,
        product_id -> BigInt,
        quantity -> BigInt,
        unit_price -> Double,
        notes -> Nullable<Text>,
    }
}

diesel::table! {
    /// Supplier deliveries.
    deliveries (delivery_id) {
        delivery_id -> BigInt,
        supplier_id -> BigInt,
        delivery_date -> Text,
        name -> Text,
        description -> Nullable<Text>,
        status -> Text,
    }
}

diesel::table! {
    /// Allocation of delivered quantities to order lines.
    order_detail_deliveries (order_detail_delivery_id) {
        order_detail_delivery_id -> BigInt,
        order_detail_id -> BigInt,
        delivery_id -> BigInt,
        quantity -> BigInt,
        notes -> Nullable<Text>,
    }
}

diesel::joinable!(branches -> headquarters (headquarters_id));
diesel::joinable!(products -> suppliers (supplier_id));
diesel::joinable!(orders -> branches (branch_id));
diesel::joinable!(order_details -> orders (order_id));
diesel::joinable!(order_details -> products (product_id));
diesel::joinable!(deliveries -> suppliers (supplier_id));
diesel::joinable!(order_detail_deliveries -> order_details (order_detail_id));
diesel::joinable!(order_detail_deliveries -> deliveries (delivery_id));

diesel::allow_tables_to_appear_in_same_query!(
    suppliers,
    headquarters,
    branches,
    products,
    orders,
    order_details,
    deliveries,
    order_detail_deliveries,
);
