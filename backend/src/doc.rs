//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the entity and error schemas, the health probes and
//! the family-specific handlers. The five CRUD operations of each resource
//! family are served by generic handlers that the derive cannot see, so
//! [`ResourcePaths`] adds them to the document programmatically.
//!
//! The generated specification is served by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump`.

use utoipa::openapi::path::{
    HttpMethod, Operation, OperationBuilder, Parameter, ParameterBuilder, ParameterIn,
};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::schema::{Array, KnownFormat, ObjectBuilder, Schema, SchemaFormat, Type};
use utoipa::openapi::{Content, ContentBuilder, Ref, RefOr, Required, Response, ResponseBuilder};
use utoipa::{Modify, OpenApi};

use crate::domain::{
    Branch, BranchDraft, Delivery, DeliveryDraft, DeliveryStatusChange, Headquarters,
    HeadquartersDraft, HeadquartersMetrics, Order, OrderDetail, OrderDetailDelivery,
    OrderDetailDeliveryDraft, OrderDetailDraft, OrderDraft, Product, ProductDraft, Supplier,
    SupplierDraft,
};
use crate::inbound::http::deliveries::NotifiedDelivery;
use crate::inbound::http::locations::LocationLabel;
use crate::inbound::http::schemas::{ErrorBodySchema, ErrorCodeSchema, ErrorEnvelopeSchema};

const ERROR_ENVELOPE: &str = "ErrorEnvelope";

/// One CRUD resource family as it appears in the document.
struct ResourceDoc {
    path: &'static str,
    tag: &'static str,
    entity: &'static str,
    draft: &'static str,
    /// Body of the plain-text 404, when the family does not use the envelope.
    plain_not_found: Option<&'static str>,
}

const RESOURCES: [ResourceDoc; 8] = [
    ResourceDoc {
        path: "/api/products",
        tag: "products",
        entity: "Product",
        draft: "ProductDraft",
        plain_not_found: None,
    },
    ResourceDoc {
        path: "/api/suppliers",
        tag: "suppliers",
        entity: "Supplier",
        draft: "SupplierDraft",
        plain_not_found: None,
    },
    ResourceDoc {
        path: "/api/orders",
        tag: "orders",
        entity: "Order",
        draft: "OrderDraft",
        plain_not_found: None,
    },
    ResourceDoc {
        path: "/api/order-details",
        tag: "order-details",
        entity: "OrderDetail",
        draft: "OrderDetailDraft",
        plain_not_found: None,
    },
    ResourceDoc {
        path: "/api/branches",
        tag: "branches",
        entity: "Branch",
        draft: "BranchDraft",
        plain_not_found: None,
    },
    ResourceDoc {
        path: "/api/headquarters",
        tag: "headquarters",
        entity: "Headquarters",
        draft: "HeadquartersDraft",
        plain_not_found: Some("Headquarters not found"),
    },
    ResourceDoc {
        path: "/api/deliveries",
        tag: "deliveries",
        entity: "Delivery",
        draft: "DeliveryDraft",
        plain_not_found: Some("Delivery not found"),
    },
    ResourceDoc {
        path: "/api/order-detail-deliveries",
        tag: "order-detail-deliveries",
        entity: "OrderDetailDelivery",
        draft: "OrderDetailDeliveryDraft",
        plain_not_found: None,
    },
];

fn schema_content(schema: impl Into<RefOr<Schema>>) -> Content {
    ContentBuilder::new().schema(Some(schema)).build()
}

fn json_response(description: &str, schema: impl Into<RefOr<Schema>>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content("application/json", schema_content(schema))
        .build()
}

fn error_response(description: &str) -> Response {
    json_response(description, Ref::from_schema_name(ERROR_ENVELOPE))
}

fn not_found_response(resource: &ResourceDoc) -> Response {
    match resource.plain_not_found {
        Some(body) => ResponseBuilder::new()
            .description(body)
            .content(
                "text/plain",
                schema_content(RefOr::T(Schema::Object(
                    ObjectBuilder::new().schema_type(Type::String).build(),
                ))),
            )
            .build(),
        None => error_response("Resource not found"),
    }
}

fn id_parameter() -> Parameter {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some("Resource identifier"))
        .schema(Some(RefOr::T(Schema::Object(
            ObjectBuilder::new()
                .schema_type(Type::Integer)
                .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int64)))
                .build(),
        ))))
        .build()
}

fn operation(resource: &ResourceDoc, operation_id: String, summary: String) -> OperationBuilder {
    OperationBuilder::new()
        .tag(resource.tag)
        .operation_id(Some(operation_id))
        .summary(Some(summary))
        .response("503", error_response("Database is busy"))
        .response("500", error_response("Unexpected failure"))
}

fn draft_body(resource: &ResourceDoc) -> utoipa::openapi::request_body::RequestBody {
    RequestBodyBuilder::new()
        .content(
            "application/json",
            schema_content(Ref::from_schema_name(resource.draft)),
        )
        .required(Some(Required::True))
        .build()
}

fn collection_operations(resource: &ResourceDoc) -> (Operation, Operation) {
    let list = operation(
        resource,
        format!("list_{}", resource.tag.replace('-', "_")),
        format!("List every {}", resource.entity),
    )
    .response(
        "200",
        json_response(
            "All stored entities",
            RefOr::T(Schema::Array(Array::new(Ref::from_schema_name(
                resource.entity,
            )))),
        ),
    )
    .build();
    let create = operation(
        resource,
        format!("create_{}", resource.tag.replace('-', "_")),
        format!("Create a {}", resource.entity),
    )
    .request_body(Some(draft_body(resource)))
    .response(
        "201",
        json_response("Created entity", Ref::from_schema_name(resource.entity)),
    )
    .response("400", error_response("Invalid body or reference"))
    .response("409", error_response("Unique value already in use"))
    .build();
    (list, create)
}

fn item_operations(resource: &ResourceDoc) -> (Operation, Operation, Operation) {
    let slug = resource.tag.replace('-', "_");
    let fetch = operation(
        resource,
        format!("get_{slug}"),
        format!("Fetch one {}", resource.entity),
    )
    .parameter(id_parameter())
    .response(
        "200",
        json_response("Stored entity", Ref::from_schema_name(resource.entity)),
    )
    .response("400", error_response("Identifier is not an integer"))
    .response("404", not_found_response(resource))
    .build();
    let replace = operation(
        resource,
        format!("update_{slug}"),
        format!("Replace one {}", resource.entity),
    )
    .parameter(id_parameter())
    .request_body(Some(draft_body(resource)))
    .response(
        "200",
        json_response("Replaced entity", Ref::from_schema_name(resource.entity)),
    )
    .response("400", error_response("Invalid body or reference"))
    .response("404", not_found_response(resource))
    .response("409", error_response("Unique value already in use"))
    .build();
    let delete = operation(
        resource,
        format!("delete_{slug}"),
        format!("Delete one {}", resource.entity),
    )
    .parameter(id_parameter())
    .response("204", ResponseBuilder::new().description("Deleted").build())
    .response("400", error_response("Entity is still referenced"))
    .response("404", not_found_response(resource))
    .build();
    (fetch, replace, delete)
}

/// Adds the generic CRUD operations of every resource family.
struct ResourcePaths;

impl Modify for ResourcePaths {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        for resource in &RESOURCES {
            let (list, create) = collection_operations(resource);
            openapi
                .paths
                .add_path_operation(resource.path, vec![HttpMethod::Get], list);
            openapi
                .paths
                .add_path_operation(resource.path, vec![HttpMethod::Post], create);

            let item_path = format!("{}/{{id}}", resource.path);
            let (fetch, replace, delete) = item_operations(resource);
            openapi
                .paths
                .add_path_operation(&item_path, vec![HttpMethod::Get], fetch);
            openapi
                .paths
                .add_path_operation(&item_path, vec![HttpMethod::Put], replace);
            openapi
                .paths
                .add_path_operation(&item_path, vec![HttpMethod::Delete], delete);
        }
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&ResourcePaths),
    info(
        title = "Storefront API",
        description = "CRUD access to the storefront catalogue, locations, orders and deliveries."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::locations::headquarters_metrics,
        crate::inbound::http::locations::headquarters_label,
        crate::inbound::http::deliveries::update_delivery_status,
    ),
    components(schemas(
        ErrorEnvelopeSchema,
        ErrorBodySchema,
        ErrorCodeSchema,
        Supplier,
        SupplierDraft,
        Product,
        ProductDraft,
        Headquarters,
        HeadquartersDraft,
        HeadquartersMetrics,
        LocationLabel,
        Branch,
        BranchDraft,
        Order,
        OrderDraft,
        OrderDetail,
        OrderDetailDraft,
        Delivery,
        DeliveryDraft,
        DeliveryStatusChange,
        NotifiedDelivery,
        OrderDetailDelivery,
        OrderDetailDeliveryDraft,
    )),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "products", description = "Catalogue products"),
        (name = "suppliers", description = "Product suppliers"),
        (name = "orders", description = "Branch orders"),
        (name = "order-details", description = "Order lines"),
        (name = "branches", description = "Branches"),
        (name = "headquarters", description = "Head offices"),
        (name = "deliveries", description = "Supplier deliveries"),
        (name = "order-detail-deliveries", description = "Delivery allocations")
    )
)]
pub struct ApiDoc;
