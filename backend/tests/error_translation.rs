//! Failure paths: storage errors, engine contention and untyped failures.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};
use async_trait::async_trait;
use rstest::rstest;
use serde_json::{Value, json};

use storefront::domain::ports::{CrudRepository, DeliveryNotifier, DeliveryNotifierError};
use storefront::domain::{Error, Supplier, SupplierDraft};
use storefront::inbound::http::health::HealthState;

mod support;

use support::{sqlite_state, storefront_app};

/// Supplier store whose engine is permanently locked.
struct LockedSuppliers;

#[async_trait]
impl CrudRepository for LockedSuppliers {
    type Entity = Supplier;
    type Draft = SupplierDraft;

    async fn find_all(&self) -> Result<Vec<Supplier>, Error> {
        Err(Error::busy())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Supplier>, Error> {
        Err(Error::busy())
    }

    async fn create(&self, _draft: SupplierDraft) -> Result<Supplier, Error> {
        Err(Error::busy())
    }

    async fn update(&self, _id: i64, _draft: SupplierDraft) -> Result<Supplier, Error> {
        Err(Error::busy())
    }

    async fn delete(&self, _id: i64) -> Result<(), Error> {
        Err(Error::busy())
    }
}

struct FailingNotifier;

#[async_trait]
impl DeliveryNotifier for FailingNotifier {
    async fn notify(&self, _partner: &str) -> Result<String, DeliveryNotifierError> {
        Err(DeliveryNotifierError::failed("exit status: 1", "partner unreachable"))
    }
}

#[rstest]
#[case(actix_test::TestRequest::get().uri("/api/suppliers"))]
#[case(actix_test::TestRequest::get().uri("/api/suppliers/1"))]
#[case(actix_test::TestRequest::delete().uri("/api/suppliers/1"))]
#[actix_web::test]
async fn busy_engine_maps_to_service_unavailable(#[case] request: actix_test::TestRequest) {
    let (_database, mut state) = sqlite_state().await;
    state.suppliers = Arc::new(LockedSuppliers);
    let app =
        actix_test::init_service(storefront_app(state, web::Data::new(HealthState::new()))).await;

    let res = actix_test::call_service(&app, request.to_request()).await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["error"]["code"], "DATABASE_BUSY");
    assert_eq!(body["error"]["message"], "Database is temporarily unavailable");
}

#[rstest]
#[actix_web::test]
async fn closed_database_reports_a_database_error() {
    let (database, state) = sqlite_state().await;
    let app =
        actix_test::init_service(storefront_app(state, web::Data::new(HealthState::new()))).await;
    database.close().await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/orders").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["error"]["code"], "DATABASE_ERROR");
    assert_eq!(
        body["error"]["message"],
        "Database operation failed: database connection is closed"
    );
}

#[rstest]
#[actix_web::test]
async fn notifier_failure_becomes_the_generic_internal_error() {
    let (_database, mut state) = sqlite_state().await;
    state.notifier = Arc::new(FailingNotifier);
    let app =
        actix_test::init_service(storefront_app(state, web::Data::new(HealthState::new()))).await;

    let supplier: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/suppliers")
            .set_json(json!({"name": "Catnip Logistics"}))
            .to_request(),
    )
    .await;
    let delivery: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/deliveries")
            .set_json(json!({
                "supplierId": supplier["supplierId"],
                "deliveryDate": "2025-03-04",
                "name": "March feeder shipment",
                "status": "pending"
            }))
            .to_request(),
    )
    .await;
    let delivery_id = delivery["deliveryId"].as_i64().expect("delivery id");

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/deliveries/{delivery_id}/status"))
            .set_json(json!({"status": "delivered", "deliveryPartner": "whiskers-express"}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({"error": {"code": "INTERNAL_ERROR", "message": "An unexpected error occurred"}})
    );

    let stored: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/deliveries/{delivery_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(stored["status"], "delivered");
}
