//! Delivery routes, including the status change endpoint.
//!
//! Deliveries answer a missing entity with a plain-text 404. A status change
//! that names a delivery partner also notifies that partner and returns the
//! notifier's output alongside the delivery.

use std::sync::Arc;

use actix_web::{HttpResponse, Scope, web};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::domain::ports::CrudRepository;
use crate::domain::{
    Delivery, DeliveryDraft, DeliveryStatusChange, OrderDetailDelivery, OrderDetailDeliveryDraft,
    Validate,
};
use crate::inbound::http::resources::{
    NotFoundResponse, ResourceRoutes, not_found, resource_scope,
};
use crate::inbound::http::state::HttpState;

/// `/api/deliveries`.
pub struct DeliveryRoutes;

impl ResourceRoutes for DeliveryRoutes {
    type Entity = Delivery;
    type Draft = DeliveryDraft;

    const LABEL: &'static str = "Delivery";
    const NOT_FOUND: NotFoundResponse = NotFoundResponse::PlainText("Delivery not found");

    fn repository(
        state: &HttpState,
    ) -> &Arc<dyn CrudRepository<Entity = Delivery, Draft = DeliveryDraft>> {
        &state.deliveries
    }
}

/// `/api/order-detail-deliveries`.
pub struct OrderDetailDeliveryRoutes;

impl ResourceRoutes for OrderDetailDeliveryRoutes {
    type Entity = OrderDetailDelivery;
    type Draft = OrderDetailDeliveryDraft;

    const LABEL: &'static str = "OrderDetailDelivery";

    fn repository(
        state: &HttpState,
    ) -> &Arc<dyn CrudRepository<Entity = OrderDetailDelivery, Draft = OrderDetailDeliveryDraft>>
    {
        &state.order_detail_deliveries
    }
}

/// Response of a status change that notified a partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotifiedDelivery {
    pub delivery: Delivery,
    /// Standard output of the notifier.
    pub command_output: String,
}

/// Delivery scope including the status endpoint.
pub fn deliveries_scope() -> Scope {
    resource_scope::<DeliveryRoutes>("/deliveries")
        .route("/{id}/status", web::put().to(update_delivery_status))
}

/// Change a delivery's status and optionally notify a partner.
///
/// Without `deliveryPartner` the response is the updated delivery itself.
/// A notifier failure is reported as an internal error.
#[utoipa::path(
    put,
    path = "/api/deliveries/{id}/status",
    tags = ["deliveries"],
    params(("id" = i64, Path, description = "Delivery identifier")),
    request_body = DeliveryStatusChange,
    responses(
        (status = 200, description = "Updated delivery, wrapped with the notifier output when a partner was named", body = NotifiedDelivery),
        (status = 400, description = "Invalid status change", body = crate::inbound::http::schemas::ErrorEnvelopeSchema),
        (status = 404, description = "Delivery not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Notifier or storage failure", body = crate::inbound::http::schemas::ErrorEnvelopeSchema)
    )
)]
pub async fn update_delivery_status(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<DeliveryStatusChange>,
) -> actix_web::Result<HttpResponse> {
    let id = path.into_inner();
    let change = payload.into_inner();
    change.validate()?;

    if state.deliveries.find_by_id(id).await?.is_none() {
        return Ok(not_found::<DeliveryRoutes>(id)?);
    }
    let delivery = match state.delivery_status.update_status(id, &change.status).await {
        Ok(delivery) => delivery,
        Err(err) if err.is_not_found() => return Ok(not_found::<DeliveryRoutes>(id)?),
        Err(err) => return Err(err.into()),
    };
    info!(delivery_id = id, status = %delivery.status, "delivery status changed");

    let Some(partner) = change.partner() else {
        return Ok(HttpResponse::Ok().json(delivery));
    };
    let command_output = state.notifier.notify(partner).await.map_err(|err| {
        warn!(delivery_id = id, %partner, error = %err, "delivery partner notification failed");
        actix_web::error::ErrorInternalServerError(err)
    })?;
    Ok(HttpResponse::Ok().json(NotifiedDelivery {
        delivery,
        command_output,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{DeliveryNotifierError, MockDeliveryNotifier};
    use crate::inbound::http::test_utils::{sqlite_state, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn seed_delivery(state: &HttpState) -> Delivery {
        let supplier = state
            .suppliers
            .create(crate::domain::SupplierDraft {
                name: "Catnip Logistics".to_owned(),
                description: None,
                contact_person: None,
                email: None,
                phone: None,
            })
            .await
            .expect("create supplier");
        state
            .deliveries
            .create(DeliveryDraft {
                supplier_id: supplier.supplier_id,
                delivery_date: "2025-03-04".to_owned(),
                name: "March feeder shipment".to_owned(),
                description: None,
                status: "pending".to_owned(),
            })
            .await
            .expect("create delivery")
    }

    fn status_request(id: i64, body: Value) -> test::TestRequest {
        test::TestRequest::put()
            .uri(&format!("/api/deliveries/{id}/status"))
            .set_json(body)
    }

    #[rstest]
    #[actix_web::test]
    async fn status_change_without_partner_returns_bare_delivery() {
        let (_database, state) = sqlite_state().await;
        let delivery = seed_delivery(&state).await;
        let app = test::init_service(test_app(state)).await;

        let res = test::call_service(
            &app,
            status_request(delivery.delivery_id, json!({"status": "delivered"})).to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Delivery = test::read_body_json(res).await;
        assert_eq!(body.status, "delivered");
        assert_eq!(body.delivery_id, delivery.delivery_id);
    }

    #[rstest]
    #[case(json!({"status": "delivered", "deliveryPartner": ""}))]
    #[case(json!({"status": "delivered", "deliveryPartner": "  "}))]
    #[actix_web::test]
    async fn blank_partner_stores_status_without_notifying(#[case] body: Value) {
        let (_database, mut state) = sqlite_state().await;
        let delivery = seed_delivery(&state).await;
        let mut notifier = MockDeliveryNotifier::new();
        notifier.expect_notify().never();
        state.notifier = Arc::new(notifier);
        let app = test::init_service(test_app(state)).await;

        let res =
            test::call_service(&app, status_request(delivery.delivery_id, body).to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Delivery = test::read_body_json(res).await;
        assert_eq!(body.status, "delivered");
    }

    #[rstest]
    #[actix_web::test]
    async fn status_change_with_partner_includes_command_output() {
        let (_database, mut state) = sqlite_state().await;
        let delivery = seed_delivery(&state).await;
        let mut notifier = MockDeliveryNotifier::new();
        notifier
            .expect_notify()
            .with(eq("whiskers-express"))
            .times(1)
            .returning(|_| Ok("queued for whiskers-express\n".to_owned()));
        state.notifier = Arc::new(notifier);
        let app = test::init_service(test_app(state)).await;

        let res = test::call_service(
            &app,
            status_request(
                delivery.delivery_id,
                json!({"status": "in-transit", "deliveryPartner": "whiskers-express"}),
            )
            .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: NotifiedDelivery = test::read_body_json(res).await;
        assert_eq!(body.delivery.status, "in-transit");
        assert_eq!(body.command_output, "queued for whiskers-express\n");
    }

    #[rstest]
    #[actix_web::test]
    async fn notifier_failure_is_a_generic_internal_error() {
        let (_database, mut state) = sqlite_state().await;
        let delivery = seed_delivery(&state).await;
        let mut notifier = MockDeliveryNotifier::new();
        notifier
            .expect_notify()
            .returning(|_| Err(DeliveryNotifierError::failed("exit status: 1", "boom")));
        state.notifier = Arc::new(notifier);
        let app = test::init_service(test_app(state)).await;

        let res = test::call_service(
            &app,
            status_request(
                delivery.delivery_id,
                json!({"status": "delivered", "deliveryPartner": "acme"}),
            )
            .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({"error": {"code": "INTERNAL_ERROR", "message": "An unexpected error occurred"}})
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn status_change_for_missing_delivery_is_plain_text() {
        let (_database, mut state) = sqlite_state().await;
        let mut notifier = MockDeliveryNotifier::new();
        notifier.expect_notify().never();
        state.notifier = Arc::new(notifier);
        let app = test::init_service(test_app(state)).await;

        let res = test::call_service(
            &app,
            status_request(42, json!({"status": "delivered", "deliveryPartner": "acme"}))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(test::read_body(res).await.as_ref(), b"Delivery not found");
    }

    #[rstest]
    #[case(json!({"status": ""}))]
    #[case(json!({"deliveryPartner": "acme"}))]
    #[actix_web::test]
    async fn invalid_status_change_is_rejected(#[case] body: Value) {
        let (_database, state) = sqlite_state().await;
        let delivery = seed_delivery(&state).await;
        let app = test::init_service(test_app(state)).await;

        let res =
            test::call_service(&app, status_request(delivery.delivery_id, body).to_request()).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[rstest]
    #[actix_web::test]
    async fn delete_missing_delivery_is_plain_text() {
        let (_database, state) = sqlite_state().await;
        let app = test::init_service(test_app(state)).await;

        let res = test::call_service(
            &app,
            test::TestRequest::delete().uri("/api/deliveries/9").to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(test::read_body(res).await.as_ref(), b"Delivery not found");
    }
}
