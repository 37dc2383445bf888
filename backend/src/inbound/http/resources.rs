//! Generic CRUD handlers shared by every resource family.
//!
//! Each family implements [`ResourceRoutes`] to name its repository and its
//! not-found behaviour; [`resource_scope`] then mounts the five standard
//! routes:
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | `GET` | `/` | 200 list |
//! | `POST` | `/` | 201 created entity |
//! | `GET` | `/{id}` | 200 entity |
//! | `PUT` | `/{id}` | 200 replaced entity |
//! | `DELETE` | `/{id}` | 204 |

use std::sync::Arc;

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Scope, web};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::Error;
use crate::domain::Validate;
use crate::domain::ports::CrudRepository;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// How a family reports a missing entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundResponse {
    /// The JSON error envelope with code `NOT_FOUND`.
    Envelope,
    /// A bare `text/plain` 404 with the given body.
    PlainText(&'static str),
}

/// Binds a resource family to its repository.
pub trait ResourceRoutes: 'static {
    /// Stored entity returned by the routes.
    type Entity: Serialize + Send + 'static;
    /// Request body accepted by `POST` and `PUT`.
    type Draft: DeserializeOwned + Validate + Send + 'static;

    /// Entity name used in not-found messages.
    const LABEL: &'static str;
    /// Not-found behaviour for this family.
    const NOT_FOUND: NotFoundResponse = NotFoundResponse::Envelope;

    /// Repository serving this family.
    fn repository(
        state: &HttpState,
    ) -> &Arc<dyn CrudRepository<Entity = Self::Entity, Draft = Self::Draft>>;
}

/// Scope at `path` serving the standard routes for `R`.
///
/// The returned scope can be extended with family-specific routes such as
/// `/{id}/metrics` before it is registered.
pub fn resource_scope<R: ResourceRoutes>(path: &str) -> Scope {
    web::scope(path)
        .service(
            web::resource("")
                .route(web::get().to(list::<R>))
                .route(web::post().to(create::<R>)),
        )
        .service(
            web::resource("/{id}")
                .route(web::get().to(fetch::<R>))
                .route(web::put().to(replace::<R>))
                .route(web::delete().to(remove::<R>)),
        )
}

/// Missing-entity response for `R`.
///
/// Families answering with the envelope return an error so the request
/// error handling renders it.
pub fn not_found<R: ResourceRoutes>(id: i64) -> ApiResult<HttpResponse> {
    match R::NOT_FOUND {
        NotFoundResponse::Envelope => Err(Error::not_found(R::LABEL, id)),
        NotFoundResponse::PlainText(body) => Ok(HttpResponse::NotFound()
            .insert_header(ContentType::plaintext())
            .body(body)),
    }
}

async fn list<R: ResourceRoutes>(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let entities = R::repository(&state).find_all().await?;
    Ok(HttpResponse::Ok().json(entities))
}

async fn fetch<R: ResourceRoutes>(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    match R::repository(&state).find_by_id(id).await? {
        Some(entity) => Ok(HttpResponse::Ok().json(entity)),
        None => not_found::<R>(id),
    }
}

async fn create<R: ResourceRoutes>(
    state: web::Data<HttpState>,
    payload: web::Json<R::Draft>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner();
    draft.validate()?;
    let entity = R::repository(&state).create(draft).await?;
    Ok(HttpResponse::Created().json(entity))
}

async fn replace<R: ResourceRoutes>(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<R::Draft>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let draft = payload.into_inner();
    draft.validate()?;
    match R::repository(&state).update(id, draft).await {
        Ok(entity) => Ok(HttpResponse::Ok().json(entity)),
        Err(err) if err.is_not_found() => not_found::<R>(id),
        Err(err) => Err(err),
    }
}

async fn remove<R: ResourceRoutes>(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    match R::repository(&state).delete(id).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(err) if err.is_not_found() => not_found::<R>(id),
        Err(err) => Err(err),
    }
}
