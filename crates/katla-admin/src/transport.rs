//! # Transport Adapter
//!
//! Maps the HTTP contract onto the services without tying it to a web framework:
//! handlers take already-extracted path values and raw JSON bodies and return an
//! [`ApiResponse`] (status, optional `Location`, optional JSON body). A router only
//! needs to forward to them.
//!
//! | Verb | Path | Success |
//! |------|------|---------|
//! | GET | `{prefix}` | 200 + list |
//! | GET | `{prefix}/{id}` | 200 + detail |
//! | PUT | `{prefix}/{id}/status/{deleted}` | 204 |
//! | POST | `{prefix}` | 201 + `Location: {prefix}/{id}` + detail |
//! | PUT | `{prefix}/{id}` | 204 |
//! | DELETE | `{prefix}/{id}` | 204 |
//!
//! Ids below 1 and missing or malformed bodies are answered with 400 before any service
//! call. Service errors map by kind: `NotFound` 404, `Conflict` 409,
//! `InvalidArgument` 400, anything else 500. Error bodies are
//! `{"code": "...", "message": "..."}`.

use crate::model::{
    CategoryRecord, HiveId, HiveRecord, ProductCategoryId, ProductRecord, SectionRecord,
};
use crate::runtime::AdminSystem;
use crate::services::ManagedService;
use http::StatusCode;
use lifecycle_framework::{ErrorKind, LifecycleEntity, LifecycleError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};

/// What a router should send back.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiResponse {
    fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            location: None,
            body: Some(body),
        }
    }

    fn created(location: String, body: Value) -> Self {
        Self {
            status: StatusCode::CREATED,
            location: Some(location),
            body: Some(body),
        }
    }

    fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            location: None,
            body: None,
        }
    }

    fn error(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        let body = ErrorBody {
            code: code.to_string(),
            message: message.into(),
        };
        Self {
            status,
            location: None,
            body: serde_json::to_value(body).ok(),
        }
    }

    fn bad_request(message: impl Into<String>) -> Self {
        Self::error(StatusCode::BAD_REQUEST, "bad_request", message)
    }

    /// Decodes the error body, if this is an error response.
    pub fn error_body(&self) -> Option<ErrorBody> {
        self.body
            .clone()
            .and_then(|body| serde_json::from_value(body).ok())
    }
}

/// HTTP status for a service error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
        ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn failure(err: LifecycleError) -> ApiResponse {
    let kind = err.kind();
    let status = status_for(kind);
    if status.is_server_error() {
        error!(%status, error = %err, "Request failed");
        // Store internals stay out of the response body.
        return ApiResponse::error(status, &kind.to_string(), "internal error");
    }
    warn!(%status, error = %err, "Request rejected");
    ApiResponse::error(status, &kind.to_string(), err.to_string())
}

fn render<V: Serialize>(value: &V) -> Result<Value, ApiResponse> {
    serde_json::to_value(value).map_err(|e| {
        error!(error = %e, "Response serialization failed");
        ApiResponse::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            &ErrorKind::Unexpected.to_string(),
            "internal error",
        )
    })
}

fn parse_id(raw: i64) -> Result<u32, ApiResponse> {
    match u32::try_from(raw) {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(ApiResponse::bad_request(format!("invalid id {raw}"))),
    }
}

fn parse_body<R: DeserializeOwned>(body: Option<&str>) -> Result<R, ApiResponse> {
    let raw = body.ok_or_else(|| ApiResponse::bad_request("request body is required"))?;
    match serde_json::from_str::<Option<R>>(raw) {
        Ok(Some(request)) => Ok(request),
        Ok(None) => Err(ApiResponse::bad_request("request body is required")),
        Err(e) => Err(ApiResponse::bad_request(format!("malformed request body: {e}"))),
    }
}

/// Unwraps a step result, returning the error response from the handler.
macro_rules! attempt {
    ($step:expr) => {
        match $step {
            Ok(value) => value,
            Err(response) => return response,
        }
    };
}

/// The six contract handlers for one entity kind, served by its domain service.
pub struct Endpoint<'a, T: LifecycleEntity> {
    service: &'a dyn ManagedService<T>,
    prefix: &'static str,
}

impl<'a, T> Endpoint<'a, T>
where
    T: LifecycleEntity,
    T::Request: DeserializeOwned,
    T::Detail: Serialize,
    T::Summary: Serialize,
{
    pub fn new(service: &'a dyn ManagedService<T>, prefix: &'static str) -> Self {
        Self { service, prefix }
    }

    pub async fn list(&self) -> ApiResponse {
        match self.service.list().await {
            Ok(items) => ApiResponse::ok(attempt!(render(&items))),
            Err(e) => failure(e),
        }
    }

    pub async fn get(&self, id: i64) -> ApiResponse {
        let id = T::Id::from(attempt!(parse_id(id)));
        match self.service.fetch(id).await {
            Ok(detail) => ApiResponse::ok(attempt!(render(&detail))),
            Err(e) => failure(e),
        }
    }

    pub async fn set_status(&self, id: i64, deleted: bool) -> ApiResponse {
        let id = T::Id::from(attempt!(parse_id(id)));
        match self.service.set_status(id, deleted).await {
            Ok(()) => ApiResponse::no_content(),
            Err(e) => failure(e),
        }
    }

    /// `body` is the raw JSON text; `None` means the request had no body.
    pub async fn create(&self, body: Option<&str>) -> ApiResponse {
        let request: T::Request = attempt!(parse_body(body));
        match self.service.create(request).await {
            Ok(detail) => {
                let value = attempt!(render(&detail));
                let id = value.get("id").cloned().unwrap_or(Value::Null);
                ApiResponse::created(format!("{}/{}", self.prefix, id), value)
            }
            Err(e) => failure(e),
        }
    }

    pub async fn update(&self, id: i64, body: Option<&str>) -> ApiResponse {
        let id = T::Id::from(attempt!(parse_id(id)));
        let request: T::Request = attempt!(parse_body(body));
        match self.service.update(id, request).await {
            Ok(_) => ApiResponse::no_content(),
            Err(e) => failure(e),
        }
    }

    pub async fn delete(&self, id: i64) -> ApiResponse {
        let id = T::Id::from(attempt!(parse_id(id)));
        match self.service.purge(id).await {
            Ok(()) => ApiResponse::no_content(),
            Err(e) => failure(e),
        }
    }
}

/// Handlers for every route of the admin API.
pub struct AdminApi<'a> {
    system: &'a AdminSystem,
}

impl<'a> AdminApi<'a> {
    pub const HIVES: &'static str = "/api/hives";
    pub const SECTIONS: &'static str = "/api/sections";
    pub const CATEGORIES: &'static str = "/api/categories";
    pub const PRODUCTS: &'static str = "/api/products";

    pub fn new(system: &'a AdminSystem) -> Self {
        Self { system }
    }

    pub fn hives(&self) -> Endpoint<'a, HiveRecord> {
        Endpoint::new(&self.system.hives, Self::HIVES)
    }

    pub fn sections(&self) -> Endpoint<'a, SectionRecord> {
        Endpoint::new(&self.system.sections, Self::SECTIONS)
    }

    pub fn categories(&self) -> Endpoint<'a, CategoryRecord> {
        Endpoint::new(&self.system.categories, Self::CATEGORIES)
    }

    pub fn products(&self) -> Endpoint<'a, ProductRecord> {
        Endpoint::new(&self.system.products, Self::PRODUCTS)
    }

    /// `GET /api/hives/{id}/sections`
    pub async fn hive_sections(&self, hive_id: i64) -> ApiResponse {
        let hive_id = HiveId::from(attempt!(parse_id(hive_id)));
        match self.system.sections.get_hive_sections_for(hive_id).await {
            Ok(items) => ApiResponse::ok(attempt!(render(&items))),
            Err(e) => failure(e),
        }
    }

    /// `GET /api/categories/{id}/products`
    pub async fn category_products(&self, category_id: i64) -> ApiResponse {
        let category_id = ProductCategoryId::from(attempt!(parse_id(category_id)));
        match self
            .system
            .products
            .get_products_for_category(category_id)
            .await
        {
            Ok(items) => ApiResponse::ok(attempt!(render(&items))),
            Err(e) => failure(e),
        }
    }

    /// `GET /api/products?offset=&count=`
    pub async fn product_page(&self, offset: i64, count: i64) -> ApiResponse {
        let (Ok(offset), Ok(count)) = (usize::try_from(offset), usize::try_from(count)) else {
            return ApiResponse::bad_request("offset and count must not be negative");
        };
        match self.system.products.get_products_page(offset, count).await {
            Ok(items) => ApiResponse::ok(attempt!(render(&items))),
            Err(e) => failure(e),
        }
    }
}
