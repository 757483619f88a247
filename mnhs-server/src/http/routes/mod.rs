//! Route handlers organized by resource

pub mod appointments;
pub mod health;
pub mod index;
pub mod lookups;
pub mod patients;
pub mod reports;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::http::fake::FakeStore;
    use crate::http::server::{router, AppState};

    pub async fn send(
        store: Arc<FakeStore>,
        request: Request<Body>,
    ) -> (StatusCode, serde_json::Value) {
        let app = router(AppState::new(store));
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    pub fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }
}
