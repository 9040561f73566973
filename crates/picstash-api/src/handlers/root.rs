//! Liveness/greeting endpoint.

pub async fn root() -> &'static str {
    "Image server is running."
}
