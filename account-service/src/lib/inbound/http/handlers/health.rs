/// Liveness probe.
pub async fn health() -> &'static str {
    "Server is up and running"
}
