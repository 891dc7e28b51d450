use uuid::Uuid;

/// Fresh identifier for correlating the log lines of one request.
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
