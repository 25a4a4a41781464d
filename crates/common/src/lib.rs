//! Shared building blocks for the workspace: logging setup and small wire types.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_status() {
        let h = types::Health { status: "ok" };
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json, serde_json::json!({"status": "ok"}));
    }
}
