pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn page_count_serializes_snake_case() {
        let pc = types::PageCount { page_count: 3 };
        assert_eq!(serde_json::to_string(&pc).unwrap(), r#"{"page_count":3}"#);
    }
}
