use uuid::Uuid;

/// Returns a fresh opaque id.
pub fn unique_id() -> String {
    Uuid::new_v4().to_string()
}

/// Checks if the given id is well formed. The empty string is not a valid id.
pub fn valid_id(id: &str) -> bool {
    if id.is_empty() {
        return false;
    }

    Uuid::parse_str(id).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_id_is_valid() {
        assert!(valid_id(&unique_id()));
    }

    #[test]
    fn test_unique_ids_differ() {
        assert_ne!(unique_id(), unique_id());
    }

    #[test]
    fn test_valid_id_empty() {
        assert!(!valid_id(""));
    }

    #[test]
    fn test_valid_id_malformed() {
        assert!(!valid_id("not-a-uuid"));
        assert!(!valid_id("1234"));
    }
}
