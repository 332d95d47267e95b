//! DOM id resolution for label/control pairs.

use uuid::Uuid;

/// Pick the element id: explicit id, then the field name, then a generated one.
#[must_use]
pub fn element_id(prefix: &str, id: Option<&str>, name: Option<&str>) -> String {
    let present = |value: &&str| !value.is_empty();
    id.filter(present)
        .or_else(|| name.filter(present))
        .map_or_else(|| generated_id(prefix), str::to_string)
}

/// `{prefix}-{9 hex chars}` from a random UUID.
#[must_use]
pub fn generated_id(prefix: &str) -> String {
    let simple = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &simple[..9])
}

#[cfg(test)]
mod tests {
    use super::{element_id, generated_id};

    #[test]
    fn explicit_id_wins_over_name() {
        assert_eq!(element_id("input", Some("email"), Some("user_email")), "email");
        assert_eq!(element_id("input", None, Some("user_email")), "user_email");
    }

    #[test]
    fn generated_ids_are_prefixed_and_unique() {
        let first = generated_id("radio");
        let second = generated_id("radio");
        assert!(first.starts_with("radio-"));
        assert_eq!(first.len(), "radio-".len() + 9);
        assert_ne!(first, second);
        assert!(element_id("checkbox", Some(""), None).starts_with("checkbox-"));
    }
}
