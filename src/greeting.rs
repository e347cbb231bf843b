use serde::Serialize;

use crate::config::DEFAULT_NAME;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub message: String,
    pub ip: String,
}

impl Greeting {
    pub fn new(name: &str, ip: impl Into<String>) -> Self {
        Self {
            message: format!("Hello, {name}"),
            ip: ip.into(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Falls back to [`DEFAULT_NAME`] when the name is missing or empty.
pub fn resolve_name(name: Option<&str>) -> &str {
    match name {
        Some(n) if !n.is_empty() => n,
        _ => DEFAULT_NAME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_name_defaults_to_world() {
        assert_eq!(resolve_name(None), "World");
        assert_eq!(resolve_name(Some("")), "World");
    }

    #[test]
    fn supplied_name_is_kept() {
        assert_eq!(resolve_name(Some("Ada")), "Ada");
        assert_eq!(resolve_name(Some(" ")), " ");
    }

    #[test]
    fn greeting_serializes_message_then_ip() {
        let greeting = Greeting::new("Ada", "203.0.113.7");
        assert_eq!(
            greeting.to_json().unwrap(),
            r#"{"message":"Hello, Ada","ip":"203.0.113.7"}"#
        );
    }

    #[test]
    fn ip_is_not_trimmed() {
        let greeting = Greeting::new("World", "203.0.113.7\n");
        assert_eq!(greeting.ip, "203.0.113.7\n");
        assert_eq!(
            greeting.to_json().unwrap(),
            r#"{"message":"Hello, World","ip":"203.0.113.7\n"}"#
        );
    }
}
