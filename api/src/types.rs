use serde_json::Value;

/// Success check for write operations: the decoded body must be an object
/// whose `response` field is the string `"success"`.
pub fn is_success(value: &Value) -> bool {
    value.get("response").and_then(Value::as_str) == Some("success")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_sentinel() {
        assert!(is_success(&json!({"response": "success"})));
        assert!(is_success(&json!({"response": "success", "id": 4})));
    }

    #[test]
    fn anything_else_is_rejected() {
        assert!(!is_success(&json!({"response": "failure"})));
        assert!(!is_success(&json!({"response": "Success"})));
        assert!(!is_success(&json!({"response": true})));
        assert!(!is_success(&json!({"status": "success"})));
        assert!(!is_success(&json!(["success"])));
        assert!(!is_success(&json!("success")));
        assert!(!is_success(&Value::Null));
    }
}
