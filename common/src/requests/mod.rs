use serde::{Deserialize, Serialize};

/// Payload for the login endpoint.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub id: &'a str,
    pub password: &'a str,
}

/// Response of the login endpoint. `full_name` is present on success,
/// `error` on rejection.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Credentials attached to every authenticated call. The upstream system
/// keeps no session, so the stored login is replayed per request.
#[derive(Serialize)]
pub struct Credentials<'a> {
    pub login_id: &'a str,
    pub password: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_response_uses_camel_case_full_name() {
        let response: LoginResponse =
            serde_json::from_value(json!({"success": true, "fullName": "Tanaka Taro"})).unwrap();
        assert!(response.success);
        assert_eq!(response.full_name.as_deref(), Some("Tanaka Taro"));
        assert_eq!(response.error, None);
    }

    #[test]
    fn rejected_login_carries_only_the_error() {
        let response: LoginResponse =
            serde_json::from_value(json!({"success": false, "error": "ログイン失敗"})).unwrap();
        assert!(!response.success);
        assert_eq!(response.full_name, None);
        assert_eq!(response.error.as_deref(), Some("ログイン失敗"));
    }

    #[test]
    fn credentials_serialize_with_snake_case_keys() {
        let body = serde_json::to_value(Credentials {
            login_id: "u1",
            password: "p1",
        })
        .unwrap();
        assert_eq!(body, json!({"login_id": "u1", "password": "p1"}));
    }
}
