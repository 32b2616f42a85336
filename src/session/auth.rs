use crate::presentation::serialization::option_string_or_number;
use serde::Deserialize;

/// Body of a successful `login.php` answer.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub onlinetoken: String,
    #[serde(default, deserialize_with = "option_string_or_number")]
    pub role: Option<String>,
    #[serde(default)]
    pub information: Option<String>,
}

pub(crate) fn login_form(username: &str, password: &str) -> Vec<(String, String)> {
    vec![
        ("username".to_string(), username.to_string()),
        ("password".to_string(), password.to_string()),
    ]
}

#[cfg(test)]
mod tests_login_response {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_deserialize_login_response() {
        let response: LoginResponse = serde_json::from_value(json!({
            "response_code": 200,
            "responsetime": "2023-05-08 15:03:38",
            "onlinetoken": "xxxxxxxxxxxxxxxxxxxxxxxxxx",
            "role": 1,
            "information": "已成功登陆用户：alice"
        }))
        .unwrap();

        assert_eq!(response.onlinetoken, "xxxxxxxxxxxxxxxxxxxxxxxxxx");
        assert_eq!(response.role.as_deref(), Some("1"));
    }

    #[test]
    fn test_missing_token_fails() {
        let result: Result<LoginResponse, _> =
            serde_json::from_value(json!({"response_code": 200, "role": "1"}));
        assert!(result.is_err());
    }
}
