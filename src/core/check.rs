use crate::utils::error::{CheckError, Result};
use reqwest::StatusCode;
use serde_json::Value;

/// Expected outcome of a single HTTP step. Some steps only need a
/// successful response, others require an exact code (201, 204).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    Success,
    Status(u16),
}

impl Expect {
    pub fn success() -> Self {
        Expect::Success
    }

    pub fn status(code: u16) -> Self {
        Expect::Status(code)
    }

    pub fn check(&self, step: &str, status: StatusCode) -> Result<()> {
        let matched = match self {
            Expect::Success => status.is_success(),
            Expect::Status(code) => status.as_u16() == *code,
        };

        if matched {
            Ok(())
        } else {
            let expected = match self {
                Expect::Success => "2xx".to_string(),
                Expect::Status(code) => code.to_string(),
            };
            Err(CheckError::AssertionError {
                step: step.to_string(),
                message: format!("expected status {}, got {}", expected, status.as_u16()),
            })
        }
    }
}

/// Looks up a dotted path (`data.id`) in a JSON body. Fails the step if
/// any segment is absent.
pub fn require_field<'a>(step: &str, body: &'a Value, path: &str) -> Result<&'a Value> {
    let mut current = body;
    for segment in path.split('.') {
        current = current
            .get(segment)
            .ok_or_else(|| CheckError::AssertionError {
                step: step.to_string(),
                message: format!("missing field '{}' in response body", path),
            })?;
    }
    Ok(current)
}

pub fn assert_str(step: &str, body: &Value, path: &str, expected: &str) -> Result<()> {
    let value = require_field(step, body, path)?;
    match value.as_str() {
        Some(actual) if actual == expected => Ok(()),
        _ => Err(CheckError::AssertionError {
            step: step.to_string(),
            message: format!("expected {} == \"{}\", got {}", path, expected, value),
        }),
    }
}

pub fn assert_count(step: &str, body: &Value, path: &str, expected: i64) -> Result<()> {
    let value = require_field(step, body, path)?;
    match value.as_i64() {
        Some(actual) if actual == expected => Ok(()),
        _ => Err(CheckError::AssertionError {
            step: step.to_string(),
            message: format!("expected {} == {}, got {}", path, expected, value),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expect_success() {
        assert!(Expect::success().check("step", StatusCode::OK).is_ok());
        assert!(Expect::success().check("step", StatusCode::CREATED).is_ok());
        assert!(Expect::success()
            .check("step", StatusCode::NOT_FOUND)
            .is_err());
    }

    #[test]
    fn test_expect_exact_status() {
        assert!(Expect::status(201).check("step", StatusCode::CREATED).is_ok());
        // A generic ok-check would accept 200 here; the exact form must not.
        assert!(Expect::status(201).check("step", StatusCode::OK).is_err());
    }

    #[test]
    fn test_expect_failure_names_the_step() {
        let err = Expect::status(204)
            .check("delete user", StatusCode::OK)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("delete user"), "unexpected message: {}", msg);
        assert!(msg.contains("204"), "unexpected message: {}", msg);
    }

    #[test]
    fn test_require_field_dotted_path() {
        let body = json!({"data": {"id": 1}});
        assert_eq!(require_field("step", &body, "data.id").unwrap(), &json!(1));
        assert!(require_field("step", &body, "data.missing").is_err());
    }

    #[test]
    fn test_assert_str() {
        let body = json!({"name": "test123"});
        assert!(assert_str("step", &body, "name", "test123").is_ok());
        assert!(assert_str("step", &body, "name", "other").is_err());
    }

    #[test]
    fn test_assert_count() {
        let body = json!({"remaining": 47});
        assert!(assert_count("step", &body, "remaining", 47).is_ok());
        assert!(assert_count("step", &body, "remaining", 52).is_err());
    }
}
