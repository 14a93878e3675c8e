use std::fmt;

use serde::{Deserialize, Serialize};

/// Status envelope returned by every status-coded filesystem operation.
///
/// `code` is zero exactly when the operation's success condition holds.
/// Branch on [`Outcome::is_ok`]; the message is diagnostic text except for
/// existence checks, which carry a [`PathPresence`](super::PathPresence) token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Outcome {
    code: i32,
    message: String,
}

impl Outcome {
    pub const SUCCESS_CODE: i32 = 0;
    pub const FAILURE_CODE: i32 = 1;
    pub const OK_MESSAGE: &'static str = "OK";

    pub fn ok() -> Self {
        Self::success(Self::OK_MESSAGE)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            code: Self::SUCCESS_CODE,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            code: Self::FAILURE_CODE,
            message: message.into(),
        }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_ok(&self) -> bool {
        self.code == Self::SUCCESS_CODE
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::Outcome;

    #[test]
    fn ok_outcome_carries_fixed_message() {
        let outcome = Outcome::ok();

        assert!(outcome.is_ok());
        assert_eq!(outcome.code(), 0);
        assert_eq!(outcome.message(), "OK");
    }

    #[test]
    fn failure_outcome_is_non_zero() {
        let outcome = Outcome::failure("Could not create file");

        assert!(outcome.is_err());
        assert_eq!(outcome.code(), 1);
        assert_eq!(outcome.to_string(), "[1] Could not create file");
    }

    #[test]
    fn outcome_serializes_as_code_and_message() {
        let json = serde_json::to_value(Outcome::failure("0")).expect("serialize outcome");

        assert_eq!(json, serde_json::json!({ "code": 1, "message": "0" }));
    }
}
