//! Return Code Module
//!
//! The VM reports the outcome of a contract query as a lowercase text status.
//! Statuses outside the known set are kept verbatim.

use std::fmt;

/// Contract query return code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ReturnCode {
    /// No status was reported
    #[default]
    None,
    Ok,
    FunctionNotFound,
    FunctionWrongSignature,
    ContractNotFound,
    UserError,
    OutOfGas,
    AccountCollision,
    OutOfFunds,
    CallStackOverFlow,
    ContractInvalid,
    ExecutionFailed,
    Unknown(String),
}

impl ReturnCode {
    /// Map the VM's text status onto a return code
    pub fn from_text(text: &str) -> Self {
        match text {
            "" => ReturnCode::None,
            "ok" => ReturnCode::Ok,
            "function not found" => ReturnCode::FunctionNotFound,
            "wrong signature for function" | "wrong signature" => {
                ReturnCode::FunctionWrongSignature
            }
            "contract not found" => ReturnCode::ContractNotFound,
            "user error" => ReturnCode::UserError,
            "out of gas" => ReturnCode::OutOfGas,
            "account collision" => ReturnCode::AccountCollision,
            "out of funds" => ReturnCode::OutOfFunds,
            "call stack overflow" => ReturnCode::CallStackOverFlow,
            "contract invalid" => ReturnCode::ContractInvalid,
            "execution failed" => ReturnCode::ExecutionFailed,
            other => ReturnCode::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ReturnCode::None => "",
            ReturnCode::Ok => "ok",
            ReturnCode::FunctionNotFound => "function not found",
            ReturnCode::FunctionWrongSignature => "wrong signature for function",
            ReturnCode::ContractNotFound => "contract not found",
            ReturnCode::UserError => "user error",
            ReturnCode::OutOfGas => "out of gas",
            ReturnCode::AccountCollision => "account collision",
            ReturnCode::OutOfFunds => "out of funds",
            ReturnCode::CallStackOverFlow => "call stack overflow",
            ReturnCode::ContractInvalid => "contract invalid",
            ReturnCode::ExecutionFailed => "execution failed",
            ReturnCode::Unknown(text) => text,
        }
    }

    /// Only `ok` counts as success
    pub fn is_success(&self) -> bool {
        matches!(self, ReturnCode::Ok)
    }
}

impl From<&str> for ReturnCode {
    fn from(text: &str) -> Self {
        ReturnCode::from_text(text)
    }
}

impl fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(ReturnCode::from_text("ok"), ReturnCode::Ok);
        assert_eq!(ReturnCode::from_text("user error"), ReturnCode::UserError);
        assert_eq!(ReturnCode::from_text("out of gas"), ReturnCode::OutOfGas);
        assert_eq!(ReturnCode::from_text("wrong signature"), ReturnCode::FunctionWrongSignature);
        assert_eq!(ReturnCode::from_text(""), ReturnCode::None);
    }

    #[test]
    fn test_unknown_code_kept_verbatim() {
        let code = ReturnCode::from("simulation failed");
        assert_eq!(code, ReturnCode::Unknown("simulation failed".to_string()));
        assert_eq!(code.to_string(), "simulation failed");
        assert!(!code.is_success());
    }

    #[test]
    fn test_only_ok_is_success() {
        assert!(ReturnCode::Ok.is_success());
        assert!(!ReturnCode::None.is_success());
        assert!(!ReturnCode::ExecutionFailed.is_success());
    }

    #[test]
    fn test_text_round_trip() {
        for code in [
            ReturnCode::Ok,
            ReturnCode::FunctionNotFound,
            ReturnCode::FunctionWrongSignature,
            ReturnCode::ContractNotFound,
            ReturnCode::UserError,
            ReturnCode::OutOfGas,
            ReturnCode::AccountCollision,
            ReturnCode::OutOfFunds,
            ReturnCode::CallStackOverFlow,
            ReturnCode::ContractInvalid,
            ReturnCode::ExecutionFailed,
        ] {
            assert_eq!(ReturnCode::from_text(code.as_str()), code);
        }
    }
}
