//! Contract Query Response Module
//!
//! Reads the JSON payload a node returns for a read-only contract query and
//! turns its base64 return data into raw buffers or typed values.
//!
//! ```json
//! {
//!   "returnData": ["Ag==", null],
//!   "returnCode": "ok",
//!   "returnMessage": "",
//!   "gasRemaining": 18446744073709501615
//! }
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use entities_abi_types::TypedValue;
use serde_json::Value;
use tracing::{debug, warn};
use usecases_contract_arguments::{ArgSerializer, EndpointDefinition};

use crate::error::QueryResponseError;
use crate::return_code::ReturnCode;

/// Parsed contract query response
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContractQueryResponse {
    return_data: Vec<String>,
    return_code: ReturnCode,
    return_message: String,
    gas_used: u64,
}

impl ContractQueryResponse {
    pub fn new(
        return_data: Vec<String>,
        return_code: ReturnCode,
        return_message: impl Into<String>,
        gas_used: u64,
    ) -> Self {
        Self {
            return_data,
            return_code,
            return_message: return_message.into(),
            gas_used,
        }
    }

    /// Build a response from a node's HTTP payload
    ///
    /// Missing fields take their empty defaults. Gas used is derived from the
    /// remaining gas as `u64::MAX - gasRemaining`.
    ///
    /// # Returns
    /// * `Ok(response)` - Parsed response
    /// * `Err(QueryResponseError::InvalidPayload)` - A field has the wrong shape,
    ///   or the remaining gas does not fit in `u64`
    pub fn from_http_payload(payload: &Value) -> Result<Self, QueryResponseError> {
        let fields = payload.as_object().ok_or_else(|| {
            QueryResponseError::InvalidPayload("expected a JSON object".to_string())
        })?;

        let return_data = match fields.get("returnData") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::Null => Ok(String::new()),
                    Value::String(text) => Ok(text.clone()),
                    _ => Err(QueryResponseError::InvalidPayload(format!(
                        "returnData[{}] is not a string",
                        index
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => {
                return Err(QueryResponseError::InvalidPayload(
                    "returnData is not an array".to_string(),
                ))
            }
        };

        let return_code = optional_string(payload, "returnCode")?
            .map(ReturnCode::from_text)
            .unwrap_or_default();
        let return_message = optional_string(payload, "returnMessage")?
            .unwrap_or_default()
            .to_string();

        let gas_remaining = match fields
            .get("gasRemaining")
            .filter(|v| !v.is_null())
            .or_else(|| fields.get("GasRemaining").filter(|v| !v.is_null()))
        {
            None => 0,
            Some(value) => parse_gas(value)?,
        };
        let gas_used = u64::MAX - gas_remaining;

        debug!(
            items = return_data.len(),
            return_code = %return_code,
            gas_used,
            "parsed contract query response"
        );

        Ok(Self {
            return_data,
            return_code,
            return_message,
            gas_used,
        })
    }

    /// Base64 return data items, in order
    pub fn return_data(&self) -> &[String] {
        &self.return_data
    }

    pub fn return_code(&self) -> &ReturnCode {
        &self.return_code
    }

    pub fn return_message(&self) -> &str {
        &self.return_message
    }

    pub fn gas_used(&self) -> u64 {
        self.gas_used
    }

    pub fn is_success(&self) -> bool {
        self.return_code.is_success()
    }

    /// Base64-decode each return data item; an empty item is an empty buffer
    pub fn output_untyped(&self) -> Result<Vec<Vec<u8>>, QueryResponseError> {
        self.return_data
            .iter()
            .enumerate()
            .map(|(index, item)| {
                STANDARD
                    .decode(item)
                    .map_err(|e| QueryResponseError::InvalidBase64 {
                        index,
                        reason: e.to_string(),
                    })
            })
            .collect()
    }

    /// Decode the return data against the endpoint's output types
    pub fn output_typed(
        &self,
        endpoint: &EndpointDefinition,
    ) -> Result<Vec<TypedValue>, QueryResponseError> {
        self.output_typed_with(&ArgSerializer::new(), endpoint)
    }

    /// Like [`output_typed`](Self::output_typed), with a caller-configured serializer
    pub fn output_typed_with(
        &self,
        serializer: &ArgSerializer,
        endpoint: &EndpointDefinition,
    ) -> Result<Vec<TypedValue>, QueryResponseError> {
        if !self.is_success() {
            warn!(
                endpoint = endpoint.name(),
                return_code = %self.return_code,
                message = %self.return_message,
                "typed output requested for a failed query"
            );
        }

        let buffers = self.output_untyped()?;
        Ok(serializer.decode_call_results(endpoint, &buffers)?)
    }
}

fn optional_string<'a>(
    payload: &'a Value,
    field: &str,
) -> Result<Option<&'a str>, QueryResponseError> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.as_str())),
        Some(_) => Err(QueryResponseError::InvalidPayload(format!(
            "{} is not a string",
            field
        ))),
    }
}

/// Remaining gas arrives either as a JSON number or as a decimal string
fn parse_gas(value: &Value) -> Result<u64, QueryResponseError> {
    let parsed = match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.parse::<u64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        QueryResponseError::InvalidPayload(format!("gasRemaining {} does not fit u64", value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_for_missing_fields() {
        let response = ContractQueryResponse::from_http_payload(&json!({})).unwrap();
        assert!(response.return_data().is_empty());
        assert_eq!(response.return_code(), &ReturnCode::None);
        assert_eq!(response.return_message(), "");
        assert_eq!(response.gas_used(), u64::MAX);
    }

    #[test]
    fn test_gas_used_from_remaining() {
        let response =
            ContractQueryResponse::from_http_payload(&json!({ "gasRemaining": 1000 })).unwrap();
        assert_eq!(response.gas_used(), u64::MAX - 1000);

        let response =
            ContractQueryResponse::from_http_payload(&json!({ "GasRemaining": "42" })).unwrap();
        assert_eq!(response.gas_used(), u64::MAX - 42);
    }

    #[test]
    fn test_gas_overflow_rejected() {
        let err =
            ContractQueryResponse::from_http_payload(&json!({ "gasRemaining": -1 })).unwrap_err();
        assert!(matches!(err, QueryResponseError::InvalidPayload(_)));

        let err = ContractQueryResponse::from_http_payload(
            &json!({ "gasRemaining": "18446744073709551616" }),
        )
        .unwrap_err();
        assert!(matches!(err, QueryResponseError::InvalidPayload(_)));
    }

    #[test]
    fn test_null_items_are_empty() {
        let response = ContractQueryResponse::from_http_payload(
            &json!({ "returnData": ["AQ==", null, ""] }),
        )
        .unwrap();
        assert_eq!(response.output_untyped().unwrap(), vec![vec![1], vec![], vec![]]);
    }

    #[test]
    fn test_invalid_base64_names_index() {
        let response = ContractQueryResponse::new(
            vec!["AQ==".to_string(), "not base64!".to_string()],
            ReturnCode::Ok,
            "",
            0,
        );
        let err = response.output_untyped().unwrap_err();
        assert!(matches!(err, QueryResponseError::InvalidBase64 { index: 1, .. }));
    }

    #[test]
    fn test_wrong_shapes_rejected() {
        assert!(ContractQueryResponse::from_http_payload(&json!([])).is_err());
        let not_an_array = json!({ "returnData": "AQ==" });
        assert!(ContractQueryResponse::from_http_payload(&not_an_array).is_err());
        assert!(ContractQueryResponse::from_http_payload(&json!({ "returnCode": 0 })).is_err());
        assert!(ContractQueryResponse::from_http_payload(&json!({ "returnData": [1] })).is_err());
    }
}
