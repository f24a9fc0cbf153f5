//! Integration tests for adapters_contract_results
//!
//! Parses node payloads and decodes their return data against endpoints.

use adapters_contract_results::*;
use entities_abi_types::{TypeDescriptor, TypedValue};
use serde_json::json;
use usecases_contract_arguments::{
    ArgSerializer, EndpointDefinition, EndpointParameter, SerializerError,
};

fn get_sum() -> EndpointDefinition {
    EndpointDefinition::new(
        "getSum",
        Vec::new(),
        vec![EndpointParameter::unnamed(TypeDescriptor::big_uint())],
    )
}

#[test]
fn test_query_response_typed_output() {
    let payload = json!({
        "returnData": ["A+g="],
        "returnCode": "ok",
        "returnMessage": "",
        "gasRemaining": 18446744073709501615u64
    });

    let response = ContractQueryResponse::from_http_payload(&payload).unwrap();
    assert!(response.is_success());
    assert_eq!(response.gas_used(), 50000);
    assert_eq!(response.output_untyped().unwrap(), vec![vec![0x03, 0xE8]]);
    assert_eq!(response.output_typed(&get_sum()).unwrap(), vec![TypedValue::big_uint(1000)]);
}

#[test]
fn test_multiple_outputs() {
    let endpoint = EndpointDefinition::from_json(
        r#"{
            "name": "getPair",
            "outputs": [{ "type": "TokenIdentifier" }, { "type": "u32" }, { "type": "bool" }]
        }"#,
    )
    .unwrap();
    let payload = json!({
        "returnData": ["V0VHTEQ=", "Kg==", null],
        "returnCode": "ok"
    });

    let response = ContractQueryResponse::from_http_payload(&payload).unwrap();
    assert_eq!(
        response.output_typed(&endpoint).unwrap(),
        vec![
            TypedValue::token_identifier("WEGLD"),
            TypedValue::u32(42),
            TypedValue::boolean(false),
        ]
    );
}

#[test]
fn test_failed_query_carries_message() {
    let payload = json!({
        "returnData": null,
        "returnCode": "user error",
        "returnMessage": "storage decode error: bad array length"
    });

    let response = ContractQueryResponse::from_http_payload(&payload).unwrap();
    assert_eq!(response.return_code(), &ReturnCode::UserError);
    assert!(!response.is_success());
    assert_eq!(response.return_message(), "storage decode error: bad array length");

    let err = response.output_typed(&get_sum()).unwrap_err();
    assert_eq!(
        err,
        QueryResponseError::Serializer(SerializerError::ArityMismatch { expected: 1, actual: 0 })
    );
}

#[test]
fn test_output_decode_error_propagates() {
    let payload = json!({ "returnData": ["AAE="], "returnCode": "ok" });
    let response = ContractQueryResponse::from_http_payload(&payload).unwrap();

    let endpoint = EndpointDefinition::new(
        "getFlag",
        Vec::new(),
        vec![EndpointParameter::unnamed(TypeDescriptor::Boolean)],
    );
    match response.output_typed(&endpoint).unwrap_err() {
        QueryResponseError::Serializer(err) => {
            assert_eq!(err.index(), Some(0));
            assert!(err.is_malformed());
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_output_typed_with_custom_serializer() {
    use infrastructure_abi_codec::{BinaryCodec, CodecConfig};

    let payload = json!({ "returnData": ["AAE="], "returnCode": "ok" });
    let response = ContractQueryResponse::from_http_payload(&payload).unwrap();
    let endpoint = EndpointDefinition::new(
        "getCount",
        Vec::new(),
        vec![EndpointParameter::unnamed(TypeDescriptor::u16())],
    );

    assert_eq!(response.output_typed(&endpoint).unwrap(), vec![TypedValue::u16(1)]);

    let strict = ArgSerializer::with_codec(BinaryCodec::with_config(CodecConfig::strict()));
    assert!(response.output_typed_with(&strict, &endpoint).is_err());
}
