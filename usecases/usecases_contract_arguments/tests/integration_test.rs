//! Integration tests for usecases_contract_arguments
//!
//! Exercises the serializer with endpoint definitions and mixed argument lists.

use entities_abi_types::{ArrayVecType, TypeDescriptor, TypedValue};
use infrastructure_abi_codec::{BinaryCodec, CodecConfig, CodecError};
use usecases_contract_arguments::*;

fn swap_endpoint() -> EndpointDefinition {
    EndpointDefinition::from_json(
        r#"{
            "name": "swapTokensFixedInput",
            "inputs": [
                { "name": "token_out", "type": "TokenIdentifier" },
                { "name": "amount_out_min", "type": "BigUint" },
                { "name": "path", "type": "array2<Address>" }
            ],
            "outputs": [
                { "type": "BigUint" },
                { "type": "bool" }
            ]
        }"#,
    )
    .unwrap()
}

fn path() -> TypedValue {
    let ty = ArrayVecType::new(2, TypeDescriptor::address()).unwrap();
    TypedValue::array(ty, vec![TypedValue::address([1; 32]), TypedValue::address([2; 32])]).unwrap()
}

#[test]
fn test_values_buffers_round_trip() {
    let serializer = ArgSerializer::new();
    let values = vec![
        TypedValue::token_identifier("MEX-455c57"),
        TypedValue::big_uint(1_000_000_000_000_000_000u64),
        path(),
    ];

    let buffers = serializer.values_to_buffers(&values).unwrap();
    assert_eq!(buffers.len(), values.len());
    assert_eq!(buffers[0], b"MEX-455c57".to_vec());
    assert_eq!(buffers[2].len(), 64);

    let descriptors = swap_endpoint().input_types();
    assert_eq!(serializer.buffers_to_values(&buffers, &descriptors).unwrap(), values);
}

#[test]
fn test_arity_mismatch() {
    let serializer = ArgSerializer::new();
    let buffers: Vec<Vec<u8>> = vec![vec![1], vec![2]];
    let descriptors = vec![TypeDescriptor::u8(), TypeDescriptor::u8(), TypeDescriptor::u8()];
    let err = serializer.buffers_to_values(&buffers, &descriptors).unwrap_err();
    assert_eq!(err, SerializerError::ArityMismatch { expected: 3, actual: 2 });
    assert_eq!(err.index(), None);
}

#[test]
fn test_encode_call_arguments_checks_types() {
    let serializer = ArgSerializer::new();
    let endpoint = swap_endpoint();

    let err = serializer
        .encode_call_arguments(
            &endpoint,
            &[TypedValue::token_identifier("MEX-455c57"), TypedValue::u64(5), path()],
        )
        .unwrap_err();
    assert_eq!(
        err,
        SerializerError::TypeMismatch {
            index: 1,
            expected: "BigUint".to_string(),
            actual: "u64".to_string(),
        }
    );

    let err = serializer.encode_call_arguments(&endpoint, &[]).unwrap_err();
    assert_eq!(err, SerializerError::ArityMismatch { expected: 3, actual: 0 });
}

#[test]
fn test_decode_call_results() {
    let serializer = ArgSerializer::new();
    let endpoint = swap_endpoint();

    let results = serializer
        .decode_call_results(&endpoint, &[vec![0x03, 0xE8], vec![]])
        .unwrap();
    assert_eq!(results, vec![TypedValue::big_uint(1000), TypedValue::boolean(false)]);
}

#[test]
fn test_failure_reports_index_and_cause() {
    let serializer = ArgSerializer::new();
    let err = serializer
        .buffers_to_values(
            &[vec![0x01], vec![0xFF, 0xFE]],
            &[TypeDescriptor::Boolean, TypeDescriptor::StringIdentifier],
        )
        .unwrap_err();
    assert_eq!(err.index(), Some(1));
    assert!(err.is_malformed());
    assert!(err.to_string().starts_with("argument 1: malformed value"));
}

#[test]
fn test_encode_failure_aborts() {
    let serializer = ArgSerializer::new();
    let err = serializer
        .values_to_buffers(&[TypedValue::u8(1), TypedValue::big_uint(-7)])
        .unwrap_err();
    assert!(matches!(
        err,
        SerializerError::Codec { index: 1, source: CodecError::ValueOutOfRange { .. } }
    ));
}

#[test]
fn test_strict_codec_through_serializer() {
    let serializer = ArgSerializer::with_codec(BinaryCodec::with_config(CodecConfig::strict()));
    assert!(serializer.codec().config().strict_canonical);

    let err = serializer.string_to_values("0001", &[TypeDescriptor::u16()]).unwrap_err();
    assert!(err.is_malformed());
    assert_eq!(
        ArgSerializer::new().string_to_values("0001", &[TypeDescriptor::u16()]).unwrap(),
        vec![TypedValue::u16(1)]
    );
}

#[test]
fn test_string_round_trip_with_endpoint() {
    let serializer = ArgSerializer::new();
    let endpoint = swap_endpoint();
    let values = vec![
        TypedValue::token_identifier("WEGLD-bd4d79"),
        TypedValue::big_uint(0),
        path(),
    ];

    let arguments = serializer.values_to_string(&values).unwrap();
    assert_eq!(arguments.matches(ARGUMENTS_SEPARATOR).count(), 2);
    assert_eq!(serializer.string_to_values(&arguments, &endpoint.input_types()).unwrap(), values);
}
