//! Entities Layer: ABI Types
//!
//! Provides the value model for the smart-contract ABI codec: type descriptors
//! that describe the shape of a value, and typed values that carry the data.
//!
//! ## Overview
//!
//! The `entities_abi_types` crate is the innermost layer of the workspace. It has
//! no dependencies on other crates of the system. Higher layers
//! (`infrastructure_abi_codec`, `usecases_contract_arguments`,
//! `adapters_contract_results`) build on these types.
//!
//! ## Modules
//!
//! - **[`type_descriptor`](type_descriptor/index.html)**: `TypeDescriptor`, the closed
//!   set of categories (boolean, numerical, fixed 32 bytes, variable bytes, token
//!   identifier, nothing, fixed-length array) with their metadata.
//!
//! - **[`type_expression`](type_expression/index.html)**: `Display` and `FromStr` for
//!   descriptors, using ABI type expressions such as `u32` or `array3<Address>`.
//!
//! - **[`typed_value`](typed_value/index.html)**: `TypedValue`, the tagged union of
//!   in-memory values. Numerical values are arbitrary precision (`malachite::Integer`).
//!
//! ## Usage
//!
//! ```rust
//! use entities_abi_types::{ArrayVecType, TypeDescriptor, TypedValue};
//!
//! let ty = ArrayVecType::new(2, TypeDescriptor::u8()).unwrap();
//! let value = TypedValue::array(ty, vec![TypedValue::u8(1), TypedValue::u8(2)]).unwrap();
//! assert_eq!(value.type_descriptor().to_string(), "array2<u8>");
//! ```
//!
//! ## See Also
//!
//! - [`infrastructure_abi_codec`](../infrastructure_abi_codec/index.html): binary codecs
//!   for these values

pub mod type_descriptor;
pub mod type_expression;
pub mod typed_value;

pub use type_descriptor::{
    ArrayVecType, FixedBytesKind, NumericalType, NumericalWidth, TypeDescriptor, TypeError,
    FIXED_BYTES_LENGTH, MAX_NUMERICAL_BITS,
};
pub use type_expression::MAX_TYPE_NESTING;
pub use typed_value::{
    ArrayVec, BytesValue, FixedBytesValue, NumericalValue, TokenIdentifierValue, TypedValue,
};

// Re-exported so callers can build numerical values without a direct malachite dependency
pub use malachite::Integer;
