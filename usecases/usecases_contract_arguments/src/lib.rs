//! Use Cases Layer: Contract Arguments
//!
//! Converts between the list-of-buffers shape that smart-contract calls take
//! (one standalone buffer per argument or result) and ordered typed values.
//!
//! ## Modules
//!
//! - **[`arg_serializer`](arg_serializer/index.html)**: `ArgSerializer` with
//!   `values_to_buffers` / `buffers_to_values` and the `@`-joined hex string form
//! - **[`endpoint`](endpoint/index.html)**: `EndpointDefinition`, a function signature
//!   that can be read from ABI JSON
//! - **[`error`](error/index.html)**: `SerializerError`
//!
//! ## Usage
//!
//! ```rust
//! use entities_abi_types::{TypeDescriptor, TypedValue};
//! use usecases_contract_arguments::ArgSerializer;
//!
//! let serializer = ArgSerializer::new();
//! let values = [TypedValue::u64(5), TypedValue::boolean(true)];
//! let buffers = serializer.values_to_buffers(&values).unwrap();
//! assert_eq!(buffers, vec![vec![5], vec![1]]);
//!
//! let values = serializer
//!     .buffers_to_values(&buffers, &[TypeDescriptor::u64(), TypeDescriptor::Boolean])
//!     .unwrap();
//! assert_eq!(values[0], TypedValue::u64(5));
//! ```
//!
//! ## See Also
//!
//! - [`infrastructure_abi_codec`](../infrastructure_abi_codec/index.html): the per-value codec
//! - [`adapters_contract_results`](../adapters_contract_results/index.html): query response parsing

pub mod arg_serializer;
pub mod endpoint;
pub mod error;

pub use arg_serializer::{string_to_buffers, ArgSerializer, ARGUMENTS_SEPARATOR};
pub use endpoint::{EndpointDefinition, EndpointParameter};
pub use error::SerializerError;
