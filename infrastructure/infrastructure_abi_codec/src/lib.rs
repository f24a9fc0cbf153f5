//! Infrastructure Layer: ABI Codec
//!
//! Provides the type-directed binary codec for smart-contract ABI values.
//! Every value has two byte representations:
//!
//! - **nested**: used when the value is embedded in a larger structure. It is
//!   fixed-width or carries a 4-byte length prefix, so the decoder always knows
//!   how many bytes it consumed.
//! - **top-level**: used when the value occupies a whole standalone buffer (one
//!   contract argument or result). Redundant width and length information is
//!   dropped because the buffer boundary delimits the value.
//!
//! ## Modules
//!
//! - **[`binary_codec`](binary_codec/index.html)**: `BinaryCodec`, the dispatching entry point
//! - **[`boolean`](boolean/index.html)**, **[`numerical`](numerical/index.html)**,
//!   **[`fixed_bytes`](fixed_bytes/index.html)**, **[`bytes`](bytes/index.html)**,
//!   **[`token_identifier`](token_identifier/index.html)**, **[`nothing`](nothing/index.html)**,
//!   **[`array`](array/index.html)**: one codec per category
//! - **[`cursor`](cursor/index.html)**: shared read cursor for nested decoding
//! - **[`integer_bytes`](integer_bytes/index.html)**: big-endian two's-complement helpers
//!   over malachite integers
//! - **[`config`](config/index.html)**: `CodecConfig`
//!
//! ## Usage
//!
//! ```rust
//! use entities_abi_types::{TypeDescriptor, TypedValue};
//! use infrastructure_abi_codec::BinaryCodec;
//!
//! let codec = BinaryCodec::new();
//! assert_eq!(codec.encode_top_level(&TypedValue::u16(256)).unwrap(), vec![0x01, 0x00]);
//! assert_eq!(codec.encode_nested(&TypedValue::u16(1)).unwrap(), vec![0x00, 0x01]);
//!
//! let data = [0, 0, 0, 2, 0xAB, 0xCD];
//! let (value, consumed) = codec.decode_nested(&data, &TypeDescriptor::VariableBytes).unwrap();
//! assert_eq!(value, TypedValue::bytes(vec![0xAB, 0xCD]));
//! assert_eq!(consumed, 6);
//! ```
//!
//! ## See Also
//!
//! - [`entities_abi_types`](../entities_abi_types/index.html): descriptors and values
//! - [`usecases_contract_arguments`](../usecases_contract_arguments/index.html): argument lists

pub mod array;
pub mod binary_codec;
pub mod boolean;
pub mod bytes;
pub mod config;
pub mod cursor;
pub mod error;
pub mod fixed_bytes;
pub mod integer_bytes;
pub mod nothing;
pub mod numerical;
pub mod token_identifier;

pub use binary_codec::{BinaryCodec, EncodingMode};
pub use config::CodecConfig;
pub use cursor::Cursor;
pub use error::CodecError;
