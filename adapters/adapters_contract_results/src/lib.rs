//! Adapters Layer: Contract Results
//!
//! Interprets the response of a read-only contract query: the node's JSON
//! payload carries base64 return data, a text return code and the gas left
//! over. The return data is decoded into raw buffers or, given an endpoint
//! definition, into typed values.
//!
//! ## Modules
//!
//! - **[`query_response`](query_response/index.html)**: `ContractQueryResponse`,
//!   payload parsing and untyped/typed output
//! - **[`return_code`](return_code/index.html)**: `ReturnCode`, the VM status
//! - **[`error`](error/index.html)**: `QueryResponseError`
//!
//! Fetching the payload over HTTP is the caller's concern.
//!
//! ## See Also
//!
//! - [`usecases_contract_arguments`](../usecases_contract_arguments/index.html): buffers
//!   to typed values

pub mod error;
pub mod query_response;
pub mod return_code;

pub use error::QueryResponseError;
pub use query_response::ContractQueryResponse;
pub use return_code::ReturnCode;
