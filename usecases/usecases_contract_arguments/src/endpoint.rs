//! Endpoint Definition Module
//!
//! A contract function signature: its name and the ordered input and output
//! type descriptors. Definitions are usually read from a contract's ABI JSON:
//!
//! ```json
//! {
//!   "name": "getSum",
//!   "inputs": [{ "name": "a", "type": "u32" }, { "name": "b", "type": "u32" }],
//!   "outputs": [{ "type": "BigUint" }]
//! }
//! ```
//!
//! Types use the ABI type-expression grammar of `entities_abi_types`.

use entities_abi_types::TypeDescriptor;
use serde::{Deserialize, Serialize};

/// One input or output parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointParameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "type", with = "type_expression")]
    ty: TypeDescriptor,
}

impl EndpointParameter {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: Some(name.into()),
            ty,
        }
    }

    pub fn unnamed(ty: TypeDescriptor) -> Self {
        Self { name: None, ty }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.ty
    }
}

/// Contract endpoint signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDefinition {
    name: String,
    #[serde(default, rename = "inputs")]
    input: Vec<EndpointParameter>,
    #[serde(default, rename = "outputs")]
    output: Vec<EndpointParameter>,
}

impl EndpointDefinition {
    pub fn new(
        name: impl Into<String>,
        input: Vec<EndpointParameter>,
        output: Vec<EndpointParameter>,
    ) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Parse a single endpoint object from ABI JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input(&self) -> &[EndpointParameter] {
        &self.input
    }

    pub fn output(&self) -> &[EndpointParameter] {
        &self.output
    }

    pub fn input_types(&self) -> Vec<TypeDescriptor> {
        self.input.iter().map(|p| p.ty.clone()).collect()
    }

    pub fn output_types(&self) -> Vec<TypeDescriptor> {
        self.output.iter().map(|p| p.ty.clone()).collect()
    }
}

/// Serde adapter: descriptors as type-expression strings
mod type_expression {
    use entities_abi_types::TypeDescriptor;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ty: &TypeDescriptor, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(ty)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<TypeDescriptor, D::Error>
    where
        D: Deserializer<'de>,
    {
        let expression = String::deserialize(deserializer)?;
        expression.parse().map_err(de::Error::custom)
    }
}
