//! Discovery document type definitions
//!
//! Based on JSON Schema Draft 3 with Google-specific extensions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Discovery Document root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryDoc {
    /// API name (e.g., "storage", "compute")
    #[serde(default)]
    pub name: Option<String>,

    /// API version (e.g., "v1")
    #[serde(default)]
    pub version: Option<String>,

    /// Root URL (e.g., "<https://storage.googleapis.com/>")
    #[serde(rename = "rootUrl")]
    pub root_url: String,

    /// Base URL for all method paths (e.g., "<https://storage.googleapis.com/storage/v1/>")
    #[serde(rename = "baseUrl")]
    pub base_url: String,

    /// Global parameters shared by every method
    #[serde(default)]
    pub parameters: HashMap<String, Parameter>,

    /// Schemas (data types)
    #[serde(default)]
    pub schemas: HashMap<String, Schema>,

    /// Resources (collections of methods and nested resources)
    #[serde(default)]
    pub resources: HashMap<String, ResourceSpec>,

    /// Methods at the document root (rare)
    #[serde(default)]
    pub methods: HashMap<String, MethodSpec>,
}

/// Parameter definition
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter type (string, integer, boolean, etc.)
    #[serde(rename = "type")]
    #[serde(default)]
    pub param_type: Option<String>,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// Default value
    #[serde(default)]
    pub default: Option<String>,

    /// Required flag
    #[serde(default)]
    pub required: bool,

    /// Location (query, path)
    #[serde(default)]
    pub location: Option<String>,

    /// Enum values
    #[serde(rename = "enum")]
    #[serde(default)]
    pub enum_values: Vec<String>,
}

/// Schema (data type) definition
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Schema ID
    #[serde(default)]
    pub id: Option<String>,

    /// Type (string, object, array, etc.)
    #[serde(rename = "type")]
    #[serde(default)]
    pub schema_type: Option<String>,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// Properties (for object type)
    #[serde(default)]
    pub properties: HashMap<String, Schema>,

    /// Additional properties
    #[serde(rename = "additionalProperties")]
    #[serde(default)]
    pub additional_properties: Option<Box<Schema>>,

    /// Items (for array type)
    #[serde(default)]
    pub items: Option<Box<Schema>>,

    /// Reference to another schema
    #[serde(rename = "$ref")]
    #[serde(default)]
    pub ref_schema: Option<String>,

    /// Format (e.g., "int32", "date-time")
    #[serde(default)]
    pub format: Option<String>,

    /// Enum values
    #[serde(rename = "enum")]
    #[serde(default)]
    pub enum_values: Vec<String>,

    /// Required properties
    #[serde(default)]
    pub required: Vec<String>,
}

/// Resource subtree: a namespace of methods and nested resources
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceSpec {
    /// Methods for this resource
    #[serde(default)]
    pub methods: HashMap<String, MethodSpec>,

    /// Nested resources
    #[serde(default)]
    pub resources: HashMap<String, ResourceSpec>,
}

/// Method (API operation) specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSpec {
    /// Method ID (e.g., "storage.buckets.insert")
    pub id: String,

    /// HTTP path, relative to the document's baseUrl
    pub path: String,

    /// HTTP method (GET, POST, PUT, DELETE, PATCH)
    #[serde(rename = "httpMethod")]
    pub http_method: String,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// Method-level parameters
    #[serde(default)]
    pub parameters: HashMap<String, Parameter>,

    /// Request body schema
    #[serde(default)]
    pub request: Option<SchemaRef>,

    /// Response schema
    #[serde(default)]
    pub response: Option<SchemaRef>,

    /// OAuth scopes required
    #[serde(default)]
    pub scopes: Vec<String>,
}

/// Reference to a named schema, as used by method request/response bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaRef {
    /// Name of the referenced schema
    #[serde(rename = "$ref")]
    pub ref_schema: String,
}

impl DiscoveryDoc {
    /// Get a schema by reference
    /// e.g., "Bucket" -> returns Bucket schema
    pub fn resolve_schema_ref(&self, ref_name: &str) -> Option<&Schema> {
        self.schemas.get(ref_name)
    }
}
