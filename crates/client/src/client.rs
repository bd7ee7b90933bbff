//! Discovery client entry point

use crate::document::{DiscoveryDoc, MethodSpec, Parameter, ResourceSpec, Schema};
use crate::method::ResourceMethod;
use crate::resource::{Lookup, Resources};
use crate::validate;
use discovery_client_common::{DiscoveryError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Client over one discovery document
///
/// Parses a Google-style Discovery Document and exposes its resources as a
/// navigable tree. The document is immutable once loaded; every
/// [`crate::Resource`] and [`ResourceMethod`] produced from this client
/// shares the same global parameter and schema tables.
///
/// ```rust,ignore
/// let client = DiscoveryClient::from_file("storage-v1.json", false)?;
/// let buckets = client.resources().get("buckets")?;
/// let get = buckets.method("get")?;
/// ```
#[derive(Debug, Clone)]
pub struct DiscoveryClient {
    name: Option<String>,
    version: Option<String>,
    base_url: Arc<str>,
    root_url: Arc<str>,
    global_parameters: Arc<HashMap<String, Parameter>>,
    schemas: Arc<HashMap<String, Schema>>,
    resources: Arc<HashMap<String, ResourceSpec>>,
    methods: HashMap<String, MethodSpec>,
    validate: bool,
}

impl DiscoveryClient {
    /// Load a discovery document from a file path
    pub fn from_file<P: AsRef<Path>>(path: P, validate: bool) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            DiscoveryError::Parse(format!(
                "Failed to read discovery file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_json(&content, validate)
    }

    /// Parse a discovery document from a JSON string
    pub fn from_json(json: &str, validate: bool) -> Result<Self> {
        let doc: DiscoveryDoc = serde_json::from_str(json).map_err(|e| {
            DiscoveryError::Parse(format!("Failed to parse discovery JSON: {}", e))
        })?;

        Self::from_document(doc, validate)
    }

    /// Build a client from an already-parsed document
    ///
    /// When `validate` is set, the document is checked up front: baseUrl
    /// and rootUrl must be present and every request/response `$ref` must
    /// resolve against the document's schemas.
    pub fn from_document(doc: DiscoveryDoc, validate: bool) -> Result<Self> {
        if validate {
            validate::validate_document(&doc)?;
        }

        Ok(Self {
            name: doc.name,
            version: doc.version,
            base_url: Arc::from(doc.base_url),
            root_url: Arc::from(doc.root_url),
            global_parameters: Arc::new(doc.parameters),
            schemas: Arc::new(doc.schemas),
            resources: Arc::new(doc.resources),
            methods: doc.methods,
            validate,
        })
    }

    /// The document's top-level resource collection
    pub fn resources(&self) -> Resources {
        Resources::new(
            Arc::clone(&self.resources),
            Arc::clone(&self.global_parameters),
            Arc::clone(&self.schemas),
            Arc::clone(&self.base_url),
            Arc::clone(&self.root_url),
            self.validate,
        )
    }

    /// Names of methods declared at the document root (rare)
    pub fn methods(&self) -> Vec<&str> {
        self.methods.keys().map(String::as_str).collect()
    }

    /// Resolve a dotted path through the resource tree
    ///
    /// Each segment is resolved with the same three-way lookup a
    /// [`crate::Resource`] uses: nested resource, then method, then
    /// failure. `"buckets.get"` yields the `get` method of the `buckets`
    /// resource; `"buckets"` yields the resource node itself.
    pub fn resolve_path(&self, path: &str) -> Result<Lookup> {
        let mut segments = path.split('.').filter(|s| !s.is_empty());
        let first = segments.next().ok_or_else(|| {
            DiscoveryError::Parse(format!("Empty resolution path `{}`", path))
        })?;

        let mut node = self.resolve_root(first)?;
        for segment in segments {
            node = match node {
                Lookup::Resource(resource) => resource.resolve(segment)?,
                Lookup::Method(method) => {
                    // Methods are leaves; nothing to descend into.
                    return Err(DiscoveryError::UnknownAttribute {
                        resource: method.name().to_string(),
                        name: segment.to_string(),
                    });
                }
            };
        }
        Ok(node)
    }

    fn resolve_root(&self, name: &str) -> Result<Lookup> {
        if self.resources.contains_key(name) {
            return self.resources().get(name).map(Lookup::Resource);
        }

        if let Some(spec) = self.methods.get(name) {
            return Ok(Lookup::Method(ResourceMethod::new(
                name,
                spec.clone(),
                Arc::clone(&self.global_parameters),
                Arc::clone(&self.schemas),
                Arc::clone(&self.base_url),
                Arc::clone(&self.root_url),
            )));
        }

        Err(DiscoveryError::UnknownAttribute {
            resource: self.name.clone().unwrap_or_else(|| "root".to_string()),
            name: name.to_string(),
        })
    }

    /// API name, when the document declares one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// API version, when the document declares one
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    /// Global parameter definitions shared across the whole tree
    pub fn global_parameters(&self) -> &Arc<HashMap<String, Parameter>> {
        &self.global_parameters
    }

    /// Schema definitions shared across the whole tree
    pub fn schemas(&self) -> &Arc<HashMap<String, Schema>> {
        &self.schemas
    }

    pub fn validate(&self) -> bool {
        self.validate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_minimal() {
        let json = r##"{
            "name": "storage",
            "version": "v1",
            "rootUrl": "https://storage.googleapis.com/",
            "baseUrl": "https://storage.googleapis.com/storage/v1/"
        }"##;

        let client = DiscoveryClient::from_json(json, false).unwrap();
        assert_eq!(client.name(), Some("storage"));
        assert_eq!(client.version(), Some("v1"));
        assert!(client.resources().is_empty());
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        let result = DiscoveryClient::from_json("{not json", false);
        assert!(matches!(result, Err(DiscoveryError::Parse(_))));
    }

    #[test]
    fn test_resolve_empty_path_fails() {
        let json = r##"{
            "rootUrl": "https://storage.googleapis.com/",
            "baseUrl": "https://storage.googleapis.com/storage/v1/"
        }"##;
        let client = DiscoveryClient::from_json(json, false).unwrap();
        assert!(matches!(
            client.resolve_path(""),
            Err(DiscoveryError::Parse(_))
        ));
    }
}
