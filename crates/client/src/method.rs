//! Method binding
//!
//! A [`ResourceMethod`] is the leaf of the resource tree: one callable API
//! endpoint's specification, bound together with the document-wide
//! parameter and schema tables it needs to be interpreted.

use crate::document::{MethodSpec, Parameter, Schema};
use std::collections::HashMap;
use std::sync::Arc;

/// One API method's specification
///
/// Holds the method's spec subtree verbatim plus shared references to the
/// document's global parameters and schemas. Does not perform network
/// calls; transport is out of scope for this crate.
#[derive(Debug, Clone)]
pub struct ResourceMethod {
    name: String,
    spec: MethodSpec,
    global_parameters: Arc<HashMap<String, Parameter>>,
    schemas: Arc<HashMap<String, Schema>>,
    base_url: Arc<str>,
    root_url: Arc<str>,
}

impl ResourceMethod {
    pub fn new(
        name: impl Into<String>,
        spec: MethodSpec,
        global_parameters: Arc<HashMap<String, Parameter>>,
        schemas: Arc<HashMap<String, Schema>>,
        base_url: Arc<str>,
        root_url: Arc<str>,
    ) -> Self {
        Self {
            name: name.into(),
            spec,
            global_parameters,
            schemas,
            base_url,
            root_url,
        }
    }

    /// Name this method was registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The method's spec subtree, exactly as it appeared in the document
    pub fn spec(&self) -> &MethodSpec {
        &self.spec
    }

    /// Fully qualified method ID (e.g., "storage.buckets.insert")
    pub fn id(&self) -> &str {
        &self.spec.id
    }

    /// HTTP verb (GET, POST, PUT, DELETE, PATCH)
    pub fn http_method(&self) -> &str {
        &self.spec.http_method
    }

    /// HTTP path relative to the document's baseUrl
    pub fn path(&self) -> &str {
        &self.spec.path
    }

    pub fn description(&self) -> Option<&str> {
        self.spec.description.as_deref()
    }

    /// OAuth scopes this method requires
    pub fn scopes(&self) -> &[String] {
        &self.spec.scopes
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    /// The method's full request URL: baseUrl joined with its path
    pub fn full_path(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.spec.path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// All parameters applicable to this method
    ///
    /// Global parameters merged with method-level ones; a method-level
    /// definition wins over a global one of the same name.
    pub fn parameters(&self) -> HashMap<&str, &Parameter> {
        let mut merged: HashMap<&str, &Parameter> = self
            .global_parameters
            .iter()
            .map(|(name, param)| (name.as_str(), param))
            .collect();
        for (name, param) in &self.spec.parameters {
            merged.insert(name.as_str(), param);
        }
        merged
    }

    /// Names of parameters marked required, sorted for stable output
    pub fn required_parameters(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .parameters()
            .into_iter()
            .filter(|(_, param)| param.required)
            .map(|(name, _)| name)
            .collect();
        names.sort_unstable();
        names
    }

    /// Names of parameters with location "path", sorted
    pub fn path_parameters(&self) -> Vec<&str> {
        self.parameters_at_location("path")
    }

    /// Names of parameters with location "query", sorted
    pub fn query_parameters(&self) -> Vec<&str> {
        self.parameters_at_location("query")
    }

    fn parameters_at_location(&self, location: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .parameters()
            .into_iter()
            .filter(|(_, param)| param.location.as_deref() == Some(location))
            .map(|(name, _)| name)
            .collect();
        names.sort_unstable();
        names
    }

    /// Request body schema, resolved through the shared schema table
    pub fn request_schema(&self) -> Option<&Schema> {
        self.spec
            .request
            .as_ref()
            .and_then(|r| self.schemas.get(&r.ref_schema))
    }

    /// Response schema, resolved through the shared schema table
    pub fn response_schema(&self) -> Option<&Schema> {
        self.spec
            .response
            .as_ref()
            .and_then(|r| self.schemas.get(&r.ref_schema))
    }

    /// Global parameter definitions shared across the whole tree
    pub fn global_parameters(&self) -> &Arc<HashMap<String, Parameter>> {
        &self.global_parameters
    }

    /// Schema definitions shared across the whole tree
    pub fn schemas(&self) -> &Arc<HashMap<String, Schema>> {
        &self.schemas
    }
}
