//! Resource tree navigation
//!
//! A discovery document arranges an API as a tree of named resources, each
//! holding methods and further nested resources. Name resolution is an
//! explicit three-way lookup rather than dynamic attribute dispatch: a
//! name resolves to a nested [`Resource`], to a [`ResourceMethod`], or
//! fails with `UnknownAttribute`.

use crate::document::{Parameter, ResourceSpec, Schema};
use crate::method::ResourceMethod;
use discovery_client_common::{DiscoveryError, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Top-level resource collection of a [`crate::DiscoveryClient`]
#[derive(Debug, Clone)]
pub struct Resources {
    specs: Arc<HashMap<String, ResourceSpec>>,
    global_parameters: Arc<HashMap<String, Parameter>>,
    schemas: Arc<HashMap<String, Schema>>,
    base_url: Arc<str>,
    root_url: Arc<str>,
    validate: bool,
}

impl Resources {
    pub(crate) fn new(
        specs: Arc<HashMap<String, ResourceSpec>>,
        global_parameters: Arc<HashMap<String, Parameter>>,
        schemas: Arc<HashMap<String, Schema>>,
        base_url: Arc<str>,
        root_url: Arc<str>,
        validate: bool,
    ) -> Self {
        Self {
            specs,
            global_parameters,
            schemas,
            base_url,
            root_url,
            validate,
        }
    }

    /// Names of the document's top-level resources
    pub fn names(&self) -> Vec<&str> {
        self.specs.keys().map(String::as_str).collect()
    }

    /// Look up a top-level resource by name
    pub fn get(&self, name: &str) -> Result<Resource> {
        let spec = self
            .specs
            .get(name)
            .ok_or_else(|| DiscoveryError::UnknownAttribute {
                resource: "root".to_string(),
                name: name.to_string(),
            })?;

        Ok(Resource::new(
            name,
            spec.clone(),
            Arc::clone(&self.global_parameters),
            Arc::clone(&self.schemas),
            Arc::clone(&self.base_url),
            Arc::clone(&self.root_url),
            self.validate,
        ))
    }

    /// Iterate over all top-level resources
    pub fn iter(&self) -> impl Iterator<Item = Resource> + '_ {
        self.specs.iter().map(|(name, spec)| {
            Resource::new(
                name,
                spec.clone(),
                Arc::clone(&self.global_parameters),
                Arc::clone(&self.schemas),
                Arc::clone(&self.base_url),
                Arc::clone(&self.root_url),
                self.validate,
            )
        })
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Global parameter definitions shared with every resource in the tree
    pub fn global_parameters(&self) -> &Arc<HashMap<String, Parameter>> {
        &self.global_parameters
    }

    /// Schema definitions shared with every resource in the tree
    pub fn schemas(&self) -> &Arc<HashMap<String, Schema>> {
        &self.schemas
    }
}

/// One namespace node in the API tree
///
/// A `Resource` is not an invokable endpoint; resolving one of its method
/// names yields a [`ResourceMethod`], which is.
#[derive(Debug, Clone)]
pub struct Resource {
    name: String,
    spec: ResourceSpec,
    global_parameters: Arc<HashMap<String, Parameter>>,
    schemas: Arc<HashMap<String, Schema>>,
    base_url: Arc<str>,
    root_url: Arc<str>,
    validate: bool,
}

impl Resource {
    pub fn new(
        name: impl Into<String>,
        spec: ResourceSpec,
        global_parameters: Arc<HashMap<String, Parameter>>,
        schemas: Arc<HashMap<String, Schema>>,
        base_url: Arc<str>,
        root_url: Arc<str>,
        validate: bool,
    ) -> Self {
        Self {
            name: name.into(),
            spec,
            global_parameters,
            schemas,
            base_url,
            root_url,
            validate,
        }
    }

    /// Name this resource was registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This resource's subtree of the discovery document
    pub fn spec(&self) -> &ResourceSpec {
        &self.spec
    }

    /// Names of nested resources (keys only)
    pub fn resources(&self) -> Vec<&str> {
        self.spec.resources.keys().map(String::as_str).collect()
    }

    /// Names of methods on this resource (keys only)
    pub fn methods(&self) -> Vec<&str> {
        self.spec.methods.keys().map(String::as_str).collect()
    }

    /// Number of nested resources
    ///
    /// Methods are deliberately excluded from the count; a resource's size
    /// is the size of its namespace of sub-resources.
    pub fn len(&self) -> usize {
        self.spec.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spec.resources.is_empty()
    }

    /// Resolve a name to either a nested resource or a method
    ///
    /// Nested resources shadow methods of the same name, matching the
    /// lookup order of the discovery format. Unknown names fail with
    /// [`DiscoveryError::UnknownAttribute`].
    pub fn resolve(&self, name: &str) -> Result<Lookup> {
        if let Some(spec) = self.spec.resources.get(name) {
            return Ok(Lookup::Resource(Resource::new(
                name,
                spec.clone(),
                Arc::clone(&self.global_parameters),
                Arc::clone(&self.schemas),
                Arc::clone(&self.base_url),
                Arc::clone(&self.root_url),
                self.validate,
            )));
        }

        if let Some(spec) = self.spec.methods.get(name) {
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
            resource: self.name.clone(),
            name: name.to_string(),
        })
    }

    /// Look up a nested resource by name
    pub fn resource(&self, name: &str) -> Result<Resource> {
        match self.resolve(name)? {
            Lookup::Resource(resource) => Ok(resource),
            Lookup::Method(_) => Err(DiscoveryError::UnknownAttribute {
                resource: self.name.clone(),
                name: name.to_string(),
            }),
        }
    }

    /// Look up a method by name
    ///
    /// Asking for a nested resource here fails with
    /// [`DiscoveryError::ResourceNotCallable`]: resources are namespace
    /// nodes, not endpoints.
    pub fn method(&self, name: &str) -> Result<ResourceMethod> {
        self.resolve(name)?.into_method()
    }

    /// Global parameter definitions shared across the whole tree
    pub fn global_parameters(&self) -> &Arc<HashMap<String, Parameter>> {
        &self.global_parameters
    }

    /// Schema definitions shared across the whole tree
    pub fn schemas(&self) -> &Arc<HashMap<String, Schema>> {
        &self.schemas
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    pub fn validate(&self) -> bool {
        self.validate
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resource `{}` under {}", self.name, self.base_url)
    }
}

/// Result of resolving a name on a [`Resource`]
#[derive(Debug, Clone)]
pub enum Lookup {
    /// The name addressed a nested resource
    Resource(Resource),
    /// The name addressed a method
    Method(ResourceMethod),
}

impl Lookup {
    pub fn is_resource(&self) -> bool {
        matches!(self, Lookup::Resource(_))
    }

    pub fn is_method(&self) -> bool {
        matches!(self, Lookup::Method(_))
    }

    /// Unwrap the method this lookup resolved to
    ///
    /// Fails with [`DiscoveryError::ResourceNotCallable`] when the name
    /// resolved to a resource instead.
    pub fn into_method(self) -> Result<ResourceMethod> {
        match self {
            Lookup::Method(method) => Ok(method),
            Lookup::Resource(resource) => {
                Err(DiscoveryError::ResourceNotCallable(resource.name))
            }
        }
    }
}
