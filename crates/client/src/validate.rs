//! Document validation
//!
//! Optional up-front checks run when a client is constructed with the
//! `validate` flag set. The walk mirrors the document's recursive shape:
//! every method under every resource is visited once.

use crate::document::{DiscoveryDoc, MethodSpec, ResourceSpec, Schema};
use discovery_client_common::{DiscoveryError, Result};
use std::collections::HashMap;

pub(crate) fn validate_document(doc: &DiscoveryDoc) -> Result<()> {
    if doc.base_url.is_empty() {
        return Err(DiscoveryError::Validation(
            "Document has an empty baseUrl".to_string(),
        ));
    }
    if doc.root_url.is_empty() {
        return Err(DiscoveryError::Validation(
            "Document has an empty rootUrl".to_string(),
        ));
    }

    for (name, method) in &doc.methods {
        validate_method(doc, name, method)?;
    }
    validate_resources(doc, &doc.resources)?;

    for (name, schema) in &doc.schemas {
        validate_schema(doc, name, schema)?;
    }

    Ok(())
}

/// Recursively validate methods under a resource map
fn validate_resources(
    doc: &DiscoveryDoc,
    resources: &HashMap<String, ResourceSpec>,
) -> Result<()> {
    for resource in resources.values() {
        for (method_name, method) in &resource.methods {
            validate_method(doc, method_name, method)?;
        }
        validate_resources(doc, &resource.resources)?;
    }
    Ok(())
}

fn validate_method(doc: &DiscoveryDoc, name: &str, method: &MethodSpec) -> Result<()> {
    if method.id.is_empty() {
        return Err(DiscoveryError::Validation(format!(
            "Method `{}` has an empty id",
            name
        )));
    }

    if let Some(ref request) = method.request {
        if doc.resolve_schema_ref(&request.ref_schema).is_none() {
            return Err(DiscoveryError::Validation(format!(
                "Method `{}` requests unknown schema `{}`",
                method.id, request.ref_schema
            )));
        }
    }

    if let Some(ref response) = method.response {
        if doc.resolve_schema_ref(&response.ref_schema).is_none() {
            return Err(DiscoveryError::Validation(format!(
                "Method `{}` responds with unknown schema `{}`",
                method.id, response.ref_schema
            )));
        }
    }

    Ok(())
}

/// Check that every `$ref` reachable from a schema resolves
fn validate_schema(doc: &DiscoveryDoc, name: &str, schema: &Schema) -> Result<()> {
    if let Some(ref ref_name) = schema.ref_schema {
        if doc.resolve_schema_ref(ref_name).is_none() {
            return Err(DiscoveryError::Validation(format!(
                "Schema `{}` references unknown schema `{}`",
                name, ref_name
            )));
        }
    }

    for (prop_name, prop) in &schema.properties {
        validate_schema(doc, prop_name, prop)?;
    }
    if let Some(ref items) = schema.items {
        validate_schema(doc, name, items)?;
    }
    if let Some(ref additional) = schema.additional_properties {
        validate_schema(doc, name, additional)?;
    }

    Ok(())
}
