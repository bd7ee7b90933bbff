//! Client library for Google Discovery Documents
//!
//! Builds a navigable object graph from a discovery document: every
//! resource and nested sub-resource becomes a [`Resource`] node, every
//! method a [`ResourceMethod`] leaf.
//!
//! ## Discovery Document Format
//!
//! Google Cloud APIs publish "Discovery Documents" that describe REST APIs.
//! Format is based on JSON Schema Draft 3 with Google-specific extensions.
//!
//! ## Discovery Sources
//!
//! - **List all APIs**: `GET https://www.googleapis.com/discovery/v1/apis`
//! - **Get specific API**: `GET https://{service}.googleapis.com/$discovery/rest?version={version}`
//!
//! ## Usage
//! ```rust,ignore
//! use discovery_client::DiscoveryClient;
//!
//! let client = DiscoveryClient::from_file("storage-v1.json", false)?;
//! for name in client.resources().names() {
//!     println!("{}", client.resources().get(name)?);
//! }
//! let get = client.resolve_path("buckets.get")?.into_method()?;
//! println!("{} {}", get.http_method(), get.full_path());
//! ```
//!
//! Name resolution on a resource is an explicit three-way lookup rather
//! than dynamic attribute dispatch: a name is a nested resource, a method,
//! or an `UnknownAttribute` error. Resource nodes themselves are never
//! callable; see [`Lookup::into_method`].
//!
//! This crate deliberately stops at the spec layer: no HTTP transport,
//! authentication, or request execution.

mod client;
mod document;
mod method;
mod resource;
mod validate;

pub use client::DiscoveryClient;
pub use document::{DiscoveryDoc, MethodSpec, Parameter, ResourceSpec, Schema, SchemaRef};
pub use method::ResourceMethod;
pub use resource::{Lookup, Resource, Resources};

pub use discovery_client_common::{DiscoveryError, Result};
