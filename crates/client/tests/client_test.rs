//! Integration tests for client construction, path resolution, and
//! method metadata

use discovery_client::{DiscoveryClient, DiscoveryError};

const DRIVE_DOC: &str = r##"{
    "name": "drive",
    "version": "v3",
    "rootUrl": "https://www.googleapis.com/",
    "baseUrl": "https://www.googleapis.com/drive/v3/",
    "parameters": {
        "alt": {
            "type": "string",
            "default": "json",
            "location": "query"
        },
        "key": {
            "type": "string",
            "description": "API key.",
            "location": "query"
        }
    },
    "schemas": {
        "File": {
            "id": "File",
            "type": "object",
            "properties": {
                "id": { "type": "string" },
                "name": { "type": "string" }
            }
        },
        "Permission": {
            "id": "Permission",
            "type": "object",
            "properties": {
                "role": { "type": "string" }
            }
        }
    },
    "resources": {
        "files": {
            "methods": {
                "get": {
                    "id": "drive.files.get",
                    "path": "files/{fileId}",
                    "httpMethod": "GET",
                    "description": "Gets a file's metadata by ID.",
                    "parameters": {
                        "fileId": {
                            "type": "string",
                            "required": true,
                            "location": "path"
                        }
                    },
                    "response": { "$ref": "File" },
                    "scopes": ["https://www.googleapis.com/auth/drive"]
                }
            },
            "resources": {
                "permissions": {
                    "methods": {
                        "create": {
                            "id": "drive.files.permissions.create",
                            "path": "files/{fileId}/permissions",
                            "httpMethod": "POST",
                            "request": { "$ref": "Permission" },
                            "response": { "$ref": "Permission" }
                        }
                    }
                }
            }
        }
    },
    "methods": {
        "about": {
            "id": "drive.about",
            "path": "about",
            "httpMethod": "GET"
        }
    }
}"##;

#[test]
fn test_resolve_path_to_method() {
    let client = DiscoveryClient::from_json(DRIVE_DOC, false).unwrap();
    let get = client.resolve_path("files.get").unwrap().into_method().unwrap();
    assert_eq!(get.name(), "get");
    assert_eq!(get.id(), "drive.files.get");
    assert_eq!(get.http_method(), "GET");
    assert_eq!(
        get.full_path(),
        "https://www.googleapis.com/drive/v3/files/{fileId}"
    );
}

#[test]
fn test_resolve_path_through_nested_resource() {
    let client = DiscoveryClient::from_json(DRIVE_DOC, false).unwrap();
    let create = client
        .resolve_path("files.permissions.create")
        .unwrap()
        .into_method()
        .unwrap();
    assert_eq!(create.id(), "drive.files.permissions.create");
    assert_eq!(create.request_schema().unwrap().id.as_deref(), Some("Permission"));
}

#[test]
fn test_resolve_path_to_resource_node() {
    let client = DiscoveryClient::from_json(DRIVE_DOC, false).unwrap();
    let lookup = client.resolve_path("files.permissions").unwrap();
    assert!(lookup.is_resource());
    assert!(matches!(
        lookup.into_method(),
        Err(DiscoveryError::ResourceNotCallable(name)) if name == "permissions"
    ));
}

#[test]
fn test_resolve_path_root_level_method() {
    let client = DiscoveryClient::from_json(DRIVE_DOC, false).unwrap();
    assert!(client.methods().contains(&"about"));
    let about = client.resolve_path("about").unwrap().into_method().unwrap();
    assert_eq!(about.id(), "drive.about");
}

#[test]
fn test_resolve_path_unknown_segment_fails() {
    let client = DiscoveryClient::from_json(DRIVE_DOC, false).unwrap();
    assert!(matches!(
        client.resolve_path("files.export"),
        Err(DiscoveryError::UnknownAttribute { .. })
    ));
    assert!(matches!(
        client.resolve_path("teamdrives"),
        Err(DiscoveryError::UnknownAttribute { .. })
    ));
}

#[test]
fn test_resolve_path_cannot_descend_into_method() {
    let client = DiscoveryClient::from_json(DRIVE_DOC, false).unwrap();
    match client.resolve_path("files.get.media") {
        Err(DiscoveryError::UnknownAttribute { resource, name }) => {
            assert_eq!(resource, "get");
            assert_eq!(name, "media");
        }
        other => panic!("expected UnknownAttribute, got {other:?}"),
    }
}

#[test]
fn test_method_parameter_views() {
    let client = DiscoveryClient::from_json(DRIVE_DOC, false).unwrap();
    let get = client.resolve_path("files.get").unwrap().into_method().unwrap();

    // Global parameters merge with method-level ones.
    let params = get.parameters();
    assert!(params.contains_key("alt"));
    assert!(params.contains_key("key"));
    assert!(params.contains_key("fileId"));

    assert_eq!(get.required_parameters(), vec!["fileId"]);
    assert_eq!(get.path_parameters(), vec!["fileId"]);
    assert_eq!(get.query_parameters(), vec!["alt", "key"]);
    assert_eq!(get.scopes(), ["https://www.googleapis.com/auth/drive"]);
    assert_eq!(get.description(), Some("Gets a file's metadata by ID."));
}

#[test]
fn test_validation_accepts_well_formed_document() {
    let client = DiscoveryClient::from_json(DRIVE_DOC, true).unwrap();
    assert!(client.validate());

    // The flag propagates down the tree.
    let files = client.resources().get("files").unwrap();
    assert!(files.validate());
    assert!(files.resource("permissions").unwrap().validate());
}

#[test]
fn test_validation_rejects_dangling_schema_ref() {
    let json = r##"{
        "rootUrl": "https://www.googleapis.com/",
        "baseUrl": "https://www.googleapis.com/drive/v3/",
        "resources": {
            "files": {
                "methods": {
                    "get": {
                        "id": "drive.files.get",
                        "path": "files/{fileId}",
                        "httpMethod": "GET",
                        "response": { "$ref": "File" }
                    }
                }
            }
        }
    }"##;

    assert!(matches!(
        DiscoveryClient::from_json(json, true),
        Err(DiscoveryError::Validation(_))
    ));

    // Without validation the same document loads fine; the dangling ref
    // just resolves to nothing.
    let client = DiscoveryClient::from_json(json, false).unwrap();
    let get = client.resolve_path("files.get").unwrap().into_method().unwrap();
    assert!(get.response_schema().is_none());
}

#[test]
fn test_missing_base_url_is_a_parse_error() {
    let json = r##"{ "rootUrl": "https://www.googleapis.com/" }"##;
    assert!(matches!(
        DiscoveryClient::from_json(json, false),
        Err(DiscoveryError::Parse(_))
    ));
}
