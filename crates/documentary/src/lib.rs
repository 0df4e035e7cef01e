//! Test-driven API documentation recorder.
//!
//! Wraps an HTTP test client, deduplicates the calls a test run makes by a
//! semantic signature (role, method, URL, set of query keys), merges the
//! caller's parameters with schema-derived field metadata, and appends
//! human-readable markdown to one file per documentation group.
//!
//! This crate is the **Imperative Shell**: request dispatch and file I/O.
//! All of the transformation logic lives in [`documentary_core`] as pure
//! functions.
//!
//! # Example
//!
//! ```rust,ignore
//! use documentary::{Call, DocumentRecorder, FormParameter, Method, TestClient};
//!
//! let client = TestClient::new("http://localhost:8080");
//! let mut recorder = DocumentRecorder::new(client, "docs/api", "Widget Shop", "1.2.0");
//!
//! let response = recorder.send_request(
//!     Call::new("admin", Method::Post, "/v1/widgets")
//!         .form(vec![FormParameter::new("title").with_value("My Widget")])
//!         .schema(&widget_schema),
//! )?;
//! assert_eq!(response.status, 200);
//! ```

pub mod client;
pub mod error;
pub mod recorder;

pub use client::{HttpClient, RecordedResponse, TestClient, WireRequest};
pub use error::{Error, Result};
pub use recorder::{Call, DocumentRecorder, RequestBody};

// Re-export the core vocabulary so harness code needs a single import.
pub use documentary_core::group::{resolve_group, DocGroup};
pub use documentary_core::metadata::FieldDescriptor;
pub use documentary_core::params::FormParameter;
pub use documentary_core::schema::{
    Column, ColumnDefault, ColumnInfo, ColumnType, FieldType, Schema, SchemaError,
};
pub use documentary_core::signature::RequestSignature;
pub use documentary_core::Method;
