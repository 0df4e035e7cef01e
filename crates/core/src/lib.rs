//! Core library for documentary
//!
//! This crate implements the **Functional Core** of the documentary recorder,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! - **`documentary_core`** (this crate): Pure transformation functions with zero I/O
//! - **`documentary`**: Request dispatch, file I/O and orchestration (the Imperative Shell)
//!
//! Everything here is a pure function of its input: computing request
//! signatures, deriving documentation groups from URL shapes, extracting
//! field metadata from schema columns, merging schema metadata into
//! caller-supplied parameter lists, and rendering markdown entries. None of
//! it touches the network or the filesystem, so all of it is tested with
//! plain fixture data.
//!
//! # Module Organization
//!
//! - [`method`]: HTTP verbs, including the non-standard METADATA and UNDELETE
//! - [`signature`]: request identity used for deduplication
//! - [`schema`]: the consumed schema introspection contract
//! - [`metadata`]: schema column to field descriptor extraction
//! - [`params`]: form parameters and the schema merge
//! - [`group`]: URL shape to documentation group resolution
//! - [`urls`]: URL templating and percent-encoding
//! - [`render`]: markdown emission for headers and entries

pub mod group;
pub mod metadata;
pub mod method;
pub mod params;
pub mod render;
pub mod schema;
pub mod signature;
pub mod urls;

pub use method::Method;
