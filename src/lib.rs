//! Query functions for an embedded document database.
//!
//! The engine stores schema-free documents as compact binary trees
//! inside a relational storage backend, and queries them through an
//! N1QL-style language compiled down to SQL. This crate is the bridge:
//! a catalogue of scalar functions the host engine binds at startup,
//! letting queries operate on documents, typed atoms and nested
//! arrays/objects without first materialising them as text.
//!
//! Values belong to an eight-tag domain (missing, null, boolean,
//! number, string, binary, array, object) folded onto the host's five
//! storage classes: missing travels as an unset result, the
//! query-language null as a zero-length blob, and documents as blobs
//! decoded on demand into read-only borrowed views.

pub mod doc;
pub mod err;
pub mod fnc;
pub mod sql;
pub mod val;

pub use err::Error;
pub use fnc::{register_all, run, CATALOGUE};
pub use sql::{FunctionRegistry, FunctionSpec, Reply, SqlValue};
pub use val::{classify, kind_of, Kind, Value};
