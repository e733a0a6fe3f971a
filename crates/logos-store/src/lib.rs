//! Logos Storage Layer
//!
//! Persistence for the knowledge graph and the audit trail.
//!
//! # Architecture
//!
//! - JSON snapshots are the source of truth for a graph ([`save_graph`] / [`load_graph`])
//! - SQLite provides a lookup index over a graph ([`SqliteIndex`])
//! - A JSON Lines audit log records every file the pipeline writes ([`AuditLog`])
//!
//! # Examples
//!
//! ```no_run
//! use logos_domain::{Claim, KnowledgeGraph};
//! use logos_store::{load_graph, save_graph};
//!
//! let mut graph = KnowledgeGraph::new();
//! graph.add_entity(Claim::new("Water is wet."));
//! save_graph(&graph, "graph.json").unwrap();
//! let loaded = load_graph("graph.json").unwrap();
//! assert_eq!(loaded.len(), 1);
//! ```

#![warn(missing_docs)]

mod audit;
mod error;
mod index;
mod snapshot;

pub use audit::{AuditEvent, AuditLog, AuditRecord};
pub use error::StoreError;
pub use index::SqliteIndex;
pub use snapshot::{graph_from_json, graph_to_json, load_graph, save_graph};
