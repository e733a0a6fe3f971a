//! SQLite lookup index over a knowledge graph
//!
//! The JSON snapshot stays the source of truth. The index answers point
//! lookups (an entity's kind, the relations into an entity) without loading
//! the whole graph.

use crate::error::StoreError;
use logos_domain::{EntityId, EntityKind, KnowledgeGraph, Relation, RelationLabel};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::info;

/// SQLite-backed entity and relation index
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should open its own index.
pub struct SqliteIndex {
    conn: Connection,
}

impl SqliteIndex {
    /// Open (creating if needed) the index at `path` and initialize its schema
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        let conn = Connection::open(path)?;
        let index = Self { conn };
        index.initialize_schema()?;
        Ok(index)
    }

    /// In-memory index, useful for testing
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let index = Self { conn };
        index.initialize_schema()?;
        Ok(index)
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(include_str!("schema.sql"))?;
        Ok(())
    }

    /// Index every entity and relation in `graph`
    ///
    /// Entities are upserted by id. The relation table is replaced wholesale
    /// so positions match the graph's relation order. Returns the number of
    /// entities written.
    pub fn index_graph(&mut self, graph: &KnowledgeGraph) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        let mut written = 0;
        {
            let mut upsert = tx.prepare(
                "INSERT INTO entities (id, kind, body) VALUES (?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET kind = excluded.kind, body = excluded.body",
            )?;
            for kind in graph.kinds() {
                for entity in graph.entities(kind) {
                    let body = serde_json::to_string(entity)?;
                    upsert.execute(params![entity.id().as_str(), kind.as_str(), body])?;
                    written += 1;
                }
            }

            tx.execute("DELETE FROM relations", [])?;
            let mut insert = tx.prepare(
                "INSERT INTO relations (position, src, label, dst) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (position, relation) in graph.relations().iter().enumerate() {
                insert.execute(params![
                    position as i64,
                    relation.src.as_str(),
                    relation.label.as_str(),
                    relation.dst.as_str(),
                ])?;
            }
        }
        tx.commit()?;

        info!(
            "Indexed {} entities and {} relations",
            written,
            graph.relations().len()
        );
        Ok(written)
    }

    /// Kind of the indexed entity with this id, if any
    pub fn entity_kind(&self, id: &EntityId) -> Result<Option<EntityKind>, StoreError> {
        let name: Option<String> = self
            .conn
            .query_row(
                "SELECT kind FROM entities WHERE id = ?1",
                params![id.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        name.map(|name| {
            EntityKind::from_name(&name)
                .ok_or_else(|| StoreError::InvalidData(format!("Unknown entity kind: {}", name)))
        })
        .transpose()
    }

    /// Relations whose destination is `dst`, in graph order
    pub fn relations_to(&self, dst: &EntityId) -> Result<Vec<Relation>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT src, label, dst FROM relations WHERE dst = ?1 ORDER BY position",
        )?;
        let relations = stmt
            .query_map(params![dst.as_str()], |row| {
                let src: String = row.get(0)?;
                let label: String = row.get(1)?;
                let dst: String = row.get(2)?;
                Ok(Relation::new(
                    EntityId::from(src),
                    RelationLabel::from(label),
                    EntityId::from(dst),
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(relations)
    }

    /// Number of indexed entities
    pub fn entity_count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM entities", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
