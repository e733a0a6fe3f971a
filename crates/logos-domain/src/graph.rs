//! In-memory knowledge graph
//!
//! Entities live in per-kind buckets (kind -> id -> entity) that remember
//! insertion order. Relations are a flat list of triples in the order they
//! were added; that order is what scoring iterates, so it is part of the
//! graph's observable behavior.

use crate::entity::{Argument, Assumption, Claim, Entity, EntityKind, Evidence};
use crate::{EntityId, Relation, RelationLabel};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, Default)]
struct Bucket {
    order: Vec<EntityId>,
    items: HashMap<EntityId, Entity>,
}

impl Bucket {
    fn insert(&mut self, entity: Entity) {
        let id = entity.id().clone();
        if self.items.insert(id.clone(), entity).is_none() {
            self.order.push(id);
        }
    }

    fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }
}

/// Filter for [`KnowledgeGraph::get_relations`]
///
/// Unset fields match anything.
#[derive(Debug, Clone, Default)]
pub struct RelationQuery {
    /// Required source id
    pub src: Option<EntityId>,
    /// Required label
    pub label: Option<RelationLabel>,
    /// Required destination id
    pub dst: Option<EntityId>,
}

impl RelationQuery {
    /// Query matching every relation
    pub fn any() -> Self {
        Self::default()
    }

    /// Restrict to relations leaving `src`
    pub fn from(mut self, src: &EntityId) -> Self {
        self.src = Some(src.clone());
        self
    }

    /// Restrict to relations with `label`
    pub fn labeled(mut self, label: RelationLabel) -> Self {
        self.label = Some(label);
        self
    }

    /// Restrict to relations entering `dst`
    pub fn to(mut self, dst: &EntityId) -> Self {
        self.dst = Some(dst.clone());
        self
    }

    /// Whether `relation` passes every set filter
    pub fn matches(&self, relation: &Relation) -> bool {
        self.src.as_ref().is_none_or(|src| *src == relation.src)
            && self.label.as_ref().is_none_or(|label| *label == relation.label)
            && self.dst.as_ref().is_none_or(|dst| *dst == relation.dst)
    }
}

/// A referential-integrity problem found by [`KnowledgeGraph::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// A relation starts at an unknown id
    MissingRelationSource {
        /// The dangling id
        src: EntityId,
    },
    /// A relation ends at an unknown id
    MissingRelationTarget {
        /// The dangling id
        dst: EntityId,
    },
    /// A claim or evidence names a source that does not exist
    UnresolvedSource {
        /// Kind of the referring entity
        kind: EntityKind,
        /// The referring entity
        entity_id: EntityId,
        /// The missing source id
        source_id: EntityId,
    },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::MissingRelationSource { src } => write!(f, "Missing src id {}", src),
            IntegrityIssue::MissingRelationTarget { dst } => write!(f, "Missing dst id {}", dst),
            IntegrityIssue::UnresolvedSource {
                kind,
                entity_id,
                source_id,
            } => write!(f, "{} {} missing source {}", kind, entity_id, source_id),
        }
    }
}

/// Typed entity store plus labeled relations
///
/// The graph is append-only for the lifetime of one pipeline run: entities
/// may be overwritten by id within their kind but are never removed.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraph {
    buckets: BTreeMap<EntityKind, Bucket>,
    relations: Vec<Relation>,
}

impl KnowledgeGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an entity under its kind
    ///
    /// An entity whose id already exists in the same kind replaces the old
    /// one in place. Returns the stored entity's id.
    pub fn add_entity(&mut self, entity: impl Into<Entity>) -> EntityId {
        let entity = entity.into();
        let id = entity.id().clone();
        self.buckets.entry(entity.kind()).or_default().insert(entity);
        id
    }

    /// Look up an entity of any kind
    ///
    /// Buckets are searched in [`EntityKind`] order and the first hit wins.
    pub fn get_entity(&self, id: &EntityId) -> Option<&Entity> {
        self.buckets.values().find_map(|bucket| bucket.items.get(id))
    }

    /// Mutable lookup, same search order as [`get_entity`](Self::get_entity)
    pub fn get_entity_mut(&mut self, id: &EntityId) -> Option<&mut Entity> {
        self.buckets
            .values_mut()
            .find_map(|bucket| bucket.items.get_mut(id))
    }

    /// Whether any bucket holds `id`
    pub fn contains(&self, id: &EntityId) -> bool {
        self.get_entity(id).is_some()
    }

    /// Look up a claim
    pub fn claim(&self, id: &EntityId) -> Option<&Claim> {
        match self.get_entity(id) {
            Some(Entity::Claim(claim)) => Some(claim),
            _ => None,
        }
    }

    /// Look up a piece of evidence
    pub fn evidence(&self, id: &EntityId) -> Option<&Evidence> {
        match self.get_entity(id) {
            Some(Entity::Evidence(evidence)) => Some(evidence),
            _ => None,
        }
    }

    /// Look up an assumption
    pub fn assumption(&self, id: &EntityId) -> Option<&Assumption> {
        match self.get_entity(id) {
            Some(Entity::Assumption(assumption)) => Some(assumption),
            _ => None,
        }
    }

    /// Look up an argument
    pub fn argument(&self, id: &EntityId) -> Option<&Argument> {
        match self.get_entity(id) {
            Some(Entity::Argument(argument)) => Some(argument),
            _ => None,
        }
    }

    /// Entities of one kind in insertion order
    pub fn entities(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.buckets.get(&kind).into_iter().flat_map(Bucket::iter)
    }

    /// Ids of one kind in insertion order
    pub fn ids(&self, kind: EntityKind) -> Vec<EntityId> {
        self.entities(kind).map(|entity| entity.id().clone()).collect()
    }

    /// Kinds that currently hold at least one entity, in bucket order
    pub fn kinds(&self) -> impl Iterator<Item = EntityKind> + '_ {
        self.buckets
            .iter()
            .filter(|(_, bucket)| !bucket.order.is_empty())
            .map(|(kind, _)| *kind)
    }

    /// All claims in insertion order
    pub fn claims(&self) -> impl Iterator<Item = &Claim> {
        self.entities(EntityKind::Claim).filter_map(|entity| match entity {
            Entity::Claim(claim) => Some(claim),
            _ => None,
        })
    }

    /// All arguments in insertion order
    pub fn arguments(&self) -> impl Iterator<Item = &Argument> {
        self.entities(EntityKind::Argument).filter_map(|entity| match entity {
            Entity::Argument(argument) => Some(argument),
            _ => None,
        })
    }

    /// Number of entities of one kind
    pub fn count(&self, kind: EntityKind) -> usize {
        self.buckets.get(&kind).map_or(0, |bucket| bucket.order.len())
    }

    /// Total number of entities
    pub fn len(&self) -> usize {
        self.buckets.values().map(|bucket| bucket.order.len()).sum()
    }

    /// Whether the graph holds no entities
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a relation; endpoints are not checked
    pub fn add_relation(&mut self, src: EntityId, label: RelationLabel, dst: EntityId) {
        self.relations.push(Relation::new(src, label, dst));
    }

    /// Every relation in insertion order
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Relations passing `query`, in insertion order
    pub fn get_relations(&self, query: &RelationQuery) -> Vec<&Relation> {
        self.relations
            .iter()
            .filter(|relation| query.matches(relation))
            .collect()
    }

    /// Report dangling relation endpoints and unresolved source references
    ///
    /// Issues are ordered: relation endpoints first (src before dst, in
    /// relation order), then claims, then evidence.
    pub fn validate(&self) -> Vec<IntegrityIssue> {
        let known: HashSet<&EntityId> = self
            .buckets
            .values()
            .flat_map(|bucket| bucket.items.keys())
            .collect();

        let mut issues = Vec::new();
        for relation in &self.relations {
            if !known.contains(&relation.src) {
                issues.push(IntegrityIssue::MissingRelationSource {
                    src: relation.src.clone(),
                });
            }
            if !known.contains(&relation.dst) {
                issues.push(IntegrityIssue::MissingRelationTarget {
                    dst: relation.dst.clone(),
                });
            }
        }

        for entity in self
            .entities(EntityKind::Claim)
            .chain(self.entities(EntityKind::Evidence))
        {
            let source_id = match entity {
                Entity::Claim(claim) => claim.source_id.as_ref(),
                Entity::Evidence(evidence) => evidence.source_id.as_ref(),
                _ => None,
            };
            if let Some(source_id) = source_id {
                if !known.contains(source_id) {
                    issues.push(IntegrityIssue::UnresolvedSource {
                        kind: entity.kind(),
                        entity_id: entity.id().clone(),
                        source_id: source_id.clone(),
                    });
                }
            }
        }

        issues
    }
}
