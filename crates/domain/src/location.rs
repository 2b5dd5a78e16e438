//! Cycle-safe operations over the location forest.
//!
//! Locations form a forest through parent links. All three operations index
//! the input into an id arena and share one visited-set ancestor walk, so
//! they terminate even when handed a corrupted graph that already contains
//! a cycle.

use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a location record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(Uuid);

impl LocationId {
    /// Creates a random location identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a location identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for LocationId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Named storage location, forming a forest via parent links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Stable location id.
    pub id: LocationId,
    /// Display name.
    pub name: String,
    /// Parent location; `None` marks a root.
    pub parent_id: Option<LocationId>,
}

/// One row of the depth-first flattened forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    /// The underlying location record.
    pub location: Location,
    /// Number of ancestors above this location.
    pub depth: usize,
    /// Name prefixed with two spaces per depth level, ready for an
    /// indented list.
    pub display_name: String,
}

/// Separator between path segments in a breadcrumb.
const BREADCRUMB_SEPARATOR: &str = " > ";

fn index(all: &[Location]) -> HashMap<LocationId, &Location> {
    all.iter().map(|location| (location.id, location)).collect()
}

/// Walks from `start` to its root, returning the chain leaf-first.
///
/// The visited set bounds the walk at the number of distinct locations, so a
/// parent cycle in the input degrades into a truncated chain instead of an
/// infinite loop.
fn ancestor_chain<'a>(
    start: LocationId,
    arena: &HashMap<LocationId, &'a Location>,
) -> Vec<&'a Location> {
    let mut chain = Vec::new();
    let mut visited = HashSet::new();
    let mut cursor = Some(start);

    while let Some(id) = cursor {
        if !visited.insert(id) {
            break;
        }
        let Some(location) = arena.get(&id) else {
            break;
        };
        chain.push(*location);
        cursor = location.parent_id;
    }

    chain
}

/// Builds the ancestor path of a location, root first.
///
/// Returns an empty string when `location_id` is not present in `all`.
#[must_use]
pub fn breadcrumb(location_id: LocationId, all: &[Location]) -> String {
    let arena = index(all);
    let chain = ancestor_chain(location_id, &arena);

    let mut names: Vec<&str> = chain.iter().map(|location| location.name.as_str()).collect();
    names.reverse();
    names.join(BREADCRUMB_SEPARATOR)
}

/// Returns whether reparenting `location_id` under `proposed_parent_id`
/// would make its component cyclic.
///
/// This is the sole cycle gate: it must be consulted, and must return
/// `false`, before any parent reassignment is persisted.
#[must_use]
pub fn would_create_cycle(
    location_id: LocationId,
    proposed_parent_id: LocationId,
    all: &[Location],
) -> bool {
    if proposed_parent_id == location_id {
        return true;
    }

    let arena = index(all);
    ancestor_chain(proposed_parent_id, &arena)
        .iter()
        .any(|ancestor| ancestor.id == location_id)
}

/// Flattens the forest into a depth-annotated pre-order listing.
///
/// Roots are locations without a parent or whose parent is missing from the
/// input. Sibling order is the stable input order. Locations trapped in a
/// parent cycle are unreachable from any root and are omitted.
#[must_use]
pub fn hierarchical_list(all: &[Location]) -> Vec<LocationEntry> {
    let known: HashSet<LocationId> = all.iter().map(|location| location.id).collect();

    let mut roots: Vec<&Location> = Vec::new();
    let mut children: HashMap<LocationId, Vec<&Location>> = HashMap::new();
    for location in all {
        match location
            .parent_id
            .filter(|parent| known.contains(parent) && *parent != location.id)
        {
            Some(parent) => children.entry(parent).or_default().push(location),
            None => roots.push(location),
        }
    }

    let mut entries = Vec::with_capacity(all.len());
    let mut visited = HashSet::new();
    for root in roots {
        flatten_into(root, 0, &children, &mut visited, &mut entries);
    }

    entries
}

fn flatten_into(
    node: &Location,
    depth: usize,
    children: &HashMap<LocationId, Vec<&Location>>,
    visited: &mut HashSet<LocationId>,
    entries: &mut Vec<LocationEntry>,
) {
    if !visited.insert(node.id) {
        return;
    }

    entries.push(LocationEntry {
        display_name: format!("{}{}", "  ".repeat(depth), node.name),
        depth,
        location: node.clone(),
    });

    for child in children.get(&node.id).into_iter().flatten() {
        flatten_into(child, depth + 1, children, visited, entries);
    }
}
