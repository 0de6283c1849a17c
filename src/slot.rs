//! Storage units for the two collision strategies

use std::mem;

/// One position in an open-addressing table.
///
/// A tombstone carries no key or value, so a removed entry can never be read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Slot<K, V> {
    /// Never written since the table was (re)built
    Empty,
    /// Held an entry that was removed; probing continues past it
    Tombstone,
    /// Holds a live entry
    Occupied(K, V),
}

impl<K, V> Slot<K, V> {
    /// Returns true if the slot holds a live entry.
    pub(crate) fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(..))
    }

    /// Returns the live entry, if any.
    pub(crate) fn entry(&self) -> Option<(&K, &V)> {
        match self {
            Self::Occupied(key, value) => Some((key, value)),
            Self::Empty | Self::Tombstone => None,
        }
    }

    /// Replaces a live entry with a tombstone and hands back its value.
    /// Empty slots and tombstones are left untouched.
    pub(crate) fn bury(&mut self) -> Option<V> {
        if !self.is_occupied() {
            return None;
        }
        match mem::replace(self, Self::Tombstone) {
            Self::Occupied(_, value) => Some(value),
            Self::Empty | Self::Tombstone => None,
        }
    }
}

/// Builds a table of `capacity` empty slots.
pub(crate) fn empty_slots<K, V>(capacity: usize) -> Vec<Slot<K, V>> {
    std::iter::repeat_with(|| Slot::Empty).take(capacity).collect()
}

/// A key-value node owned by exactly one chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<K, V> {
    /// The key of the node
    pub(crate) key: K,
    /// The value associated with the key
    pub(crate) value: V,
}

/// A bucket of a chained table, keeping its nodes in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Chain<K, V> {
    /// Nodes in the order they were appended
    nodes: Vec<Node<K, V>>,
}

impl<K, V> Default for Chain<K, V> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<K: Eq, V> Chain<K, V> {
    /// Returns the node holding `key`.
    pub(crate) fn find(&self, key: &K) -> Option<&Node<K, V>> {
        self.nodes.iter().find(|node| node.key == *key)
    }

    /// Returns the node holding `key` for in-place updates.
    pub(crate) fn find_mut(&mut self, key: &K) -> Option<&mut Node<K, V>> {
        self.nodes.iter_mut().find(|node| node.key == *key)
    }

    /// Number of nodes compared before a scan for `key` resolves.
    #[allow(clippy::arithmetic_side_effects)]
    pub(crate) fn scan_len(&self, key: &K) -> usize {
        self.nodes
            .iter()
            .position(|node| node.key == *key)
            .map_or(self.nodes.len(), |position| position + 1)
    }

    /// Unlinks the node holding `key`, keeping the order of the rest.
    pub(crate) fn unlink(&mut self, key: &K) -> Option<V> {
        let position = self.nodes.iter().position(|node| node.key == *key)?;
        Some(self.nodes.remove(position).value)
    }
}

impl<K, V> Chain<K, V> {
    /// Appends a node at the tail without checking for duplicates.
    pub(crate) fn push(&mut self, key: K, value: V) {
        self.nodes.push(Node { key, value });
    }

    /// Returns the number of nodes in the chain
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the chain has no nodes
    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates the nodes head to tail.
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Node<K, V>> {
        self.nodes.iter()
    }

    /// Consumes the chain, yielding its pairs head to tail.
    pub(crate) fn into_pairs(self) -> impl Iterator<Item = (K, V)> {
        self.nodes.into_iter().map(|node| (node.key, node.value))
    }
}
