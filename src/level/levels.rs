// src/level/levels.rs

use std::collections::BTreeSet;

use crate::graph::NodeRef;

/// One build level: nodes that can be processed together.
pub type Level = BTreeSet<NodeRef>;

/// Ordered partition of a node set into build levels.
///
/// Index `i` holds the nodes whose dependencies all lie in levels `< i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Levels {
    levels: Vec<Level>,
}

impl Levels {
    pub(crate) fn push(&mut self, level: Level) {
        self.levels.push(level);
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    /// Index of the level containing `node`, if it was leveled at all.
    pub fn level_of(&self, node: NodeRef) -> Option<usize> {
        self.levels.iter().position(|level| level.contains(&node))
    }

    /// Total number of nodes across all levels.
    pub fn node_count(&self) -> usize {
        self.levels.iter().map(BTreeSet::len).sum()
    }

    pub fn into_inner(self) -> Vec<Level> {
        self.levels
    }
}

impl<'a> IntoIterator for &'a Levels {
    type Item = &'a Level;
    type IntoIter = std::slice::Iter<'a, Level>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}
