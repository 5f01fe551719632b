//! The `Group` node kind: a transparent multi-child container.

use crate::error::InspectError;
use crate::view::{KnownKind, MultipleChildContent, NodeView, SingleChildContent};

pub struct Group;

impl KnownKind for Group {
    const TYPE_PREFIX: &'static str = "Group";
    const NAME: &'static str = "Group";
}

impl MultipleChildContent for Group {
    const CHILDREN_PATH: &'static str = "content|elements";
}

// Extraction from a single-child parent
impl<'a, K: SingleChildContent> NodeView<'a, K> {
    pub fn group(&self) -> Result<NodeView<'a, Group>, InspectError> {
        self.child()?.classify()
    }
}

// Extraction from a multi-child parent
impl<'a, K: MultipleChildContent> NodeView<'a, K> {
    pub fn group_at(&self, index: usize) -> Result<NodeView<'a, Group>, InspectError> {
        self.child_at(index)?.classify()
    }
}
