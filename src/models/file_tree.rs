//! File tree model.
//!
//! Nodes live in an arena and are addressed from the outside by their
//! path-derived string id (`"src/index.js"`). The id is fixed when the node is
//! created and never recomputed, so a rename changes only the display name.

use compact_str::{format_compact, CompactString};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};
use std::fmt;

new_key_type! { pub struct NodeId; }

pub const ROOT_ID: &str = "root";
pub const ID_SEPARATOR: char = '/';

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTreeError {
    EmptyName,
    InvalidName,
    NotFound,
    NotAFolder,
    DuplicateName,
    IdExists,
}

impl fmt::Display for FileTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileTreeError::EmptyName => write!(f, "name is empty"),
            FileTreeError::InvalidName => write!(f, "invalid name"),
            FileTreeError::NotFound => write!(f, "node not found"),
            FileTreeError::NotAFolder => write!(f, "target is not a folder"),
            FileTreeError::DuplicateName => write!(f, "name already exists in parent"),
            FileTreeError::IdExists => write!(f, "node id already in use"),
        }
    }
}

impl std::error::Error for FileTreeError {}

/// Rejects names that cannot be a single id segment.
pub fn validate_name(name: &str) -> Result<(), FileTreeError> {
    if name.is_empty() {
        return Err(FileTreeError::EmptyName);
    }
    if name.contains(ID_SEPARATOR) || name == "." || name == ".." {
        return Err(FileTreeError::InvalidName);
    }
    Ok(())
}

pub fn derive_id(parent_id: &str, name: &str) -> CompactString {
    format_compact!("{parent_id}{ID_SEPARATOR}{name}")
}

#[derive(Debug, Clone)]
enum Body {
    File,
    Folder { children: Vec<NodeId> },
}

#[derive(Debug, Clone)]
struct Entry {
    id: CompactString,
    name: CompactString,
    parent: Option<NodeId>,
    body: Body,
}

impl Entry {
    fn new(id: CompactString, name: CompactString, parent: Option<NodeId>, kind: NodeKind) -> Self {
        let body = match kind {
            NodeKind::File => Body::File,
            NodeKind::Folder => Body::Folder {
                children: Vec::new(),
            },
        };
        Self {
            id,
            name,
            parent,
            body,
        }
    }

    fn kind(&self) -> NodeKind {
        match self.body {
            Body::File => NodeKind::File,
            Body::Folder { .. } => NodeKind::Folder,
        }
    }

    fn children(&self) -> Option<&[NodeId]> {
        match &self.body {
            Body::File => None,
            Body::Folder { children } => Some(children),
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match &mut self.body {
            Body::File => None,
            Body::Folder { children } => Some(children),
        }
    }
}

/// Owned value form of a (sub)tree. Files carry no children at all, which
/// keeps "empty folder" and "file" distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File {
        id: CompactString,
        name: CompactString,
    },
    Folder {
        id: CompactString,
        name: CompactString,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn file(id: &str, name: &str) -> Self {
        Node::File {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn folder(id: &str, name: &str, children: Vec<Node>) -> Self {
        Node::Folder {
            id: id.into(),
            name: name.into(),
            children,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Node::File { id, .. } | Node::Folder { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } | Node::Folder { name, .. } => name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File { .. } => NodeKind::File,
            Node::Folder { .. } => NodeKind::Folder,
        }
    }

    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::File { .. } => None,
            Node::Folder { children, .. } => Some(children),
        }
    }

    /// Number of nodes in this subtree, itself included.
    pub fn count(&self) -> usize {
        1 + self
            .children()
            .map(|c| c.iter().map(Node::count).sum::<usize>())
            .unwrap_or(0)
    }

    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id() == id {
            return Some(self);
        }
        self.children()?.iter().find_map(|child| child.find(id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRef<'a> {
    pub key: NodeId,
    pub id: &'a str,
    pub name: &'a str,
    pub kind: NodeKind,
}

impl NodeRef<'_> {
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeRow {
    pub key: NodeId,
    pub id: CompactString,
    pub name: CompactString,
    pub depth: u16,
    pub kind: NodeKind,
    pub is_open: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone)]
pub struct FileTree {
    arena: SlotMap<NodeId, Entry>,
    root: NodeId,
    by_id: FxHashMap<CompactString, NodeId>,
    open: FxHashSet<NodeId>,
    selected: Option<NodeId>,
}

impl Default for FileTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FileTree {
    pub fn new() -> Self {
        let mut arena = SlotMap::with_key();
        let root_id = CompactString::from(ROOT_ID);
        let root = arena.insert(Entry::new(
            root_id.clone(),
            root_id.clone(),
            None,
            NodeKind::Folder,
        ));

        let mut by_id = FxHashMap::default();
        by_id.insert(root_id, root);

        Self {
            arena,
            root,
            by_id,
            open: FxHashSet::default(),
            selected: None,
        }
    }

    /// Builds a tree from a value snapshot, keeping the snapshot's ids as-is.
    pub fn from_snapshot(snapshot: &Node) -> Result<Self, FileTreeError> {
        let Node::Folder { id, name, children } = snapshot else {
            return Err(FileTreeError::NotAFolder);
        };

        let mut tree = Self::new();
        if id.as_str() != ROOT_ID {
            tree.by_id.clear();
            tree.by_id.insert(id.clone(), tree.root);
        }
        let root = tree.root;
        if let Some(entry) = tree.arena.get_mut(root) {
            entry.id = id.clone();
            entry.name = name.clone();
        }

        let mut stack: Vec<(NodeId, &[Node])> = vec![(root, children.as_slice())];
        while let Some((parent, children)) = stack.pop() {
            for child in children {
                let key = tree.insert_entry(parent, child.id().into(), child.name(), child.kind())?;
                if let Some(grandchildren) = child.children() {
                    stack.push((key, grandchildren));
                }
            }
        }

        Ok(tree)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_id(&self) -> &str {
        self.arena
            .get(self.root)
            .map(|e| e.id.as_str())
            .unwrap_or(ROOT_ID)
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn key_of(&self, id: &str) -> Option<NodeId> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<NodeRef<'_>> {
        self.get_by_key(self.key_of(id)?)
    }

    pub fn get_by_key(&self, key: NodeId) -> Option<NodeRef<'_>> {
        self.arena.get(key).map(|entry| NodeRef {
            key,
            id: &entry.id,
            name: &entry.name,
            kind: entry.kind(),
        })
    }

    /// Children of a folder in insertion order; `None` for files and unknown ids.
    pub fn children(&self, id: &str) -> Option<impl Iterator<Item = NodeRef<'_>> + '_> {
        let key = self.key_of(id)?;
        let children = self.arena.get(key)?.children()?;
        Some(children.iter().filter_map(|&child| self.get_by_key(child)))
    }

    fn insert_entry(
        &mut self,
        parent: NodeId,
        id: CompactString,
        name: &str,
        kind: NodeKind,
    ) -> Result<NodeId, FileTreeError> {
        validate_name(name)?;
        {
            let parent_entry = self.arena.get(parent).ok_or(FileTreeError::NotFound)?;
            let siblings = parent_entry.children().ok_or(FileTreeError::NotAFolder)?;
            let taken = siblings.iter().any(|&sibling| {
                self.arena
                    .get(sibling)
                    .is_some_and(|entry| entry.name.as_str() == name)
            });
            if taken {
                return Err(FileTreeError::DuplicateName);
            }
        }
        if self.by_id.contains_key(&id) {
            return Err(FileTreeError::IdExists);
        }

        let key = self
            .arena
            .insert(Entry::new(id.clone(), name.into(), Some(parent), kind));
        self.by_id.insert(id, key);
        if let Some(children) = self.arena.get_mut(parent).and_then(Entry::children_mut) {
            children.push(key);
        }
        Ok(key)
    }

    /// Appends a new node to `parent_id`; its id is `parent_id + "/" + name`.
    pub fn add_child(
        &mut self,
        parent_id: &str,
        name: &str,
        kind: NodeKind,
    ) -> Result<NodeId, FileTreeError> {
        validate_name(name)?;
        let parent = self.key_of(parent_id).ok_or(FileTreeError::NotFound)?;
        self.insert_entry(parent, derive_id(parent_id, name), name, kind)
    }

    /// Returns `Ok(false)` when the node already has `new_name`.
    pub fn rename(&mut self, node_id: &str, new_name: &str) -> Result<bool, FileTreeError> {
        validate_name(new_name)?;
        let key = self.key_of(node_id).ok_or(FileTreeError::NotFound)?;
        let entry = self.arena.get(key).ok_or(FileTreeError::NotFound)?;
        if entry.name.as_str() == new_name {
            return Ok(false);
        }

        if let Some(parent) = entry.parent {
            let clash = self
                .arena
                .get(parent)
                .and_then(Entry::children)
                .unwrap_or_default()
                .iter()
                .any(|&sibling| {
                    sibling != key
                        && self
                            .arena
                            .get(sibling)
                            .is_some_and(|e| e.name.as_str() == new_name)
                });
            if clash {
                return Err(FileTreeError::DuplicateName);
            }
        }

        if let Some(entry) = self.arena.get_mut(key) {
            entry.name = new_name.into();
        }
        Ok(true)
    }

    /// Removes `node_id` and everything below it from `parent_id`.
    /// Returns the number of nodes removed.
    pub fn delete_child(&mut self, parent_id: &str, node_id: &str) -> Result<usize, FileTreeError> {
        let parent = self.key_of(parent_id).ok_or(FileTreeError::NotFound)?;
        let key = self.key_of(node_id).ok_or(FileTreeError::NotFound)?;

        let children = self
            .arena
            .get_mut(parent)
            .ok_or(FileTreeError::NotFound)?
            .children_mut()
            .ok_or(FileTreeError::NotAFolder)?;
        let Some(pos) = children.iter().position(|&child| child == key) else {
            return Err(FileTreeError::NotFound);
        };
        children.remove(pos);

        let mut removed = 0;
        let mut stack = vec![key];
        while let Some(current) = stack.pop() {
            let Some(entry) = self.arena.remove(current) else {
                continue;
            };
            if let Some(children) = entry.children() {
                stack.extend_from_slice(children);
            }
            self.by_id.remove(&entry.id);
            self.open.remove(&current);
            if self.selected == Some(current) {
                self.selected = Some(parent);
            }
            removed += 1;
        }

        Ok(removed)
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.key_of(id).is_some_and(|key| self.open.contains(&key))
    }

    /// Flips the open flag of a folder. Files and unknown ids are ignored.
    pub fn toggle_open(&mut self, id: &str) -> bool {
        let Some(key) = self.folder_key(id) else {
            return false;
        };
        if !self.open.remove(&key) {
            self.open.insert(key);
        }
        true
    }

    pub fn set_open(&mut self, id: &str, open: bool) -> bool {
        let Some(key) = self.folder_key(id) else {
            return false;
        };
        if open {
            self.open.insert(key)
        } else {
            self.open.remove(&key)
        }
    }

    fn folder_key(&self, id: &str) -> Option<NodeId> {
        let key = self.key_of(id)?;
        (self.arena.get(key)?.kind() == NodeKind::Folder).then_some(key)
    }

    pub fn selected(&self) -> Option<NodeRef<'_>> {
        self.get_by_key(self.selected?)
    }

    /// Returns whether the selection moved. Unknown ids keep the current one.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(key) = self.key_of(id) else {
            return false;
        };
        let changed = self.selected != Some(key);
        self.selected = Some(key);
        changed
    }

    /// Visible rows: the root first, then depth-first through open folders.
    pub fn flatten_for_view(&self) -> Vec<FileTreeRow> {
        let mut result = Vec::new();
        let mut stack: Vec<(NodeId, u16)> = vec![(self.root, 0)];

        while let Some((key, depth)) = stack.pop() {
            let Some(entry) = self.arena.get(key) else {
                continue;
            };
            let is_open = self.open.contains(&key);
            result.push(FileTreeRow {
                key,
                id: entry.id.clone(),
                name: entry.name.clone(),
                depth,
                kind: entry.kind(),
                is_open,
                is_selected: self.selected == Some(key),
            });

            if is_open {
                if let Some(children) = entry.children() {
                    for &child in children.iter().rev() {
                        stack.push((child, depth.saturating_add(1)));
                    }
                }
            }
        }

        result
    }

    pub fn snapshot(&self) -> Node {
        self.snapshot_of(self.root)
    }

    fn snapshot_of(&self, key: NodeId) -> Node {
        let Some(entry) = self.arena.get(key) else {
            return Node::Folder {
                id: ROOT_ID.into(),
                name: ROOT_ID.into(),
                children: Vec::new(),
            };
        };
        match &entry.body {
            Body::File => Node::File {
                id: entry.id.clone(),
                name: entry.name.clone(),
            },
            Body::Folder { children } => Node::Folder {
                id: entry.id.clone(),
                name: entry.name.clone(),
                children: children.iter().map(|&c| self.snapshot_of(c)).collect(),
            },
        }
    }
}
