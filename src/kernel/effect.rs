use compact_str::CompactString;

/// Work the presentation layer performs after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Move keyboard focus into the inline name field once it is shown.
    FocusInlineInput,
    /// The tree structure or a node name changed; re-read the snapshot.
    TreeChanged { version: u64 },
    SelectionChanged { node_id: Option<CompactString> },
}
