/// Notification sent whenever something visible changed.
///
/// There is a single kind: listeners repaint from scratch, so the cause of
/// the change does not matter to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    StateChanged,
}
