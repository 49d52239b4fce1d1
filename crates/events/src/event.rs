/// A domain-agnostic event.
///
/// Events are **immutable** facts, published after they have been applied.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "inventory.line_item.added").
    fn event_type(&self) -> &'static str;
}
