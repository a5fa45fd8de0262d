//! Seam to the external change-notification system.
//!
//! A `Variant` can be registered with an observer mechanism that lives
//! entirely outside this crate. All this crate stores is a detach-on-drop
//! guard per registration; it never fires notifications itself. The one
//! contract the owner must honor is calling `Variant::clear_connections`
//! (or dropping the variant) before the observer side goes away.

/// Registration guard handed out by the external signal system.
///
/// Dropping the guard runs its detach closure exactly once, unhooking the
/// observer. Guards are deliberately not `Clone`: copying a `Variant` must
/// not duplicate registrations.
pub struct Connection {
    detach: Option<Box<dyn FnOnce() + Send>>,
}

impl Connection {
    pub fn new(detach: impl FnOnce() + Send + 'static) -> Self {
        Self { detach: Some(Box::new(detach)) }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Connection")
    }
}
