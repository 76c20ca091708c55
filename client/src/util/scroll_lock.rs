//! Document scroll lock held while an overlay is open.
//!
//! DESIGN
//! ======
//! `ScrollLock` captures the target's `overflow` style on acquire, forces it
//! to `hidden`, and puts the captured value back on drop. Release is tied to
//! ownership, so every path that drops the lock (explicit close, component
//! teardown) restores scrolling.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// Overflow value applied while locked.
pub const LOCKED_OVERFLOW: &str = "hidden";

/// Something with an inline `overflow` style.
pub trait OverflowStyle {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

/// RAII guard: scroll is suspended for as long as this value lives.
pub struct ScrollLock<T: OverflowStyle> {
    target: T,
    previous: String,
}

impl<T: OverflowStyle> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        let previous = target.overflow();
        target.set_overflow(LOCKED_OVERFLOW);
        Self { target, previous }
    }

    /// Overflow value that will be restored on release.
    pub fn previous(&self) -> &str {
        &self.previous
    }
}

impl<T: OverflowStyle> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.target.set_overflow(&self.previous);
    }
}

/// The document `<body>` element.
#[cfg(feature = "hydrate")]
pub struct BodyStyle(web_sys::HtmlElement);

#[cfg(feature = "hydrate")]
impl BodyStyle {
    pub fn current() -> Option<Self> {
        web_sys::window()?.document()?.body().map(Self)
    }
}

#[cfg(feature = "hydrate")]
impl OverflowStyle for BodyStyle {
    fn overflow(&self) -> String {
        self.0.style().get_property_value("overflow").unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        if let Err(err) = self.0.style().set_property("overflow", value) {
            log::warn!("failed to set body overflow to {value:?}: {err:?}");
        }
    }
}
