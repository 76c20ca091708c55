//! Utility helpers shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the pure parts stay testable without a DOM.

pub mod class_names;
pub mod modal_session;
pub mod scroll_lock;
pub mod smoke;
