//! Page UI state containers.
//!
//! ARCHITECTURE
//! ============
//! Each concern (mobile nav, bio modal, contact form) is a small value type
//! with pure transition methods. `HomePage` holds each one in its own
//! `RwSignal` and components subscribe to the slice they render, so no
//! component mutates shared flags directly.

pub mod contact;
pub mod modal;
pub mod nav;
