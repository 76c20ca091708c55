//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one page section each. Stateful ones receive the
//! `RwSignal` they drive from `HomePage`; the rest are pure templates over
//! `SiteContent` slices.

pub mod about;
pub mod about_modal;
pub mod card;
pub mod contact_section;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod nav_bar;
pub mod programs;
pub mod resources;
pub mod speaking;
pub mod testimonials;
