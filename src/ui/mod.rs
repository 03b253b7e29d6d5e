//! UI module - contains UI rendering components
//!
//! Widgets here hold no state; dialogs and pages own their drafts.

pub mod components;
