//! Network settings dialogs
//!
//! Each dialog owns an editable draft seeded from the preference store.
//! The store is written only by an explicit user action (confirm, or
//! generate for cookies); dismissing simply drops the draft.

pub mod concurrency;
pub mod cookies;
pub mod rate_limit;

pub use concurrency::ConcurrentDownloadDialog;
pub use cookies::CookiesDialog;
pub use rate_limit::RateLimitDialog;

/// What the host should do after a dialog frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Keep showing the dialog
    Open,
    /// Close the dialog (after a confirm, or a cancel)
    Dismissed,
    /// Close the dialog and open the cookie generator page
    NavigateToGenerator,
}
