//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only process-wide state: one `RwSignal<SessionState>`
//! provided via context with a single writer (the session client) and many
//! readers. Page-local state stays inside the pages.

pub mod session;
