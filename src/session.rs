//! Caller-owned frame editing session.

/// Session state, upload tickets and export.
pub mod frame_session;
