//! Browser glue shared by the widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps web-sys calls out of state and component logic. Everything that
//! touches the DOM is gated on the `csr` feature so the crate still builds and
//! tests natively.

#[cfg(feature = "csr")]
pub mod dom_validity;
pub mod logging;
