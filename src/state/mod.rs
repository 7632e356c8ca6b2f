//! Widget state modules.
//!
//! DESIGN
//! ======
//! Each widget owns its state outright; nothing here is global. Components
//! wrap these plain types in signals created inside the component, so the
//! transition logic stays testable without a renderer.

pub mod counter;
pub mod price_form;
pub mod store;
pub mod submission;
