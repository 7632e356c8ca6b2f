//! Widget components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component creates and owns its widget state signal; components never
//! share state with each other.

pub mod batch_counter;
pub mod price_form;
