//! Utility helpers shared across component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utilities hold the pure, framework-free logic that components call while
//! rendering, so it can be tested without a DOM.

pub mod class;
