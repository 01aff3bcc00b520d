//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are leaf-level and stateless. They read no context and hold no
//! signals; each is a pure function from props to markup.

pub mod gradient_frame;
pub mod loading_placeholder;
pub mod skeleton;
