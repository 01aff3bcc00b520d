//! Page modules for standalone screens.
//!
//! ARCHITECTURE
//! ============
//! Pages compose `components` into full screens. They are not wired to a
//! router here; the host application mounts them where it needs them.

pub mod invite;
