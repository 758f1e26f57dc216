//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page owns submit orchestration and delegates rendering details
//! to `components`.

pub mod register;
