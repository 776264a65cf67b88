//! Page modules for each screen the shell can display.
//!
//! ARCHITECTURE
//! ============
//! Every page is a leaf: it renders compiled-in content from `data` and wires
//! its buttons to the navigation callback handed down by the shell. Pages hold
//! no shared state and perform no I/O.

pub mod about;
pub mod browse;
pub mod home;
pub mod login;
pub mod pricing;
pub mod register;
