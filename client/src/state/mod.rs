//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site keeps a single piece of reactive state: which page the shell is
//! showing. It lives in an `RwSignal` owned by the page shell and is provided
//! as Leptos context so chrome such as the header can read it.

pub mod nav;
