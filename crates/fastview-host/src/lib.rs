//! Host-facing surface for binding views.
//!
//! Scripting hosts pass loosely typed arguments and expect the overloaded
//! `makeFastBuffer` call shape. This crate decodes those arguments and routes
//! them to the named operations of [`fastview::ViewBinder`].
mod binding;
mod error;
mod module;
mod value;

pub use binding::*;
pub use error::*;
pub use module::*;
pub use value::*;
