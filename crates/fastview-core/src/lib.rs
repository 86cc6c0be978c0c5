//! Typed, zero-copy windows over byte buffers.
//!
//! A [`View`] is bound to a sub-range of a caller-owned `&mut [u8]` by a
//! [`ViewBinder`]. Once bound, indexed reads and writes go straight to the
//! buffer's bytes, interpreted as one of the nine [`ElementType`]s.
mod binder;
mod config;
mod dtype;
mod error;
mod view;

pub use binder::*;
pub use config::*;
pub use dtype::*;
pub use error::*;
pub use view::*;

pub mod prelude {
    pub use crate::{
        bind_raw_view, bind_tagged_view, bind_typed_view, ElementType, Pixel, View, ViewBinder,
        ViewError,
    };
}
