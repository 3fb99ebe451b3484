//! The root of this crate doesn't do anything.
//! It just re-exports its contents.

pub mod deserialize;
pub mod prefabs; // prefabs::attractors::whatever
pub mod scene;
pub use deserialize::*;
pub use scene::{AssetNames, Scene, Window};

#[macro_use]
extern crate lazy_static;
