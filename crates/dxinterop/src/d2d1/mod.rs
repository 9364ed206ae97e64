//! Direct2D effect authoring (`d2d1effectauthor.h`, `d2d1effectauthor_1.h`)
//!
//! A custom effect implements [`ID2D1EffectImpl`] and builds a graph of
//! transforms through [`ID2D1TransformGraph`]; Direct2D hands it an
//! [`ID2D1EffectContext`] for shaders, resources and built-in transforms.

mod effect;
mod enums;
mod foreign;
mod render_info;
mod structs;
mod transform;

pub use effect::*;
pub use enums::*;
pub use foreign::*;
pub use render_info::*;
pub use structs::*;
pub use transform::*;
