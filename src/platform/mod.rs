//! Desktop platform glue: loop pacing and an SDL2 implementation of the draw surface.

mod desktop;
pub use desktop::*;
