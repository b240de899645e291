pub mod animated;
pub mod color;
pub mod sprite;
pub mod sprites;
