use smallvec::SmallVec;

use crate::error::AnimationError;
use crate::texture::sprite::AtlasTile;

/// Frames of a sprite animation. Every animation in the game fits inline.
pub type TileSequence = SmallVec<[AtlasTile; 4]>;

/// A looping sequence of sprite frames.
///
/// The frame index always stays within `0..frame_count()`. Advancing is driven
/// externally (by the animation clock), never by elapsed time, so the flip rate
/// is independent of how fast frames are drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteAnimation {
    tiles: TileSequence,
    current_frame: usize,
}

impl SpriteAnimation {
    pub fn new(tiles: impl IntoIterator<Item = AtlasTile>) -> Result<Self, AnimationError> {
        let tiles: TileSequence = tiles.into_iter().collect();
        if tiles.is_empty() {
            return Err(AnimationError::EmptyFrames);
        }

        Ok(Self { tiles, current_frame: 0 })
    }

    pub fn current_tile(&self) -> &AtlasTile {
        &self.tiles[self.current_frame]
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn frame_count(&self) -> usize {
        self.tiles.len()
    }

    /// Moves to the next frame, wrapping back to the first.
    pub fn advance(&mut self) {
        self.current_frame = (self.current_frame + 1) % self.tiles.len();
    }

    pub fn reset(&mut self) {
        self.current_frame = 0;
    }
}
