//! A structured representation of the sprites on the sheet.
//!
//! The enums here give type-safe access to atlas names instead of raw strings.
//! `GameSprite::to_path` produces the key used in `assets/atlas.json`.

use crate::error::TextureError;
use crate::texture::animated::SpriteAnimation;
use crate::texture::sprite::SpriteAtlas;

/// Poses of the running dinosaur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DinoSprite {
    Run(u8),
}

/// Obstacle variants on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeSprite {
    Small(u8),
    Large,
}

/// A top-level enum that encompasses all game sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSprite {
    Dino(DinoSprite),
    Tree(TreeSprite),
}

impl GameSprite {
    pub const DINO_RUN: [GameSprite; 4] = [
        GameSprite::Dino(DinoSprite::Run(0)),
        GameSprite::Dino(DinoSprite::Run(1)),
        GameSprite::Dino(DinoSprite::Run(2)),
        GameSprite::Dino(DinoSprite::Run(3)),
    ];

    pub const TREES: [GameSprite; 3] = [
        GameSprite::Tree(TreeSprite::Small(0)),
        GameSprite::Tree(TreeSprite::Small(1)),
        GameSprite::Tree(TreeSprite::Large),
    ];

    /// Generates the atlas key for the sprite.
    pub fn to_path(self) -> String {
        match self {
            GameSprite::Dino(DinoSprite::Run(frame)) => format!("dino/run_{frame}.png"),
            GameSprite::Tree(TreeSprite::Small(frame)) => format!("tree/small_{frame}.png"),
            GameSprite::Tree(TreeSprite::Large) => "tree/large.png".to_string(),
        }
    }
}

/// Resolves a list of sprites into a looping animation.
pub fn animation_from(atlas: &SpriteAtlas, sprites: &[GameSprite]) -> Result<SpriteAnimation, crate::error::GameError> {
    let tiles = sprites
        .iter()
        .map(|sprite| atlas.get_tile(&sprite.to_path()))
        .collect::<Result<Vec<_>, TextureError>>()?;
    Ok(SpriteAnimation::new(tiles)?)
}
