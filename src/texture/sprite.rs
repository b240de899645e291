use std::collections::HashMap;

use glam::U16Vec2;
use tracing::debug;

use crate::error::TextureError;

/// Atlas frame mapping data, normally generated from `assets/atlas.json`.
#[derive(Clone, Debug)]
pub struct AtlasMapper {
    /// Mapping from sprite name to frame bounds within the sprite sheet
    pub frames: HashMap<String, MapperFrame>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MapperFrame {
    pub pos: U16Vec2,
    pub size: U16Vec2,
}

/// A single source rectangle within the shared sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtlasTile {
    pub pos: U16Vec2,
    pub size: U16Vec2,
}

impl AtlasTile {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            pos: U16Vec2::new(x, y),
            size: U16Vec2::new(width, height),
        }
    }
}

impl From<MapperFrame> for AtlasTile {
    fn from(frame: MapperFrame) -> Self {
        Self {
            pos: frame.pos,
            size: frame.size,
        }
    }
}

/// Named source rectangles into the sprite sheet.
///
/// The image itself belongs to the host; the simulation only ever refers to
/// regions of it, so the atlas is pure data and can live inside the ECS world.
#[derive(Debug, Clone)]
pub struct SpriteAtlas {
    tiles: HashMap<String, MapperFrame>,
}

impl SpriteAtlas {
    pub fn new(mapper: AtlasMapper) -> Self {
        let tile_count = mapper.frames.len();
        let tiles = mapper.frames.into_iter().collect();

        debug!(tile_count, "Created sprite atlas");
        Self { tiles }
    }

    /// Builds the atlas from the frame table compiled in from `assets/atlas.json`.
    pub fn builtin() -> Self {
        Self::new(AtlasMapper {
            frames: crate::game::ATLAS_FRAMES
                .into_iter()
                .map(|(name, frame)| (name.to_string(), *frame))
                .collect(),
        })
    }

    /// Retrieves a sprite tile by name.
    pub fn get_tile(&self, name: &str) -> Result<AtlasTile, TextureError> {
        let frame = self.tiles.get(name).ok_or_else(|| {
            debug!(tile_name = name, "Atlas tile not found");
            TextureError::AtlasTileNotFound(name.to_string())
        })?;
        Ok((*frame).into())
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
