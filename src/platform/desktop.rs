//! Desktop platform implementation.

use std::path::Path;
use std::time::Duration;

use sdl2::image::LoadTexture;
use sdl2::pixels::Color as SdlColor;
use sdl2::rect::Rect as SdlRect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use tracing::debug;

use crate::error::TextureError;
use crate::systems::render::{DrawSurface, Rect};
use crate::texture::color::Color;
use crate::texture::sprite::AtlasTile;

pub fn sleep(duration: Duration) {
    spin_sleep::sleep(duration);
}

/// Loads the shared sprite sheet. The game must not start if this fails.
pub fn load_sprite_sheet(texture_creator: &TextureCreator<WindowContext>, path: &Path) -> Result<Texture, TextureError> {
    let texture = texture_creator
        .load_texture(path)
        .map_err(|e| TextureError::LoadFailed(format!("{}: {e}", path.display())))?;
    let query = texture.query();
    debug!(width = query.width, height = query.height, path = %path.display(), "Loaded sprite sheet");
    Ok(texture)
}

/// Draws onto an SDL2 window canvas, blitting sprites from one sheet.
pub struct SdlSurface<'a> {
    pub canvas: &'a mut Canvas<Window>,
    pub sheet: &'a Texture,
}

fn to_sdl_color(color: Color) -> SdlColor {
    SdlColor::RGB(color.r, color.g, color.b)
}

fn to_sdl_rect(rect: Rect) -> SdlRect {
    SdlRect::new(
        rect.pos.x.round() as i32,
        rect.pos.y.round() as i32,
        rect.size.x.max(0.0).round() as u32,
        rect.size.y.max(0.0).round() as u32,
    )
}

impl DrawSurface for SdlSurface<'_> {
    type Error = TextureError;

    fn clear(&mut self, _size: glam::Vec2) -> Result<(), Self::Error> {
        self.canvas.set_draw_color(to_sdl_color(Color::WHITE));
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, color: Color, dest: Rect) -> Result<(), Self::Error> {
        self.canvas.set_draw_color(to_sdl_color(color));
        self.canvas.fill_rect(to_sdl_rect(dest)).map_err(TextureError::RenderFailed)
    }

    fn blit(&mut self, src: &AtlasTile, dest: Rect) -> Result<(), Self::Error> {
        let src = SdlRect::new(src.pos.x as i32, src.pos.y as i32, src.size.x as u32, src.size.y as u32);
        self.canvas
            .copy(self.sheet, src, to_sdl_rect(dest))
            .map_err(TextureError::RenderFailed)
    }
}
