use std::convert::Infallible;

use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Query, Res, ResMut};
use glam::Vec2;

use crate::config::GameConfig;
use crate::systems::components::{Appearance, Position, Renderable, SpawnOrder, Viewport};
use crate::texture::color::Color;
use crate::texture::sprite::AtlasTile;

/// A destination rectangle on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }
}

/// One primitive against a 2D raster surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface.
    Clear { size: Vec2 },
    FillRect { color: Color, dest: Rect },
    /// Copy `src` out of the shared sprite sheet, scaled into `dest`.
    Blit { src: AtlasTile, dest: Rect },
}

/// The frame most recently produced by the draw pass.
///
/// Hosts replay it onto their surface after each tick; nothing in the
/// simulation reads it.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct DrawList(pub Vec<DrawCommand>);

impl DrawList {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.0
    }

    /// Issues every command, in order, against `surface`.
    pub fn replay<S: DrawSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        for command in &self.0 {
            match command {
                DrawCommand::Clear { size } => surface.clear(*size)?,
                DrawCommand::FillRect { color, dest } => surface.fill_rect(*color, *dest)?,
                DrawCommand::Blit { src, dest } => surface.blit(src, *dest)?,
            }
        }
        Ok(())
    }
}

/// Something draw commands can be issued against: a window canvas, an
/// offscreen buffer, or a recorder in tests.
pub trait DrawSurface {
    type Error;

    fn clear(&mut self, size: Vec2) -> Result<(), Self::Error>;
    fn fill_rect(&mut self, color: Color, dest: Rect) -> Result<(), Self::Error>;
    fn blit(&mut self, src: &AtlasTile, dest: Rect) -> Result<(), Self::Error>;
}

/// A surface that only remembers what it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl DrawSurface for RecordingSurface {
    type Error = Infallible;

    fn clear(&mut self, size: Vec2) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Clear { size });
        Ok(())
    }

    fn fill_rect(&mut self, color: Color, dest: Rect) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::FillRect { color, dest });
        Ok(())
    }

    fn blit(&mut self, src: &AtlasTile, dest: Rect) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Blit { src: *src, dest });
        Ok(())
    }
}

/// Counts draw passes so sprite frames flip at a fixed cadence.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnimationClock {
    /// Draw passes since the last frame advance.
    pub counter: u32,
}

/// Draws every entity with a spawn order, a position and a renderable.
///
/// The surface is cleared first; entities follow in layer order, ties broken by
/// creation order, so the background always sits under the actors.
pub fn render_system(
    viewport: Res<Viewport>,
    mut draw_list: ResMut<DrawList>,
    renderables: Query<(&SpawnOrder, &Position, &Renderable)>,
) {
    let mut sorted: Vec<_> = renderables.iter().collect();
    sorted.sort_by_key(|(order, _, renderable)| (renderable.layer, **order));

    let commands = &mut draw_list.0;
    commands.clear();
    commands.push(DrawCommand::Clear { size: viewport.size() });

    for (_, position, renderable) in sorted {
        let dest = Rect::new(position.0, renderable.size);
        commands.push(match &renderable.appearance {
            Appearance::Solid(color) => DrawCommand::FillRect { color: *color, dest },
            Appearance::Animated(animation) => DrawCommand::Blit {
                src: *animation.current_tile(),
                dest,
            },
        });
    }
}

/// Advances every sprite animation by one frame once per `frame_delay` draw passes.
pub fn animation_system(
    config: Res<GameConfig>,
    mut clock: ResMut<AnimationClock>,
    mut renderables: Query<&mut Renderable>,
) {
    clock.counter += 1;
    if clock.counter < config.frame_delay {
        return;
    }
    clock.counter = 0;

    for mut renderable in renderables.iter_mut() {
        if let Some(animation) = renderable.animation_mut() {
            animation.advance();
        }
    }
}
