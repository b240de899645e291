use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;
use sdl2::EventPump;
use thousands::Separable;
use tracing::{debug, error, info, warn};

use crate::constants::{LOOP_TIME, SPRITE_SHEET_PATH, WINDOW_SIZE};
use crate::events::GameCommand;
use crate::game::Game;
use crate::platform::{load_sprite_sheet, sleep, SdlSurface};
use crate::systems::{GameStage, Viewport};

const TITLE: &str = "Runner";

pub struct App {
    game: Game,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    sheet: Texture,
    last_tick: Instant,
    /// Title currently shown, so the window is only retitled on change.
    title: String,
}

impl App {
    pub fn new() -> Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;

        let window = video_subsystem
            .window(TITLE, WINDOW_SIZE.x as u32, WINDOW_SIZE.y as u32)
            .resizable()
            .position_centered()
            .build()?;

        let canvas = window.into_canvas().accelerated().build()?;
        let texture_creator = canvas.texture_creator();
        let sheet =
            load_sprite_sheet(&texture_creator, Path::new(SPRITE_SHEET_PATH)).context("Failed to load sprite sheet")?;

        let (width, height) = canvas.output_size().map_err(|e| anyhow!(e))?;
        let game = Game::new(Viewport::new(width as f32, height as f32))?;

        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        Ok(Self {
            game,
            canvas,
            event_pump,
            sheet,
            last_tick: Instant::now(),
            title: TITLE.to_string(),
        })
    }

    /// Runs one iteration of the game loop. Returns false once the game should exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Window { win_event, .. } => match win_event {
                    WindowEvent::Resized(..) | WindowEvent::SizeChanged(..) => {
                        // Event sizes are logical points; the canvas draws in pixels, which differ on HiDPI
                        match self.canvas.output_size() {
                            Ok((width, height)) => {
                                debug!(width, height, "Window resized");
                                self.game.resize(width as f32, height as f32);
                            }
                            Err(e) => warn!("Failed to read canvas size after resize: {e}"),
                        }
                    }
                    WindowEvent::Hidden => debug!("Window hidden"),
                    WindowEvent::Shown => debug!("Window shown"),
                    _ => {}
                },
                Event::Quit { .. } => self.game.send(GameCommand::Quit),
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    if let Some(command) = command_for(keycode) {
                        self.game.send(command);
                    }
                }
                _ => {}
            }
        }

        let dt = self.last_tick.elapsed();
        self.last_tick = Instant::now();

        if self.game.tick(dt) {
            info!("Exit requested. Exiting...");
            return false;
        }

        if let Err(e) = self.draw() {
            error!("Failed to draw game: {e}");
        }
        self.update_title();

        let elapsed = start.elapsed();
        if elapsed < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(elapsed);
            if time != Duration::ZERO {
                sleep(time);
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", elapsed - LOOP_TIME);
        }

        true
    }

    fn draw(&mut self) -> Result<()> {
        let mut surface = SdlSurface {
            canvas: &mut self.canvas,
            sheet: &self.sheet,
        };
        self.game.draw_list().replay(&mut surface)?;
        self.canvas.present();
        Ok(())
    }

    fn update_title(&mut self) {
        let title = match self.game.stage() {
            GameStage::Playing => format!("{TITLE} | Score: {}", self.game.score().separate_with_commas()),
            GameStage::Paused => format!("{TITLE} | Score: {} | Paused", self.game.score().separate_with_commas()),
            GameStage::GameOver { final_score } => format!(
                "{TITLE} | Game Over! Score: {} | Press R to restart",
                final_score.separate_with_commas()
            ),
        };
        if title == self.title {
            return;
        }

        if let Err(e) = self.canvas.window_mut().set_title(&title) {
            warn!("Failed to set window title: {e}");
        }
        self.title = title;
    }
}

fn command_for(keycode: Keycode) -> Option<GameCommand> {
    match keycode {
        Keycode::Space | Keycode::Up => Some(GameCommand::Jump),
        Keycode::P => Some(GameCommand::TogglePause),
        Keycode::R => Some(GameCommand::Restart),
        Keycode::Escape | Keycode::Q => Some(GameCommand::Quit),
        _ => None,
    }
}
