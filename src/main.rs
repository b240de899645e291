use anyhow::Result;
use runner::app::App;
use runner::constants::LOOP_TIME;
use runner::formatter;
use tracing::info;

pub fn main() -> Result<()> {
    formatter::init_logging()?;

    let mut app = App::new()?;

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    while app.run() {}

    Ok(())
}
