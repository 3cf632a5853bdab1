use std::io::stdout;

use birb::terminal::{Keyboard, Screen, TerminalGuard};
use birb::{Config, Error, Game};

fn main() -> Result<(), Error> {
    // Logs go to stderr; redirect it (2>birb.log) to read them while playing.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env()?;
    let mut game = Game::new(config)?;

    let guard = TerminalGuard::enter()?;
    let result = game.run(&mut Keyboard, &mut Screen::new(stdout()));
    guard.restore()?;

    let summary = result?;
    println!("{summary}");
    Ok(())
}
