use anyhow::Result;
use clap::Parser;
use tracing::info;

use randomizer::clipboard::SystemClipboard;
use randomizer::config::Config;
use randomizer::dice::TumbleEngine;
use randomizer::logging::{self, LogTarget};
use randomizer::{app, cli, event, random, tui};

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let config_path = Config::resolve_path(cli_opts.config.as_deref())?;
    let mut config = Config::load_from(&config_path)?;
    if cli_opts.seed.is_some() {
        config.seed = cli_opts.seed;
    }

    if let Some(command) = cli_opts.command {
        logging::init(&config.logging, LogTarget::Stderr)?;
        let mut rng = random::source_for(config.seed);
        return cli::run(command, &config, &config_path, rng.as_mut());
    }

    logging::init(&config.logging, logging::file_target(&config.logging)?)?;
    info!(config = %config_path.display(), seed = ?config.seed, "starting terminal ui");

    // The engine tumbles from its own stream, seeded one past the app seed.
    let engine = TumbleEngine::new(random::source_for(
        config.seed.map(|seed| seed.wrapping_add(1)),
    ));
    let mut app = app::App::new(
        &config,
        random::source_for(config.seed),
        Box::new(engine),
        Box::new(SystemClipboard::new()),
    );
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
