//! Play subcommand handler

use anyhow::Result;
use tracing::info;

use cyberquest::quiz::Level;
use cyberquest::tui::screens::ScreenId;
use cyberquest::tui::{GameApp, TuiApp};
use cyberquest::Config;

/// Where the game opens.
pub fn start_screen(skip_intro: bool) -> ScreenId {
    if skip_intro {
        ScreenId::Level(Level::Phishing)
    } else {
        ScreenId::Home
    }
}

/// Run the full game until the player quits.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: Config, skip_intro: bool) -> Result<()> {
    let start = start_screen(skip_intro);
    info!(?start, "starting game");

    let mut app = GameApp::new(config, start)?;
    app.run()?;
    info!(score = app.final_score(), "game closed");
    Ok(())
}
