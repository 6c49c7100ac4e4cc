mod app;
mod config;
mod views;

use std::fs::File;
use std::io;
use std::sync::Arc;

use footer::{FooterBuilder, FooterError, WebApiClient};
use simplelog::WriteLogger;

use app::App;
use config::CliConfig;

fn main() -> io::Result<()> {
    let config = CliConfig::from_env()?;
    init_logging(&config)?;

    let runtime = tokio::runtime::Runtime::new()?;
    // Slider changes schedule timers from the UI thread.
    let _guard = runtime.enter();

    let client = WebApiClient::with_base_url(&config.api_base, config.access_token.clone())
        .map_err(invalid_input)?;
    let footer = FooterBuilder::new(client).build().map_err(invalid_input)?;

    let mut app = App::new(Arc::new(footer), runtime.handle().clone());
    app.mount();

    let mut terminal = ratatui::init();
    let app_result = app.run(&mut terminal);
    ratatui::restore();

    log::info!("Footer closed");
    app_result
}

fn init_logging(config: &CliConfig) -> io::Result<()> {
    let file = File::create(&config.log_file)?;
    WriteLogger::init(config.log_level, simplelog::Config::default(), file).map_err(io::Error::other)
}

fn invalid_input(err: FooterError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err)
}
