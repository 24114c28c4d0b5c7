mod app;
mod category;
mod config;
mod dataset;
mod drawing;
mod error;
mod filter;
mod geo;
mod glyph;
mod palette;
mod picking;
mod projection;
mod scene;
mod settings;
mod tooltip;

use app::App;
use clap::Parser;
use config::{MapConfig, DEFAULT_CONFIG_FILE};
use eframe::egui;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive world map of volcanoes", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Volcano CSV dataset (overrides the config file)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// TTF/OTF font used for all map text
    #[arg(long)]
    font: Option<PathBuf>,

    /// Directory with the Natural Earth coastline/border GeoJSON files
    #[arg(long)]
    geodata: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("volcano_map=info")).init();
    let cli = Cli::parse();
    log::info!("volcano-map {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));

    let mut config = MapConfig::load(&cli.config).unwrap_or_else(|e| {
        log::warn!("{e}; using default configuration");
        MapConfig::stock()
    });
    if let Some(dataset) = cli.dataset {
        config.dataset = dataset;
    }
    if cli.font.is_some() {
        config.font = cli.font;
    }
    if let Some(geodata) = cli.geodata {
        config.geodata = geodata;
    }

    let records = match dataset::load_dataset(&config.dataset) {
        Ok(records) => records,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let base_map = geo::load_base_map(&config.geodata);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.map.title.as_str())
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };

    eframe::run_native(
        "Volcano Map",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, records, base_map, config)))),
    )
}
