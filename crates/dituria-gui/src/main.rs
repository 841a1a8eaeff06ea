mod app;
mod screen;
mod style;
mod theme;
mod widgets;

use clap::Parser;

/// Desktop browser for the dituria educational catalog.
#[derive(Debug, Parser)]
#[command(name = "dituria", version)]
struct Cli {
    /// Override the catalog API base URL from the config file.
    #[arg(long)]
    base_url: Option<String>,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> iced::Result {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "dituria=trace"
    } else {
        "dituria=debug"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let base_url = cli.base_url;
    iced::application(
        move || app::Dituria::new(base_url.clone()),
        app::Dituria::update,
        app::Dituria::view,
    )
    .title(app::Dituria::title)
    .theme(app::Dituria::theme)
    .run()
}
