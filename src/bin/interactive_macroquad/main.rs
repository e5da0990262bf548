use clap::Parser;
use macroquad::prelude::Conf;
use vertical_launch::config::LaunchArgs;

mod app;
mod constants;
mod controls;
mod hud;
mod playback;
mod render;
mod state;
mod view;

#[derive(Parser)]
#[command(name = "interactive_macroquad")]
#[command(about = "Interactive vertical launch visualizer")]
struct Cli {
    #[command(flatten)]
    launch: LaunchArgs,
}

fn window_conf() -> Conf {
    app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(err) = app::run(&cli.launch).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
