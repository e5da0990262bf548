use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::warn;
use vertical_launch::config::{LaunchArgs, LaunchSettings};
use vertical_launch::core::scrub::MAX_TICKS;
use vertical_launch::core::{BODIES, Trajectory};
use vertical_launch::plot::{DEFAULT_PLOT_SIZE, default_plot_path, render_to_file};
use vertical_launch::{Error, Result};

#[derive(Parser)]
#[command(name = "vertical_launch")]
#[command(about = "Vertical launch calculator: time of flight, apex and readouts at any instant")]
struct Cli {
    #[command(flatten)]
    launch: LaunchArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the bodies gravity can be taken from
    Bodies,
    /// Print the flight summary and readouts at one instant
    Report {
        /// Instant to inspect in seconds, clamped to the flight
        #[arg(long, default_value_t = 0.0)]
        time: f64,
    },
    /// Print height and velocity over the whole flight
    Table {
        /// Interval between rows in seconds
        #[arg(long, default_value_t = 0.5)]
        every: f64,
    },
    /// Render the plot at one instant to a PNG or SVG file
    Plot {
        /// Instant to draw in seconds, clamped to the flight
        #[arg(long, default_value_t = 0.0)]
        time: f64,
        /// Output file; `.svg` writes SVG, anything else PNG
        #[arg(long)]
        output: Option<PathBuf>,
        /// Image width in pixels
        #[arg(long, default_value_t = DEFAULT_PLOT_SIZE.0)]
        width: u32,
        /// Image height in pixels
        #[arg(long, default_value_t = DEFAULT_PLOT_SIZE.1)]
        height_px: u32,
    },
}

fn read_f64(prompt: &str) -> Result<f64> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            return Err(Error::InvalidInput(
                "input ended unexpectedly (EOF)".to_string(),
            ));
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 50 or -12.5)."),
        }
    }
}

fn get_inputs_from_user(mut args: LaunchArgs) -> Result<LaunchSettings> {
    args.height = Some(read_f64("Initial height (m): ")?);
    args.velocity = Some(read_f64("Initial velocity (m/s, positive = up): ")?);
    LaunchSettings::from_args(&args)
}

/// Snaps a requested instant onto the scrub, warning when it moved.
fn scrub_time(trajectory: &Trajectory, requested_s: f64) -> f64 {
    let time_s = trajectory.scrub().clamp(requested_s);
    if (time_s - requested_s).abs() > trajectory.scrub().step_s() * 0.5 {
        warn!("requested t={requested_s} s is outside the flight, showing t={time_s:.2} s");
    }
    time_s
}

fn print_summary(settings: &LaunchSettings, trajectory: &Trajectory) {
    println!("\nBody: {}", settings.body);
    println!(
        "Initial height: {:.2} m | Initial velocity: {:.2} m/s",
        settings.height_m, settings.velocity_mps
    );
    if trajectory.has_flight() {
        println!("Time of flight: {:.4} s", trajectory.time_of_flight_s());
    } else {
        println!("Time of flight: 0 s (no trajectory, the body is not in the air)");
    }
    match trajectory.apex_time_s() {
        Some(t_apex) => println!(
            "Maximum height: {:.2} m at t = {:.2} s",
            trajectory.max_height_m(),
            t_apex
        ),
        None => println!(
            "Maximum height: {:.2} m (launch point)",
            trajectory.max_height_m()
        ),
    }
}

fn print_readouts(trajectory: &Trajectory, time_s: f64) {
    let state = trajectory.state_at(time_s);
    println!("\nTime: {:.2} s", state.time_s);
    println!("Current height: {:.2} m", state.height_m);
    println!("Current velocity: {:.2} m/s", state.velocity_mps);
    println!();
    println!("y(t) = y0 + v0*t - 1/2*g*t^2");
    println!("v(t) = v0 - g*t");
    println!(
        "At this instant ({:.2} s) gravity has removed {:.2} m/s from the initial velocity.",
        state.time_s, state.gravity_loss_mps
    );
}

fn print_table(trajectory: &Trajectory, every_s: f64) {
    let ticks = trajectory.scrub().ticks(every_s);
    if every_s > 0.0 && every_s < trajectory.time_of_flight_s() / MAX_TICKS as f64 {
        warn!("interval {every_s} s is too fine, limiting the table to about {MAX_TICKS} rows");
    }
    println!("\n{:>8}  {:>10}  {:>12}", "t (s)", "y (m)", "v (m/s)");
    for time_s in ticks {
        let state = trajectory.state_at(time_s);
        println!(
            "{:>8.2}  {:>10.2}  {:>12.2}",
            state.time_s, state.height_m, state.velocity_mps
        );
    }
}

fn print_bodies() {
    for (i, body) in BODIES.iter().enumerate() {
        println!("{:>2}. {:<8} {:>7.2} m/s^2", i + 1, body.name, body.gravity_mps2);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Bodies) => {
            print_bodies();
        }
        Some(Commands::Report { time }) => {
            let settings = LaunchSettings::from_args(&cli.launch)?;
            let trajectory = Trajectory::new(settings.inputs()?);
            print_summary(&settings, &trajectory);
            print_readouts(&trajectory, scrub_time(&trajectory, time));
        }
        Some(Commands::Table { every }) => {
            let settings = LaunchSettings::from_args(&cli.launch)?;
            let trajectory = Trajectory::new(settings.inputs()?);
            print_summary(&settings, &trajectory);
            print_table(&trajectory, every);
        }
        Some(Commands::Plot {
            time,
            output,
            width,
            height_px,
        }) => {
            let settings = LaunchSettings::from_args(&cli.launch)?;
            let trajectory = Trajectory::new(settings.inputs()?);
            let scene = vertical_launch::core::Scene::compose(
                &trajectory,
                scrub_time(&trajectory, time),
            );
            let path = output.unwrap_or_else(|| default_plot_path(settings.body));
            render_to_file(&scene, &path, (width, height_px))?;
            println!("Plot written to {}", path.display());
        }
        None => {
            let settings = if cli.launch.is_unset() {
                get_inputs_from_user(cli.launch)?
            } else {
                LaunchSettings::from_args(&cli.launch)?
            };
            let trajectory = Trajectory::new(settings.inputs()?);
            print_summary(&settings, &trajectory);
            print_readouts(&trajectory, 0.0);
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use vertical_launch::core::LaunchInputs;

    fn trajectory(d0: f64, v0: f64, g: f64) -> Trajectory {
        Trajectory::new(LaunchInputs::new(d0, v0, g).expect("valid inputs"))
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_velocity_and_subcommand() {
        let cli = Cli::try_parse_from([
            "vertical_launch",
            "--body",
            "moon",
            "--velocity",
            "-5",
            "report",
            "--time",
            "1.5",
        ])
        .expect("arguments should parse");

        assert_eq!(cli.launch.body, "moon");
        assert_eq!(cli.launch.velocity, Some(-5.0));
        assert!(cli.launch.height.is_none());
        assert!(matches!(cli.command, Some(Commands::Report { time }) if time == 1.5));
    }

    #[test]
    fn requested_time_is_snapped_into_flight() {
        let flight = trajectory(10.0, 0.0, 9.81);
        assert_eq!(scrub_time(&flight, 30.0), flight.time_of_flight_s());
        assert_eq!(scrub_time(&flight, -1.0), 0.0);
        assert!((scrub_time(&flight, 0.51) - 0.5).abs() < 1e-12);
    }
}
