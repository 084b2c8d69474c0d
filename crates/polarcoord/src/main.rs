use clap::{Args, Parser, Subcommand};
use polarcoord::coords::{self, AngleNotation, CoordinateMode, Displacement};
use polarcoord::ipc::{self, Command};
use polarcoord::wm;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "polarcoord", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct Style {
    /// Coordinate mode: polar or cartesian
    #[arg(short, long, default_value_t = CoordinateMode::Polar)]
    mode: CoordinateMode,

    /// Angle notation in polar mode: degrees or pi
    #[arg(short, long, default_value_t = AngleNotation::Degrees)]
    notation: AngleNotation,
}

impl Style {
    fn render(&self, displacement: Displacement) -> String {
        coords::format(displacement, self.mode, self.notation)
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Format a displacement from the screen center
    #[command(allow_negative_numbers = true)]
    Format {
        dx: f64,
        dy: f64,
        #[command(flatten)]
        style: Style,
    },
    /// Print the cursor position relative to the focused monitor's center
    Sample {
        #[command(flatten)]
        style: Style,

        /// Keep printing until interrupted
        #[arg(short, long)]
        follow: bool,

        /// Poll interval in milliseconds when following
        #[arg(short, long, default_value_t = 50)]
        interval: u64,
    },
    /// Start tracking in the running polar-mouse
    Start,
    /// Stop tracking
    Stop,
    /// Start tracking when idle, stop it otherwise
    Toggle,
    /// Switch between polar and cartesian
    ToggleMode,
    /// Switch between degrees and fractions of π
    ToggleNotation,
    /// Quit polar-mouse
    Quit,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Format { dx, dy, style } => {
            println!("{}", style.render(Displacement::new(dx, dy)));
            Ok(())
        }
        Commands::Sample {
            style,
            follow,
            interval,
        } => sample(style, follow, Duration::from_millis(interval.max(1))),
        Commands::Start => send(Command::Start),
        Commands::Stop => send(Command::Stop),
        Commands::Toggle => send(Command::Toggle),
        Commands::ToggleMode => send(Command::ToggleMode),
        Commands::ToggleNotation => send(Command::ToggleNotation),
        Commands::Quit => send(Command::Quit),
    }
}

fn sample(style: Style, follow: bool, interval: Duration) -> anyhow::Result<()> {
    if !follow {
        println!("{}", style.render(wm::sample_displacement()?));
        return Ok(());
    }

    let mut last = String::new();
    loop {
        match wm::sample_displacement() {
            Ok(displacement) => {
                let line = style.render(displacement);
                if line != last {
                    println!("{}", line);
                    last = line;
                }
            }
            Err(e) => log::debug!("Skipping sample: {}", e),
        }
        thread::sleep(interval);
    }
}

fn send(command: Command) -> anyhow::Result<()> {
    ipc::send(command)?;
    log::info!("Sent '{}' to {}", command, ipc::SOCKET_PATH);
    Ok(())
}
