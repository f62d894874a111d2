use anyhow::Context;
use arcslider::config::{self, Configuration};
use arcslider::events::{self, SliderEvent};
use arcslider::slider::{ArcSlider, ThumbValueListener};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "arc-slider", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file to use instead of the per-user one
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Replay layout/drag/tap events and print every thumb value change
    Replay {
        /// Event file, one event per line (stdin when omitted)
        file: Option<PathBuf>,

        /// Lay the slider out as a square of this size before the first event
        #[arg(short = 's', long)]
        size: Option<f64>,

        /// Print value changes as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Print the arc limits for a square slider of the given size
    Limits {
        #[arg(short = 's', long, default_value_t = 300.0)]
        size: f64,
    },
    /// Write the default configuration file if there is none
    InitConfig,
}

struct ValuePrinter {
    json: bool,
}

impl ThumbValueListener for ValuePrinter {
    fn thumb_value_changed(&self, value: f64) {
        if self.json {
            println!("{}", serde_json::json!({ "value": value }));
        } else {
            println!("{value:.3}");
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Replay { file, size, json } => {
            replay(cli.config.as_deref(), file.as_deref(), size, json)
        }
        Commands::Limits { size } => print_limits(cli.config.as_deref(), size),
        Commands::InitConfig => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn load_configuration(path: Option<&Path>) -> anyhow::Result<Configuration> {
    match path {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(config::load_or_default()),
    }
}

fn replay(
    config_path: Option<&Path>,
    file: Option<&Path>,
    size: Option<f64>,
    json: bool,
) -> anyhow::Result<()> {
    let mut slider = ArcSlider::new(load_configuration(config_path)?)?;
    if let Some(path) = config_path {
        slider.set_config_path(path);
    }
    let printer = Rc::new(ValuePrinter { json });
    slider.set_listener(&printer);

    if let Some(size) = size {
        slider.layout(size, size)?;
    }

    let reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(fs_err::File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if !events::is_event_line(&line) {
            continue;
        }
        let event: SliderEvent = line
            .parse()
            .with_context(|| format!("line {}: {:?}", idx + 1, line.trim()))?;

        let action = slider
            .handle(event)
            .with_context(|| format!("line {}", idx + 1))?;

        if let Some(rejection) = action.rejection {
            log::debug!("line {}: drag ignored, {}", idx + 1, rejection);
        }
    }

    log::debug!("final thumb state {:?}", slider.thumb());
    Ok(())
}

fn print_limits(config_path: Option<&Path>, size: f64) -> anyhow::Result<()> {
    let mut slider = ArcSlider::new(load_configuration(config_path)?)?;
    slider.layout(size, size)?;

    let report = serde_json::json!({
        "angles": slider.angles(),
        "limits": slider.limits(),
        "path": slider.arc_path(),
        "thumb": slider.thumb(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
