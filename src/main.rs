use clap::Parser;
use rectgrid::{GridConfig, LayoutMode, RunOptions, RunOutcome};
use std::path::PathBuf;

/// Render a list of rectangles as an HTML grid
#[derive(Parser, Debug)]
#[command(name = "rectgrid")]
#[command(version)]
#[command(about = "Render `x1, y1, x2, y2` rectangles as an HTML table grid", long_about = None)]
struct Args {
    /// Input file with one rectangle per line
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output HTML file
    #[arg(short, long, value_name = "OUTPUT", default_value = rectgrid::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Grid config file (TOML, YAML or JSON)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Keep parsed coordinates instead of capping gaps between rectangles
    #[arg(long)]
    precise: bool,
}

fn main() -> Result<(), String> {
    env_logger::init();
    let args = Args::parse();

    let config = match args.config {
        Some(ref path) => GridConfig::load(path).map_err(|e| e.to_string())?,
        None => GridConfig::default(),
    };

    let options = RunOptions {
        input: args.input,
        output: args.output,
        config,
        mode: if args.precise {
            LayoutMode::Precise
        } else {
            LayoutMode::Relative
        },
    };

    match rectgrid::run(&options).map_err(|e| e.to_string())? {
        RunOutcome::Written(path) => eprintln!("HTML saved to: {}", path.display()),
        RunOutcome::InputUnreadable(message) => println!("{}", message),
    }

    Ok(())
}
