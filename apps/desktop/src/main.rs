use anyhow::Result;
use assistant::{load_settings, CircuitAssistant};
use circuit_core::{compute, StatusReport, TransferChart};
use clap::{Parser, Subcommand, ValueEnum};
use shared::domain::Mode;

#[derive(Parser, Debug)]
#[command(name = "circuit-sim", about = "InfoCup analog adder/subtractor simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Add,
    Sub,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Add => Mode::Add,
            ModeArg::Sub => Mode::Sub,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the derived circuit state for one input pair.
    Compute {
        #[arg(long, allow_hyphen_values = true)]
        a: f64,
        #[arg(long, allow_hyphen_values = true)]
        b: f64,
        #[arg(long, value_enum, default_value_t = ModeArg::Add)]
        mode: ModeArg,
        /// Also print the status-card readouts.
        #[arg(long)]
        status: bool,
    },
    /// Print the UB sweep for a fixed UA.
    Sweep {
        #[arg(long, allow_hyphen_values = true)]
        a: f64,
        #[arg(long, value_enum, default_value_t = ModeArg::Add)]
        mode: ModeArg,
    },
    /// Ask the circuit assistant a question.
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Compute { a, b, mode, status } => {
            let state = compute(a, b, mode.into());
            println!("{}", serde_json::to_string_pretty(&state)?);
            if status {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&StatusReport::from(&state))?
                );
            }
        }
        Command::Sweep { a, mode } => {
            let chart = TransferChart::new(a, mode.into());
            println!("{}", serde_json::to_string_pretty(&chart.points)?);
        }
        Command::Ask { question } => {
            let assistant = CircuitAssistant::from_settings(&load_settings())?;
            println!("{}", assistant.ask(&question.join(" ")).await);
        }
    }

    Ok(())
}
