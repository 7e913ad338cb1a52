use crate::controller::StepController;
use crate::types::Progress;
use crate::{generate, render};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stepsort")]
#[command(about = "Step-wise merge sort teaching tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Step through sorting the given values
    Sort {
        /// Values to sort (1 to 50 of them)
        #[arg(required = true)]
        values: Vec<u32>,
    },

    /// Generate a random sequence and step through sorting it
    Demo {
        /// Number of elements to generate
        #[arg(short = 'l', long = "len", default_value = "8")]
        len: usize,

        /// RNG seed; the same seed replays the same steps
        #[arg(short = 's', long = "seed", default_value = "42")]
        seed: u64,
    },
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sort { values } => drive(values),
        Commands::Demo { len, seed } => {
            let values = generate::random_sequence(len, seed);
            println!("Generated sequence: {values:?}\n");
            drive(values)
        }
    }
}

/// Run one sequence to completion, printing each checkpoint.
fn drive(values: Vec<u32>) -> Result<()> {
    let mut controller = StepController::new();
    controller.start(values)?;

    loop {
        match controller.next()? {
            Progress::Step(step) => {
                println!("{}", step.message);
                println!("{}", render::render_step(&step));
            }
            Progress::Complete(sorted) => {
                println!("Sorting complete.");
                println!("{}", render::render_final(&sorted));
                return Ok(());
            }
        }
    }
}
