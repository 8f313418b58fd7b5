//! BioTUI - Molecular Biology Trainer
//!
//! An interactive terminal app for learning protein synthesis and DNA
//! replication.
//!
//! ## Usage
//!
//! ```bash
//! biotui                      # home menu
//! biotui trainer --seed 42    # codon trainer with a reproducible template
//! biotui quiz                 # jump straight into the quiz
//! biotui --export-wheel codon-wheel.svg   # write the codon wheel and exit
//! ```

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use biotui::controller::run_app;
use biotui::model::{AppState, Screen};
use biotui::wheel::export_wheel;

/// Start screen specification for the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScreenArg {
    /// Home menu
    Menu,
    /// Codon trainer (transcription and translation)
    Trainer,
    /// Replication walkthrough
    Walkthrough,
    /// Meselson-Stahl experiment
    Meselson,
    /// Leading vs. lagging strand comparison
    Comparison,
    /// Replication quiz
    Quiz,
    /// Glossary
    Glossary,
}

impl From<ScreenArg> for Screen {
    fn from(arg: ScreenArg) -> Self {
        match arg {
            ScreenArg::Menu => Screen::Menu,
            ScreenArg::Trainer => Screen::Trainer,
            ScreenArg::Walkthrough => Screen::Walkthrough,
            ScreenArg::Meselson => Screen::Meselson,
            ScreenArg::Comparison => Screen::Comparison,
            ScreenArg::Quiz => Screen::Quiz,
            ScreenArg::Glossary => Screen::Glossary,
        }
    }
}

/// BioTUI - a terminal trainer for protein synthesis and DNA replication
///
/// When run without --export-wheel, opens the interactive trainer.
/// With --export-wheel, writes the codon wheel SVG to a file (or stdout
/// with "-") and exits.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Screen to start on
    #[arg(value_enum, default_value = "menu")]
    screen: ScreenArg,

    /// Seed for template generation (reproducible games)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Random codons between the start and stop pattern (1-8)
    #[arg(short = 'n', long = "infill", default_value = "3")]
    infill: usize,

    /// Write the codon wheel SVG to a file (enables CLI mode). Use "-" for stdout.
    #[arg(long = "export-wheel")]
    export_wheel: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.infill < 1 || args.infill > 8 {
        anyhow::bail!("Infill must be 1-8 codons (got {})", args.infill);
    }

    // CLI mode: write the wheel and exit.
    if let Some(output) = args.export_wheel {
        return export_wheel(&output);
    }

    let state = AppState::new(args.screen.into(), args.infill, args.seed);
    run_app(state)
}
