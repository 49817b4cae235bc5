mod commands;
mod layout;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "wirepack")]
#[command(about = "Wirepack - Pack and unpack fixed-layout network packets", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack JSON values into packet bytes
    Pack {
        /// Packet layout, e.g. "u16,u32,bool,bytes:4"
        #[arg(short, long)]
        layout: String,

        /// Input JSON file with an array of values ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output file for packet bytes ("-" for stdout)
        #[arg(short, long)]
        output: String,

        /// Write hex text instead of raw bytes
        #[arg(long)]
        hex: bool,

        /// Require the packet to be exactly this many bytes
        #[arg(long)]
        target_size: Option<usize>,
    },

    /// Unpack packet bytes into JSON values
    Unpack {
        /// Packet layout, e.g. "u16,u32,bool,bytes:4"
        #[arg(short, long)]
        layout: String,

        /// Input file with packet bytes ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Treat input as hex text instead of raw bytes
        #[arg(long)]
        hex: bool,

        /// Emit field names alongside values
        #[arg(long)]
        annotate: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Pack {
            layout,
            input,
            output,
            hex,
            target_size,
        } => commands::pack::execute(&layout, &input, &output, hex, target_size),

        Commands::Unpack {
            layout,
            input,
            output,
            hex,
            annotate,
        } => commands::unpack::execute(&layout, &input, output.as_deref(), hex, annotate),
    }
}
