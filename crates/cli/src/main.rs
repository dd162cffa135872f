//! RISC-V instruction registry CLI.
//!
//! This binary builds a registry from configuration and performs:
//! 1. **List:** Print every registered descriptor and the `mcpuid` value.
//! 2. **Decode:** Look instruction words up in the table.

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rvdbg_core::config::Config;
use rvdbg_core::isa::instruction::InstructionBits;
use rvdbg_core::sim::Registry;

#[derive(Parser, Debug)]
#[command(
    name = "rvdbg-isa",
    author,
    version,
    about = "RISC-V instruction decoder registry",
    long_about = "Build the instruction registry from a JSON config (or defaults) and inspect it.\n\nExamples:\n  rvdbg-isa list\n  rvdbg-isa --config isa.json decode 0x0020a02f 100f202f"
)]
struct Cli {
    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every registered instruction.
    List,

    /// Decode one or more instruction words (hex, `0x` prefix optional).
    Decode {
        /// Instruction words.
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(Config::from_file).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(path = ?cli.config, "configuration loaded");

    let registry = match Registry::from_config(&config) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match cli.command {
        Commands::List => cmd_list(&registry),
        Commands::Decode { words } => cmd_decode(&registry, &words),
    }
}

/// Prints the capability register followed by one line per descriptor.
fn cmd_list(registry: &Registry) {
    println!("mcpuid: {:#018x}", registry.capabilities());
    let advertised: String = registry
        .data()
        .advertised()
        .iter()
        .map(|ext| ext.letter())
        .collect();
    println!("extensions: {advertised}");
    println!("instructions: {}", registry.table().len());
    for desc in registry.table() {
        let handler = if desc.handler().is_some() { "handler" } else { "-" };
        println!("  {:<12} {}  {handler}", desc.mnemonic(), desc.pattern());
    }
}

/// Decodes each word, printing the mnemonic or `unknown`. Exits 1 on unparsable input.
fn cmd_decode(registry: &Registry, words: &[String]) {
    for text in words {
        let digits = text.trim_start_matches("0x").trim_start_matches("0X");
        let Ok(word) = u32::from_str_radix(digits, 16) else {
            eprintln!("Error: not a 32-bit hex word: {text}");
            process::exit(1);
        };
        match registry.decode(word) {
            Some(desc) => println!(
                "{word:#010x}  {:<12} rd=x{} rs1=x{} rs2=x{}",
                desc.mnemonic(),
                word.rd(),
                word.rs1(),
                word.rs2()
            ),
            None => println!("{word:#010x}  unknown"),
        }
    }
}
