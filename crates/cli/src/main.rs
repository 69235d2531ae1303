//! Pipeline simulator CLI.
//!
//! Thin driver around `pipesim-core`: loads a named benchmark, steps the
//! engine cycle by cycle, optionally feeds external I/O interrupts into the
//! pending flag each cycle, and prints statistics and final machine state.
//! The engine itself never knows this binary exists; it is a pure snapshot
//! consumer.

use std::error::Error;
use std::fs;
use std::process;

use clap::Parser;

use pipesim_core::config::Config;
use pipesim_core::core::Stage;
use pipesim_core::io::{Device, InterruptController};
use pipesim_core::sim::Benchmark;
use pipesim_core::Engine;

/// Upper bound on cycles when running to completion, against programs that
/// never drain (e.g. a JMP loop).
const CYCLE_CAP: u64 = 10_000;

#[derive(Parser, Debug)]
#[command(
    name = "pipesim",
    version,
    about = "Cycle-stepped 5-stage pipeline simulator",
    long_about = "Load a built-in benchmark and step the pipeline one clock cycle at a time.\n\n\
                  Examples:\n  pipesim --benchmark sequential\n  pipesim --benchmark arithmetic --cycles 12 --io"
)]
struct Cli {
    /// Benchmark to run: sequential, random, or arithmetic.
    #[arg(short, long, default_value = "sequential")]
    benchmark: Benchmark,

    /// Number of cycles to step; runs to completion when omitted.
    #[arg(short, long)]
    cycles: Option<u64>,

    /// Drive the external I/O demo: queue a keyboard interrupt up front and
    /// honor one queued tag after every cycle.
    #[arg(long)]
    io: bool,

    /// JSON configuration file; built-in defaults when omitted.
    #[arg(long)]
    config: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run(&Cli::parse()) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => Config::from_json(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };

    let mut engine = Engine::new(&config)?;
    engine.load_program(cli.benchmark.program());

    let mut interrupts = InterruptController::new();
    let keyboard = Device::new("keyboard");
    let screen = Device::new("screen");
    if cli.io {
        screen.write(0);
        let _ = keyboard.read();
        interrupts.trigger("INT_KEYBOARD");
    }

    let limit = cli.cycles.unwrap_or(CYCLE_CAP);
    let mut stepped = 0;
    while stepped < limit && !(cli.cycles.is_none() && engine.is_finished()) {
        // Fixed --cycles steps exactly that many; otherwise run until drained.
        engine.step()?;
        stepped += 1;
        tracing::debug!(
            cycle = engine.stats().cycles,
            pc = engine.pc(),
            "cycle complete"
        );

        // Honoring a dequeued tag is an explicit caller decision; the queue
        // alone never reaches the CPU.
        if cli.io {
            if let Some(tag) = interrupts.handle_next() {
                tracing::info!(%tag, "honoring external interrupt");
                engine.raise_interrupt();
            }
        }
    }

    print_state(&engine);
    engine.stats().print();
    Ok(())
}

/// Prints pipeline occupancy, leading registers, and cache contents.
fn print_state(engine: &Engine) {
    println!("pipeline:");
    for stage in Stage::ALL {
        match engine.stage(stage) {
            Some(instr) => println!("  {:<4} {instr}", stage.name()),
            None => println!("  {:<4} -", stage.name()),
        }
    }

    println!("registers (r0..r7):");
    let regs = engine.registers();
    for (i, value) in regs.iter().take(8).enumerate() {
        println!("  r{i:<3} {value}");
    }

    println!("cache:");
    for (index, set) in engine.cache_snapshot().iter().enumerate() {
        print!("  set {index}:");
        if set.is_empty() {
            print!(" (empty)");
        }
        for line in set {
            print!(" [tag {} data {}]", line.tag, line.data);
        }
        println!();
    }
}
