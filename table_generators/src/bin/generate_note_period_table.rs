use clap::Parser;
use table_generators::render::{self, DEFAULT_ARRAY_NAME};
use table_generators::tuning::{
    BASE_SAMPLE_RATE, PHASE_STEPS_PER_CYCLE, REFERENCE_FREQUENCY, SAMPLE_RATE_OVERSAMPLE,
    equal_temperament_ratio,
};
use table_generators::{NoteTable, OutputFormat, TuningConstants, render_diagnostics};

#[derive(Parser, Debug)]
#[command(name = "Note period table generator")]
#[command(about = "Generates the oscillator period table for the chip player", long_about = None)]
struct Args {
    /// Oversample factor applied to the sample rate before rounding
    #[arg(long, default_value_t = SAMPLE_RATE_OVERSAMPLE)]
    oversample: u32,

    /// Audio sample rate in Hz
    #[arg(long, default_value_t = BASE_SAMPLE_RATE)]
    sample_rate: u32,

    /// Frequency of C7 in Hz
    #[arg(long, default_value_t = REFERENCE_FREQUENCY)]
    reference_frequency: f64,

    /// Phase steps per waveform cycle
    #[arg(long, default_value_t = PHASE_STEPS_PER_CYCLE)]
    phase_steps: u32,

    /// Name of the emitted array
    #[arg(long, default_value = DEFAULT_ARRAY_NAME)]
    name: String,

    /// Output language (c, rust)
    #[arg(long, default_value = "c")]
    format: String,
}

fn main() {
    let args = Args::parse();

    let Some(format) = OutputFormat::from_name(&args.format) else {
        eprintln!("Invalid format. Choose: c or rust");
        std::process::exit(1);
    };

    let tuning = TuningConstants {
        sample_rate_oversample: args.oversample,
        base_sample_rate: args.sample_rate,
        reference_frequency: args.reference_frequency,
        semitone_ratio: equal_temperament_ratio(),
        phase_steps_per_cycle: args.phase_steps,
    };

    eprintln!("Generating note period table:");
    eprintln!("  SAMPLE_RATE: {} Hz", tuning.base_sample_rate);
    eprintln!("  OVERSAMPLE: {}", tuning.sample_rate_oversample);
    eprintln!("  INTERNAL_SAMPLE_RATE: {} Hz", tuning.internal_sample_rate());
    eprintln!("  REFERENCE_FREQUENCY: {} Hz", tuning.reference_frequency);
    eprintln!("  PHASE_STEPS: {}", tuning.phase_steps_per_cycle);
    eprintln!();

    let table = match NoteTable::generate(&tuning) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    eprint!("{}", render_diagnostics(&table, &tuning));

    print!("{}", render::render(&table, &args.name, format));

    let entries = table.entries();
    let first = &entries[0];
    let last = &entries[entries.len() - 1];

    eprintln!();
    eprintln!("Sanity checks:");
    eprintln!(
        "  {} (i=0): period {} -> {} Hz (expected: {} Hz)",
        first.name(),
        first.period,
        first.rounded_frequency(&tuning),
        first.frequency
    );
    eprintln!(
        "  {} (i={}): period {} -> {} Hz (expected: {} Hz)",
        last.name(),
        entries.len() - 1,
        last.period,
        last.rounded_frequency(&tuning),
        last.frequency
    );
    eprintln!(
        "  Period range: {:#06x}..={:#06x}",
        table.min_period(),
        table.max_period()
    );
    eprintln!("  Max error: {:.4}%", table.max_error_percent());
}
