use clap::Parser;
use log::{info, LevelFilter};

use vadd::bench::{render_summary, run_benchmark, write_report};
use vadd::init::args::Args;

// -v / -vv raise the level for this crate; RUST_LOG still applies on top
fn setup_logging(level: u8) {
    let level = match level {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_module("vadd", level)
        .filter_module("vadd_bench", level)
        .parse_default_env()
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = args.config()?;
    info!(
        "logical cores {}, threads {}, serial threshold {}, pinned {}",
        num_cpus::get(),
        config.threads(),
        config.serial_threshold,
        config.pin_threads
    );

    let records = run_benchmark(&args.sizes, args.iterations, &config, args.seed);
    println!("{}", render_summary(&records));

    if let Some(path) = &args.output {
        write_report(path, &records)?;
        info!("report written to {}", path.display());
    }
    Ok(())
}
