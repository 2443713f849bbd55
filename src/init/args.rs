use clap::Parser;
use std::path::PathBuf;

use super::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "vadd-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Times serial against parallel f32 vector addition."
)]
pub struct Args {
    /// Vector lengths to benchmark
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = [100_000usize, 1_000_000, 10_000_000, 100_000_000]
    )]
    pub sizes: Vec<usize>,

    /// Timed runs per method, after one warm-up run
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u64).range(1..))]
    pub iterations: u64,

    /// Worker threads (defaults to the number of logical cores)
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// Lengths below this run on the caller thread
    #[arg(long, value_name = "ELEMENTS")]
    pub serial_threshold: Option<usize>,

    /// Pin worker threads to cores
    #[arg(long)]
    pub pin: bool,

    /// JSON config file; command line flags override its fields
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for the input data
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Write the results as JSON
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_config(path)?,
            None => Config::new(),
        };
        if let Some(threads) = self.threads {
            config.thread_num = threads;
        }
        if let Some(serial_threshold) = self.serial_threshold {
            config.serial_threshold = serial_threshold;
        }
        if self.pin {
            config.pin_threads = true;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["vadd-bench"]).unwrap();
        assert_eq!(args.sizes, vec![100_000, 1_000_000, 10_000_000, 100_000_000]);
        assert_eq!(args.iterations, 3);
        assert_eq!(args.seed, 42);
        assert_eq!(args.config().unwrap(), Config::new());
    }

    #[test]
    fn test_sizes_list() {
        let args = Args::try_parse_from(["vadd-bench", "--sizes", "10,2000"]).unwrap();
        assert_eq!(args.sizes, vec![10, 2000]);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        assert!(Args::try_parse_from(["vadd-bench", "-i", "0"]).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"thread_num": 3, "serial_threshold": 10}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let args = Args::try_parse_from(["vadd-bench", "-c", &path, "-t", "5", "--pin"]).unwrap();
        let config = args.config().unwrap();
        assert_eq!(config.thread_num, 5);
        assert_eq!(config.serial_threshold, 10);
        assert!(config.pin_threads);
    }
}
