use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

// below this many elements the add stays on the caller thread
pub const SERIAL_THRESHOLD: usize = 32 * 1024;

/// Runtime knobs of the parallel adder.
///
/// Loaded from JSON with every field optional, e.g.
/// `{"thread_num": 8, "serial_threshold": 65536, "pin_threads": true}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub thread_num: usize,
    pub serial_threshold: usize,
    pub pin_threads: bool,
}

impl Config {
    pub fn new() -> Self {
        Config {
            thread_num: num_cpus::get(),
            serial_threshold: SERIAL_THRESHOLD,
            pin_threads: false,
        }
    }

    pub fn with_threads(mut self, thread_num: usize) -> Self {
        self.thread_num = thread_num;
        self
    }

    pub fn with_serial_threshold(mut self, serial_threshold: usize) -> Self {
        self.serial_threshold = serial_threshold;
        self
    }

    pub fn with_pin_threads(mut self, pin_threads: bool) -> Self {
        self.pin_threads = pin_threads;
        self
    }

    // a zero thread count means the caller thread alone
    pub fn threads(&self) -> usize {
        self.thread_num.max(1)
    }

    pub fn load_config<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("cannot open config {}", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("cannot parse config {}", path.display()))?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
