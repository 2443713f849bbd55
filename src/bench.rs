//! Serial-versus-parallel timing harness behind `vadd-bench`.
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::init::config::Config;
use crate::kernel::generic::add::add_slice;
use crate::vector_add::vector_add_with;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    // caller thread only; the reference every other method is checked against
    Serial,
    Parallel,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Serial, Method::Parallel];

    pub fn name(&self) -> &'static str {
        match self {
            Method::Serial => "serial",
            Method::Parallel => "parallel",
        }
    }

    fn run(&self, config: &Config, a: &[f32], b: &[f32], c: &mut [f32]) {
        match self {
            Method::Serial => add_slice(a, b, c),
            Method::Parallel => vector_add_with(config, a, b, c, a.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchRecord {
    pub size: usize,
    pub method: Method,
    pub mean_ms: f64,
    pub std_ms: f64,
    pub max_abs_error: f32,
    // serial mean / this mean
    pub speedup: f64,
}

pub fn random_vector<R: Rng>(rng: &mut R, size: usize) -> Vec<f32> {
    (0..size).map(|_| rng.gen::<f32>()).collect()
}

pub fn max_abs_error(x: &[f32], y: &[f32]) -> f32 {
    // NaN differences propagate
    x.iter()
        .zip(y)
        .map(|(p, q)| (p - q).abs())
        .fold(0.0, |acc, d| if d.is_nan() || d > acc { d } else { acc })
}

// population mean and standard deviation
fn mean_std(samples: &[f64]) -> (f64, f64) {
    if samples.is_empty() {
        return (0.0, 0.0);
    }
    let count = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / count;
    let variance = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / count;
    (mean, variance.sqrt())
}

fn time_method(method: Method, config: &Config, a: &[f32], b: &[f32], c: &mut [f32], iterations: u64) -> (f64, f64) {
    // warm-up
    method.run(config, a, b, c);

    let samples: Vec<f64> = (0..iterations.max(1))
        .map(|_| {
            let s = Instant::now();
            method.run(config, a, b, c);
            s.elapsed().as_secs_f64() * 1000.0
        })
        .collect();
    mean_std(&samples)
}

pub fn run_benchmark(sizes: &[usize], iterations: u64, config: &Config, seed: u64) -> Vec<BenchRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(sizes.len() * Method::ALL.len());

    for &size in sizes {
        info!("size {} ({:.1} MB per vector)", size, (size * 4) as f64 / 1024.0 / 1024.0);
        let a = random_vector(&mut rng, size);
        let b = random_vector(&mut rng, size);

        let mut reference = vec![0.0f32; size];
        let (serial_mean, serial_std) = time_method(Method::Serial, config, &a, &b, &mut reference, iterations);
        info!("{:>10} | {:10.3} ms ± {:8.3} ms", Method::Serial.name(), serial_mean, serial_std);
        records.push(BenchRecord {
            size,
            method: Method::Serial,
            mean_ms: serial_mean,
            std_ms: serial_std,
            max_abs_error: 0.0,
            speedup: 1.0,
        });

        let mut output = vec![0.0f32; size];
        for method in Method::ALL.into_iter().filter(|m| *m != Method::Serial) {
            let (mean, std) = time_method(method, config, &a, &b, &mut output, iterations);
            let error = max_abs_error(&output, &reference);
            info!("{:>10} | {:10.3} ms ± {:8.3} ms | max error {:.2e}", method.name(), mean, std, error);
            records.push(BenchRecord {
                size,
                method,
                mean_ms: mean,
                std_ms: std,
                max_abs_error: error,
                speedup: if mean > 0.0 { serial_mean / mean } else { f64::INFINITY },
            });
        }
    }
    records
}

pub fn size_label(size: usize) -> String {
    match size {
        s if s >= 1_000_000 && s % 1_000_000 == 0 => format!("{}M", s / 1_000_000),
        s if s >= 1_000 && s % 1_000 == 0 => format!("{}K", s / 1_000),
        s => s.to_string(),
    }
}

fn find(records: &[BenchRecord], size: usize, method: Method) -> Option<&BenchRecord> {
    records.iter().find(|r| r.size == size && r.method == method)
}

// time table, speedup table and ranking by mean time over all sizes
pub fn render_summary(records: &[BenchRecord]) -> String {
    let mut sizes: Vec<usize> = Vec::new();
    for record in records {
        if !sizes.contains(&record.size) {
            sizes.push(record.size);
        }
    }
    let rule = "-".repeat(16 + 15 * sizes.len());
    let header: String = sizes.iter().map(|s| format!(" | {:>12}", size_label(*s))).collect();

    let mut out = String::new();
    let _ = writeln!(out, "execution time (ms)");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{:<13}{}", "method", header);
    let _ = writeln!(out, "{}", rule);
    for method in Method::ALL {
        let row: String = sizes
            .iter()
            .map(|&size| match find(records, size, method) {
                Some(r) => format!(" | {:>12.3}", r.mean_ms),
                None => format!(" | {:>12}", "n/a"),
            })
            .collect();
        let _ = writeln!(out, "{:<13}{}", method.name(), row);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "speedup (serial = 1.00x)");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{:<13}{}", "method", header);
    let _ = writeln!(out, "{}", rule);
    for method in Method::ALL {
        let row: String = sizes
            .iter()
            .map(|&size| match find(records, size, method) {
                Some(r) => format!(" | {:>11.2}x", r.speedup),
                None => format!(" | {:>12}", "n/a"),
            })
            .collect();
        let _ = writeln!(out, "{:<13}{}", method.name(), row);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "ranking (mean over sizes)");
    let _ = writeln!(out, "{}", rule);
    let mut ranking: Vec<(Method, f64)> = Method::ALL
        .into_iter()
        .filter_map(|method| {
            let times: Vec<f64> = records.iter().filter(|r| r.method == method).map(|r| r.mean_ms).collect();
            if times.is_empty() {
                None
            } else {
                Some((method, times.iter().sum::<f64>() / times.len() as f64))
            }
        })
        .collect();
    ranking.sort_by(|x, y| x.1.total_cmp(&y.1));
    for (rank, (method, mean)) in ranking.iter().enumerate() {
        let _ = writeln!(out, "{}. {:<10} | {:10.3} ms", rank + 1, method.name(), mean);
    }
    out
}

pub fn write_report<P: AsRef<Path>>(path: P, records: &[BenchRecord]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("cannot create report {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .with_context(|| format!("cannot write report {}", path.display()))?;
    writer.flush()?;
    Ok(())
}
