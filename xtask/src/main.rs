use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "adjgraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the graph benchmarks and write a comparison report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Only run benchmarks whose id matches this filter
        #[arg(long)]
        filter: Option<String>,

        /// Where to write the markdown report
        #[arg(long, default_value = "benchmark_results/report.md")]
        output: PathBuf,
    },
}

/// Implementation the report normalizes against.
const BASELINE_IMPL: &str = "petgraph";
const BENCH_TARGET: &str = "graph_benchmark";

/// The subset of criterion's `benchmark.json` the report needs.
#[derive(Deserialize)]
struct BenchmarkMeta {
    group_id: String,
    function_id: Option<String>,
    value_str: Option<String>,
    throughput: Option<ThroughputMeta>,
}

#[derive(Deserialize)]
enum ThroughputMeta {
    Elements(u64),
    Bytes(u64),
    BytesDecimal(u64),
}

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// `workload -> implementation -> ops/s`
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            filter,
            output,
        } => {
            if !report_only {
                run_benchmarks(quick, filter.as_deref())?;
            }
            generate_report(&output)?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, filter: Option<&str>) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", BENCH_TARGET, "--release"])
        .status()
        .context("failed to spawn cargo build")?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    println!("\n>>> Running {BENCH_TARGET}");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", BENCH_TARGET]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if let Some(filter) = filter {
        cmd.arg(filter);
    }
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run bench {BENCH_TARGET}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark run failed");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report(report_path: &Path) -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, &mut results)?;

    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("creating {}", report_path.display()))?;
    write_report(&mut file, &results)?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn write_report(out: &mut impl Write, results: &Results) -> Result<()> {
    let implementations: BTreeSet<&String> =
        results.values().flat_map(|row| row.keys()).collect();

    writeln!(out, "# Graph Benchmark Report")?;
    writeln!(out)?;

    write!(out, "| Workload |")?;
    for name in &implementations {
        write!(out, " {name} (Ops/s) | vs {BASELINE_IMPL} |")?;
    }
    writeln!(out)?;

    write!(out, "|---|")?;
    for _ in &implementations {
        write!(out, "---|---|")?;
    }
    writeln!(out)?;

    for (workload, row) in results {
        write!(out, "| {workload} |")?;
        let baseline = row.get(BASELINE_IMPL).copied().unwrap_or(0.0);
        for name in &implementations {
            match row.get(*name) {
                Some(&ops) => {
                    let rel = if baseline > 0.0 { ops / baseline } else { 0.0 };
                    write!(out, " {} | **{rel:.2}x** |", format_ops(ops))?;
                }
                None => write!(out, " N/A | - |")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks criterion's output and records the latest (`new`) estimate of every
/// benchmark as operations per second.
fn collect_results(dir: &Path, results: &mut Results) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Ok(()),
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) == Some("report") {
                continue;
            }
            collect_results(&path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(run_dir) = path.parent() else { continue };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }

        let meta_path = run_dir.join("benchmark.json");
        let Ok(meta_raw) = fs::read_to_string(&meta_path) else { continue };
        let meta: BenchmarkMeta = serde_json::from_str(&meta_raw)
            .with_context(|| format!("parsing {}", meta_path.display()))?;
        let estimates: Estimates = serde_json::from_str(&fs::read_to_string(&path)?)
            .with_context(|| format!("parsing {}", path.display()))?;

        let time_ns = estimates.mean.point_estimate;
        if time_ns <= 0.0 {
            continue;
        }
        let elements = match meta.throughput {
            Some(ThroughputMeta::Elements(n)) => n as f64,
            Some(ThroughputMeta::Bytes(_) | ThroughputMeta::BytesDecimal(_)) | None => 1.0,
        };
        let workload = match &meta.value_str {
            Some(value) => format!("{}/{value}", meta.group_id),
            None => meta.group_id.clone(),
        };
        let implementation = meta.function_id.unwrap_or_else(|| "default".to_owned());

        results
            .entry(workload)
            .or_default()
            .insert(implementation, (elements * 1e9) / time_ns);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_normalizes_against_petgraph() {
        let mut results = Results::new();
        let row = results.entry("edge_lookup/1000".to_owned()).or_default();
        row.insert("adjgraph".to_owned(), 4_000_000.0);
        row.insert("petgraph".to_owned(), 2_000_000.0);

        let mut out = Vec::new();
        write_report(&mut out, &results).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("| edge_lookup/1000 | 4.00M | **2.00x** | 2.00M | **1.00x** |"));
    }

    #[test]
    fn ops_are_humanized() {
        assert_eq!(format_ops(950.0), "950");
        assert_eq!(format_ops(12_500.0), "12.50K");
        assert_eq!(format_ops(3_250_000.0), "3.25M");
    }
}
