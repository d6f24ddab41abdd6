//! Command handlers.

use crate::commands::KeyKind;
use crate::config::{CliConfig, OutputFormat};
use console::style;
use mod7_core::{Error, KeyShape, Result, ValidationReport};
use mod7_keys::{BatchSummary, KeyGenerator, key_lines, validate_batch};
use std::fmt::Write as _;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::debug;

/// Generate keys and print one per line.
pub async fn generate(
    config: &CliConfig,
    kind: KeyKind,
    count: Option<i64>,
    seed: Option<u64>,
    time: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let rounds = resolve_rounds(count, config.default_count);
    let mut generator = match seed {
        Some(seed) => KeyGenerator::seeded(seed),
        None => KeyGenerator::new(),
    };

    let started = Instant::now();
    let keys = generate_keys(&mut generator, kind, rounds).await?;
    let elapsed = started.elapsed();

    for key in &keys {
        println!("{}", key);
    }

    if time || config.show_timing {
        println!("{}", timing_line("generate", keys.len(), elapsed));
    }
    Ok(())
}

/// Rounds to generate: the requested count, else the configured default,
/// never less than one.
pub fn resolve_rounds(count: Option<i64>, default_count: u32) -> u32 {
    let requested = count.unwrap_or(i64::from(default_count));
    requested.clamp(1, i64::from(u32::MAX)) as u32
}

/// Generate `rounds` rounds of keys, at least one. OEM segments are produced
/// concurrently.
pub async fn generate_keys(
    generator: &mut KeyGenerator,
    kind: KeyKind,
    rounds: u32,
) -> Result<Vec<String>> {
    let mut keys = Vec::new();
    for _ in 0..rounds.max(1) {
        if matches!(kind, KeyKind::TenDigit | KeyKind::Both) {
            keys.push(generator.ten_digit_key());
        }
        if matches!(kind, KeyKind::Oem | KeyKind::Both) {
            keys.push(generator.structured_key_concurrent().await?);
        }
    }
    debug!(count = keys.len(), ?kind, "Keys generated");
    Ok(keys)
}

/// Validate a single key and print the report.
pub fn validate(
    format: OutputFormat,
    key: &str,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let report = mod7_keys::validate(key);
    print!("{}", render_report(&report, format)?);
    Ok(())
}

/// Validate every key in a key file.
pub async fn batch(
    format: OutputFormat,
    path: &Path,
    time: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();
    let keys = read_key_file(path).await?;
    let summary = validate_batch(keys).await?;
    let elapsed = started.elapsed();

    print!("{}", render_summary(&summary, format)?);

    if time {
        println!("{}", timing_line("validate", summary.total(), elapsed));
    }
    Ok(())
}

/// Read candidate keys from a `.txt` file, skipping blank lines.
pub async fn read_key_file(path: &Path) -> Result<Vec<String>> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
        return Err(Error::InvalidKeyFile(path.display().to_string()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let keys = key_lines(&content);
    if keys.is_empty() {
        return Err(Error::EmptyKeyFile(path.display().to_string()));
    }
    Ok(keys)
}

/// Render one report.
pub fn render_report(report: &ValidationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        OutputFormat::Table => {
            let mut out = String::new();
            match report.shape {
                KeyShape::Unrecognized => {
                    writeln!(
                        out,
                        "{} {} doesn't even resemble a valid key.",
                        style("✗").red(),
                        report.key
                    )?;
                    return Ok(out);
                }
                shape => {
                    writeln!(out, "{} could be a valid {}.", report.key, shape)?;
                }
            }

            if report.is_valid() {
                writeln!(out, "{} The key is valid.", style("✓").green())?;
            }
            for violation in &report.violations {
                writeln!(out, "  {} {}", style("✗").red(), violation)?;
            }
            Ok(out)
        }
    }
}

/// Render a batch summary.
pub fn render_summary(summary: &BatchSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(summary)?),
        OutputFormat::Table => {
            let mut out = String::new();
            for report in &summary.reports {
                if report.is_valid() {
                    writeln!(out, "{} {} is valid", style("✓").green(), report.key)?;
                } else {
                    writeln!(out, "{} {} is invalid", style("✗").red(), report.key)?;
                }
            }
            writeln!(
                out,
                "\n{} valid, {} invalid",
                style(summary.valid).green(),
                style(summary.invalid).red()
            )?;
            Ok(out)
        }
    }
}

pub fn timing_line(verb: &str, count: usize, elapsed: Duration) -> String {
    let noun = if count == 1 { "key" } else { "keys" };
    format!("Took {:.2?} to {} {} {}.", elapsed, verb, count, noun)
}

/// Show configuration.
pub fn show_config(config: &CliConfig) -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("Current configuration:");
    println!("  output_format: {}", config.output_format);
    println!("  default_count: {}", config.default_count);
    println!("  show_timing: {}", config.show_timing);

    if let Ok(path) = CliConfig::config_path() {
        println!("\nConfig file: {}", path.display());
    }

    Ok(())
}

/// Set configuration.
pub fn set_config(key: &str, value: &str) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::load().unwrap_or_default();
    config.set(key, value)?;
    config.save()?;

    println!("{} Set {} = {}", style("✓").green(), key, value);
    Ok(())
}
