//! Session Report Example
//!
//! This example walks a full session from the transport boundary to the
//! final report: JSON telemetry lines land in a session log, the log is
//! snapshotted, reduced, and scored.
//!
//! ## What You'll Learn
//!
//! - Deserializing telemetry at the ingestion boundary
//! - Replay-safe recording into a `SessionLog`
//! - Reading the reduced statistics and the fuzzy score
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_session_report
//! ```

use cprguard_core::{SessionLog, SessionScorer, TelemetrySample};

/// Telemetry as it arrives off the wire, one JSON object per line.
/// The duplicated timestamp and the idle windows are deliberate; both
/// happen constantly with buffered sensor uplinks.
const TELEMETRY_JSONL: &str = r#"
{"timestamp_ms":0,"rate_cpm":0,"depth_cm":0.0,"force_n":0.0}
{"timestamp_ms":1000,"rate_cpm":95,"depth_cm":4.8,"force_n":280.0}
{"timestamp_ms":2000,"rate_cpm":110,"depth_cm":5.4,"force_n":300.0}
{"timestamp_ms":2000,"rate_cpm":110,"depth_cm":5.4,"force_n":300.0}
{"timestamp_ms":3000,"rate_cpm":110,"depth_cm":5.9,"force_n":315.0}
{"timestamp_ms":4000,"rate_cpm":103,"depth_cm":6.1,"force_n":340.0}
{"timestamp_ms":5000,"rate_cpm":0,"depth_cm":1.2,"force_n":40.0}
{"timestamp_ms":5500,"rate_cpm":"fast","depth_cm":5.0}
{"timestamp_ms":6000,"rate_cpm":118,"depth_cm":3.2,"force_n":220.0}
"#;

fn main() {
    println!("CPRGuard Session Report Example");
    println!("===============================\n");

    let mut log = SessionLog::new();
    let mut parse_failures = 0_usize;
    for line in TELEMETRY_JSONL.lines().filter(|l| !l.trim().is_empty()) {
        match serde_json::from_str::<TelemetrySample>(line) {
            Ok(sample) => {
                if !log.record(sample) {
                    println!("duplicate timestamp {} skipped", sample.timestamp_ms);
                }
            }
            Err(e) => {
                parse_failures += 1;
                println!("unparseable line skipped: {e}");
            }
        }
    }
    println!(
        "\nrecorded {} samples ({} parse failures)\n",
        log.len(),
        parse_failures
    );

    let scorer = SessionScorer::new();
    match scorer.score_log(&log) {
        Ok(report) => {
            println!("Session statistics:");
            println!("  retained records : {}", report.stats.sample_count);
            println!("  avg depth        : {:.2} cm", report.stats.avg_depth_cm);
            println!("  avg force        : {:.2} N", report.stats.avg_force_n);
            println!("  last rate        : {} cpm", report.stats.last_rate_cpm);
            if report.stats.depth_fallback {
                println!("  (no compression cleared the depth floor)");
            }
            println!("\nQuality score: {:.2} / 100", report.score.value);
        }
        Err(e) => println!("no report: {e}"),
    }

    // A fresh session starts with a clear, not a new allocation.
    log.clear();
    println!("\nlog cleared for the next session ({} samples)", log.len());
}
