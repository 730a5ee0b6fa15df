//! Skillmatch Evaluation Tool
//!
//! Runs the evaluation harness over the built-in sample catalog and its
//! labeled test cases, and reports ranking-quality metrics.
//!
//! # Usage
//!
//! ```bash
//! # Run evaluation with the standard configuration (top_n=5, k=3)
//! cargo run -p skillmatch-eval --release
//!
//! # Output JSON for analysis
//! cargo run -p skillmatch-eval --release -- --json
//!
//! # Show per-case breakdown
//! cargo run -p skillmatch-eval --release -- --per-case
//!
//! # Override the cutoffs
//! cargo run -p skillmatch-eval --release -- --top-n 3 --k 2
//! ```

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use skillmatch_core::config::{EVAL_K, EVAL_TOP_N};
use skillmatch_core::evaluation::{self, datasets, MetricsReport, TestCase};
use skillmatch_core::Recommender;
use tracing::info;
use tracing_subscriber::EnvFilter;

// =============================================================================
// CLI
// =============================================================================

#[derive(Parser, Debug)]
#[command(name = "skillmatch-eval")]
#[command(about = "Evaluate skillmatch recommendation quality")]
struct Args {
    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Show per-case breakdown
    #[arg(long)]
    per_case: bool,

    /// Recommendations requested per test case
    #[arg(long, default_value_t = EVAL_TOP_N)]
    top_n: usize,

    /// Cutoff for precision@k and recall@k
    #[arg(long, default_value_t = EVAL_K)]
    k: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

// =============================================================================
// Output Types
// =============================================================================

#[derive(Debug, Serialize)]
struct EvalReport {
    dataset: DatasetInfo,
    report: MetricsReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    per_case: Option<Vec<CaseResult>>,
}

#[derive(Debug, Serialize)]
struct DatasetInfo {
    name: String,
    num_items: usize,
    num_cases: usize,
}

#[derive(Debug, Serialize)]
struct CaseResult {
    query: Option<String>,
    job_level: Option<String>,
    description: Option<String>,
    precision: f64,
    recall: f64,
    average_precision: f64,
}

fn build_per_case(cases: &[TestCase], report: &MetricsReport) -> Vec<CaseResult> {
    cases
        .iter()
        .enumerate()
        .map(|(i, case)| CaseResult {
            query: case.query.clone(),
            job_level: case.job_level.map(|l| l.to_string()),
            description: case.description.clone(),
            precision: report.precision_at_k.values[i],
            recall: report.recall_at_k.values[i],
            average_precision: report.map.values[i],
        })
        .collect()
}

// =============================================================================
// Reporting
// =============================================================================

fn print_report(eval: &EvalReport) {
    println!("\n{}", "=".repeat(72));
    println!("SKILLMATCH RECOMMENDATION QUALITY EVALUATION");
    println!("{}", "=".repeat(72));
    println!(
        "Dataset: {} ({} items, {} test cases)",
        eval.dataset.name, eval.dataset.num_items, eval.dataset.num_cases
    );
    println!(
        "Configuration: top_n={}, k={}",
        eval.report.top_n, eval.report.k
    );

    println!("\n{}", "-".repeat(72));
    println!("AVERAGED METRICS");
    println!(
        "  precision@{k:<2} {:>8.4}",
        eval.report.precision_at_k.average,
        k = eval.report.k
    );
    println!(
        "  recall@{k:<5} {:>8.4}",
        eval.report.recall_at_k.average,
        k = eval.report.k
    );
    println!("  map          {:>8.4}", eval.report.map.average);

    if let Some(per_case) = &eval.per_case {
        println!("\n{}", "-".repeat(72));
        println!("PER-CASE BREAKDOWN");
        for case in per_case {
            let label = case
                .description
                .as_deref()
                .or(case.query.as_deref())
                .unwrap_or("(no query)");
            println!("  {label}");
            println!(
                "    query={:?} level={:?}  P@{}={:.4} R@{}={:.4} AP={:.4}",
                case.query.as_deref().unwrap_or(""),
                case.job_level.as_deref().unwrap_or("-"),
                eval.report.k,
                case.precision,
                eval.report.k,
                case.recall,
                case.average_precision,
            );
        }
    }

    println!("{}\n", "=".repeat(72));
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let catalog = datasets::sample_catalog();
    let cases = datasets::sample_test_cases();
    let dataset = DatasetInfo {
        name: "sample".to_string(),
        num_items: catalog.len(),
        num_cases: cases.len(),
    };

    let recommender = Recommender::with_catalog(catalog)?;
    let report = evaluation::evaluate_with(&recommender, &cases, args.top_n, args.k)?;
    info!(
        cases = report.case_count,
        map = report.map.average,
        "evaluation complete"
    );

    let per_case = (args.per_case || args.json).then(|| build_per_case(&cases, &report));
    let eval = EvalReport {
        dataset,
        report,
        per_case,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&eval)?);
    } else {
        print_report(&eval);
    }

    Ok(())
}
