//! `apibase migrate` – rewrite hardcoded legacy backend URLs.

use anyhow::{Context, Result};
use apibase_core::config::ApibaseConfig;
use apibase_core::rewrite::{BatchReport, FileOutcome, Migration};
use std::path::{Path, PathBuf};

pub fn run_migrate(
    cfg: &ApibaseConfig,
    src_dir: Option<&Path>,
    files: &[PathBuf],
    dry_run: bool,
) -> Result<()> {
    let src_dir = src_dir.unwrap_or(cfg.rewrite.src_dir.as_path());
    let targets = if files.is_empty() {
        &cfg.rewrite.targets[..]
    } else {
        files
    };

    let migration = Migration::from_config(&cfg.rewrite)
        .context("failed to build rewrite rules")?
        .dry_run(dry_run);

    if dry_run {
        println!("Checking API URLs (dry run, nothing is written)...\n");
    } else {
        println!("Updating API URLs...\n");
    }

    let report = migration.run(src_dir, targets)?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &BatchReport) {
    for file in &report.files {
        let marker = match file.outcome {
            FileOutcome::Updated { .. } => "updated",
            FileOutcome::Unchanged => "skipped",
            FileOutcome::NotFound => "missing",
            FileOutcome::Failed(_) => "FAILED ",
        };
        println!("  [{marker}] {}: {}", file.path.display(), file.outcome);
    }

    let verb = if report.dry_run { "Would update" } else { "Updated" };
    println!(
        "\nComplete! {verb} {} files ({} replacements); {} unchanged, {} not found, {} failed.",
        report.updated(),
        report.total_replacements(),
        report.unchanged(),
        report.not_found(),
        report.failed()
    );
    if report.updated() > 0 && !report.dry_run {
        println!("\nNote: please review the changes and test the application.");
        println!("Some files may need manual adjustment for edge cases.");
    }
}
