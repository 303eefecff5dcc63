//! Check command: read-only launch prerequisite report

use std::path::Path;

use anyhow::Result;

use hyfi_launcher::{run_checks, CheckStatus, Config, ProjectPaths};

pub fn cmd_check(root: &Path, json: bool) -> Result<()> {
    let config = Config::load_for_project(root)?;
    let paths = ProjectPaths::resolve(root, &config);

    let report = run_checks(&paths, &config);

    if json {
        let output = serde_json::json!({
            "event": "check",
            "project": paths.root.display().to_string(),
            "checks": report.checks.iter().map(|c| {
                serde_json::json!({
                    "name": c.name,
                    "status": match c.status {
                        CheckStatus::Pass => "pass",
                        CheckStatus::Warning => "warning",
                        CheckStatus::Error => "error",
                    },
                    "message": c.message,
                    "recommendation": c.recommendation,
                })
            }).collect::<Vec<_>>(),
            "passes": report.passes(),
            "warnings": report.warnings(),
            "errors": report.errors(),
            "success": report.is_success(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("🩺 HYFI Launcher Check");
        println!("Project: {}", paths.root.display());
        println!();

        for check in &report.checks {
            println!("  {} {} - {}", check.status, check.name, check.message);
            if let Some(rec) = &check.recommendation {
                println!("    ↳ {}", rec);
            }
        }

        println!();
        println!(
            "Summary: {} passed, {} warnings, {} errors",
            report.passes(),
            report.warnings(),
            report.errors()
        );

        if !report.is_success() {
            println!();
            println!("🔴 Not ready to launch. Fix the errors above.");
        } else if report.warnings() > 0 {
            println!();
            println!("🟡 Ready after setup.");
        } else {
            println!();
            println!("🟢 Ready to launch!");
        }
    }

    if !report.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
