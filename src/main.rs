mod cli;

use clap::Parser;
use credit_rater::check;
use credit_rater::config;
use credit_rater::data::{values, DataSnapshot};
use credit_rater::error::{RaterError, ScoreError};
use credit_rater::report;
use credit_rater::telemetry;
use credit_rater::types::config::ReportFormatSetting;
use credit_rater::types::report::Provenance;
use tracing::debug;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, RaterError> {
    let cli = cli::Cli::parse();
    let data_args = cli.command.data_args();
    if !data_args.root.exists() {
        return Err(RaterError::PathNotFound(
            data_args.root.display().to_string(),
        ));
    }

    let loaded = config::load_config(&data_args.root)?;
    telemetry::init(&telemetry::level_for(
        cli.verbose,
        cli.quiet,
        loaded.log_level(),
    ))?;

    let paths =
        config::resolve_data_paths(&data_args.root, &loaded, data_args.data_dir.as_deref());
    debug!(?paths, "resolved data paths");
    let snapshot = DataSnapshot::load(&paths)?;

    match &cli.command {
        cli::Commands::Score(cmd) => {
            let value_set = values::load_values(&cmd.values)?;
            let result = snapshot.score(&cmd.industry, &value_set)?;

            let output_format = match (&cmd.format, loaded.report_format()) {
                (Some(cli::ReportFormat::Json), _) | (None, ReportFormatSetting::Json) => {
                    report::OutputFormat::Json
                }
                (Some(cli::ReportFormat::Md), _) | (None, ReportFormatSetting::Md) => {
                    report::OutputFormat::Md
                }
            };
            let provenance = Provenance::now(&snapshot.fingerprint);
            let rendered = report::render(&cmd.industry, &result, &provenance, output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Industries(_) => {
            if snapshot.registry.is_empty() {
                println!("industries: none");
                return Ok(exit_code::SUCCESS);
            }
            for industry in snapshot.registry.iter() {
                match &industry.name {
                    Some(name) => println!("{}\t{}", industry.key, name),
                    None => println!("{}", industry.key),
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Factors(cmd) => {
            let industry = snapshot.registry.get(&cmd.industry).ok_or_else(|| {
                ScoreError::UnknownIndustry {
                    key: cmd.industry.clone(),
                }
            })?;
            print!("{}", report::md::factor_tree(industry));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(_) => {
            let findings = check::check_snapshot(&snapshot);

            if findings.is_empty() {
                println!("check: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
