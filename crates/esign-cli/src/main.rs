//! `esign` command-line entry point

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use esign_catalog::PlanCatalog;
use esign_cli::logging::init_tracing;
use esign_cli::{AppConfig, MerchantInput, SessionOutcome, SigningSession, StrokeScript};
use esign_core::{FormError, SimulatedSubmitter};
use std::path::PathBuf;
use std::process::ExitCode;

/// Widest signature surface accepted on the command line
const MAX_WIDTH: u32 = 8192;

fn cli() -> Command {
    Command::new("esign")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Merchant contract e-signing")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON on stderr"),
        )
        .subcommand(
            Command::new("plans")
                .about("List cooperation plans")
                .arg(
                    Arg::new("catalog")
                        .long("catalog")
                        .value_parser(value_parser!(PathBuf))
                        .help("Catalog file (toml, yaml or json)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("sign")
                .about("Fill, sign and submit a contract")
                .arg(text_arg("company", "Company name"))
                .arg(text_arg("tax-id", "Tax id (8 digits)"))
                .arg(text_arg("representative", "Representative"))
                .arg(text_arg("phone", "Contact phone"))
                .arg(text_arg("email", "Contact email"))
                .arg(text_arg("plan", "Plan id"))
                .arg(
                    Arg::new("strokes")
                        .long("strokes")
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON file of strokes: [[[x, y], ...], ...]"),
                )
                .arg(
                    Arg::new("width")
                        .long("width")
                        .default_value("600")
                        .value_parser(value_parser!(u32).range(1..=i64::from(MAX_WIDTH)))
                        .help("Signature surface width"),
                )
                .arg(
                    Arg::new("reject")
                        .long("reject")
                        .help("Make the simulated backend reject with this reason"),
                )
                .arg(
                    Arg::new("catalog")
                        .long("catalog")
                        .value_parser(value_parser!(PathBuf))
                        .help("Catalog file (toml, yaml or json)"),
                )
                .arg(
                    Arg::new("signature-out")
                        .long("signature-out")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write the signature PNG here on success"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
}

fn text_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).default_value("").help(help)
}

fn text(args: &ArgMatches, name: &str) -> String {
    args.get_one::<String>(name).cloned().unwrap_or_default()
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<AppConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => AppConfig::load(path),
        None => Ok(AppConfig::default()),
    }
}

fn load_catalog(config: &AppConfig, args: &ArgMatches) -> anyhow::Result<PlanCatalog> {
    match args.get_one::<PathBuf>("catalog") {
        Some(path) => {
            PlanCatalog::load(path).with_context(|| format!("loading catalog {}", path.display()))
        }
        None => config.catalog(),
    }
}

fn list_plans(config: &AppConfig, args: &ArgMatches) -> anyhow::Result<ExitCode> {
    let catalog = load_catalog(config, args)?;

    if args.get_flag("json") {
        let plans: Vec<_> = catalog.iter().collect();
        println!("{}", serde_json::to_string_pretty(&plans)?);
        return Ok(ExitCode::SUCCESS);
    }

    for plan in &catalog {
        match &plan.badge {
            Some(badge) => println!("{} [{badge}]  ({})", plan.name, plan.id),
            None => println!("{}  ({})", plan.name, plan.id),
        }
        println!("  {}", plan.price_display);
        for detail in &plan.details {
            println!("  - {}：{}", detail.title, detail.description);
        }
        println!();
    }
    Ok(ExitCode::SUCCESS)
}

async fn sign(mut config: AppConfig, args: &ArgMatches) -> anyhow::Result<ExitCode> {
    let catalog = load_catalog(&config, args)?;
    let script = match args.get_one::<PathBuf>("strokes") {
        Some(path) => StrokeScript::load(path)?,
        None => StrokeScript::default(),
    };
    if let Some(reason) = args.get_one::<String>("reject") {
        config.submission.reject_with = Some(reason.clone());
    }
    let width = args.get_one::<u32>("width").copied().unwrap_or(600);

    let input = MerchantInput {
        company_name: text(args, "company"),
        tax_id: text(args, "tax-id"),
        representative: text(args, "representative"),
        phone: text(args, "phone"),
        email: text(args, "email"),
        plan_id: text(args, "plan"),
    };

    let submitter = SimulatedSubmitter::new(config.submission.clone());
    let mut session = SigningSession::new(&config, catalog, width);
    let result = session.run(&input, &script, &submitter).await;
    if let (Ok(outcome), Some(path)) = (&result, args.get_one::<PathBuf>("signature-out")) {
        if let Some(signature) = &outcome.signature {
            std::fs::write(path, signature.png_bytes()?)
                .with_context(|| format!("writing signature {}", path.display()))?;
        }
    }

    println!("{}", render(&result, args.get_flag("json"))?);
    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Receipt on success, the single form error otherwise
fn render(result: &Result<SessionOutcome, FormError>, json: bool) -> anyhow::Result<String> {
    Ok(match (result, json) {
        (Ok(outcome), true) => serde_json::to_string_pretty(&outcome.receipt)?,
        (Ok(outcome), false) => outcome.receipt.to_string(),
        (Err(e), true) => serde_json::json!({ "error": e.to_string() }).to_string(),
        (Err(e), false) => e.to_string(),
    })
}

async fn run(command: &str, args: &ArgMatches) -> anyhow::Result<ExitCode> {
    let config = load_config(args)?;
    match command {
        "plans" => list_plans(&config, args),
        "sign" => sign(config, args).await,
        _ => Ok(ExitCode::FAILURE),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli().get_matches();
    let Some((command, args)) = matches.subcommand() else {
        return ExitCode::FAILURE;
    };
    init_tracing(args.get_flag("log-json"));

    match run(command, args).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
