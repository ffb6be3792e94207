//! CLI surface (A4): a small binary built on the same public library API a
//! caller (IDE plugin, MCP tool) would use. Illustrative, not part of the
//! engine core, but real enough to exercise the engine end-to-end.

use std::collections::HashMap;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use cmd_safety_gate::catalog::{self, Severity};
use cmd_safety_gate::config::GateConfig;
use cmd_safety_gate::options::{ChallengeType, ValidationOptions};
use cmd_safety_gate::resolver::RealFs;
use cmd_safety_gate::{approve, exec_if_allowed, validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "csg", about = "Shell-command safety gate")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run validation only: report matches and the verdict, never challenge.
    Validate {
        command: String,
        #[arg(long, value_delimiter = ',')]
        severity: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        deny_id: Vec<String>,
        #[arg(long, value_enum, default_value = "pretty")]
        format: OutputFormat,
    },
    /// Run the full approval pipeline, including an interactive challenge.
    Approve {
        command: String,
        #[arg(long)]
        challenge: Option<String>,
        #[arg(long, value_delimiter = ',')]
        severity: Vec<String>,
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Run `approve`, then execute the command if allowed.
    Exec {
        command: String,
        #[arg(long)]
        challenge: Option<String>,
        #[arg(long, value_delimiter = ',')]
        propagate_env: Vec<String>,
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Introspect the embedded catalog.
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Inspect the effective layered configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum CatalogAction {
    /// List every check group and how many rules it has.
    List,
    /// Show every rule in one group.
    Show { group: String },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration (defaults + file + env), as JSON.
    Show,
}

fn severities_from_csv(values: &[String]) -> std::collections::HashSet<Severity> {
    values.iter().filter_map(|s| Severity::parse(s)).collect()
}

/// Merges the config-layer default severities with an explicit CLI
/// `--severity` list: an empty CLI list means "use the config default",
/// a non-empty one always wins (§10.3's "explicit overrides always win").
fn effective_severities(config: &GateConfig, cli_severity: &[String]) -> std::collections::HashSet<Severity> {
    if cli_severity.is_empty() {
        config.severities().into_iter().collect()
    } else {
        severities_from_csv(cli_severity)
    }
}

fn effective_challenge_type(config: &GateConfig, cli_challenge: Option<&str>) -> ChallengeType {
    cli_challenge.map_or_else(|| config.challenge_type(), ChallengeType::parse_or_default)
}

fn effective_timeout_ms(config: &GateConfig, cli_timeout_ms: Option<u64>) -> u64 {
    cli_timeout_ms.unwrap_or(config.challenge_timeout_ms)
}

pub async fn run(cli: Cli) -> i32 {
    let config = GateConfig::load();

    match cli.command {
        Command::Validate { command, severity, deny_id, format } => {
            let mut options = ValidationOptions::new().with_allowed_severities(effective_severities(&config, &severity));
            let deny_ids = if deny_id.is_empty() { config.deny_pattern_ids.clone() } else { deny_id };
            options = options.with_deny_pattern_ids(deny_ids);
            match validate(&command, &options, catalog::load(), &RealFs) {
                Ok(result) => {
                    print_validation(&result, format);
                    0
                }
                Err(e) => {
                    eprintln!("{}: {e}", "error".red().bold());
                    1
                }
            }
        }
        Command::Approve { command, challenge, severity, timeout_ms } => {
            let options = ValidationOptions::new().with_allowed_severities(effective_severities(&config, &severity));
            let challenge_type = effective_challenge_type(&config, challenge.as_deref());
            let timeout_ms = effective_timeout_ms(&config, timeout_ms);
            match approve(&command, &options, catalog::load(), &RealFs, challenge_type, timeout_ms).await {
                Ok(outcome) => {
                    print_approval(&outcome);
                    i32::from(!outcome.allowed)
                }
                Err(e) => {
                    eprintln!("{}: {e}", "error".red().bold());
                    1
                }
            }
        }
        Command::Exec { command, challenge, propagate_env, timeout_ms } => {
            let options = ValidationOptions::new();
            let challenge_type = effective_challenge_type(&config, challenge.as_deref());
            let timeout_ms = effective_timeout_ms(&config, timeout_ms);
            let env_allow_list = if propagate_env.is_empty() { config.env_allow_list.clone() } else { propagate_env };
            match approve(&command, &options, catalog::load(), &RealFs, challenge_type, timeout_ms).await {
                Ok(outcome) if outcome.allowed => {
                    match exec_if_allowed(&command, None, &HashMap::new(), &env_allow_list).await {
                        Ok(result) => {
                            print!("{}", result.stdout);
                            eprint!("{}", result.stderr);
                            if let Some(err) = &result.error {
                                eprintln!("{}: {err}", "warning".yellow().bold());
                            }
                            i32::from(result.error.is_some())
                        }
                        Err(e) => {
                            eprintln!("{}: {e}", "error".red().bold());
                            1
                        }
                    }
                }
                Ok(outcome) => {
                    print_approval(&outcome);
                    1
                }
                Err(e) => {
                    eprintln!("{}: {e}", "error".red().bold());
                    1
                }
            }
        }
        Command::Catalog { action } => {
            print_catalog(action);
            0
        }
        Command::Config { action: ConfigAction::Show } => {
            print_config(&config);
            0
        }
    }
}

fn print_validation(result: &cmd_safety_gate::ValidationResult, format: OutputFormat) {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(result).unwrap_or_default());
        return;
    }

    if result.matches.is_empty() {
        println!("{}", "no matches; command allowed".green());
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Severity", "Rule", "Description"]);
    for m in &result.matches {
        table.add_row(vec![Cell::new(&m.severity), Cell::new(&m.id), Cell::new(&m.description)]);
    }
    println!("{table}");

    if result.should_deny {
        println!("{}", "verdict: deny (policy)".red().bold());
    } else if result.should_challenge {
        println!("{}", "verdict: challenge required".yellow().bold());
    }
}

fn print_approval(outcome: &cmd_safety_gate::ApprovalOutcome) {
    if outcome.allowed {
        println!("{}", "allowed".green().bold());
    } else {
        let reason = outcome.reason.as_deref().unwrap_or("denied");
        println!("{}: {reason}", "denied".red().bold());
    }
}

fn print_catalog(action: CatalogAction) {
    let catalog = catalog::load();
    match action {
        CatalogAction::List => {
            let mut groups: Vec<&str> = catalog.groups().into_iter().collect();
            groups.sort_unstable();
            let mut table = Table::new();
            table.load_preset(UTF8_FULL).set_header(vec!["Group", "Rules"]);
            for group in groups {
                table.add_row(vec![Cell::new(group), Cell::new(catalog.by_group(group).len())]);
            }
            println!("{table}");
        }
        CatalogAction::Show { group } => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL).set_header(vec!["Id", "Severity", "Description"]);
            for check in catalog.by_group(&group) {
                table.add_row(vec![
                    Cell::new(check.id),
                    Cell::new(check.severity),
                    Cell::new(check.description),
                ]);
            }
            println!("{table}");
        }
    }
}

fn print_config(config: &GateConfig) {
    println!("{}", serde_json::to_string_pretty(config).unwrap_or_default());
}
