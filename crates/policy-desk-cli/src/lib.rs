#![forbid(unsafe_code)]
//! Terminal client for a running policy desk server.

mod client;
mod render;

pub use client::{ClientError, PolicyClient};
pub use render::{render_card, render_detail, render_listing};

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use policy_desk_api::messages::POLICY_NOT_FOUND;
use policy_desk_model::Policy;
use policy_desk_query::{
    CategorySelection, DetailOutcome, DetailView, ListingDisplay, ListingFilter, ListingOutcome,
    ListingQuery, ListingView, SortMode, ViewState,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::process::ExitCode as ProcessExitCode;

pub const CRATE_NAME: &str = "policy-desk-cli";
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    Success = 0,
    Failure = 1,
    NotFound = 2,
    Usage = 64,
}

#[derive(Parser)]
#[command(name = "policy-desk")]
#[command(about = "Browse small-business support policies from a policy desk server")]
#[command(after_help = "Environment:\n  POLICY_DESK_SERVER   Base URL of the server")]
struct Cli {
    #[arg(long, global = true, env = "POLICY_DESK_SERVER", default_value = DEFAULT_SERVER)]
    server: String,
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[arg(long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the list once, then filter and sort it locally.
    List {
        #[arg(long, default_value = "ALL")]
        category: String,
        #[arg(long, default_value = "")]
        keyword: String,
        #[arg(long, value_enum, default_value_t = SortArg::Default)]
        sort: SortArg,
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        stage: Option<String>,
    },
    /// Fetch the list and show the policy with this id.
    Show { id: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Default,
    Title,
    Provider,
}

impl From<SortArg> for SortMode {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Default => Self::Default,
            SortArg::Title => Self::Title,
            SortArg::Provider => Self::Provider,
        }
    }
}

#[derive(Debug, Serialize)]
struct MachineError {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
struct CliError {
    exit_code: CliExitCode,
    machine: MachineError,
}

impl CliError {
    fn new(exit_code: CliExitCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            machine: MachineError {
                code,
                message: message.into(),
                details: json!({}),
            },
        }
    }

    fn with_details(mut self, details: Value) -> Self {
        self.machine.details = details;
        self
    }

    fn failure(message: impl Into<String>) -> Self {
        Self::new(CliExitCode::Failure, "fetch_failed", message)
    }
}

pub fn main_entry() -> ProcessExitCode {
    let wants_json = std::env::args().any(|arg| arg == "--json");
    match run() {
        Ok(()) => ProcessExitCode::from(CliExitCode::Success as u8),
        Err(err) => {
            emit_error(&err, wants_json);
            ProcessExitCode::from(err.exit_code as u8)
        }
    }
}

fn emit_error(error: &CliError, machine_json: bool) {
    if machine_json {
        match serde_json::to_string(&error.machine) {
            Ok(payload) => eprintln!("{payload}"),
            Err(_) => eprintln!(
                "{{\"code\":\"internal_error\",\"message\":\"failed to encode structured error\",\"details\":{{}}}}"
            ),
        }
    } else {
        eprintln!("{}", error.machine.message);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .try_init();
}

fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{err}");
                return Ok(());
            }
            _ => {
                return Err(
                    CliError::new(CliExitCode::Usage, "usage_error", "invalid command line arguments")
                        .with_details(json!({"error": err.to_string()})),
                );
            }
        },
    };
    init_logging(cli.verbose);

    let client = PolicyClient::new(&cli.server)
        .map_err(|e| CliError::new(CliExitCode::Usage, "usage_error", e.to_string()))?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::new(CliExitCode::Failure, "internal_error", e.to_string()))?;

    match cli.command {
        Commands::List {
            category,
            keyword,
            sort,
            region,
            stage,
        } => {
            let query = ListingQuery {
                filter: ListingFilter {
                    category: CategorySelection::parse(&category),
                    keyword,
                    region,
                    stage,
                },
                sort: sort.into(),
            };
            let mut view = ListingView::new(query);
            view.begin_fetch();
            view.resolve_fetch(runtime.block_on(client.fetch_policies()));
            emit_listing(&view.display(), cli.json)
        }
        Commands::Show { id } => {
            let mut view = DetailView::new(id);
            view.begin_fetch();
            view.resolve_fetch(runtime.block_on(client.fetch_policies()));
            emit_detail(view.state(), cli.json)
        }
    }
}

fn emit_listing(display: &ListingDisplay, json: bool) -> Result<(), CliError> {
    if let ListingDisplay::Failed(message) = display {
        return Err(CliError::failure(message.clone()));
    }
    if json {
        let list: &[Policy] = match display {
            ListingDisplay::Ready(outcome) => outcome.policies(),
            _ => &[],
        };
        let payload = serde_json::to_string_pretty(list)
            .map_err(|e| CliError::new(CliExitCode::Failure, "internal_error", e.to_string()))?;
        println!("{payload}");
    } else {
        print!("{}", render_listing(display));
        if let ListingDisplay::Ready(ListingOutcome::Matches(_)) = display {
            println!();
        }
    }
    Ok(())
}

fn emit_detail(state: &ViewState<DetailOutcome>, json: bool) -> Result<(), CliError> {
    match state {
        ViewState::Ready(DetailOutcome::Found(policy)) => {
            if json {
                let payload = serde_json::to_string_pretty(policy).map_err(|e| {
                    CliError::new(CliExitCode::Failure, "internal_error", e.to_string())
                })?;
                println!("{payload}");
            } else {
                print!("{}", render_detail(policy));
            }
            Ok(())
        }
        ViewState::Ready(DetailOutcome::NotFound { id }) => Err(CliError::new(
            CliExitCode::NotFound,
            "policy_not_found",
            POLICY_NOT_FOUND,
        )
        .with_details(json!({"id": id}))),
        ViewState::Failed(message) => Err(CliError::failure(message.clone())),
        ViewState::Idle | ViewState::Loading => Err(CliError::new(
            CliExitCode::Failure,
            "internal_error",
            "detail view did not resolve",
        )),
    }
}
