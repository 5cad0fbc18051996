use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use thiserror::Error;

use autoselect_core::domain::{ChampionId, Puuid, SelfSummoner, Session};
use autoselect_core::engine::grab_target;
use autoselect_core::observability::{self, EngineStatus};
use autoselect_core::ports::{SystemClock, TracingEventSink};
use autoselect_core::{
    AutoSelectConfig, ChampSelectUpdate, ConfigError, DecisionEngine, GrabScheduler, SessionContext,
};

#[derive(Parser)]
#[command(name = "autoselect")]
#[command(about = "Champion select auto pick / ban decisions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the decisions for a captured champ select session
    Decide {
        /// TOML config (defaults when missing)
        #[arg(long, default_value = "autoselect.toml")]
        config: PathBuf,

        /// Session JSON as returned by /lol-champ-select/v1/session
        #[arg(long)]
        session: PathBuf,

        /// puuid of the local player
        #[arg(long)]
        puuid: String,

        /// Comma-separated pickable champion ids
        #[arg(long, value_delimiter = ',')]
        pickable: Vec<i64>,

        /// Comma-separated bannable champion ids
        #[arg(long, value_delimiter = ',')]
        bannable: Vec<i64>,

        /// Treat the local seat as acting now
        #[arg(long)]
        acting: bool,
    },
    /// Validate a config file and print the effective values
    CheckConfig {
        #[arg(long, default_value = "autoselect.toml")]
        config: PathBuf,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read session from {}: {source}", path.display())]
    ReadSession {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode session from {}: {source}", path.display())]
    DecodeSession {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

struct DecideInput {
    session: Session,
    puuid: Puuid,
    pickable: Vec<i64>,
    bannable: Vec<i64>,
    acting: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Decide {
            config,
            session,
            puuid,
            pickable,
            bannable,
            acting,
        } => {
            let config = AutoSelectConfig::load_from(&config)?;
            observability::init_tracing(&config.log.filter);

            let contents = std::fs::read_to_string(&session).map_err(|source| {
                CliError::ReadSession {
                    path: session.clone(),
                    source,
                }
            })?;
            let parsed: Session = serde_json::from_str(&contents)
                .map_err(|source| CliError::DecodeSession { path: session, source })?;

            let status = decide(
                &config,
                DecideInput {
                    session: parsed,
                    puuid: Puuid::new(puuid),
                    pickable,
                    bannable,
                    acting,
                },
            );
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Commands::CheckConfig { config } => {
            let config = AutoSelectConfig::load_from(&config)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}

fn decide(config: &AutoSelectConfig, input: DecideInput) -> EngineStatus {
    let context = Arc::new(SessionContext::new());
    context.set_identity(Some(input.puuid));

    let mut update = ChampSelectUpdate::from_session(
        input.session,
        input.pickable.into_iter().map(ChampionId::new).collect(),
        input.bannable.into_iter().map(ChampionId::new).collect(),
    );
    if input.acting {
        update.self_summoner = update.self_summoner.map(|s| SelfSummoner {
            is_acting_now: true,
            ..s
        });
    }
    context.apply(update);

    let snapshot = context.snapshot();
    let settings = &config.auto_select;
    let mut engine = DecisionEngine::with_sink(config.engine.clone(), TracingEventSink);
    let decisions = engine.refresh(&snapshot, settings);

    let mut grab = GrabScheduler::new(SystemClock);
    let upcoming_grab =
        grab_target(&snapshot, settings).map(|champion| grab.arm(champion, settings.grab_delay()));

    EngineStatus::new(snapshot.version, decisions, upcoming_grab)
}
