//! Command-line client for the station backend.
//!
//! Usage:
//!
//! ```text
//! fanquest [--base-url URL] [--token TOKEN] [--config PATH] <command>
//! ```
//!
//! Commands:
//!
//! - `focus-status --invite-code CODE` prints the backend focus status as JSON.
//! - `focus-check --invite-code CODE (--activate | --deactivate)
//!   [--editing-active-focus]` prints the guard decision and exits with
//!   status 2 when the change is rejected.
//! - `leaderboard [--invite-code CODE] [--kind KIND] [--task-id UUID]
//!   [--watch]` prints a ranking, refreshing it until Ctrl-C with `--watch`.
//!
//! Logs go to stderr; `FANQUEST_LOG` accepts `tracing` filter directives.

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use eyre::{WrapErr, eyre};
use fanquest::api::ApiClient;
use fanquest::config::{ClientConfig, GlobalArgs};
use fanquest::focus::{
    adapters::HttpFocusStatusClient,
    domain::{FocusDecision, InviteCode, TaskId},
    ports::FocusStatusQuery,
    services::FocusTaskGuard,
};
use fanquest::leaderboard::{
    adapters::HttpLeaderboardClient,
    domain::LeaderboardKind,
    ports::LeaderboardQuery,
    services::{LeaderboardFeed, LeaderboardView},
};
use fanquest::schedule::{PeriodicJob, Scheduler};
use fanquest::session::{SessionContext, TokenExpiryCheck, domain::Session};
use fanquest::telemetry;
use mockable::{Clock, DefaultClock};
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use uuid::Uuid;

/// Exit status reported when the guard rejects a focus change.
const REJECTED_EXIT: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "fanquest", version, about = "Station backend client")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the focus-task status of an invite code.
    FocusStatus {
        /// Invite code to inspect.
        #[arg(long)]
        invite_code: String,
    },
    /// Decide whether a task's focus flag may change.
    FocusCheck(FocusCheckArgs),
    /// Print a fan leaderboard.
    Leaderboard(LeaderboardArgs),
}

#[derive(Debug, clap::Args)]
struct FocusCheckArgs {
    /// Invite code the task belongs to.
    #[arg(long, default_value = "")]
    invite_code: String,

    /// Turn the focus flag on.
    #[arg(long, conflicts_with = "deactivate", required_unless_present = "deactivate")]
    activate: bool,

    /// Turn the focus flag off.
    #[arg(long)]
    deactivate: bool,

    /// The task being edited already is the active focus task.
    #[arg(long)]
    editing_active_focus: bool,
}

#[derive(Debug, clap::Args)]
struct LeaderboardArgs {
    /// Invite code to rank; required unless a fan identity is cached.
    #[arg(long)]
    invite_code: Option<String>,

    /// Ranking: overall, daily, focus or task.
    #[arg(long, default_value = "overall")]
    kind: String,

    /// Task to rank when `--kind task`.
    #[arg(long)]
    task_id: Option<Uuid>,

    /// Keep refreshing until interrupted.
    #[arg(long)]
    watch: bool,
}

#[tokio::main]
async fn main() -> eyre::Result<ExitCode> {
    let cli = Cli::parse();
    let config = ClientConfig::load(&cli.global).wrap_err("loading configuration")?;
    telemetry::init(&config.log_filter)?;

    let clock = Arc::new(DefaultClock);
    let session = SessionContext::new();
    if let Some(token) = config.token.clone() {
        session.login(Session::new(token, Vec::new(), &*clock));
    }
    let api = ApiClient::new(&config.base_url, config.request_timeout, session.clone())?;

    match cli.command {
        Command::FocusStatus { invite_code } => {
            focus_status(&HttpFocusStatusClient::new(api), &invite_code).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::FocusCheck(args) => {
            let guard = FocusTaskGuard::new(Arc::new(HttpFocusStatusClient::new(api)))
                .with_query_timeout(config.focus_query_timeout);
            let decision = guard
                .evaluate_transition(&args.invite_code, args.activate, args.editing_active_focus)
                .await;
            render_decision(&mut io::stdout().lock(), &decision)?;
            Ok(if decision.is_allowed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(REJECTED_EXIT)
            })
        }
        Command::Leaderboard(args) => {
            let feed = leaderboard_feed(
                &args,
                HttpLeaderboardClient::new(api),
                Arc::clone(&clock),
                session.clone(),
            )?;
            if args.watch {
                watch_leaderboard(feed, &config, session, clock).await?;
            } else {
                let view = feed.refresh().await;
                print_once(&mut io::stdout().lock(), &view)?;
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn focus_status<Q>(query: &Q, raw_invite_code: &str) -> eyre::Result<()>
where
    Q: FocusStatusQuery,
{
    let invite_code = InviteCode::new(raw_invite_code)?;
    let status = query.focus_status(&invite_code).await?;
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &status)?;
    writeln!(out)?;
    Ok(())
}

fn leaderboard_feed<Q, C>(
    args: &LeaderboardArgs,
    query: Q,
    clock: Arc<C>,
    session: SessionContext,
) -> eyre::Result<LeaderboardFeed<Q, C>>
where
    Q: LeaderboardQuery,
    C: Clock + Send + Sync,
{
    let kind = LeaderboardKind::parse(&args.kind, args.task_id.map(TaskId::from_uuid))?;
    let feed = LeaderboardFeed::new(Arc::new(query), clock, session).with_kind(kind);
    Ok(match args.invite_code.as_deref() {
        Some(raw) => feed.with_invite_code(InviteCode::new(raw)?),
        None => feed,
    })
}

async fn watch_leaderboard<Q, C>(
    feed: LeaderboardFeed<Q, C>,
    config: &ClientConfig,
    session: SessionContext,
    clock: Arc<C>,
) -> eyre::Result<()>
where
    Q: LeaderboardQuery + 'static,
    C: Clock + Send + Sync + 'static,
{
    let mut scheduler = Scheduler::new();
    scheduler.schedule(Arc::new(PrintingFeed { feed }), config.leaderboard_refresh)?;
    scheduler.schedule(
        Arc::new(TokenExpiryCheck::new(session, clock)),
        config.token_check,
    )?;
    tokio::signal::ctrl_c()
        .await
        .wrap_err("waiting for Ctrl-C")?;
    scheduler.shutdown();
    Ok(())
}

/// Refreshes a feed and prints every new view.
struct PrintingFeed<Q, C>
where
    Q: LeaderboardQuery,
    C: Clock + Send + Sync,
{
    feed: LeaderboardFeed<Q, C>,
}

#[async_trait]
impl<Q, C> PeriodicJob for PrintingFeed<Q, C>
where
    Q: LeaderboardQuery + 'static,
    C: Clock + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        "leaderboard-print"
    }

    async fn run(&self) {
        let view = self.feed.refresh().await;
        if let Err(err) = render_view(&mut io::stdout().lock(), &view) {
            tracing::warn!(error = %err, "failed to print leaderboard");
        }
    }
}

fn render_decision(out: &mut impl Write, decision: &FocusDecision) -> io::Result<()> {
    match decision {
        FocusDecision::Allowed(approval) => {
            writeln!(out, "allowed")?;
            if let Some(prompt) = approval.prompt() {
                writeln!(out, "{prompt}")?;
            }
        }
        FocusDecision::Rejected(rejection) => {
            writeln!(out, "rejected ({}): {rejection}", rejection.kind().as_str())?;
        }
    }
    Ok(())
}

/// Prints a one-shot leaderboard; a failed fetch is returned as the error
/// instead of being printed.
fn print_once(out: &mut impl Write, view: &LeaderboardView) -> eyre::Result<()> {
    if let LeaderboardView::Failed(reason) = view {
        return Err(eyre!("leaderboard unavailable: {reason}"));
    }
    render_view(out, view)?;
    Ok(())
}

fn render_view(out: &mut impl Write, view: &LeaderboardView) -> io::Result<()> {
    match view {
        LeaderboardView::Idle => writeln!(out, "no leaderboard fetched yet"),
        LeaderboardView::Failed(reason) => writeln!(out, "leaderboard unavailable: {reason}"),
        LeaderboardView::Ready(board) => {
            writeln!(
                out,
                "{} leaderboard for {} at {}",
                board.kind(),
                board.invite_code(),
                board.fetched_at().format("%Y-%m-%d %H:%M:%S UTC")
            )?;
            if board.is_empty() {
                return writeln!(out, "  nobody ranked yet");
            }
            for entry in board.entries() {
                let focus = if entry.has_focus_task_completed { " *" } else { "" };
                writeln!(
                    out,
                    "{:>4}  {:<20} {:>8} pts {:>4} tasks{focus}",
                    entry.rank, entry.nickname, entry.points, entry.completed_tasks
                )?;
            }
            Ok(())
        }
    }
}
