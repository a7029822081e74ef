//! `taskprime` binary: renders TaskPrime views from saved backend responses.
//!
//! Configuration comes from the environment (`TASKPRIME_*`); flags override it.
//! Views are printed as pretty JSON on stdout, logs go to stderr.

mod args;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use serde_json::json;

use taskprime_client::{
    ClientConfig, ClientError, Endpoint, Envelope, FileSource, LedgerBook, Screen, ScreenState,
    cash_book_view, ledger_view, party_view, report_view,
};
use taskprime_parties::PartyKind;
use taskprime_reports::ReportKind;

use crate::args::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    taskprime_observability::init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    let source = config.file_source();
    tracing::debug!(data_dir = %config.data_dir.display(), api_url = %config.api_url, "configured");

    match cli.command {
        Command::Ledger(args) => {
            let book = LedgerBook::from(args.book);
            let endpoint = Endpoint::Ledger { book, account: args.account.clone() };
            let view = load(&config, &source, endpoint, |env| {
                Ok(ledger_view(book, args.account, env, args.closing, args.date))
            })
            .await?;
            print_json(&view)
        }
        Command::Parties(args) => {
            let kind = PartyKind::from(args.kind);
            let directory = load(&config, &source, Endpoint::Parties(kind), |env| {
                Ok(party_view(kind, env))
            })
            .await?;
            let query = args.search.unwrap_or_default();
            let parties = directory.search(&query);
            print_json(&json!({
                "kind": kind,
                "totals": taskprime_parties::totals_of(parties.iter().copied()),
                "parties": parties,
            }))
        }
        Command::Report(args) => {
            let kind = ReportKind::from(args.kind);
            let client = args.client.or(config.client_id.clone());
            let endpoint = Endpoint::Report { kind, client: client.clone() };
            let summary = load(&config, &source, endpoint, |env| {
                report_view(kind, client.as_ref(), env)
            })
            .await?;
            print_json(&summary)
        }
        Command::CashBook(args) => {
            let book = load(&config, &source, Endpoint::CashBook, |env| Ok(cash_book_view(env))).await?;
            let query = args.search.unwrap_or_default();
            print_json(&json!({ "accounts": book.search(&query) }))
        }
    }
}

/// Run one screen refresh and unwrap its terminal state.
async fn load<T, F>(config: &ClientConfig, source: &FileSource, endpoint: Endpoint, transform: F) -> Result<T>
where
    F: FnOnce(Envelope) -> Result<T, ClientError>,
{
    let mut screen = Screen::new(endpoint);
    let label = screen.endpoint().to_string();
    tracing::info!(
        endpoint = %label,
        url = %screen.endpoint().url(&config.api_url),
        file = %source.path_for(screen.endpoint()).display(),
        "loading view"
    );

    screen.refresh(source, transform).await;

    match screen.into_state() {
        ScreenState::Loaded(view) => Ok(view),
        ScreenState::Failed(err) => {
            let alert = err.alert();
            Err(anyhow::Error::new(err).context(format!("{alert:?} error while loading {label}")))
        }
        ScreenState::Idle | ScreenState::Loading => bail!("{label} did not finish loading"),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render view")?;
    println!("{rendered}");
    Ok(())
}
