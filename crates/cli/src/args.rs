//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use taskprime_client::LedgerBook;
use taskprime_core::{AccountCode, ClientId};
use taskprime_parties::PartyKind;
use taskprime_reports::ReportKind;

#[derive(Parser, Debug)]
#[command(name = "taskprime", version, about = "TaskPrime ledger and party views over saved backend responses")]
pub struct Cli {
    /// Directory holding saved responses (`<endpoint key>.json`).
    #[arg(long, global = true, env = "TASKPRIME_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Reconstruct running balances for one account ledger.
    Ledger(LedgerArgs),
    /// List debtors, customers or suppliers.
    Parties(PartiesArgs),
    /// Summarise a sales or purchase report.
    Report(ReportArgs),
    /// List bank and cash accounts.
    CashBook(CashBookArgs),
}

#[derive(Args, Debug)]
pub struct LedgerArgs {
    #[arg(long, value_enum)]
    pub book: BookArg,

    #[arg(long)]
    pub account: AccountCode,

    /// Balance after the newest entry (may be negative).
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub closing: Decimal,

    /// Only show entries on this day (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct PartiesArgs {
    #[arg(long, value_enum)]
    pub kind: PartyArg,

    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[arg(long, value_enum)]
    pub kind: ReportArg,

    /// Client the report is scoped by (falls back to TASKPRIME_CLIENT_ID).
    #[arg(long)]
    pub client: Option<ClientId>,
}

#[derive(Args, Debug)]
pub struct CashBookArgs {
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BookArg {
    Customer,
    Bank,
    Cash,
}

impl From<BookArg> for LedgerBook {
    fn from(arg: BookArg) -> Self {
        match arg {
            BookArg::Customer => LedgerBook::Customer,
            BookArg::Bank => LedgerBook::Bank,
            BookArg::Cash => LedgerBook::Cash,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PartyArg {
    Debtors,
    Customers,
    Suppliers,
}

impl From<PartyArg> for PartyKind {
    fn from(arg: PartyArg) -> Self {
        match arg {
            PartyArg::Debtors => PartyKind::Debtor,
            PartyArg::Customers => PartyKind::Customer,
            PartyArg::Suppliers => PartyKind::Supplier,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportArg {
    SalesToday,
    ItemReport,
    PurchaseToday,
    PurchaseMonth,
    PurchaseOverall,
    SalesReturn,
}

impl From<ReportArg> for ReportKind {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::SalesToday => ReportKind::SalesToday,
            ReportArg::ItemReport => ReportKind::ItemReport,
            ReportArg::PurchaseToday => ReportKind::PurchaseToday,
            ReportArg::PurchaseMonth => ReportKind::PurchaseMonth,
            ReportArg::PurchaseOverall => ReportKind::PurchaseOverall,
            ReportArg::SalesReturn => ReportKind::SalesReturn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn ledger_arguments_parse() {
        let cli = Cli::try_parse_from([
            "taskprime", "--data-dir", "/tmp/tp", "ledger", "--book", "bank", "--account", "1201",
            "--closing", "155.50", "--date", "2024-06-03",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/tp")));
        let Command::Ledger(args) = cli.command else {
            panic!("expected ledger command");
        };
        assert!(matches!(args.book, BookArg::Bank));
        assert_eq!(args.account.as_str(), "1201");
        assert_eq!(args.closing.to_string(), "155.50");
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 6, 3));
    }

    #[test]
    fn closing_balance_may_be_negative() {
        let cli = Cli::try_parse_from([
            "taskprime", "ledger", "--book", "cash", "--account", "1", "--closing", "-60",
        ])
        .unwrap();
        let Command::Ledger(args) = cli.command else {
            panic!("expected ledger command");
        };
        assert_eq!(args.closing, Decimal::new(-60, 0));
        assert_eq!(args.date, None);
    }

    #[test]
    fn blank_account_is_rejected() {
        let result = Cli::try_parse_from(["taskprime", "ledger", "--book", "cash", "--account", "  "]);
        assert!(result.is_err());
    }

    #[test]
    fn report_kinds_are_kebab_case() {
        let cli = Cli::try_parse_from(["taskprime", "report", "--kind", "sales-return", "--client", "SYSMAC"]).unwrap();
        let Command::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(ReportKind::from(args.kind), ReportKind::SalesReturn);
        assert_eq!(args.client.map(|c| c.to_string()), Some("SYSMAC".to_string()));
    }
}
