use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use qf_inspect::application::dto::{OutputFormat, PAGE_LIMITS};
use qf_inspect::inspection::domain::DateWindow;
use std::path::PathBuf;

/// Query and export process-inspection records from QFactory
#[derive(Parser, Debug)]
#[command(name = "qf-inspect")]
#[command(version)]
#[command(about = "Query and export process-inspection records from QFactory", long_about = None)]
pub struct Args {
    /// Path to a config file (defaults to ./qf-inspect.config.yml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Company code used to log in
    #[arg(long, global = true)]
    pub company_code: Option<String>,

    /// User key used to log in
    #[arg(long, global = true)]
    pub user_key: Option<String>,

    /// Login password
    #[arg(long, global = true, env = "QF_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List inspection records with equipment names
    Query(QueryArgs),
    /// Export inspection records and their results to a spreadsheet
    Export(ExportArgs),
    /// Show the inspection results of one record
    Lines(LinesArgs),
    /// List items from the item master
    Items(ItemsArgs),
}

/// Filters shared by `query` and `export`
#[derive(clap::Args, Debug, Clone)]
pub struct FilterArgs {
    /// First inspection date, YYYY-MM-DD (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Last inspection date, YYYY-MM-DD (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,

    #[arg(long, default_value = "")]
    pub job_name: String,

    #[arg(long, default_value = "")]
    pub operation_code: String,

    #[arg(long, default_value = "")]
    pub item_code: String,

    /// Item name tokens joined by '%', all of which must match (e.g. AR%NNB)
    #[arg(long, default_value = "")]
    pub item_name: String,
}

impl FilterArgs {
    /// Dates with today's date filled in
    pub fn dates(&self) -> (NaiveDate, NaiveDate) {
        let today = Local::now().date_naive();
        (self.from.unwrap_or(today), self.to.unwrap_or(today))
    }
}

#[derive(clap::Args, Debug)]
pub struct QueryArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Fetch only the first page instead of every page
    #[arg(long)]
    pub paged: bool,

    /// Page size for --paged: 20, 50, 100, 200 or 500 (default 20)
    #[arg(long, requires = "paged", value_parser = parse_limit)]
    pub limit: Option<u32>,

    /// Output format: table or json
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output file path (defaults to inspection_results_<from>_<to>.xlsx)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct LinesArgs {
    /// Inspection id (mfgInspectionId) of the record
    pub mfg_inspection_id: i64,

    /// Output format: table or json
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ItemsArgs {
    #[arg(long, default_value = "")]
    pub item_code: String,

    #[arg(long, default_value = "")]
    pub item_name: String,

    #[arg(long, default_value = "")]
    pub item_type: String,

    /// Item status filter
    #[arg(long, default_value = "Y")]
    pub status: String,

    /// Output format: table or json
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    DateWindow::parse_date(value).map_err(|e| e.to_string())
}

fn parse_limit(value: &str) -> Result<u32, String> {
    let limit: u32 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if PAGE_LIMITS.contains(&limit) {
        Ok(limit)
    } else {
        Err(format!("limit must be one of {:?}", PAGE_LIMITS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(argv)
    }

    #[test]
    fn test_query_defaults() {
        let args = parse(&["qf-inspect", "query"]).unwrap();
        let Command::Query(query) = args.command else {
            panic!("expected query");
        };
        assert!(!query.paged);
        assert!(query.limit.is_none());
        assert_eq!(query.format, OutputFormat::Table);
        assert!(query.filters.item_name.is_empty());
    }

    #[test]
    fn test_query_filters_and_paging() {
        let args = parse(&[
            "qf-inspect",
            "--user-key",
            "qa01",
            "query",
            "--from",
            "2025-03-10",
            "--to",
            "2025-03-12",
            "--item-name",
            "AR%NNB",
            "--paged",
            "--limit",
            "50",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.user_key.as_deref(), Some("qa01"));
        let Command::Query(query) = args.command else {
            panic!("expected query");
        };
        assert_eq!(
            query.filters.dates(),
            (
                NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
            )
        );
        assert_eq!(query.filters.item_name, "AR%NNB");
        assert_eq!(query.limit, Some(50));
        assert_eq!(query.format, OutputFormat::Json);
    }

    #[test]
    fn test_limit_requires_paged() {
        assert!(parse(&["qf-inspect", "query", "--limit", "50"]).is_err());
    }

    #[test]
    fn test_limit_must_be_offered_size() {
        assert!(parse(&["qf-inspect", "query", "--paged", "--limit", "30"]).is_err());
    }

    #[test]
    fn test_invalid_date_rejected() {
        assert!(parse(&["qf-inspect", "export", "--from", "2025/03/10"]).is_err());
    }

    #[test]
    fn test_lines_requires_id() {
        assert!(parse(&["qf-inspect", "lines"]).is_err());
        let args = parse(&["qf-inspect", "lines", "4711"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Lines(LinesArgs {
                mfg_inspection_id: 4711,
                ..
            })
        ));
    }
}
