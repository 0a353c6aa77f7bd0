mod cli;
mod config;

use cli::{Args, Command, ExportArgs, FilterArgs, ItemsArgs, LinesArgs, QueryArgs};
use config::{discover_config, load_config_from_path, AppConfig};
use owo_colors::OwoColorize;
use qf_inspect::adapters::outbound::console::StderrProgressReporter;
use qf_inspect::adapters::outbound::filesystem::FileSystemWriter;
use qf_inspect::adapters::outbound::network::{Qf3Client, RequestTrace};
use qf_inspect::adapters::outbound::spreadsheet::XlsxReportRenderer;
use qf_inspect::application::dto::{FetchMode, OutputFormat, QueryRequest};
use qf_inspect::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use qf_inspect::application::{AppSession, SessionSettings};
use qf_inspect::inspection::domain::{DateWindow, ItemFilter};
use qf_inspect::inspection::services::CollectionFetcher;
use qf_inspect::ports::outbound::{Credentials, OutputPresenter};
use qf_inspect::shared::error::{ExitCode, InspectError};
use qf_inspect::shared::Result;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_PAGED_LIMIT: u32 = 20;

fn main() {
    let args = Args::parse_args();
    let verbose = args.verbose;
    init_tracing(verbose);

    let mut last_trace = None;
    if let Err(e) = run(args, &mut last_trace) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        if verbose {
            if let Some(trace) = last_trace {
                eprintln!("\n{}", describe_trace(&trace));
            }
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("qf_inspect=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("qf_inspect=warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args, last_trace: &mut Option<RequestTrace>) -> Result<()> {
    let app_config = load_app_config(args.config.as_deref())?;

    // Validate the command before any network traffic
    let command = args.command;
    if let Command::Query(ref query) = command {
        build_query_request(&query.filters, &app_config)?;
    }
    if let Command::Export(ref export) = command {
        build_query_request(&export.filters, &app_config)?;
    }

    let credentials = resolve_credentials(
        args.company_code,
        args.user_key,
        args.password,
        &app_config,
    )?;

    let settings = SessionSettings {
        fetcher: CollectionFetcher::new(app_config.page_size, app_config.max_pages)?,
        line_page_size: app_config.line_page_size,
    };

    let client = Qf3Client::new(app_config.connection.clone())?;
    let outcome = dispatch(&client, command, &credentials, settings, &app_config);
    *last_trace = client.last_trace();
    outcome
}

fn dispatch(
    client: &Qf3Client,
    command: Command,
    credentials: &Credentials,
    settings: SessionSettings,
    app_config: &AppConfig,
) -> Result<()> {
    let progress_reporter = StderrProgressReporter::new();
    eprintln!("🔐 Logging in to {}...", app_config.connection.base_url);
    let mut session = AppSession::login(client, credentials, settings)?;

    match command {
        Command::Query(query) => run_query(&mut session, query, app_config, &progress_reporter),
        Command::Export(export) => run_export(&session, export, app_config, &progress_reporter),
        Command::Lines(lines) => run_lines(&session, lines),
        Command::Items(items) => run_items(&session, items, app_config, &progress_reporter),
    }
}

/// Diagnostic block for the last request, shown with `--verbose`
fn describe_trace(trace: &RequestTrace) -> String {
    format!(
        "Last request: {} {} -> HTTP {}\nResponse head: {}",
        trace.method, trace.url, trace.status, trace.response_head
    )
}

fn load_app_config(explicit: Option<&std::path::Path>) -> Result<AppConfig> {
    let file = match explicit {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(&std::env::current_dir()?)?.unwrap_or_default(),
    };
    Ok(AppConfig::from_file(file))
}

fn resolve_credentials(
    company_code: Option<String>,
    user_key: Option<String>,
    password: Option<String>,
    app_config: &AppConfig,
) -> Result<Credentials> {
    let require = |value: Option<String>, field: &str| -> Result<String> {
        value
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                InspectError::MissingCredentials {
                    field: field.to_string(),
                }
                .into()
            })
    };

    Ok(Credentials::new(
        require(
            company_code.or_else(|| app_config.company_code.clone()),
            "company_code",
        )?,
        require(user_key.or_else(|| app_config.user_key.clone()), "user_key")?,
        require(password, "password")?,
    ))
}

fn build_query_request(filters: &FilterArgs, app_config: &AppConfig) -> Result<QueryRequest> {
    let (from, to) = filters.dates();
    let mut request = QueryRequest::new(DateWindow::new(from, to)?);
    request.job_name = filters.job_name.clone();
    request.operation_code = filters.operation_code.clone();
    request.item_code = filters.item_code.clone();
    request.item_name_query = filters.item_name.clone();
    request.check_class = app_config.check_class.clone();
    request.release_window_days = app_config.release_window_days;
    request.release_window()?;
    Ok(request)
}

fn present_text(format: OutputFormat, output: Option<PathBuf>, content: &str) -> Result<()> {
    eprintln!("{}", FormatterFactory::progress_message(format));
    let presenter = PresenterFactory::create(PresenterType::from_output(output));
    presenter.present(content.as_bytes())
}

fn run_query(
    session: &mut AppSession<&Qf3Client>,
    args: QueryArgs,
    app_config: &AppConfig,
    progress_reporter: &StderrProgressReporter,
) -> Result<()> {
    let mut request = build_query_request(&args.filters, app_config)?;
    if args.paged {
        request.fetch = FetchMode::paged(args.limit.unwrap_or(DEFAULT_PAGED_LIMIT))?;
    }

    let response = session.run_query(&request, progress_reporter)?;
    eprintln!(
        "{}",
        format!(
            "✅ {} record(s) shown ({} fetched, {} job(s) indexed)",
            response.heads.len(),
            response.fetched_count,
            response.indexed_jobs
        )
        .green()
    );

    let formatter = FormatterFactory::create(args.format);
    let content = formatter.format_heads(session.results())?;
    present_text(args.format, args.output, &content)
}

fn run_export(
    session: &AppSession<&Qf3Client>,
    args: ExportArgs,
    app_config: &AppConfig,
    progress_reporter: &StderrProgressReporter,
) -> Result<()> {
    let request = build_query_request(&args.filters, app_config)?;
    let renderer = XlsxReportRenderer::new();
    let response = session.export(&request, renderer, progress_reporter)?;

    let path = args.output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "inspection_results_{}_{}.{}",
            request.window.start_str(),
            request.window.end_str(),
            response.extension
        ))
    });
    FileSystemWriter::new(path.clone()).present(&response.content)?;

    eprintln!(
        "{}",
        format!(
            "✅ Exported {} record(s) / {} row(s) to {}",
            response.group_count,
            response.row_count,
            path.display()
        )
        .green()
    );
    Ok(())
}

fn run_lines(session: &AppSession<&Qf3Client>, args: LinesArgs) -> Result<()> {
    let lines = session.lines(args.mfg_inspection_id)?;
    let formatter = FormatterFactory::create(args.format);
    let content = formatter.format_lines(&lines)?;
    present_text(args.format, args.output, &content)
}

fn run_items(
    session: &AppSession<&Qf3Client>,
    args: ItemsArgs,
    app_config: &AppConfig,
    progress_reporter: &StderrProgressReporter,
) -> Result<()> {
    let filter = ItemFilter {
        status: args.status,
        item_code: args.item_code,
        item_name: args.item_name,
        item_type: args.item_type,
        ..ItemFilter::new(app_config.connection.plant_id)
    };
    let items = session.items(&filter, progress_reporter)?;
    let formatter = FormatterFactory::create(args.format);
    let content = formatter.format_items(&items)?;
    present_text(args.format, args.output, &content)
}
