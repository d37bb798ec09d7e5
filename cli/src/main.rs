use std::fs;
use std::io::{self, Read};

use catalog_ui::config::{ApiConfig, ApiTimeouts};
use catalog_ui::net::transport::HttpTransport;
use catalog_ui::net::types::{CreateKpiRequest, Include, KpiResultParams, ListParams, PatchOperation, SortOrder};
use catalog_ui::net::{ApiClient, ApiError};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use uuid::Uuid;

/// Used when neither `--base-url` nor `CATALOG_API_BASE_URL` is given.
const DEFAULT_BASE_URL: &str = "http://localhost:8585/api/v1";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("catalog request failed: {0}")]
    Api(#[from] ApiError),
    #[error("cannot read {path}: {source}")]
    Input { path: String, source: io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("--start ({start}) must not be after --end ({end})")]
    InvalidRange { start: i64, end: i64 },
}

#[derive(Parser, Debug)]
#[command(name = "catalog-cli", about = "Metadata catalog KPI API CLI")]
struct Cli {
    #[arg(long, env = "CATALOG_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "CATALOG_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Overrides `CATALOG_REQUEST_TIMEOUT_SECS`.
    #[arg(long)]
    request_timeout_secs: Option<u64>,

    /// Overrides `CATALOG_CONNECT_TIMEOUT_SECS`.
    #[arg(long)]
    connect_timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List KPIs.
    List(ListArgs),
    /// Fetch one KPI by fully qualified name.
    Get {
        fqn: String,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Create a KPI from a JSON file (`-` for stdin).
    Create { input: String },
    /// Create or replace a KPI from a JSON file (`-` for stdin).
    Update { input: String },
    /// Apply a JSON-Patch document to a KPI.
    Patch { id: Uuid, input: String },
    /// KPI results inside a closed time window.
    Results(ResultsArgs),
    /// Most recent KPI result.
    Latest { fqn: String },
    /// Server version.
    Version,
}

#[derive(Args, Debug, Default)]
struct ListArgs {
    #[arg(long)]
    fields: Option<String>,
    #[arg(long)]
    limit: Option<u32>,
    #[arg(long)]
    before: Option<String>,
    #[arg(long)]
    after: Option<String>,
    #[arg(long, value_enum)]
    include: Option<IncludeArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum IncludeArg {
    All,
    Deleted,
    NonDeleted,
}

#[derive(Args, Debug)]
struct ResultsArgs {
    fqn: String,
    /// Window start, epoch milliseconds.
    #[arg(long)]
    start: i64,
    /// Window end, epoch milliseconds.
    #[arg(long)]
    end: i64,
    #[arg(long, value_enum, default_value_t = OrderArg::Asc)]
    order: OrderArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Asc => Self::Asc,
            OrderArg::Desc => Self::Desc,
        }
    }
}

impl ListArgs {
    /// `None` when no flag was given so the request carries no query string.
    fn to_params(&self) -> Option<ListParams> {
        let params = ListParams {
            fields: self.fields.clone(),
            limit: self.limit,
            before: self.before.clone(),
            after: self.after.clone(),
            include: self.include.map(|i| match i {
                IncludeArg::All => Include::All,
                IncludeArg::Deleted => Include::Deleted,
                IncludeArg::NonDeleted => Include::NonDeleted,
            }),
        };
        (params != ListParams::default()).then_some(params)
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = resolve_config(ApiConfig::from_env(), &cli);
    let transport = HttpTransport::new(config.timeouts, cli.token)?;
    let client = ApiClient::new(transport, &config);
    tracing::debug!(base_url = %client.base_url(), "catalog client ready");

    run(&client, cli.command).await
}

async fn run(client: &ApiClient<HttpTransport>, command: Command) -> Result<(), CliError> {
    match command {
        Command::List(list) => print_json(&client.list_kpis(list.to_params().as_ref()).await?),
        Command::Get { fqn, list } => print_json(&client.get_kpi_by_name(&fqn, list.to_params().as_ref()).await?),
        Command::Create { input } => {
            let request: CreateKpiRequest = read_json(&input)?;
            print_json(&client.create_kpi(&request).await?)
        }
        Command::Update { input } => {
            let request: CreateKpiRequest = read_json(&input)?;
            print_json(&client.put_kpi(&request).await?)
        }
        Command::Patch { id, input } => {
            let operations: Vec<PatchOperation> = read_json(&input)?;
            print_json(&client.patch_kpi(id, &operations).await?)
        }
        Command::Results(args) => {
            let params = result_window(args.start, args.end)?;
            let results = client.list_kpi_results_ordered(&args.fqn, params, args.order.into()).await?;
            print_json(&results)
        }
        Command::Latest { fqn } => print_json(&client.latest_kpi_result(&fqn).await?),
        Command::Version => print_json(&client.get_version().await?),
    }
}

/// Timeout flags win over the environment. The base URL is always the
/// parsed one so the relative browser default never reaches reqwest.
fn resolve_config(env: ApiConfig, cli: &Cli) -> ApiConfig {
    let timeouts = ApiTimeouts {
        request_secs: cli.request_timeout_secs.unwrap_or(env.timeouts.request_secs),
        connect_secs: cli.connect_timeout_secs.unwrap_or(env.timeouts.connect_secs),
    };
    ApiConfig::new(&cli.base_url, timeouts)
}

fn result_window(start: i64, end: i64) -> Result<KpiResultParams, CliError> {
    if start > end {
        return Err(CliError::InvalidRange { start, end });
    }
    Ok(KpiResultParams { start_ts: start, end_ts: end })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, CliError> {
    let raw = if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Input { path: "stdin".to_owned(), source })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Input { path: path.to_owned(), source })?
    };
    Ok(serde_json::from_str(&raw)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn results_defaults_to_ascending() {
        let cli = Cli::try_parse_from(["catalog-cli", "results", "a.b", "--start", "1", "--end", "2"]).unwrap();
        let Command::Results(args) = cli.command else {
            panic!("expected results subcommand");
        };
        assert_eq!(args.order, OrderArg::Asc);
        assert_eq!(SortOrder::from(args.order), SortOrder::Asc);
    }

    #[test]
    fn empty_list_flags_send_no_params() {
        assert_eq!(ListArgs::default().to_params(), None);
        let limited = ListArgs { limit: Some(5), ..ListArgs::default() };
        assert_eq!(limited.to_params().and_then(|p| p.limit), Some(5));
    }

    #[test]
    fn flags_override_environment_config() {
        let env = ApiConfig::new("http://env.test/api/v1", ApiTimeouts { request_secs: 5, connect_secs: 2 });
        let cli = Cli::try_parse_from(["catalog-cli", "--base-url", "http://flag.test/api/v1/", "--request-timeout-secs", "9", "version"])
            .unwrap();
        let config = resolve_config(env, &cli);
        assert_eq!(config.base_url, "http://flag.test/api/v1");
        assert_eq!(config.timeouts, ApiTimeouts { request_secs: 9, connect_secs: 2 });
    }

    #[test]
    fn base_url_defaults_to_absolute_url() {
        // SAFETY: no other test in this binary touches the environment.
        unsafe { std::env::remove_var("CATALOG_API_BASE_URL") };
        let env = ApiConfig::new("/api/v1", ApiTimeouts::default());
        let cli = Cli::try_parse_from(["catalog-cli", "version"]).unwrap();
        let config = resolve_config(env, &cli);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.base_url.starts_with("http://"));
        assert_eq!(config.timeouts, ApiTimeouts::default());
    }

    #[test]
    fn reversed_window_is_rejected() {
        assert!(matches!(result_window(5, 1), Err(CliError::InvalidRange { start: 5, end: 1 })));
        assert_eq!(result_window(1, 1).unwrap(), KpiResultParams { start_ts: 1, end_ts: 1 });
    }
}
