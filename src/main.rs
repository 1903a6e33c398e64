use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tokio::io::AsyncReadExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use deepform::config::{self, Settings};
use deepform::deep::{Container, ObjectBuilder};
use deepform::models::AppState;
use deepform::routes::build_router;
use deepform::submission::DeepFormClient;
use deepform::utils::{node_to_short_string, parse_urlencoded_entries};

async fn start_server(state: AppState, host: &str, port: u16) {
    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(state);
    tracing::info!(%addr, "Starting deepform demo server");
    println!(
        "{} {}",
        yansi::Paint::new("Demo server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

/// Form body from the argument, or from stdin when none was given
async fn read_input(input: Option<String>) -> String {
    if let Some(text) = input {
        return text;
    }
    let mut buf = String::new();
    if let Err(e) = tokio::io::stdin().read_to_string(&mut buf).await {
        eprintln!("{}: {}", yansi::Paint::new("Failed to read stdin").red(), e);
        process::exit(1);
    }
    buf.trim_end_matches(&['\r', '\n'][..]).to_string()
}

fn fail(context: &str, e: impl std::fmt::Display) -> ! {
    tracing::error!(%e, "{}", context);
    eprintln!("{}: {}", yansi::Paint::new(context).red(), e);
    process::exit(1);
}

fn print_table(obj: &Container) {
    if obj.is_empty() {
        println!("(empty form)");
        return;
    }
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }

    table.set_header(vec!["Field", "Value"]);
    for (k, v) in obj.iter() {
        table.add_row(vec![k.to_string(), node_to_short_string(v)]);
    }
    println!("\n{table}\n");
}

#[derive(Parser)]
#[command(
    name = "deepform",
    author,
    version,
    about = "Nested JSON objects from flat HTML form submissions",
    long_about = r#"deepform turns form fields whose names use '.' as a path delimiter into one nested object.
Repeated names are merged into lists in submission order.

Examples:
  1) Convert an urlencoded body:
      deepform convert 'person.name=Ada&person.langs=en&person.langs=fr'
  2) Post a deep form to a server:
      deepform submit http://localhost:8080/receive 'person.name=Ada'
  3) Run the demo server:
      deepform serve --port 8080
"#,
    after_help = "Use `deepform <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the demo web server
    Serve {
        /// Host to bind to (defaults to DEEPFORM_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (defaults to DEEPFORM_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Convert an urlencoded form body into nested JSON
    #[command(long_about = "Read an application/x-www-form-urlencoded body (argument or stdin) and print the nested object it describes.")]
    Convert {
        /// Urlencoded body; read from stdin when omitted
        input: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// Print top-level fields as a table instead of JSON
        #[arg(long)]
        table: bool,
    },
    /// Submit an urlencoded form body to a server as a deep form
    #[command(long_about = "Fold the form body into a nested object and POST it as a single urlencoded field. The target defaults to DEEPFORM_TARGET_URL.")]
    Submit {
        /// Receiving URL
        #[arg(long)]
        url: Option<String>,
        /// Urlencoded body; read from stdin when omitted
        input: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    config::load_env_file(cli.env_file.as_deref());
    let settings = Settings::from_env();

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(config::get_host);
            let port = port.unwrap_or_else(config::get_port);
            start_server(AppState::new(settings), &host, port).await;
        }
        Commands::Convert { input, pretty, table } => {
            let raw = read_input(input).await;
            let builder = ObjectBuilder::new().with_max_depth(settings.max_depth);
            let obj = match builder.fold(parse_urlencoded_entries(raw.as_bytes())) {
                Ok(obj) => obj,
                Err(e) => fail("Invalid form body", e),
            };
            if table {
                print_table(&obj);
                return;
            }
            let json = if pretty {
                serde_json::to_string_pretty(&obj)
            } else {
                serde_json::to_string(&obj)
            };
            match json {
                Ok(s) => println!("{}", s),
                Err(e) => fail("Failed to serialize object", e),
            }
        }
        Commands::Submit { url, input } => {
            let url = url.unwrap_or_else(|| settings.target_url.clone());
            if url.trim().is_empty() {
                eprintln!(
                    "{}",
                    yansi::Paint::new("No target URL; pass --url or set DEEPFORM_TARGET_URL").red()
                );
                process::exit(1);
            }
            let raw = read_input(input).await;
            let client = match reqwest::Client::builder()
                .user_agent(format!("deepform/{}", env!("CARGO_PKG_VERSION")))
                .build()
            {
                Ok(c) => c,
                Err(e) => fail("Failed to create HTTP client", e),
            };
            let client = DeepFormClient::new(client, &settings);
            match client.submit(&url, parse_urlencoded_entries(raw.as_bytes())).await {
                Ok(body) => {
                    println!("{}", yansi::Paint::new("Deep form accepted").green());
                    if !body.is_empty() {
                        println!("{}", body);
                    }
                }
                Err(e) => fail("Submission failed", e),
            }
        }
    }
}
