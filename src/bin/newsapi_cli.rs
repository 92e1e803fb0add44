//! newsapi-cli — 从命令行查询 News API
//!
//! Usage:
//!   newsapi-cli top-headlines [key=value ...]
//!   newsapi-cli everything q=bitcoin [key=value ...]
//!   newsapi-cli sources [key=value ...]
//!   newsapi-cli legacy-sources [key=value ...]
//!   newsapi-cli articles source=bbc-news [key=value ...]

use anyhow::{bail, Context};
use newsapi_rs::client::endpoint;
use newsapi_rs::{Endpoint, Error, NewsApiBuilder, Options, QueryValue};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "version" | "--version" | "-V" => {
            println!("newsapi-cli {}", env!("CARGO_PKG_VERSION"));
        }
        "help" | "--help" | "-h" => print_usage(),
        command => {
            if let Err(e) = run(command, &args[2..]).await {
                eprintln!("error: {e:#}");
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!(
        r#"newsapi-cli — query the News API

USAGE:
    newsapi-cli <COMMAND> [key=value ...]

COMMANDS:
    top-headlines       GET /v2/top-headlines (defaults to language=en)
    everything          GET /v2/everything
    sources             GET /v2/sources
    legacy-sources      GET /v1/sources (no API key sent)
    articles            GET /v1/articles
    version             Show version information
    help                Show this help message

Repeating a key sends it more than once (sources=a sources=b).

ENVIRONMENT:
    NEWSAPI_KEY         API key (required)
    NEWSAPI_HOST        Host override
    NEWSAPI_PROXY_URL   Proxy for all requests
    RUST_LOG            Log filter (default: warn)"#
    );
}

fn endpoint_for(command: &str) -> Option<Endpoint> {
    let ep = match command {
        "top-headlines" => endpoint::TOP_HEADLINES,
        "everything" => endpoint::EVERYTHING,
        "sources" => endpoint::SOURCES,
        "legacy-sources" => endpoint::LEGACY_SOURCES,
        "articles" => endpoint::LEGACY_ARTICLES,
        _ => return None,
    };
    Some(ep)
}

fn parse_options(pairs: &[String]) -> anyhow::Result<Option<Options>> {
    if pairs.is_empty() {
        return Ok(None);
    }
    let mut opts = Options::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("expected key=value, got {pair:?}"))?;
        let merged = match opts.get(key) {
            Some(QueryValue::Single(prev)) => QueryValue::List(vec![prev.clone(), value.to_string()]),
            Some(QueryValue::List(prev)) => {
                let mut items = prev.clone();
                items.push(value.to_string());
                QueryValue::List(items)
            }
            None => QueryValue::from(value),
        };
        opts.insert(key, merged);
    }
    Ok(Some(opts))
}

async fn run(command: &str, rest: &[String]) -> anyhow::Result<()> {
    let Some(ep) = endpoint_for(command) else {
        print_usage();
        bail!("unknown command: {command}");
    };
    let options = parse_options(rest)?;

    let client = NewsApiBuilder::from_env()
        .build()
        .context("set NEWSAPI_KEY to your API key")?;

    let result = match (ep, options) {
        (e, None) if e == endpoint::TOP_HEADLINES => client.v2().top_headlines(()).await,
        (e, Some(opts)) => client.endpoint(&e, opts).await,
        (e, None) => client.endpoint(&e, ()).await,
    };

    match result {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        Err(Error::Api(api)) => bail!("{} ({})", api.message, api.name()),
        Err(e) => Err(e.into()),
    }
}
