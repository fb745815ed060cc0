use std::{env, path::PathBuf};

use build::build_page;
use clap::Parser;
use cli::{Args, Commands};
use folio_config::{
    config::{self, config_path, generate_default_config, get_config, Config},
    error::ConfigError,
};
use folio_core::{
    error::{ErrorContext, FolioError},
    FolioResult,
};
use folio_github::http_client::configure_http_client;
use list::list_repositories;
use logging::setup_logging;
use tracing::{debug, info};
use ureq::{
    http::{HeaderMap, HeaderName, HeaderValue},
    Proxy,
};

mod build;
mod cli;
mod list;
mod logging;
mod utils;

/// Parses `Name: value` pairs given with `-H`.
fn parse_headers(headers: &[String]) -> FolioResult<HeaderMap> {
    headers
        .iter()
        .map(|header| {
            let (key, value) = header
                .split_once(':')
                .ok_or_else(|| FolioError::Custom(format!("Invalid header '{header}'")))?;
            let name = key
                .trim()
                .parse::<HeaderName>()
                .map_err(|e| FolioError::Custom(format!("Invalid header name '{key}': {e}")))?;
            let value = value
                .trim()
                .parse::<HeaderValue>()
                .map_err(|e| FolioError::Custom(format!("Invalid header value '{value}': {e}")))?;
            Ok((name, value))
        })
        .collect()
}

/// Applies the `[http]` settings, then the command line overrides.
fn setup_http_client(args: &Args, config: &Config) -> FolioResult<()> {
    let proxy = args
        .proxy
        .as_deref()
        .map(Proxy::new)
        .transpose()
        .map_err(|e| FolioError::Custom(format!("Invalid proxy: {e}")))?;
    let headers = args.header.as_deref().map(parse_headers).transpose()?;
    let user_agent = args
        .user_agent
        .clone()
        .unwrap_or_else(|| config.http.user_agent.clone());
    let timeout = config.http_timeout()?;

    configure_http_client(|cfg| {
        cfg.user_agent = Some(user_agent);
        cfg.timeout = timeout;
        if proxy.is_some() {
            cfg.proxy = proxy;
        }
        if headers.is_some() {
            cfg.headers = headers;
        }
    });

    Ok(())
}

/// Loads the config and applies a `--username` override.
fn load_config(username: Option<String>) -> FolioResult<Config> {
    config::init()?;
    let mut config = get_config();

    if let Some(username) = username {
        config.username = username;
        config.resolve()?;
    }

    Ok(config)
}

fn handle_cli() -> FolioResult<()> {
    let args = Args::parse();

    setup_logging(&args);

    if args.no_color {
        utils::disable_color();
    }

    if let Some(ref c) = args.config {
        let path = PathBuf::from(c);
        let path = if path.is_absolute() {
            path
        } else {
            env::current_dir()
                .with_context(|| "retrieving current directory".into())?
                .join(path)
        };
        config::set_config_path(path);
    }

    match args.command {
        Commands::DefConfig => {
            let path = config_path();
            generate_default_config(&path)?;
            info!("Default config written to {}", path.display());
        }
        Commands::Config => {
            let config = load_config(None)?;
            debug!("config loaded from {}", config_path().display());
            let content = toml::to_string_pretty(&config).map_err(ConfigError::from)?;
            info!("{content}");
        }
        Commands::Build {
            ref output,
            ref username,
        } => {
            let config = load_config(username.clone())?;
            setup_http_client(&args, &config)?;

            let output = PathBuf::from(output.as_deref().unwrap_or(&config.output));
            build_page(&config, &output)?;
        }
        Commands::List {
            ref username,
        } => {
            let config = load_config(username.clone())?;
            setup_http_client(&args, &config)?;

            list_repositories(&config, args.json)?;
        }
    }

    Ok(())
}

fn main() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    if let Err(err) = handle_cli() {
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(1);
    }
}
