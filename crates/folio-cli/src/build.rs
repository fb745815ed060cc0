use std::{fs, path::Path};

use folio_config::config::Config;
use folio_core::{
    aggregate::{AggregateError, AggregateSettings, Aggregator},
    error::ErrorContext,
    render::render_portfolio,
    repository::ClassifiedRepository,
    FolioResult,
};
use folio_github::source::GithubApi;
use tracing::{debug, info, warn};

pub type Aggregation = Result<Vec<ClassifiedRepository>, AggregateError>;

/// Runs the aggregator against the configured GitHub API.
pub fn aggregate(config: &Config) -> FolioResult<Aggregation> {
    let settings = AggregateSettings::from_config(config)?;
    let api = GithubApi::new(config.api_url.as_str());
    debug!(api = api.base_url(), user = %settings.username, "fetching repositories");

    Ok(Aggregator::new(api, settings).run())
}

pub fn build_page(config: &Config, output: &Path) -> FolioResult<()> {
    let result = aggregate(config)?;
    write_page(config, &result, output)
}

/// Renders and writes the page. A failed aggregation is reported but still
/// produces a page showing the failure notice.
pub fn write_page(config: &Config, result: &Aggregation, output: &Path) -> FolioResult<()> {
    match result {
        Ok(repos) => debug!("rendering {} project cards", repos.len()),
        Err(err) => warn!("{err}: {}", err.fetch_error()),
    }

    let html = render_portfolio(config, result)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    fs::write(output, html).with_context(|| format!("writing {}", output.display()))?;

    info!("Portfolio written to {}", output.display());
    Ok(())
}
