//! Turns the aggregated repository list into the portfolio page.

use folio_config::config::Config;

use crate::{aggregate::AggregateError, repository::ClassifiedRepository, FolioResult};

pub mod card;
pub mod page;
pub mod toggle;
pub mod view;

pub use page::PortfolioPage;
pub use view::ProjectsView;

/// Renders the full page for an aggregation outcome.
///
/// A failed aggregation still produces a page; its projects section shows the
/// fetch failure panel instead of cards.
pub fn render_portfolio(
    config: &Config,
    result: &Result<Vec<ClassifiedRepository>, AggregateError>,
) -> FolioResult<String> {
    let projects = ProjectsView::build(result, config.limits.visible_cards);
    PortfolioPage::new(config, projects).render_page()
}
