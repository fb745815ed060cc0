use folio_config::config::Config;
use folio_core::{
    repository::{Classification, ClassifiedRepository},
    FolioResult,
};
use nu_ansi_term::Color::{Blue, Cyan, Green, Magenta, Yellow};
use tabled::{
    builder::Builder,
    settings::{peaker::PriorityMax, themes::BorderCorrection, Panel, Style, Width},
};
use tracing::{info, warn};

use crate::{
    build::aggregate,
    utils::{term_width, Colored, Icons},
};

fn classification_color(classification: Classification) -> nu_ansi_term::Color {
    match classification {
        Classification::Owned => Green,
        Classification::OrganizationContribution => Blue,
        Classification::ExternalContribution => Magenta,
        Classification::Fork => Yellow,
    }
}

pub fn repository_table(repos: &[ClassifiedRepository], visible_cards: usize) -> String {
    let mut builder = Builder::new();
    builder.push_record([
        "#".to_string(),
        "Repository".to_string(),
        "Kind".to_string(),
        Icons::STAR.to_string(),
        Icons::FORK.to_string(),
        "Language".to_string(),
        "Updated".to_string(),
    ]);

    for (idx, classified) in repos.iter().enumerate() {
        let repo = &classified.repository;
        let position = if idx < visible_cards {
            (idx + 1).to_string()
        } else {
            format!("{} +", idx + 1)
        };

        builder.push_record([
            position,
            format!("{}/{}", repo.owner, Colored(Cyan, &repo.name)),
            Colored(
                classification_color(classified.classification),
                classified.classification,
            )
            .to_string(),
            repo.stars.to_string(),
            repo.forks.to_string(),
            repo.language.clone().unwrap_or_else(|| "N/A".to_string()),
            repo.updated_at.format("%Y-%m-%d").to_string(),
        ]);
    }

    builder
        .build()
        .with(Panel::header(format!("{} Projects", Icons::BOOK)))
        .with(Style::rounded())
        .with(BorderCorrection {})
        .with(Width::wrap(term_width()).priority(PriorityMax::default()))
        .to_string()
}

/// The whole `--json` document: one array of classified repositories.
pub fn repositories_json(repos: &[ClassifiedRepository]) -> FolioResult<String> {
    Ok(serde_json::to_string_pretty(repos)?)
}

pub fn list_repositories(config: &Config, json: bool) -> FolioResult<()> {
    let repos = aggregate(config)??;

    if json {
        println!("{}", repositories_json(&repos)?);
        return Ok(());
    }

    if repos.is_empty() {
        warn!("No projects found for {}", config.username);
        return Ok(());
    }

    info!("\n{}", repository_table(&repos, config.limits.visible_cards));

    let hidden = repos.len().saturating_sub(config.limits.visible_cards);
    info!(
        "{} {} shown on the page{}",
        Icons::CHECK,
        Colored(Green, repos.len() - hidden),
        if hidden > 0 {
            format!(", {} behind the toggle (+)", Colored(Yellow, hidden))
        } else {
            String::new()
        }
    );

    Ok(())
}
