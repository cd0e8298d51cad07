//! `catalog genre` - create, update, get, delete and list genres.

use chrono::{DateTime, Utc};
use tracing::instrument;

use catalog_core::{
    application::{
        CreateGenreCommand, CreateGenreUseCase, DeleteGenreUseCase, GenreListOutput,
        GenreOutput, GetGenreByIdUseCase, ListGenresUseCase, UpdateGenreCommand,
        UpdateGenreUseCase,
    },
    domain::{Direction, Pagination, SearchQuery},
};

use crate::{
    cli::{GenreCommands, GenreWriteArgs, GlobalArgs, ListArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    store::Stores,
};

/// Dispatch to the correct genre subcommand.
#[instrument(skip_all)]
pub fn execute(
    cmd: GenreCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let stores = Stores::open(&global, &config)?;

    match cmd {
        GenreCommands::Create(fields) => create(&stores, fields, &output),
        GenreCommands::Update { id, fields } => update(&stores, id, fields, &output),
        GenreCommands::Get { id } => get(&stores, &id, &output),
        GenreCommands::Delete { id } => delete(&stores, &id, &output),
        GenreCommands::List(args) => list(&stores, args, &config, &output),
    }
}

fn create(stores: &Stores, fields: GenreWriteArgs, output: &OutputManager) -> CliResult<()> {
    let use_case = CreateGenreUseCase::new(stores.categories(), stores.genres());
    let created = use_case.execute(CreateGenreCommand::with(
        fields.name.as_deref(),
        Some(!fields.inactive),
        fields.categories,
    ))?;

    if output.is_json() {
        output.json(&created)?;
    } else {
        output.success(&format!("Created genre {}", created.id))?;
    }
    Ok(())
}

fn update(
    stores: &Stores,
    id: String,
    fields: GenreWriteArgs,
    output: &OutputManager,
) -> CliResult<()> {
    let use_case = UpdateGenreUseCase::new(stores.categories(), stores.genres());
    let updated = use_case.execute(UpdateGenreCommand::with(
        id,
        fields.name.as_deref(),
        Some(!fields.inactive),
        fields.categories,
    ))?;

    if output.is_json() {
        output.json(&updated)?;
    } else {
        output.success(&format!("Updated genre {}", updated.id))?;
    }
    Ok(())
}

fn get(stores: &Stores, id: &str, output: &OutputManager) -> CliResult<()> {
    let genre = GetGenreByIdUseCase::new(stores.genres()).execute(id)?;

    if output.is_json() {
        output.json(&genre)?;
    } else {
        print_genre(&genre, output)?;
    }
    Ok(())
}

fn delete(stores: &Stores, id: &str, output: &OutputManager) -> CliResult<()> {
    DeleteGenreUseCase::new(stores.genres()).execute(id)?;

    if !output.is_json() {
        output.success(&format!("Deleted genre {id}"))?;
    }
    Ok(())
}

fn list(
    stores: &Stores,
    args: ListArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let query = search_query(args, config)?;
    let page = ListGenresUseCase::new(stores.genres()).execute(query)?;

    if output.is_json() {
        output.json(&page)?;
    } else {
        print_page(&page, output)?;
    }
    Ok(())
}

/// Merge list flags with the `listing` config defaults.
fn search_query(args: ListArgs, config: &AppConfig) -> CliResult<SearchQuery> {
    let direction = match args.direction {
        Some(dir) => dir.to_string(),
        None => config.listing.direction.clone(),
    };
    let direction: Direction = direction.parse().map_err(|e| CliError::ConfigError {
        message: format!("invalid listing.direction: {e}"),
        source: None,
    })?;

    let per_page = args.per_page.unwrap_or(config.listing.per_page);
    if per_page == 0 {
        return Err(CliError::InvalidInput {
            message: "--per-page must be at least 1".into(),
            source: None,
        });
    }

    Ok(SearchQuery::new(
        args.page,
        per_page,
        args.search,
        args.sort.unwrap_or_else(|| config.listing.sort.clone()),
        direction,
    ))
}

// ── rendering ─────────────────────────────────────────────────────────────────

fn timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn status(active: bool) -> &'static str {
    if active { "active" } else { "inactive" }
}

fn categories(ids: &[String]) -> String {
    if ids.is_empty() {
        "-".into()
    } else {
        ids.join(", ")
    }
}

fn print_genre(genre: &GenreOutput, output: &OutputManager) -> CliResult<()> {
    output.header(&genre.name)?;
    output.print(&format!("  id:         {}", genre.id))?;
    output.print(&format!("  status:     {}", status(genre.is_active)))?;
    output.print(&format!("  categories: {}", categories(&genre.categories)))?;
    output.print(&format!("  created:    {}", timestamp(genre.created_at)))?;
    output.print(&format!("  updated:    {}", timestamp(genre.updated_at)))?;
    if let Some(deleted_at) = genre.deleted_at {
        output.print(&format!("  deleted:    {}", timestamp(deleted_at)))?;
    }
    Ok(())
}

fn print_page(page: &Pagination<GenreListOutput>, output: &OutputManager) -> CliResult<()> {
    if page.items.is_empty() {
        output.info(&format!("No genres found (total {})", page.total))?;
        return Ok(());
    }

    output.header(&format!(
        "Genres (page {} of {}, {} total):",
        page.current_page + 1,
        page.total_pages(),
        page.total
    ))?;
    for genre in &page.items {
        output.print(&format!(
            "  {}  {:<24} {:<8} {}",
            genre.id,
            genre.name,
            status(genre.is_active),
            categories(&genre.categories)
        ))?;
    }
    if (page.current_page as u64) + 1 < page.total_pages() {
        output.detail(&format!(
            "  more results: --page {}",
            page.current_page + 1
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SortDirection;

    fn list_args() -> ListArgs {
        ListArgs {
            search: String::new(),
            page: 0,
            per_page: None,
            sort: None,
            direction: None,
        }
    }

    #[test]
    fn query_falls_back_to_listing_config() {
        let mut config = AppConfig::default();
        config.listing.per_page = 7;
        config.listing.sort = "createdAt".into();
        config.listing.direction = "desc".into();

        let query = search_query(list_args(), &config).unwrap();

        assert_eq!(query.per_page, 7);
        assert_eq!(query.sort, "createdAt");
        assert_eq!(query.direction, Direction::Desc);
    }

    #[test]
    fn flags_override_listing_config() {
        let args = ListArgs {
            search: "dra".into(),
            page: 2,
            per_page: Some(3),
            sort: Some("updatedAt".into()),
            direction: Some(SortDirection::Asc),
        };
        let mut config = AppConfig::default();
        config.listing.direction = "desc".into();

        let query = search_query(args, &config).unwrap();

        assert_eq!(query, SearchQuery::new(2, 3, "dra", "updatedAt", Direction::Asc));
    }

    #[test]
    fn bad_configured_direction_is_a_config_error() {
        let mut config = AppConfig::default();
        config.listing.direction = "sideways".into();

        let err = search_query(list_args(), &config).unwrap_err();

        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let args = ListArgs {
            per_page: Some(0),
            ..list_args()
        };
        let err = search_query(args, &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn empty_category_list_renders_dash() {
        assert_eq!(categories(&[]), "-");
        assert_eq!(categories(&["1".into(), "2".into()]), "1, 2");
    }
}
