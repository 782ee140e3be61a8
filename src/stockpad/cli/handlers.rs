use super::args::{Cli, Commands, ProductFields};
use super::print::{print_cards, print_list, print_messages, print_notice};
use chrono::Utc;
use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use stockpad::api::InventoryApi;
use stockpad::commands::config::ConfigAction;
use stockpad::commands::CmdResult;
use stockpad::config::StockConfig;
use stockpad::error::{Result, StockError};
use stockpad::model::ProductId;
use stockpad::notify::Notifier;
use stockpad::render::RenderOptions;
use stockpad::store::fs::FileSlot;
use stockpad::store::ProductSlot;
use stockpad::validation::ProductForm;
use stockpad::view::ViewRegion;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: InventoryApi<FileSlot>,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(&cli)?;
    debug!(data_dir = %data_dir.display(), "resolved data dir");
    let use_color = !cli.no_color && stockpad::render::theme::detect_color();
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command.unwrap_or(Commands::List) {
        // Neither touches the product slot, so a damaged slot can't block them
        Commands::Config { key, value } => handle_config(&data_dir, key, value),
        Commands::Path => {
            println!("{}", FileSlot::new(&data_dir).location());
            Ok(())
        }
        command => {
            let mut ctx = init_context(data_dir, use_color)?;
            dispatch(&mut ctx, command)
        }
    }
}

fn dispatch(ctx: &mut AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Add { fields } => handle_add(ctx, fields),
        Commands::Edit { id, fields } => handle_edit(ctx, id, fields),
        Commands::Delete { id } => handle_delete(ctx, id),
        Commands::Show { id } => handle_show(ctx, id),
        Commands::List | Commands::Config { .. } | Commands::Path => handle_list(ctx),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os("STOCKPAD_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "stockpad", "stockpad")
        .ok_or_else(|| StockError::Config("Could not determine data directory".into()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context(data_dir: PathBuf, use_color: bool) -> Result<AppContext> {
    let config = StockConfig::load(&data_dir)?;
    let render_options = RenderOptions::from(&config).at(Utc::now());
    let notifier = Notifier::new(config.notice_duration());
    let api = InventoryApi::open(FileSlot::new(data_dir), notifier, render_options)?;

    Ok(AppContext { api, use_color })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list();
    if let Some(view) = &result.listed {
        print_list(view, ctx.use_color)?;
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: ProductId) -> Result<()> {
    let result = ctx.api.show(id)?;
    if let Some(view) = &result.listed {
        print_cards(view, ctx.use_color)?;
    }
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: ProductFields) -> Result<()> {
    ctx.api.show_add_form()?;
    let form = fields.fill(ProductForm::default());
    let result = ctx.api.submit_add_with(form)?;
    finish(ctx, &result)
}

fn handle_edit(ctx: &mut AppContext, id: ProductId, fields: ProductFields) -> Result<()> {
    let opened = ctx.api.begin_edit(id)?;
    if ctx.api.region() != ViewRegion::Editing(id) {
        // Nothing to edit; the warning is already on the notice line
        return finish(ctx, &opened);
    }

    let form = fields.fill(ctx.api.edit_form().clone());
    let result = ctx.api.submit_edit_with(form)?;
    finish(ctx, &result)
}

fn handle_delete(ctx: &mut AppContext, id: ProductId) -> Result<()> {
    let result = ctx.api.delete(id)?;
    finish(ctx, &result)
}

/// Re-renders the list (when the flow produced one) followed by the notice.
fn finish(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if let Some(view) = &result.listed {
        print_list(view, ctx.use_color)?;
    }
    print_notice(ctx.api.notifier().current());
    Ok(())
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = stockpad::commands::config::run(data_dir, action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        println!("placeholder-image = {}", config.placeholder_image);
        println!("notice-seconds = {}", config.notice_seconds);
        println!("currency = {}", config.currency);
    }
    print_messages(&result.messages);
    Ok(())
}
