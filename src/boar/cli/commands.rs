//! # CLI Dispatch
//!
//! `run()` parses arguments, sets up logging and the data directory, then hands the command
//! to `dispatch()`. Handlers fill in missing parameters through a [`Prompter`], call the
//! `BoarApi` and return the rendered output as a string; `run()` prints it.
//!
//! ## Prompting
//!
//! A parameter that is not on the command line is asked for. When a required parameter had
//! to be asked for, the optional ones without a flag are asked for too, so `boar add` walks
//! through every field while `boar add temp fd` adds the item straight away. Edits ask for
//! new values only when no `--name/--desc/--link` flag was given. A blank answer to a
//! required question aborts.
//!
//! ## Testing
//!
//! `dispatch()` is generic over the store, so tests drive it with an `InMemoryStore` and a
//! `ScriptedPrompter` and assert on the returned text.

use super::prompt::{optional, required, Prompter, TerminalPrompter};
use super::render::{
    render_changes, render_config, render_history, render_listing, render_messages,
};
use super::setup::{Cli, Commands};
use boar::api::BoarApi;
use boar::commands::config::ConfigAction;
use boar::commands::CmdResult;
use boar::error::{BoarError, Result};
use boar::index::{resolve_category, resolve_entry, split_compound};
use boar::init::initialize;
use boar::store::DataStore;
use clap::Parser;
use console::Term;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

struct AppContext<S: DataStore> {
    api: BoarApi<S>,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::List { category: None });
    let boar_ctx = initialize(command != Commands::Init)?;

    let use_color = !cli.nocolor
        && !boar_ctx.config.disable_colors
        && Term::stdout().features().colors_supported();
    colored::control::set_override(use_color);
    debug!(dir = %boar_ctx.data_dir.display(), use_color, "starting");

    let mut ctx = AppContext {
        api: boar_ctx.api,
        use_color,
    };
    let output = dispatch(&mut ctx, command, &mut TerminalPrompter)?;
    print!("{}", output);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn dispatch<S: DataStore>(
    ctx: &mut AppContext<S>,
    command: Commands,
    prompter: &mut dyn Prompter,
) -> Result<String> {
    match command {
        Commands::List { category } => {
            let result = ctx.api.list(category.as_deref())?;
            render_result(ctx, &result)
        }
        Commands::Categories => {
            let result = ctx.api.categories()?;
            render_result(ctx, &result)
        }
        Commands::AddCategory { name, short } => handle_add_category(ctx, name, short, prompter),
        Commands::Add {
            category,
            name,
            desc,
            link,
        } => handle_add(ctx, category, name, desc, link, prompter),
        Commands::RemoveCategory { category } => {
            let category = required(prompter, category, "Category to remove (short) or ID: ")?;
            let result = ctx.api.remove_category(&category)?;
            render_result(ctx, &result)
        }
        Commands::Remove { refs } => handle_remove(ctx, refs, prompter),
        Commands::EditCategory {
            category,
            name,
            short,
        } => handle_edit_category(ctx, category, name, short, prompter),
        Commands::Edit {
            refs,
            name,
            desc,
            link,
        } => handle_edit(ctx, refs, name, desc, link, prompter),
        Commands::Undo { depth } => {
            let result = ctx.api.undo(depth.as_deref())?;
            render_result(ctx, &result)
        }
        Commands::History => {
            let result = ctx.api.history()?;
            render_result(ctx, &result)
        }
        Commands::Export { theme } => {
            let result = ctx.api.export(theme.as_deref())?;
            render_result(ctx, &result)
        }
        Commands::Config { key, value } => {
            let show_descriptions = key.is_none();
            let action = ConfigAction::from_args(key.as_deref(), value.as_deref());
            let result = ctx.api.configure(action)?;
            let mut output = render_config(&result.config_entries, show_descriptions, ctx.use_color)?;
            output.push_str(&render_result(ctx, &result)?);
            Ok(output)
        }
        Commands::Reset { yes } => {
            if !yes
                && !prompter.confirm(
                    "Reset the book and configuration to defaults? The current book stays in history.",
                )?
            {
                return Err(BoarError::Aborted);
            }
            let result = ctx.api.reset()?;
            render_result(ctx, &result)
        }
        Commands::Init => {
            let result = ctx.api.init()?;
            render_result(ctx, &result)
        }
    }
}

fn handle_add_category<S: DataStore>(
    ctx: &mut AppContext<S>,
    name: Vec<String>,
    short: Option<String>,
    prompter: &mut dyn Prompter,
) -> Result<String> {
    let given = joined(name);
    let interactive = given.is_none();
    let name = required(prompter, given, "Category name (leave blank to abort): ")?;
    let short = match short {
        Some(short) => Some(short),
        None if interactive => optional(
            prompter,
            "Short name for category (leave blank to use first four letters): ",
        )?,
        None => None,
    };

    let result = ctx.api.add_category(&name, short.as_deref())?;
    render_result(ctx, &result)
}

fn handle_add<S: DataStore>(
    ctx: &mut AppContext<S>,
    category: Option<String>,
    name: Vec<String>,
    desc: Option<String>,
    link: Option<String>,
    prompter: &mut dyn Prompter,
) -> Result<String> {
    let name = joined(name);
    let interactive = category.is_none() || name.is_none();

    let category = required(prompter, category, "Category name (short) or ID to add to: ")?;
    if interactive {
        // Fail before asking for the rest.
        resolve_category(&ctx.api.book()?, &category)?;
    }
    let name = required(prompter, name, "Item name: ")?;
    let desc = match desc {
        Some(desc) => Some(desc),
        None if interactive => optional(prompter, "Item description (or leave blank): ")?,
        None => None,
    };
    let link = match link {
        Some(link) => Some(link),
        None if interactive => optional(prompter, "Item link (or leave blank): ")?,
        None => None,
    };

    let result = ctx
        .api
        .add_item(&category, &name, desc.as_deref(), link.as_deref())?;
    render_result(ctx, &result)
}

fn handle_remove<S: DataStore>(
    ctx: &mut AppContext<S>,
    refs: Vec<String>,
    prompter: &mut dyn Prompter,
) -> Result<String> {
    let (category, item) = split_refs(refs);
    let category = required(prompter, category, "Category to remove from (short) or ID: ")?;
    if item.is_none() {
        resolve_category(&ctx.api.book()?, &category)?;
    }
    let item = required(prompter, item, "Item name or ID to remove: ")?;

    let result = ctx.api.remove_item(&category, &item)?;
    render_result(ctx, &result)
}

fn handle_edit_category<S: DataStore>(
    ctx: &mut AppContext<S>,
    category: Option<String>,
    name: Option<String>,
    short: Option<String>,
    prompter: &mut dyn Prompter,
) -> Result<String> {
    let category = required(prompter, category, "Category to edit (short) or ID: ")?;

    let (name, short) = if name.is_none() && short.is_none() {
        resolve_category(&ctx.api.book()?, &category)?;
        (
            optional(prompter, "New name for category (blank to leave unchanged): ")?,
            optional(
                prompter,
                "New short name for category (blank to leave unchanged): ",
            )?,
        )
    } else {
        (name, short)
    };

    let result = ctx
        .api
        .edit_category(&category, name.as_deref(), short.as_deref())?;
    render_result(ctx, &result)
}

fn handle_edit<S: DataStore>(
    ctx: &mut AppContext<S>,
    refs: Vec<String>,
    name: Option<String>,
    desc: Option<String>,
    link: Option<String>,
    prompter: &mut dyn Prompter,
) -> Result<String> {
    let (category, item) = split_refs(refs);
    let category = required(prompter, category, "Category of entry to edit (short) or ID: ")?;
    if item.is_none() {
        resolve_category(&ctx.api.book()?, &category)?;
    }
    let item = required(prompter, item, "Item name or ID to edit: ")?;

    let (name, desc, link) = if name.is_none() && desc.is_none() && link.is_none() {
        resolve_entry(&ctx.api.book()?, &category, &item)?;
        let clear = ctx.api.config()?.clear;
        (
            optional(prompter, "New name for item (blank to leave unchanged): ")?,
            optional(
                prompter,
                &format!(
                    "New description for item (blank to leave unchanged, '{}' to clear): ",
                    clear
                ),
            )?,
            optional(
                prompter,
                &format!(
                    "New link for item (blank to leave unchanged, '{}' to clear): ",
                    clear
                ),
            )?,
        )
    } else {
        (name, desc, link)
    };

    let result = ctx.api.edit_item(
        &category,
        &item,
        name.as_deref(),
        desc.as_deref(),
        link.as_deref(),
    )?;
    render_result(ctx, &result)
}

/// Renders whatever parts of a result are present, listing first and messages last.
fn render_result<S: DataStore>(ctx: &AppContext<S>, result: &CmdResult) -> Result<String> {
    let mut output = String::new();
    if let Some(listing) = &result.listing {
        output.push_str(&render_listing(listing, ctx.use_color)?);
    }
    if !result.tomes.is_empty() {
        output.push_str(&render_history(&result.tomes, ctx.use_color)?);
    }
    output.push_str(&render_changes(&result.changes, ctx.use_color)?);
    output.push_str(&render_messages(&result.messages, ctx.use_color)?);
    Ok(output)
}

fn joined(words: Vec<String>) -> Option<String> {
    let text = words.join(" ");
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Turns `2.3`, `temp 3` or `temp Some item` (as one or several words) into refs.
fn split_refs(refs: Vec<String>) -> (Option<String>, Option<String>) {
    match joined(refs) {
        Some(text) => {
            let (category, item) = split_compound(&text);
            (Some(category), item)
        }
        None => (None, None),
    }
}
