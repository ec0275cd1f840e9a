use std::io::IsTerminal;

use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Input};

use duesboard_config::Theme;
use duesboard_core::LookupService;

use crate::cli::{
    context::{CliContext, DashboardState},
    formatters::CliFormatters,
    registry,
    render,
    ui::style::UiStyle,
};
use crate::errors::CliError;

/// Full dashboard, section by section.
pub fn show(ctx: &CliContext) -> Result<(), CliError> {
    let state = ctx.load_state()?;
    let style = UiStyle::from_config(&ctx.config);
    let fmt = CliFormatters::new(&ctx.config);
    let today = Local::now().date_naive();

    let sections = [
        render::header(state.site.display_title(), today, &style, &fmt),
        render::balance_section(&state.breakdown, &state.incomes, &style, &fmt),
        render::collections_section(
            "Open collections",
            &state.open,
            "No open collections.",
            &style,
            &fmt,
        ),
        render::collections_section(
            "Closed collections",
            &state.closed,
            "No closed collections.",
            &style,
            &fmt,
        ),
        render::expenses_section(&state.expenses, &style, &fmt),
        render::events_section(&state.events, today, &style),
        render::notices_section(&state.notices, &style),
        render::banking_section(&state.banking, &style),
    ];
    println!("{}", sections.join("\n\n"));
    Ok(())
}

pub fn balance(ctx: &CliContext) -> Result<(), CliError> {
    let state = ctx.load_state()?;
    let style = UiStyle::from_config(&ctx.config);
    let fmt = CliFormatters::new(&ctx.config);
    println!(
        "{}",
        render::balance_section(&state.breakdown, &state.incomes, &style, &fmt)
    );
    Ok(())
}

pub fn collections(ctx: &CliContext) -> Result<(), CliError> {
    let state = ctx.load_state()?;
    let style = UiStyle::from_config(&ctx.config);
    let fmt = CliFormatters::new(&ctx.config);
    let open = render::collections_section(
        "Open collections",
        &state.open,
        "No open collections.",
        &style,
        &fmt,
    );
    let closed = render::collections_section(
        "Closed collections",
        &state.closed,
        "No closed collections.",
        &style,
        &fmt,
    );
    println!("{open}\n\n{closed}");
    Ok(())
}

pub fn expenses(ctx: &CliContext) -> Result<(), CliError> {
    let state = ctx.load_state()?;
    let style = UiStyle::from_config(&ctx.config);
    let fmt = CliFormatters::new(&ctx.config);
    println!("{}", render::expenses_section(&state.expenses, &style, &fmt));
    Ok(())
}

pub fn events(ctx: &CliContext) -> Result<(), CliError> {
    let state = ctx.load_state()?;
    let style = UiStyle::from_config(&ctx.config);
    let today = Local::now().date_naive();
    println!("{}", render::events_section(&state.events, today, &style));
    Ok(())
}

pub fn notices(ctx: &CliContext) -> Result<(), CliError> {
    let state = ctx.load_state()?;
    let style = UiStyle::from_config(&ctx.config);
    println!("{}", render::notices_section(&state.notices, &style));
    Ok(())
}

pub fn banking(ctx: &CliContext) -> Result<(), CliError> {
    let state = ctx.load_state()?;
    let style = UiStyle::from_config(&ctx.config);
    println!("{}", render::banking_section(&state.banking, &style));
    Ok(())
}

/// Member statement across the open collections. Prompts when no number
/// was given and stdin is interactive.
pub fn lookup(ctx: &CliContext, arg: Option<String>) -> Result<(), CliError> {
    let state = ctx.load_state()?;
    let raw = match arg {
        Some(value) => value,
        None => prompt_member_number(&state)?,
    };
    let member = LookupService::parse_member(&state.roster, &raw)
        .map_err(|err| CliError::Input(err.to_string()))?;
    let statement = LookupService::lookup_member(member, &state.open);

    let style = UiStyle::from_config(&ctx.config);
    let fmt = CliFormatters::new(&ctx.config);
    println!("{}", render::lookup_section(&statement, &style, &fmt));
    Ok(())
}

fn prompt_member_number(state: &DashboardState) -> Result<String, CliError> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::Input(
            "member number required (usage: lookup <number>)".into(),
        ));
    }
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "Member number (1-{})",
            state.roster.total_children()
        ))
        .interact_text()
        .map_err(|err| CliError::Command(err.to_string()))
}

/// Shows the current theme, or persists a new one.
pub fn theme(ctx: &mut CliContext, value: Option<String>) -> Result<(), CliError> {
    match value {
        None => println!("Theme: {}", ctx.config.theme),
        Some(raw) => {
            let theme = match raw.trim().to_ascii_lowercase().as_str() {
                "plain" => Theme::Plain,
                "iconic" => Theme::Iconic,
                other => {
                    return Err(CliError::Input(format!(
                        "unknown theme `{other}` (expected `plain` or `iconic`)"
                    )))
                }
            };
            ctx.config.theme = theme;
            ctx.save_config()?;
            println!("Theme set to {}", ctx.config.theme);
        }
    }
    Ok(())
}

pub fn help() {
    println!("Usage: duesboard_cli [--data <dir>] <command>");
    println!("Commands:");
    for spec in registry::REGISTRY.iter() {
        println!("  {:<22} {}", spec.usage, spec.summary);
    }
}

pub fn version() {
    println!("duesboard {}", env!("CARGO_PKG_VERSION"));
}
