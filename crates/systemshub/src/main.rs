//! `syshub` - CLI for the systems hub
//!
//! Serves the catalogue API and lets you browse the catalogue, detail pages
//! and unlock countdowns from a terminal.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{debug, info, warn};

use systemshub::api::{self, AppState};
use systemshub::cli::{Cli, Command, ConfigCommand, ListCommand, ServeCommand, ShowCommand};
use systemshub::unlock::{Countdown, IntervalTicker};
use systemshub::view::{DetailPage, DetailView, ItemCard, ListView, NotFoundView};
use systemshub::{init_logging, Catalogue, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    // `config validate` reports problems itself instead of failing the load.
    if let Command::Config(ConfigCommand::Validate { file }) = &cli.command {
        return handle_validate(file.as_deref().or(cli.config.as_deref()));
    }

    let config = Config::load_from(cli.config.clone()).context("failed to load configuration")?;
    debug!(items = config.items.len(), "Configuration loaded");

    match cli.command {
        Command::Serve(cmd) => handle_serve(&config, &cmd).await,
        Command::List(cmd) => handle_list(&config.catalogue()?, &cmd),
        Command::Show(cmd) => handle_show(&config.catalogue()?, &cmd),
        Command::Unlock(cmd) => handle_unlock(&config.catalogue()?, &cmd.key).await,
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

async fn handle_serve(config: &Config, cmd: &ServeCommand) -> anyhow::Result<()> {
    let addr: SocketAddr = match &cmd.bind {
        Some(bind) => bind
            .parse()
            .with_context(|| format!("--bind is not a socket address: {bind}"))?,
        None => config.bind_addr()?,
    };
    let state = AppState::from_config(config)?;
    let listener = api::bind(addr).await?;

    api::serve(listener, state, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

fn handle_list(catalogue: &Catalogue, cmd: &ListCommand) -> anyhow::Result<()> {
    let view = ListView::new(catalogue, cmd.tag.as_deref());
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", view.site_name);
    println!("{}", view.site_description);
    println!();
    println!("Featured: {} ({})", view.featured.display_name, view.featured.href);
    println!();
    if view.items.is_empty() {
        println!("No systems tagged {:?}.", cmd.tag.as_deref().unwrap_or_default());
    }
    for card in &view.items {
        print_card(card);
    }
    Ok(())
}

fn print_card(card: &ItemCard) {
    println!("  {:<20} {}", card.key, card.display_name);
    println!("  {:<20} {}", "", card.description);
    println!(
        "  {:<20} [{}] {}s unlock",
        "",
        card.tags.join(", "),
        card.wait_seconds
    );
}

fn handle_show(catalogue: &Catalogue, cmd: &ShowCommand) -> anyhow::Result<()> {
    let page = DetailPage::open(catalogue, &cmd.key);
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    }
    match page {
        DetailPage::Found(view) => {
            if !cmd.json {
                print_detail(&view);
            }
            Ok(())
        }
        DetailPage::NotFound(page) => {
            if !cmd.json {
                print_not_found(&page);
            }
            bail!("no system with key {:?}", cmd.key)
        }
    }
}

fn print_detail(view: &DetailView) {
    let item = &view.item;
    println!("{}", item.title);
    println!("{}", item.description);
    if !item.tags.is_empty() {
        println!("Tags:      {}", item.tags.join(", "));
    }
    println!();
    println!("{}", view.countdown.headline);
    println!("{} ({}%)", view.countdown.caption, view.countdown.progress_percent);
    println!();
    println!("Repository: {}", view.repo.href().unwrap_or("(locked)"));
    println!(
        "All {}+ systems: {}",
        view.total_items,
        view.all_items.href().unwrap_or("(locked)")
    );
    println!("Video:      {}", view.video_url);
    println!("Dev notes:  {}", view.dev_notes_url);
    if let Some(notes) = &item.notes {
        println!();
        println!("{notes}");
    }
}

fn print_not_found(page: &NotFoundView) {
    println!("{}", page.title);
    println!("{}", page.message);
    println!("{}: {}", page.back_label, page.back_href);
}

async fn handle_unlock(catalogue: &Catalogue, key: &str) -> anyhow::Result<()> {
    let mut view = match DetailPage::open(catalogue, key) {
        DetailPage::Found(view) => view,
        DetailPage::NotFound(page) => {
            print_not_found(&page);
            bail!("no system with key {key:?}");
        }
    };

    println!("{}", view.countdown.headline);
    let countdown = Countdown::spawn(view.item.wait_seconds, IntervalTicker::every_second());
    let mut updates = countdown.subscribe();

    while !view.countdown.state.is_complete() {
        println!("{}", view.countdown.caption);
        tokio::select! {
            changed = updates.changed() => {
                let state = *updates.borrow_and_update();
                view.apply(state);
                if changed.is_err() && !state.is_complete() {
                    bail!("countdown stopped before unlocking");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                countdown.cancel();
                bail!("unlock interrupted");
            }
        }
    }

    println!("{}", view.countdown.headline);
    println!("{}", view.countdown.caption);
    if let Some(href) = view.repo.href() {
        println!("Repository: {href}");
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Site]");
                println!("  Name:               {}", config.site.name);
                println!("  Description:        {}", config.site.description);
                println!("  Analytics domain:   {}", config.site.analytics_domain);
                println!("  All systems URL:    {}", config.site.all_items_url);
                println!();
                println!("[Server]");
                println!("  Bind:               {}", config.server.bind);
                println!("  CORS origin:        {}", config.server.cors_origin);
                println!();
                println!("[Items]");
                for item in &config.items {
                    println!(
                        "  {:<20} {}s{}",
                        item.key,
                        item.wait_seconds,
                        if item.featured { " (featured)" } else { "" }
                    );
                }
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { .. } => {
            // Handled before the configuration is loaded.
        }
    }
    Ok(())
}

fn handle_validate(file: Option<&Path>) -> anyhow::Result<()> {
    let result = match file {
        Some(path) => {
            println!("Validating configuration: {}", path.display());
            Config::load_file(path)
        }
        None => {
            let path = Config::default_config_path();
            println!("Validating configuration: {} (defaults if missing)", path.display());
            Config::load()
        }
    };
    match result {
        Ok(config) => {
            println!(
                "Configuration is valid ({} systems, serving on {}).",
                config.items.len(),
                config.server.bind
            );
            Ok(())
        }
        Err(e) => {
            println!("Configuration error: {e}");
            bail!("invalid configuration")
        }
    }
}
