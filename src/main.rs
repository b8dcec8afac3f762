mod app;
mod chat;
mod cli;
mod config;
mod core;
mod error;
mod output;
mod store;
mod utils;

use clap::Parser;

use app::{CommandContext, handle_message};
use chat::{ReplySink, StdoutSink, WebhookSink};
use cli::Cli;
use config::Config;
use error::{AppError, ChatError};
use output::TableOptions;
use store::{NotionStore, OfflineStore, RecipeStore};
use utils::{Timezone, init_logging, parse_date};

fn main() {
    let cli = Cli::parse();
    let config = Config::load();
    let cli = cli.with_config(&config);

    init_logging(cli.debug);
    if let Some(path) = &config.source {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let days = config.day_table()?;
    let prefix = config.prefix()?;

    let today = match cli.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => Timezone::parse(cli.timezone.as_deref())?.today(),
    };

    let store: Box<dyn RecipeStore> = if cli.offline {
        Box::new(OfflineStore::load(config.properties.clone())?)
    } else {
        let (key, database_id) = config.credentials()?;
        Box::new(NotionStore::new(key, database_id, config.properties.clone()))
    };

    let mut sink: Box<dyn ReplySink> = if cli.post {
        let url = config.webhook_url.as_deref().ok_or(ChatError::NoWebhook)?;
        Box::new(WebhookSink::new(url))
    } else {
        Box::new(StdoutSink)
    };

    // Chat messages are fenced and kept free of terminal styling
    let chat = cli.post || cli.command.is_chat();
    let table = if chat {
        TableOptions::chat()
    } else {
        TableOptions {
            use_color: cli.use_color(),
            ascii: false,
        }
    };

    let ctx = CommandContext {
        days: &days,
        today,
        dry_run: cli.dry_run,
        json: cli.json,
        table,
        chat,
        prefix,
    };

    handle_message(cli.command.to_message(prefix), store.as_ref(), &ctx, sink.as_mut())
}
