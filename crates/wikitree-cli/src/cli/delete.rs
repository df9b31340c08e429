use super::logging;
use super::render::{render_deleted, render_messages};
use super::setup::DeleteCli;
use clap::Parser;
use tracing::debug;
use wikitree::api::WikiApi;
use wikitree::client::http::HttpClient;
use wikitree::config::DeleteConfig;
use wikitree::error::{Result, WikiError};

pub fn run() -> Result<()> {
    let cli = DeleteCli::parse();
    logging::init(&cli.logging);

    let mut config = DeleteConfig::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    debug!(?config, "effective configuration");

    let plan = config.resolve()?;
    let client = HttpClient::from_credentials(&plan.credentials)
        .map_err(|e| WikiError::Config(format!("failed to create client, {e}")))?;

    let result = WikiApi::single(client).delete_tree(&plan.request)?;

    print!("{}", render_deleted(&result.deleted_pages));
    print!("{}", render_messages(&result.messages));
    Ok(())
}
