use super::logging;
use super::render::{render_created, render_messages};
use super::setup::CopyCli;
use clap::Parser;
use tracing::debug;
use wikitree::api::WikiApi;
use wikitree::client::http::HttpClient;
use wikitree::config::CopyConfig;
use wikitree::error::{Result, WikiError};

pub fn run() -> Result<()> {
    let cli = CopyCli::parse();
    logging::init(&cli.logging);

    let mut config = CopyConfig::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    debug!(?config, "effective configuration");

    let plan = config.resolve()?;
    let source = HttpClient::from_credentials(&plan.source)
        .map_err(|e| WikiError::Config(format!("failed to create source client, {e}")))?;

    let result = if plan.shares_account() {
        WikiApi::single(source).copy_tree(&plan.request)?
    } else {
        let dest = HttpClient::from_credentials(&plan.dest).map_err(|e| {
            WikiError::Config(format!("failed to create destination client, {e}"))
        })?;
        WikiApi::new(source, dest).copy_tree(&plan.request)?
    };

    print!("{}", render_created(&result.created_pages));
    print!("{}", render_messages(&result.messages));
    Ok(())
}
