use clap::{Args, Parser};
use std::path::PathBuf;
use wikitree::config::{CopyConfig, DeleteConfig};

#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Enable debug output. VERY noisy: request and response bodies are logged
    #[arg(long, help_heading = "Logging")]
    pub debug: bool,

    /// Verbose output
    #[arg(short, long, help_heading = "Logging")]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "wikitree-copy",
    version,
    about = "Copy a Confluence page, or a whole page tree, to another space or account",
    long_about = None,
    after_help = "Every option can also be set in a YAML or TOML file passed with --config.\nFlags and environment variables override the file."
)]
pub struct CopyCli {
    /// Source Confluence account name
    #[arg(long, env = "WIKITREE_SOURCE_ACCOUNT", help_heading = "Source")]
    pub source_account: Option<String>,

    /// Source Confluence username. Usually an email address
    #[arg(long, env = "WIKITREE_SOURCE_USER", help_heading = "Source")]
    pub source_user: Option<String>,

    /// Source Confluence API token
    #[arg(short = 's', long, env = "WIKITREE_SOURCE_TOKEN", hide_env_values = true, help_heading = "Source")]
    pub source_token: Option<String>,

    /// Source page ID. The copy starts here
    #[arg(long = "source-pageid", env = "WIKITREE_SOURCE_PAGEID", help_heading = "Source")]
    pub source_page_id: Option<String>,

    /// Source space key
    #[arg(long = "source-spacekey", env = "WIKITREE_SOURCE_SPACEKEY", help_heading = "Source")]
    pub source_space_key: Option<String>,

    /// Destination Confluence account name. Can be same as source
    #[arg(long, env = "WIKITREE_DEST_ACCOUNT", help_heading = "Destination")]
    pub dest_account: Option<String>,

    /// Destination Confluence username. Usually an email address
    #[arg(long, env = "WIKITREE_DEST_USER", help_heading = "Destination")]
    pub dest_user: Option<String>,

    /// Destination Confluence API token
    #[arg(short = 'd', long, env = "WIKITREE_DEST_TOKEN", hide_env_values = true, help_heading = "Destination")]
    pub dest_token: Option<String>,

    /// Destination parent page ID. Leave blank for a top-level copy
    #[arg(long = "dest-pageid", env = "WIKITREE_DEST_PAGEID", help_heading = "Destination")]
    pub dest_page_id: Option<String>,

    /// Destination space key
    #[arg(long = "dest-spacekey", env = "WIKITREE_DEST_SPACEKEY", help_heading = "Destination")]
    pub dest_space_key: Option<String>,

    /// Also copy every child page under the source page
    #[arg(short, long)]
    pub recursive: bool,

    /// Appended to page titles when copying within the same space [default: "- import"]
    #[arg(long = "conflictsuffix", env = "WIKITREE_CONFLICT_SUFFIX")]
    pub conflict_suffix: Option<String>,

    /// YAML or TOML configuration file
    #[arg(short, long, env = "WIKITREE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub logging: LogArgs,
}

#[derive(Parser, Debug)]
#[command(
    name = "wikitree-delete",
    version,
    about = "Delete a Confluence page and every page beneath it",
    long_about = None
)]
pub struct DeleteCli {
    /// Confluence account name
    #[arg(short, long, env = "WIKITREE_ACCOUNT")]
    pub account: Option<String>,

    /// Confluence username. Usually an email address
    #[arg(short, long, env = "WIKITREE_USER")]
    pub username: Option<String>,

    /// Confluence API token
    #[arg(short, long, env = "WIKITREE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Page ID to delete recursively from
    #[arg(short = 'p', long = "pageid", env = "WIKITREE_PAGEID")]
    pub page_id: Option<String>,

    /// Space key of the page
    #[arg(short = 'k', long = "spacekey", env = "WIKITREE_SPACEKEY")]
    pub space_key: Option<String>,

    /// YAML or TOML configuration file
    #[arg(short, long, env = "WIKITREE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub logging: LogArgs,
}

fn set(slot: &mut Option<String>, value: &Option<String>) {
    if let Some(v) = value {
        *slot = Some(v.clone());
    }
}

impl CopyCli {
    /// Flags and env vars take precedence over whatever the config file set.
    pub fn apply_to(&self, config: &mut CopyConfig) {
        set(&mut config.source.account, &self.source_account);
        set(&mut config.source.user, &self.source_user);
        set(&mut config.source.token, &self.source_token);
        set(&mut config.source.page_id, &self.source_page_id);
        set(&mut config.source.space_key, &self.source_space_key);
        set(&mut config.dest.account, &self.dest_account);
        set(&mut config.dest.user, &self.dest_user);
        set(&mut config.dest.token, &self.dest_token);
        set(&mut config.dest.page_id, &self.dest_page_id);
        set(&mut config.dest.space_key, &self.dest_space_key);
        if let Some(suffix) = &self.conflict_suffix {
            config.conflict_suffix = suffix.clone();
        }
        if self.recursive {
            config.recursive = true;
        }
    }
}

impl DeleteCli {
    pub fn apply_to(&self, config: &mut DeleteConfig) {
        set(&mut config.target.account, &self.account);
        set(&mut config.target.user, &self.username);
        set(&mut config.target.token, &self.token);
        set(&mut config.target.page_id, &self.page_id);
        set(&mut config.target.space_key, &self.space_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn copy_cli_is_well_formed() {
        CopyCli::command().debug_assert();
        DeleteCli::command().debug_assert();
    }

    #[test]
    fn flags_override_file_values() {
        let cli = CopyCli::try_parse_from([
            "wikitree-copy",
            "--source-pageid",
            "77",
            "--dest-spacekey",
            "NEW",
            "-r",
            "--conflictsuffix",
            " (copy)",
        ])
        .unwrap();

        let mut config = CopyConfig::default();
        config.source.page_id = Some("1".into());
        config.source.space_key = Some("SRC".into());
        cli.apply_to(&mut config);

        assert_eq!(config.source.page_id.as_deref(), Some("77"));
        assert_eq!(config.source.space_key.as_deref(), Some("SRC"));
        assert_eq!(config.dest.space_key.as_deref(), Some("NEW"));
        assert_eq!(config.conflict_suffix, " (copy)");
        assert!(config.recursive);
    }

    #[test]
    fn recursive_flag_absent_keeps_file_value() {
        let cli = CopyCli::try_parse_from(["wikitree-copy"]).unwrap();
        let mut config = CopyConfig {
            recursive: true,
            ..Default::default()
        };
        cli.apply_to(&mut config);
        assert!(config.recursive);
        assert_eq!(config.conflict_suffix, "- import");
    }

    #[test]
    fn short_flags() {
        let cli = CopyCli::try_parse_from(["wikitree-copy", "-s", "src-token", "-d", "dst-token"])
            .unwrap();
        assert_eq!(cli.source_token.as_deref(), Some("src-token"));
        assert_eq!(cli.dest_token.as_deref(), Some("dst-token"));

        let cli = DeleteCli::try_parse_from([
            "wikitree-delete",
            "-a",
            "acme",
            "-u",
            "me",
            "-t",
            "tok",
            "-p",
            "42",
            "-k",
            "OLD",
        ])
        .unwrap();
        let mut config = DeleteConfig::default();
        cli.apply_to(&mut config);
        assert_eq!(config.target.account.as_deref(), Some("acme"));
        assert_eq!(config.target.page_id.as_deref(), Some("42"));
        assert_eq!(config.target.space_key.as_deref(), Some("OLD"));
    }
}
