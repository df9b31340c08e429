//! # Configuration
//!
//! Settings for both tools are resolved from layered sources, highest priority first:
//!
//! 1. **Command-line flags** (applied by the CLI on top of the loaded value).
//! 2. **Environment variables**: `WIKITREE_SOURCE_TOKEN`, `WIKITREE_TOKEN`, etc.
//!    These are bound to flags by the CLI, so they share the flag layer.
//! 3. **Config file**: the file passed with `--config`, otherwise
//!    `wikitree.{yaml,yml,toml}` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! Files are loaded with [`confique`]. The format follows the file extension.
//!
//! ## Copy settings (`CopyConfig`)
//!
//! ```yaml
//! source:
//!   account: acme          # <account>.atlassian.net
//!   user: me@acme.io
//!   token: <api token>
//!   page_id: "65538"       # quote IDs, they are strings
//!   space_key: ENG
//! dest:
//!   account: acme          # same account: source credentials are reused
//!   page_id: "98311"       # optional parent, omit for a top-level copy
//!   space_key: ARCHIVE
//! conflict_suffix: "- import"
//! recursive: true
//! ```
//!
//! ## Delete settings (`DeleteConfig`)
//!
//! The same location block, under `target:`.
//!
//! Loading never validates. [`CopyConfig::resolve`] and [`DeleteConfig::resolve`]
//! check that every required value is present and produce the typed requests the
//! commands consume.

use crate::commands::copy::CopyRequest;
use crate::commands::delete::DeleteRequest;
use crate::error::{Result, WikiError};
use confique::Config;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFLICT_SUFFIX: &str = "- import";

const CONFIG_FILE_NAMES: [&str; 3] = ["wikitree.yaml", "wikitree.yml", "wikitree.toml"];

/// Connection details and page location on one side of an operation.
#[derive(Config, Clone, Default, PartialEq, Eq)]
pub struct LocationConfig {
    /// Site name, as in `<account>.atlassian.net`.
    pub account: Option<String>,
    /// Account user, usually an email address.
    pub user: Option<String>,
    /// API token.
    pub token: Option<String>,
    pub page_id: Option<String>,
    pub space_key: Option<String>,
}

impl std::fmt::Debug for LocationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationConfig")
            .field("account", &self.account)
            .field("user", &self.user)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("page_id", &self.page_id)
            .field("space_key", &self.space_key)
            .finish()
    }
}

/// Settings for `wikitree-copy`.
#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct CopyConfig {
    #[config(nested)]
    pub source: LocationConfig,

    #[config(nested)]
    pub dest: LocationConfig,

    /// Appended to titles when copying within the same space.
    #[config(default = "- import")]
    pub conflict_suffix: String,

    /// Copy the whole subtree instead of the root page only.
    #[config(default = false)]
    pub recursive: bool,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            source: LocationConfig::default(),
            dest: LocationConfig::default(),
            conflict_suffix: DEFAULT_CONFLICT_SUFFIX.to_string(),
            recursive: false,
        }
    }
}

/// Settings for `wikitree-delete`.
#[derive(Config, Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfig {
    #[config(nested)]
    pub target: LocationConfig,
}

/// Resolved account credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account: String,
    pub user: String,
    pub token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account", &self.account)
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// A validated copy: who to read from, who to write to, and what to copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPlan {
    pub source: Credentials,
    pub dest: Credentials,
    pub request: CopyRequest,
}

impl CopyPlan {
    /// Source and destination live in the same account, so one client serves both.
    pub fn shares_account(&self) -> bool {
        self.source == self.dest
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePlan {
    pub credentials: Credentials,
    pub request: DeleteRequest,
}

/// Candidate config files in the OS config directory, highest priority first.
pub fn default_config_files() -> Vec<PathBuf> {
    ProjectDirs::from("com", "wikitree", "wikitree")
        .map(|dirs| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dirs.config_dir().join(name))
                .collect()
        })
        .unwrap_or_default()
}

fn load_layers<C: Config>(explicit: Option<&Path>) -> Result<C> {
    let mut builder = C::builder();
    match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(WikiError::Config(format!(
                    "failed to read config file {}: no such file",
                    path.display()
                )));
            }
            builder = builder.file(path);
        }
        None => {
            for path in default_config_files() {
                builder = builder.file(path);
            }
        }
    }
    Ok(builder.load()?)
}

fn require<'a>(value: &'a Option<String>, message: &str) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(WikiError::Config(format!("please provide {message}"))),
    }
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl CopyConfig {
    /// Load from `path`, or from the default config files when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        load_layers(path)
    }

    pub fn resolve(&self) -> Result<CopyPlan> {
        let source_user = require(&self.source.user, "source username")?;
        let source_token = require(&self.source.token, "source token")?;
        let source_page_id = require(&self.source.page_id, "source page ID")?;
        let source_space_key = require(&self.source.space_key, "source space key")?;
        let source_account = require(&self.source.account, "source account")?;
        let dest_account = require(
            &self.dest.account,
            "destination account. Can be same as source account",
        )?;
        let dest_space_key = require(&self.dest.space_key, "destination space key")?;

        let source = Credentials {
            account: source_account.to_string(),
            user: source_user.to_string(),
            token: source_token.to_string(),
        };
        let dest = if dest_account == source_account {
            source.clone()
        } else {
            let token = require(&self.dest.token, "destination token")?;
            let user = require(&self.dest.user, "destination username")?;
            Credentials {
                account: dest_account.to_string(),
                user: user.to_string(),
                token: token.to_string(),
            }
        };

        Ok(CopyPlan {
            source,
            dest,
            request: CopyRequest {
                source_page_id: source_page_id.to_string(),
                source_space_key: source_space_key.to_string(),
                dest_space_key: dest_space_key.to_string(),
                dest_parent_id: optional(&self.dest.page_id),
                recursive: self.recursive,
                conflict_suffix: self.conflict_suffix.clone(),
            },
        })
    }
}

impl DeleteConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        load_layers(path)
    }

    pub fn resolve(&self) -> Result<DeletePlan> {
        let account = require(&self.target.account, "account")?;
        let user = require(&self.target.user, "username")?;
        let token = require(&self.target.token, "token")?;
        let page_id = require(&self.target.page_id, "page ID")?;

        Ok(DeletePlan {
            credentials: Credentials {
                account: account.to_string(),
                user: user.to_string(),
                token: token.to_string(),
            },
            request: DeleteRequest {
                page_id: page_id.to_string(),
                space_key: optional(&self.target.space_key).unwrap_or_default(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn location(account: &str, user: &str, token: &str, page: &str, space: &str) -> LocationConfig {
        let some = |v: &str| (!v.is_empty()).then(|| v.to_string());
        LocationConfig {
            account: some(account),
            user: some(user),
            token: some(token),
            page_id: some(page),
            space_key: some(space),
        }
    }

    fn complete_copy_config() -> CopyConfig {
        CopyConfig {
            source: location("acme", "me@acme.io", "secret", "100", "SRC"),
            dest: location("acme", "", "", "", "DST"),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = CopyConfig::default();
        assert_eq!(config.conflict_suffix, "- import");
        assert!(!config.recursive);
    }

    #[test]
    fn same_account_reuses_source_credentials() {
        let plan = complete_copy_config().resolve().unwrap();
        assert!(plan.shares_account());
        assert_eq!(plan.dest.token, "secret");
        assert_eq!(plan.request.source_page_id, "100");
        assert_eq!(plan.request.dest_space_key, "DST");
        assert_eq!(plan.request.dest_parent_id, None);
    }

    #[test]
    fn other_account_requires_destination_credentials() {
        let mut config = complete_copy_config();
        config.dest.account = Some("other".into());

        let err = config.resolve().unwrap_err();
        assert_eq!(err.to_string(), "please provide destination token");

        config.dest.token = Some("dest-secret".into());
        let err = config.resolve().unwrap_err();
        assert_eq!(err.to_string(), "please provide destination username");

        config.dest.user = Some("you@other.io".into());
        let plan = config.resolve().unwrap();
        assert!(!plan.shares_account());
        assert_eq!(plan.dest.account, "other");
    }

    #[test]
    fn missing_values_reported_in_order() {
        let mut config = CopyConfig::default();
        let expect = |config: &CopyConfig, msg: &str| {
            assert_eq!(config.resolve().unwrap_err().to_string(), msg);
        };

        expect(&config, "please provide source username");
        config.source.user = Some("me".into());
        expect(&config, "please provide source token");
        config.source.token = Some("t".into());
        expect(&config, "please provide source page ID");
        config.source.page_id = Some("1".into());
        expect(&config, "please provide source space key");
        config.source.space_key = Some("SRC".into());
        expect(&config, "please provide source account");
        config.source.account = Some("acme".into());
        expect(
            &config,
            "please provide destination account. Can be same as source account",
        );
        config.dest.account = Some("acme".into());
        expect(&config, "please provide destination space key");
        config.dest.space_key = Some("DST".into());
        assert!(config.resolve().is_ok());
    }

    #[test]
    fn blank_values_count_as_missing() {
        let mut config = complete_copy_config();
        config.source.token = Some("   ".into());
        assert_eq!(
            config.resolve().unwrap_err().to_string(),
            "please provide source token"
        );
    }

    #[test]
    fn loads_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copy.yaml");
        fs::write(
            &path,
            r#"
source:
  account: acme
  user: me@acme.io
  token: secret
  page_id: "65538"
  space_key: ENG
dest:
  account: acme
  page_id: "98311"
  space_key: ARCHIVE
recursive: true
"#,
        )
        .unwrap();

        let config = CopyConfig::load(Some(&path)).unwrap();
        assert!(config.recursive);
        assert_eq!(config.conflict_suffix, "- import");

        let plan = config.resolve().unwrap();
        assert_eq!(plan.request.source_page_id, "65538");
        assert_eq!(plan.request.dest_parent_id.as_deref(), Some("98311"));
        assert_eq!(plan.request.dest_space_key, "ARCHIVE");
    }

    #[test]
    fn loads_toml_delete_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("delete.toml");
        fs::write(
            &path,
            r#"
[target]
account = "acme"
user = "me@acme.io"
token = "secret"
page_id = "42"
space_key = "OLD"
"#,
        )
        .unwrap();

        let plan = DeleteConfig::load(Some(&path)).unwrap().resolve().unwrap();
        assert_eq!(plan.credentials.account, "acme");
        assert_eq!(plan.request.page_id, "42");
        assert_eq!(plan.request.space_key, "OLD");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CopyConfig::load(Some(&dir.path().join("nope.yaml"))).unwrap_err();
        assert!(err.to_string().contains("nope.yaml"));
    }

    #[test]
    fn delete_requires_page_id() {
        let config = DeleteConfig {
            target: location("acme", "me", "secret", "", "SRC"),
        };
        assert_eq!(
            config.resolve().unwrap_err().to_string(),
            "please provide page ID"
        );
    }

    #[test]
    fn debug_output_redacts_tokens() {
        let config = complete_copy_config();
        let plan = config.resolve().unwrap();
        assert!(!format!("{:?}", config).contains("secret"));
        assert!(!format!("{:?}", plan).contains("secret"));
    }
}
