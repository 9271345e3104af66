use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use raven_api::RavenClient;
use raven_core::{
    models::{LinkId, SearchEngine},
    RavenError, Result,
};
use serde_json::Value;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank matches for a domain, keyword, engine and date range
    Rank {
        domain: String,
        keyword: String,
        /// First day, YYYY-MM-DD
        #[arg(long)]
        start: NaiveDate,
        /// Last day, YYYY-MM-DD
        #[arg(long)]
        end: NaiveDate,
        #[arg(long, default_value = "all", value_parser = parse_engine)]
        engine: SearchEngine,
    },
    /// Rank matches for every keyword of a domain on one date
    RankAll {
        domain: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
    },
    /// Domains of the current profile
    Domains,
    /// Latest week with complete rank results
    RankMaxWeek {
        domain: String,
        #[arg(long)]
        keyword: Option<String>,
    },
    /// Search engines available for tracking
    Engines,
    /// Profile name and billable keyword usage
    ProfileInfo,
    /// Search engines tracked for a domain
    DomainInfo { domain: String },
    /// Permanently remove a domain
    RemoveDomain { domain: String },
    /// Add a domain tracked on the given engine ids
    AddDomain {
        domain: String,
        /// Engine id, repeatable or comma separated
        #[arg(long = "engine", required = true, value_delimiter = ',')]
        engine_ids: Vec<String>,
    },
    AddKeyword { domain: String, keyword: String },
    RemoveKeyword { domain: String, keyword: String },
    Competitors { domain: String },
    Keywords { domain: String },
    /// Keywords with their tags
    KeywordsTags { domain: String },
    GetLinks {
        domain: String,
        #[arg(long)]
        tag: Option<String>,
    },
    /// Create links from a JSON record or array of records
    AddLinks {
        #[command(flatten)]
        input: LinkInput,
        #[arg(long)]
        domain: Option<String>,
    },
    /// Update links from a JSON record or array of records carrying "link id"
    UpdateLinks {
        #[command(flatten)]
        input: LinkInput,
        #[arg(long)]
        domain: Option<String>,
    },
    DeleteLinks {
        domain: String,
        /// Link id, repeatable
        #[arg(long = "id", required = true)]
        ids: Vec<String>,
    },
    UploadLinks,
    /// Store an API key in the config file
    SetKey { key: String },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct LinkInput {
    /// Read link data from a JSON file
    #[arg(long)]
    file: Option<PathBuf>,
    /// Link data as inline JSON
    #[arg(long)]
    json: Option<String>,
}

impl LinkInput {
    fn read(&self) -> Result<Value> {
        let text = match (&self.file, &self.json) {
            (Some(path), _) => fs::read_to_string(path).map_err(|e| {
                RavenError::Config(format!("cannot read {}: {}", path.display(), e))
            })?,
            (None, Some(json)) => json.clone(),
            (None, None) => return Err(RavenError::Config("no link data given".to_string())),
        };

        let value: Value =
            serde_json::from_str(&text).map_err(|e| RavenError::Parse(e.to_string()))?;
        match value {
            Value::Object(_) | Value::Array(_) => Ok(value),
            _ => Err(RavenError::Parse(
                "link data must be a JSON object or array".to_string(),
            )),
        }
    }
}

fn parse_engine(s: &str) -> std::result::Result<SearchEngine, String> {
    SearchEngine::from_code(s).ok_or_else(|| {
        let codes: Vec<_> = SearchEngine::ALL.iter().map(|e| e.code()).collect();
        format!("unknown engine '{}', expected one of: {}", s, codes.join(", "))
    })
}

/// What a command produced
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Data(Value),
    Write(bool),
}

/// Run one API command. `SetKey` is handled before a client exists.
pub async fn execute(client: &RavenClient, command: Command) -> Result<Outcome> {
    let outcome = match command {
        Command::Rank {
            domain,
            keyword,
            start,
            end,
            engine,
        } => Outcome::Data(client.rank(&domain, &keyword, start, end, engine).await?),
        Command::RankAll { domain, date } => Outcome::Data(client.rank_all(&domain, date).await?),
        Command::Domains => Outcome::Data(client.domains().await?),
        Command::RankMaxWeek { domain, keyword } => {
            Outcome::Data(client.rank_max_week(&domain, keyword.as_deref()).await?)
        }
        Command::Engines => Outcome::Data(client.engines().await?),
        Command::ProfileInfo => Outcome::Data(client.profile_info().await?),
        Command::DomainInfo { domain } => Outcome::Data(client.domain_info(&domain).await?),
        Command::RemoveDomain { domain } => Outcome::Write(client.remove_domain(&domain).await?),
        Command::AddDomain { domain, engine_ids } => {
            Outcome::Write(client.add_domain(&domain, engine_ids.as_slice()).await?)
        }
        Command::AddKeyword { domain, keyword } => {
            Outcome::Write(client.add_keyword(&domain, &keyword).await?)
        }
        Command::RemoveKeyword { domain, keyword } => {
            Outcome::Write(client.remove_keyword(&domain, &keyword).await?)
        }
        Command::Competitors { domain } => Outcome::Data(client.competitors(&domain).await?),
        Command::Keywords { domain } => Outcome::Data(client.keywords(&domain).await?),
        Command::KeywordsTags { domain } => Outcome::Data(client.keywords_tags(&domain).await?),
        Command::GetLinks { domain, tag } => {
            Outcome::Data(client.get_links(&domain, tag.as_deref()).await?)
        }
        Command::AddLinks { input, domain } => {
            let links = input.read()?;
            Outcome::Data(client.add_links(&links, domain.as_deref()).await?)
        }
        Command::UpdateLinks { input, domain } => {
            let links = input.read()?;
            Outcome::Data(client.update_links(&links, domain.as_deref()).await?)
        }
        Command::DeleteLinks { domain, ids } => {
            let ids: Vec<LinkId> = ids.into_iter().map(LinkId::new).collect();
            Outcome::Data(client.delete_links(&ids, &domain).await?)
        }
        Command::UploadLinks => Outcome::Data(client.upload_links().await?),
        Command::SetKey { .. } => {
            return Err(RavenError::Config(
                "set-key does not talk to the API".to_string(),
            ))
        }
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn engine_parser_lists_codes() {
        assert_eq!(parse_engine("google-de"), Ok(SearchEngine::GoogleDe));
        let err = parse_engine("altavista").unwrap_err();
        assert!(err.contains("google-uk"));
    }

    #[test]
    fn inline_link_json() {
        let input = LinkInput {
            file: None,
            json: Some(r#"[{"link id": "130"}]"#.into()),
        };
        assert_eq!(input.read().unwrap(), json!([{"link id": "130"}]));
    }

    #[test]
    fn link_json_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.json");
        fs::write(&path, r#"{"link text": "Raven Blog"}"#).unwrap();
        let input = LinkInput {
            file: Some(path),
            json: None,
        };
        assert_eq!(input.read().unwrap(), json!({"link text": "Raven Blog"}));
    }

    #[test]
    fn scalar_link_json_is_rejected() {
        let input = LinkInput {
            file: None,
            json: Some("42".into()),
        };
        assert!(matches!(input.read(), Err(RavenError::Parse(_))));
    }

    #[tokio::test]
    async fn upload_links_is_reported() {
        let client = RavenClient::new("abc").unwrap();
        let err = execute(&client, Command::UploadLinks).await.unwrap_err();
        assert!(matches!(err, RavenError::NotImplemented("upload_links")));
    }
}
