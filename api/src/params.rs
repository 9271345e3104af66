//! Query parameters for each remote method.
//!
//! Builders here are pure so a request can be inspected without a network:
//! [`Params::pairs`], [`Params::get`] and [`Params::names`] expose exactly
//! what would be put on the query string, after `key` and `format`.
//! Optional arguments are left out entirely when `None`; `Some("")` is sent.

use chrono::NaiveDate;
use raven_core::{
    models::{LinkId, Operation, SearchEngine},
    RavenError, Result,
};
use serde::Serialize;

/// Ordered `name=value` pairs for one request, `method` always first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    operation: Operation,
    pairs: Vec<(&'static str, String)>,
}

impl Params {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            pairs: vec![("method", operation.as_str().to_string())],
        }
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.pairs.push((name, value.into()));
        self
    }

    pub fn with_opt(self, name: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    pub fn with_date(self, name: &'static str, date: NaiveDate) -> Self {
        self.with(name, date.format("%Y-%m-%d").to_string())
    }

    /// JSON-encode `value` into a single parameter
    pub fn with_json<T: Serialize + ?Sized>(self, name: &'static str, value: &T) -> Result<Self> {
        let encoded = serde_json::to_string(value)
            .map_err(|e| RavenError::Parse(format!("cannot encode {name}: {e}")))?;
        Ok(self.with(name, encoded))
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.pairs.iter().map(|(k, _)| *k).collect()
    }
}

pub fn rank(
    domain: &str,
    keyword: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    engine: SearchEngine,
) -> Params {
    Params::new(Operation::Rank)
        .with("domain", domain)
        .with("keyword", keyword)
        .with_date("start_date", start_date)
        .with_date("end_date", end_date)
        .with("engine", engine.code())
}

pub fn rank_all(domain: &str, start_date: NaiveDate) -> Params {
    Params::new(Operation::RankAll)
        .with("domain", domain)
        .with_date("start_date", start_date)
}

pub fn domains() -> Params {
    Params::new(Operation::Domains)
}

pub fn rank_max_week(domain: &str, keyword: Option<&str>) -> Params {
    Params::new(Operation::RankMaxWeek)
        .with("domain", domain)
        .with_opt("keyword", keyword)
}

pub fn engines() -> Params {
    Params::new(Operation::Engines)
}

pub fn profile_info() -> Params {
    Params::new(Operation::ProfileInfo)
}

pub fn domain_info(domain: &str) -> Params {
    Params::new(Operation::DomainInfo).with("domain", domain)
}

pub fn remove_domain(domain: &str) -> Params {
    Params::new(Operation::RemoveDomain).with("domain", domain)
}

pub fn add_domain<S: AsRef<str>>(domain: &str, engine_ids: &[S]) -> Params {
    let engine_id = engine_ids
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",");
    Params::new(Operation::AddDomain)
        .with("domain", domain)
        .with("engine_id", engine_id)
}

pub fn add_keyword(domain: &str, keyword: &str) -> Params {
    Params::new(Operation::AddKeyword)
        .with("domain", domain)
        .with("keyword", keyword)
}

pub fn remove_keyword(domain: &str, keyword: &str) -> Params {
    Params::new(Operation::RemoveKeyword)
        .with("domain", domain)
        .with("keyword", keyword)
}

pub fn competitors(domain: &str) -> Params {
    Params::new(Operation::Competitors).with("domain", domain)
}

pub fn keywords(domain: &str) -> Params {
    Params::new(Operation::Keywords).with("domain", domain)
}

pub fn keywords_tags(domain: &str) -> Params {
    Params::new(Operation::KeywordsTags).with("domain", domain)
}

pub fn get_links(domain: &str, tag: Option<&str>) -> Params {
    Params::new(Operation::GetLinks)
        .with("domain", domain)
        .with_opt("tag", tag)
}

pub fn add_links<T: Serialize + ?Sized>(links: &T, domain: Option<&str>) -> Result<Params> {
    Ok(Params::new(Operation::AddLinks)
        .with_json("link", links)?
        .with_opt("domain", domain))
}

pub fn update_links<T: Serialize + ?Sized>(links: &T, domain: Option<&str>) -> Result<Params> {
    Ok(Params::new(Operation::UpdateLinks)
        .with_json("link", links)?
        .with_opt("domain", domain))
}

pub fn delete_links(links: &[LinkId], domain: &str) -> Result<Params> {
    Ok(Params::new(Operation::DeleteLinks)
        .with_json("link", links)?
        .with("domain", domain))
}
