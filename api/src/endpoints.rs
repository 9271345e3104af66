use chrono::NaiveDate;
use raven_core::{
    models::{LinkId, Operation, SearchEngine},
    RavenError, Result,
};
use serde::Serialize;
use serde_json::Value;

use crate::{client::RavenClient, params};

impl RavenClient {
    /// Rank matches for a domain, keyword, engine and date range. Only domains
    /// and keywords added to the account (competitors included) are available.
    pub async fn rank(
        &self,
        domain: &str,
        keyword: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        engine: SearchEngine,
    ) -> Result<Value> {
        self.get_data(params::rank(domain, keyword, start_date, end_date, engine))
            .await
    }

    /// Rank matches for every keyword of a domain on one date.
    pub async fn rank_all(&self, domain: &str, start_date: NaiveDate) -> Result<Value> {
        self.get_data(params::rank_all(domain, start_date)).await
    }

    /// Domains available to the profile behind the API key.
    pub async fn domains(&self) -> Result<Value> {
        self.get_data(params::domains()).await
    }

    /// ISO week (`YYYYWW`) and date of the latest week with complete results,
    /// for the whole domain or one of its keywords. The service answers with
    /// `status: "no data"` and null week/date when nothing is available.
    pub async fn rank_max_week(&self, domain: &str, keyword: Option<&str>) -> Result<Value> {
        self.get_data(params::rank_max_week(domain, keyword)).await
    }

    /// Search engines that can be tracked when adding a domain.
    pub async fn engines(&self) -> Result<Value> {
        self.get_data(params::engines()).await
    }

    /// Profile name and billable keyword usage.
    pub async fn profile_info(&self) -> Result<Value> {
        self.get_data(params::profile_info()).await
    }

    /// Search engines tracked for a domain.
    pub async fn domain_info(&self, domain: &str) -> Result<Value> {
        self.get_data(params::domain_info(domain)).await
    }

    /// Permanently removes a domain. There is no undo.
    pub async fn remove_domain(&self, domain: &str) -> Result<bool> {
        self.write_data(params::remove_domain(domain)).await
    }

    /// Adds a domain tracked on the given engine ids (see [`Self::engines`]).
    pub async fn add_domain<S: AsRef<str>>(&self, domain: &str, engine_ids: &[S]) -> Result<bool> {
        self.write_data(params::add_domain(domain, engine_ids)).await
    }

    pub async fn add_keyword(&self, domain: &str, keyword: &str) -> Result<bool> {
        self.write_data(params::add_keyword(domain, keyword)).await
    }

    pub async fn remove_keyword(&self, domain: &str, keyword: &str) -> Result<bool> {
        self.write_data(params::remove_keyword(domain, keyword)).await
    }

    pub async fn competitors(&self, domain: &str) -> Result<Value> {
        self.get_data(params::competitors(domain)).await
    }

    pub async fn keywords(&self, domain: &str) -> Result<Value> {
        self.get_data(params::keywords(domain)).await
    }

    pub async fn keywords_tags(&self, domain: &str) -> Result<Value> {
        self.get_data(params::keywords_tags(domain)).await
    }

    /// All links of a domain, optionally filtered to one tag.
    pub async fn get_links(&self, domain: &str, tag: Option<&str>) -> Result<Value> {
        self.get_data(params::get_links(domain, tag)).await
    }

    /// Creates links and returns their new ids. `domain` may be omitted when
    /// every record carries its own.
    pub async fn add_links<T: Serialize + ?Sized>(
        &self,
        links: &T,
        domain: Option<&str>,
    ) -> Result<Value> {
        self.get_data(params::add_links(links, domain)?).await
    }

    /// Updates links by `link id` and returns per-link update status.
    pub async fn update_links<T: Serialize + ?Sized>(
        &self,
        links: &T,
        domain: Option<&str>,
    ) -> Result<Value> {
        self.get_data(params::update_links(links, domain)?).await
    }

    /// Deletes links and returns per-link deletion status.
    pub async fn delete_links(&self, links: &[LinkId], domain: &str) -> Result<Value> {
        self.get_data(params::delete_links(links, domain)?).await
    }

    /// Bulk link upload is not supported by this client.
    pub async fn upload_links(&self) -> Result<Value> {
        Err(RavenError::NotImplemented(Operation::UploadLinks.as_str()))
    }
}
