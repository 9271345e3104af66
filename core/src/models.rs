use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Remote method exposed by the Raven Tools API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Rank,
    RankAll,
    Domains,
    RankMaxWeek,
    Engines,
    ProfileInfo,
    DomainInfo,
    RemoveDomain,
    AddDomain,
    AddKeyword,
    RemoveKeyword,
    Competitors,
    Keywords,
    KeywordsTags,
    GetLinks,
    AddLinks,
    UpdateLinks,
    DeleteLinks,
    UploadLinks,
}

impl Operation {
    pub const ALL: [Operation; 19] = [
        Operation::Rank,
        Operation::RankAll,
        Operation::Domains,
        Operation::RankMaxWeek,
        Operation::Engines,
        Operation::ProfileInfo,
        Operation::DomainInfo,
        Operation::RemoveDomain,
        Operation::AddDomain,
        Operation::AddKeyword,
        Operation::RemoveKeyword,
        Operation::Competitors,
        Operation::Keywords,
        Operation::KeywordsTags,
        Operation::GetLinks,
        Operation::AddLinks,
        Operation::UpdateLinks,
        Operation::DeleteLinks,
        Operation::UploadLinks,
    ];

    /// Value of the `method` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Rank => "rank",
            Operation::RankAll => "rank_all",
            Operation::Domains => "domains",
            Operation::RankMaxWeek => "rank_max_week",
            Operation::Engines => "engines",
            Operation::ProfileInfo => "profile_info",
            Operation::DomainInfo => "domain_info",
            Operation::RemoveDomain => "remove_domain",
            Operation::AddDomain => "add_domain",
            Operation::AddKeyword => "add_keyword",
            Operation::RemoveKeyword => "remove_keyword",
            Operation::Competitors => "competitors",
            Operation::Keywords => "keywords",
            Operation::KeywordsTags => "keywords_tags",
            Operation::GetLinks => "get_links",
            Operation::AddLinks => "add_links",
            Operation::UpdateLinks => "update_links",
            Operation::DeleteLinks => "delete_links",
            Operation::UploadLinks => "upload_links",
        }
    }

    /// Write operations answer with `{"response": "success"}` when accepted
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Operation::RemoveDomain
                | Operation::AddDomain
                | Operation::AddKeyword
                | Operation::RemoveKeyword
        )
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search engine a rank lookup can be restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchEngine {
    #[default]
    All,
    Google,
    Yahoo,
    /// Bing
    Msn,
    GoogleUk,
    GoogleAu,
    GoogleCa,
    GoogleDk,
    GoogleDe,
    GoogleNo,
    GoogleSe,
    GooglePl,
    GoogleFi,
    GoogleFr,
    GoogleEs,
    GoogleNl,
    YahooCa,
    YahooUk,
    YahooAu,
}

impl SearchEngine {
    pub const ALL: [SearchEngine; 19] = [
        SearchEngine::All,
        SearchEngine::Google,
        SearchEngine::Yahoo,
        SearchEngine::Msn,
        SearchEngine::GoogleUk,
        SearchEngine::GoogleAu,
        SearchEngine::GoogleCa,
        SearchEngine::GoogleDk,
        SearchEngine::GoogleDe,
        SearchEngine::GoogleNo,
        SearchEngine::GoogleSe,
        SearchEngine::GooglePl,
        SearchEngine::GoogleFi,
        SearchEngine::GoogleFr,
        SearchEngine::GoogleEs,
        SearchEngine::GoogleNl,
        SearchEngine::YahooCa,
        SearchEngine::YahooUk,
        SearchEngine::YahooAu,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SearchEngine::All => "all",
            SearchEngine::Google => "google",
            SearchEngine::Yahoo => "yahoo",
            SearchEngine::Msn => "msn",
            SearchEngine::GoogleUk => "google-uk",
            SearchEngine::GoogleAu => "google-au",
            SearchEngine::GoogleCa => "google-ca",
            SearchEngine::GoogleDk => "google-dk",
            SearchEngine::GoogleDe => "google-de",
            SearchEngine::GoogleNo => "google-no",
            SearchEngine::GoogleSe => "google-se",
            SearchEngine::GooglePl => "google-pl",
            SearchEngine::GoogleFi => "google-fi",
            SearchEngine::GoogleFr => "google-fr",
            SearchEngine::GoogleEs => "google-es",
            SearchEngine::GoogleNl => "google-nl",
            SearchEngine::YahooCa => "yahoo-ca",
            SearchEngine::YahooUk => "yahoo-uk",
            SearchEngine::YahooAu => "yahoo-au",
        }
    }

    /// Parse an engine code; `bing` is accepted as an alias for `msn`
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        if code == "bing" {
            return Some(SearchEngine::Msn);
        }
        Self::ALL.iter().find(|e| e.code() == code).copied()
    }
}

impl std::fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Link record as understood by `add_links` and `update_links`.
///
/// Field names on the wire are the service's space-separated column names.
/// `domain` may be left out when the domain is passed with the request instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "link id", default, skip_serializing_if = "Option::is_none")]
    pub link_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "link type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    #[serde(rename = "link text", default, skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
    #[serde(rename = "link url", default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(rename = "link description", default, skip_serializing_if = "Option::is_none")]
    pub link_description: Option<String>,
    #[serde(rename = "website name", default, skip_serializing_if = "Option::is_none")]
    pub website_name: Option<String>,
    #[serde(rename = "website url", default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(rename = "website type", default, skip_serializing_if = "Option::is_none")]
    pub website_type: Option<String>,
    #[serde(rename = "contact name", default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(rename = "contact email", default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(rename = "content id", default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(rename = "cost type", default, skip_serializing_if = "Option::is_none")]
    pub cost_type: Option<String>,
    #[serde(rename = "payment method", default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(rename = "payment reference", default, skip_serializing_if = "Option::is_none")]
    pub payment_reference: Option<String>,
    #[serde(rename = "start date", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "end date", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "creation date", default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "owner name", default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    /// Comma separated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

/// Identifies one link for `delete_links`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkId {
    #[serde(rename = "link id")]
    pub link_id: String,
}

impl LinkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self { link_id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_names_are_unique() {
        let mut names: Vec<_> = Operation::ALL.iter().map(|o| o.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Operation::ALL.len());
        assert_eq!(Operation::RankMaxWeek.to_string(), "rank_max_week");
    }

    #[test]
    fn only_domain_and_keyword_edits_are_writes() {
        let writes: Vec<_> = Operation::ALL.iter().filter(|o| o.is_write()).collect();
        assert_eq!(
            writes,
            vec![
                &Operation::RemoveDomain,
                &Operation::AddDomain,
                &Operation::AddKeyword,
                &Operation::RemoveKeyword
            ]
        );
    }

    #[test]
    fn engine_codes() {
        for engine in SearchEngine::ALL {
            assert_eq!(SearchEngine::from_code(engine.code()), Some(engine));
        }
        assert_eq!(SearchEngine::from_code("Bing"), Some(SearchEngine::Msn));
        assert_eq!(SearchEngine::from_code(" GOOGLE-UK "), Some(SearchEngine::GoogleUk));
        assert_eq!(SearchEngine::from_code("altavista"), None);
    }

    #[test]
    fn link_uses_column_names() {
        let link = Link {
            domain: Some("raventools.com".into()),
            status: Some("active".into()),
            link_text: Some("Raven Blog".into()),
            link_url: Some("http://www.raventools.com/blog".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "domain": "raventools.com",
                "status": "active",
                "link text": "Raven Blog",
                "link url": "http://www.raventools.com/blog"
            })
        );

        let back: Link = serde_json::from_value(json).unwrap();
        assert_eq!(back, link);
    }

    #[test]
    fn link_dates_are_iso() {
        let link = Link {
            link_id: Some("130".into()),
            creation_date: NaiveDate::from_ymd_opt(2012, 7, 14),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&link).unwrap(),
            r#"{"link id":"130","creation date":"2012-07-14"}"#
        );
    }

    #[test]
    fn link_id_record() {
        let ids = vec![LinkId::new("130"), LinkId::new("131")];
        assert_eq!(
            serde_json::to_string(&ids).unwrap(),
            r#"[{"link id":"130"},{"link id":"131"}]"#
        );
    }
}
