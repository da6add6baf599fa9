use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{GameError, Result};
use crate::model::CategoryId;

pub const DEFAULT_API_URL: &str = "https://jservice.io/api";

/// One entry of the "list categories" endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CategorySummary {
    pub id: CategoryId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub clues_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiClue {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

/// The "get category by id" endpoint: title plus the full clue list.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDetails {
    pub id: CategoryId,
    pub title: String,
    #[serde(default)]
    pub clues_count: usize,
    #[serde(default)]
    pub clues: Vec<ApiClue>,
}

/// Read-only view of the external trivia service.
pub trait TriviaApi {
    /// First category at `offset`, or `None` when the offset is past the end.
    fn random_category(&self, offset: u32) -> Result<Option<CategorySummary>>;

    fn category(&self, id: CategoryId) -> Result<CategoryDetails>;
}

pub fn decode_categories(body: &str) -> Result<Vec<CategorySummary>> {
    Ok(serde_json::from_str(body)?)
}

pub fn decode_category(body: &str) -> Result<CategoryDetails> {
    Ok(serde_json::from_str(body)?)
}

/// Strip HTML markup and backslash escapes the service embeds in clue text.
/// A `<` that does not open a tag is kept as text.
pub fn clean_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(c) = rest.chars().next() {
        rest = &rest[c.len_utf8()..];
        match c {
            '<' => match tag_len(rest) {
                Some(len) => rest = &rest[len..],
                None => out.push(c),
            },
            '\\' => match rest.chars().next() {
                Some(next @ ('\'' | '"' | '\\')) => {
                    out.push(next);
                    rest = &rest[1..];
                }
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }

    out.replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Length of the tag body following a `<`, through its closing `>`.
fn tag_len(rest: &str) -> Option<usize> {
    let first = rest.chars().next()?;
    if !(first.is_ascii_alphabetic() || first == '/' || first == '!') {
        return None;
    }
    rest.find('>').map(|end| end + 1)
}

pub struct HttpApi {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("jeopardy/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, ?query, "GET");
        let body = self
            .client
            .get(&url)
            .query(query)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(body)
    }
}

impl TriviaApi for HttpApi {
    fn random_category(&self, offset: u32) -> Result<Option<CategorySummary>> {
        let body = self.get(
            "categories",
            &[("count", "1".to_string()), ("offset", offset.to_string())],
        )?;
        Ok(decode_categories(&body)?.into_iter().next())
    }

    fn category(&self, id: CategoryId) -> Result<CategoryDetails> {
        let body = self.get("category", &[("id", id.to_string())])?;
        let details = decode_category(&body)?;
        if details.id != id {
            return Err(GameError::Malformed(format!(
                "asked for category {} but got {}",
                id, details.id
            )));
        }
        Ok(details)
    }
}
