//! Client for the Yahoo! JAPAN Text Analytics dependency parse service
//! (DAService V2, JSON-RPC 2.0).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::http::default_client;
use crate::parser::DependencyParser;
use crate::sentence::{Chunk, Morpheme, PartOfSpeech, Sentence};

const API_URL: &str = "https://jlp.yahooapis.jp/DAService/V2/parse";
const RPC_METHOD: &str = "jlp.daservice.parse";

/// Index of the part-of-speech field inside a DAService token array
/// (`[surface, reading, baseform, pos, ...]`).
const TOKEN_POS_INDEX: usize = 3;

pub struct YahooParser {
    client: reqwest::Client,
    app_id: String,
    base_url: String,
}

impl fmt::Debug for YahooParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YahooParser")
            .field("client", &"<reqwest::Client>")
            .field("app_id", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Clone for YahooParser {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            app_id: self.app_id.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

impl YahooParser {
    #[must_use]
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            client: default_client(),
            app_id: app_id.into(),
            base_url: API_URL.to_owned(),
        }
    }

    /// Override the service URL. Intended for tests only.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn send_request(&self, text: &str) -> Result<ApiResponse, ParseError> {
        let body = RequestBody {
            id: "akarifavo",
            jsonrpc: "2.0",
            method: RPC_METHOD,
            params: RequestParams { q: text },
        };

        let response = self
            .client
            .post(&self.base_url)
            // DAService authenticates via the User-Agent header.
            .header("user-agent", format!("Yahoo AppID: {}", self.app_id))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ParseError::Auth { provider: "yahoo" });
        }

        let text = response.text().await.map_err(ParseError::Http)?;
        if !status.is_success() {
            tracing::error!("DAService error {status}: {text}");
            return Err(ParseError::Api {
                provider: "yahoo",
                status: status.as_u16(),
                message: text.trim().to_owned(),
            });
        }

        tracing::debug!(raw_response = %text, "DAService response");
        Ok(serde_json::from_str(&text)?)
    }
}

impl DependencyParser for YahooParser {
    async fn parse(&self, text: &str) -> Result<Sentence, ParseError> {
        let resp = self.send_request(text).await?;

        if let Some(err) = resp.error {
            return Err(ParseError::Api {
                provider: "yahoo",
                status: 200,
                message: format!("RPC error {}: {}", err.code, err.message),
            });
        }

        let chunks = resp.result.map(|r| r.chunks).unwrap_or_default();
        Ok(map_chunks(chunks))
    }

    fn name(&self) -> &'static str {
        "yahoo"
    }
}

fn map_chunks(chunks: Vec<ApiChunk>) -> Sentence {
    let mapped = chunks
        .into_iter()
        .map(|c| {
            let head = u32::try_from(c.head).ok().filter(|h| *h != c.id);
            let morphemes = c
                .tokens
                .iter()
                .map(|t| {
                    let surface = t.first().map(String::as_str).unwrap_or_default();
                    let pos = t
                        .get(TOKEN_POS_INDEX)
                        .map_or(PartOfSpeech::Other, |p| PartOfSpeech::from_ja(p));
                    Morpheme::new(surface, pos)
                })
                .collect();
            Chunk::new(c.id, head, morphemes)
        })
        .collect();
    Sentence::new(mapped)
}

#[derive(Serialize)]
struct RequestBody<'a> {
    id: &'a str,
    jsonrpc: &'a str,
    method: &'a str,
    params: RequestParams<'a>,
}

#[derive(Serialize)]
struct RequestParams<'a> {
    q: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    result: Option<ApiResult>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct ApiResult {
    #[serde(default)]
    chunks: Vec<ApiChunk>,
}

#[derive(Deserialize)]
struct ApiChunk {
    id: u32,
    /// `-1` marks the sentence root.
    head: i64,
    #[serde(default)]
    tokens: Vec<Vec<String>>,
}

#[derive(Deserialize)]
struct ApiError {
    code: i64,
    message: String,
}
