//! Client for the COTOHA API dependency parse endpoint (`/nlp/v1/parse`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::http::default_client;
use crate::parser::DependencyParser;
use crate::sentence::{Chunk, Morpheme, PartOfSpeech, Sentence};

const DEFAULT_BASE_URL: &str = "https://api.ce-cotoha.com/api/dev";

pub struct CotohaParser {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl fmt::Debug for CotohaParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CotohaParser")
            .field("client", &"<reqwest::Client>")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Clone for CotohaParser {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            access_token: self.access_token.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

impl CotohaParser {
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            client: default_client(),
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Override the API base URL (the part before `/nlp/v1/parse`).
    /// Used for the developer/enterprise hosts and for tests.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl DependencyParser for CotohaParser {
    async fn parse(&self, text: &str) -> Result<Sentence, ParseError> {
        let body = RequestBody {
            sentence: text,
            r#type: "default",
        };

        let response = self
            .client
            .post(format!("{}/nlp/v1/parse", self.base_url))
            .bearer_auth(&self.access_token)
            .header("content-type", "application/json;charset=UTF-8")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ParseError::Auth { provider: "cotoha" });
        }

        let text = response.text().await.map_err(ParseError::Http)?;
        if !status.is_success() {
            tracing::error!("COTOHA API error {status}: {text}");
            return Err(ParseError::Api {
                provider: "cotoha",
                status: status.as_u16(),
                message: text.trim().to_owned(),
            });
        }

        tracing::debug!(raw_response = %text, "COTOHA parse response");
        let resp: ApiResponse = serde_json::from_str(&text)?;

        if resp.status != 0 {
            return Err(ParseError::Api {
                provider: "cotoha",
                status: 200,
                message: format!("API status {}: {}", resp.status, resp.message),
            });
        }

        Ok(map_chunks(resp.result))
    }

    fn name(&self) -> &'static str {
        "cotoha"
    }
}

fn map_chunks(chunks: Vec<ApiChunk>) -> Sentence {
    let mapped = chunks
        .into_iter()
        .map(|c| {
            let head = u32::try_from(c.chunk_info.head)
                .ok()
                .filter(|h| *h != c.chunk_info.id);
            let morphemes = c
                .tokens
                .into_iter()
                .map(|t| Morpheme::new(t.form, PartOfSpeech::from_ja(&t.pos)))
                .collect();
            Chunk::new(c.chunk_info.id, head, morphemes)
        })
        .collect();
    Sentence::new(mapped)
}

#[derive(Serialize)]
struct RequestBody<'a> {
    sentence: &'a str,
    r#type: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    result: Vec<ApiChunk>,
    status: i64,
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
struct ApiChunk {
    chunk_info: ChunkInfo,
    #[serde(default)]
    tokens: Vec<ApiToken>,
}

#[derive(Deserialize)]
struct ChunkInfo {
    id: u32,
    /// `-1` marks the sentence root.
    head: i64,
}

#[derive(Deserialize)]
struct ApiToken {
    form: String,
    pos: String,
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "result": [
            {
                "chunk_info": { "id": 0, "head": 1, "dep": "D", "chunk_head": 0, "chunk_func": 1 },
                "tokens": [
                    { "id": 0, "form": "見る", "kana": "ミル", "lemma": "見る", "pos": "動詞語幹" },
                    { "id": 1, "form": "の", "kana": "ノ", "lemma": "の", "pos": "格助詞" }
                ]
            },
            {
                "chunk_info": { "id": 1, "head": -1, "dep": "O", "chunk_head": 0, "chunk_func": 0 },
                "tokens": [
                    { "id": 2, "form": "好き", "kana": "スキ", "lemma": "好き", "pos": "形容詞語幹" }
                ]
            }
        ],
        "status": 0,
        "message": ""
    }"#;

    #[test]
    fn map_chunks_normalizes_schema() {
        let resp: ApiResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        let sentence = map_chunks(resp.result);

        assert_eq!(sentence.chunks.len(), 2);
        assert_eq!(sentence.chunks[0].head, Some(1));
        assert_eq!(sentence.chunks[1].head, None);
        assert_eq!(sentence.chunks[0].surface(), "見るの");
        assert_eq!(sentence.chunks[0].morphemes[0].pos, PartOfSpeech::Verb);
        assert_eq!(sentence.chunks[0].morphemes[1].pos, PartOfSpeech::Particle);
        assert_eq!(sentence.chunks[1].morphemes[0].pos, PartOfSpeech::Adjective);
    }

    #[test]
    fn debug_redacts_access_token() {
        let parser = CotohaParser::new("secret-token");
        let debug = format!("{parser:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn name_returns_cotoha() {
        assert_eq!(CotohaParser::new("t").name(), "cotoha");
    }

    #[tokio::test]
    async fn parse_maps_successful_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/nlp/v1/parse"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_partial_json(serde_json::json!({
                "sentence": "見るの好き",
                "type": "default"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_RESPONSE))
            .mount(&server)
            .await;

        let parser = CotohaParser::new("test-token").with_base_url(server.uri());
        let sentence = parser.parse("見るの好き").await.unwrap();
        assert_eq!(sentence.chunks.len(), 2);
    }

    #[tokio::test]
    async fn parse_empty_result_yields_empty_sentence() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"result":[],"status":0,"message":""}"#),
            )
            .mount(&server)
            .await;

        let parser = CotohaParser::new("test-token").with_base_url(server.uri());
        let sentence = parser.parse("……").await.unwrap();
        assert!(sentence.is_empty());
    }

    #[tokio::test]
    async fn parse_unauthorized_maps_to_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let parser = CotohaParser::new("expired").with_base_url(server.uri());
        let err = parser.parse("テスト").await.unwrap_err();
        assert!(matches!(err, ParseError::Auth { provider: "cotoha" }));
    }

    #[tokio::test]
    async fn parse_nonzero_status_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"result":[],"status":99998,"message":"parameter error"}"#,
            ))
            .mount(&server)
            .await;

        let parser = CotohaParser::new("test-token").with_base_url(server.uri());
        let err = parser.parse("テスト").await.unwrap_err();
        assert!(err.to_string().contains("parameter error"));
    }

    #[tokio::test]
    #[ignore = "requires AKARI_COTOHA_ACCESS_TOKEN env var"]
    async fn integration_cotoha_parse() {
        let token = std::env::var("AKARI_COTOHA_ACCESS_TOKEN")
            .expect("AKARI_COTOHA_ACCESS_TOKEN must be set");
        let parser = CotohaParser::new(token);
        let sentence = parser.parse("あかりはケーキが大好き").await.unwrap();
        assert!(!sentence.is_empty());
    }
}
