//! WordsAPI lexicon provider implementation.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;
use tracing::debug;
use url::Url;

use jeeves_core::error::{ErrorCode, JeevesError, JeevesResult};
use jeeves_core::traits::{Lexicon, LexiconConfig};
use jeeves_core::types::WordDetails;

/// WordsAPI lexicon provider.
///
/// Issues `GET <base_url>/<word>` with the API key header and decodes the
/// senses of the word.
pub struct WordsApiLexicon {
    client: Client,
    base_url: Url,
    api_key_header: HeaderName,
    api_key: Secret<String>,
}

impl WordsApiLexicon {
    /// Create a new WordsAPI provider.
    pub fn new(config: &LexiconConfig) -> JeevesResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                JeevesError::config_missing(
                    "WordsAPI key not found. Set WORDS_API_KEY or provide api_key in config.",
                )
            })?;

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            JeevesError::config_invalid(format!("Invalid lexicon URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(JeevesError::config_invalid(format!(
                "Lexicon URL '{}' cannot be a base URL",
                config.base_url
            )));
        }

        let api_key_header = HeaderName::from_bytes(config.api_key_header.as_bytes())
            .map_err(|_| JeevesError::config_invalid("Invalid API key header name"))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| JeevesError::config_invalid(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            api_key_header,
            api_key: Secret::new(api_key),
        })
    }

    /// URL of the entry for `word`, with the word as an escaped path segment.
    fn word_url(&self, word: &str) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so path segments are available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(word);
        }
        url
    }

    fn api_key_value(&self, word: &str) -> JeevesResult<HeaderValue> {
        let mut value = HeaderValue::from_str(self.api_key.expose_secret()).map_err(|_| {
            JeevesError::lookup(word, ErrorCode::LexConnectionFailed, "API key is not a valid header value")
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

fn request_error(word: &str, err: reqwest::Error) -> JeevesError {
    let code = if err.is_timeout() {
        ErrorCode::LexTimeout
    } else {
        ErrorCode::LexConnectionFailed
    };
    JeevesError::lookup(word, code, format!("WordsAPI request failed: {}", err)).with_source(err)
}

/// Decode a WordsAPI response body.
pub(crate) fn parse_details(word: &str, body: &[u8]) -> JeevesResult<WordDetails> {
    serde_json::from_slice(body).map_err(|e| {
        JeevesError::lookup(
            word,
            ErrorCode::LexInvalidResponse,
            format!("Malformed WordsAPI response: {}", e),
        )
        .with_source(e)
    })
}

#[async_trait]
impl Lexicon for WordsApiLexicon {
    async fn lookup(&self, word: &str) -> JeevesResult<WordDetails> {
        let url = self.word_url(word);
        debug!(url = %url, "Searching the web for word {}", word);

        let response = self
            .client
            .get(url)
            .header(self.api_key_header.clone(), self.api_key_value(word)?)
            .send()
            .await
            .map_err(|e| request_error(word, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(JeevesError::lookup(
                word,
                ErrorCode::LexBadStatus,
                format!("WordsAPI returned {}", status),
            ));
        }

        let body = response.bytes().await.map_err(|e| request_error(word, e))?;
        parse_details(word, &body)
    }

    fn provider_name(&self) -> &str {
        "wordsapi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LexiconConfig {
        LexiconConfig {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_key_is_configuration_error() {
        let err = WordsApiLexicon::new(&LexiconConfig::default()).err().unwrap();
        assert_eq!(err.code(), ErrorCode::CfgMissingValue);
    }

    #[test]
    fn test_word_url() {
        let lexicon = WordsApiLexicon::new(&config()).unwrap();
        assert_eq!(
            lexicon.word_url("kitten").as_str(),
            "https://wordsapiv1.p.mashape.com/words/kitten"
        );
        assert_eq!(
            lexicon.word_url("ice cream").as_str(),
            "https://wordsapiv1.p.mashape.com/words/ice%20cream"
        );
    }

    #[test]
    fn test_word_url_without_trailing_slash() {
        let lexicon = WordsApiLexicon::new(&LexiconConfig {
            base_url: "http://localhost:8080/words".to_string(),
            ..config()
        })
        .unwrap();
        assert_eq!(lexicon.word_url("cat").as_str(), "http://localhost:8080/words/cat");
    }

    #[test]
    fn test_parse_words_api_payload() {
        let body = br#"{
            "word": "kitten",
            "results": [
                {"definition": "young domestic cat", "partOfSpeech": "noun",
                 "typeOf": ["young mammal"], "hasParts": "whisker"},
                {"definition": "have kittens", "partOfSpeech": "verb"}
            ],
            "frequency": 3.57
        }"#;

        let details = parse_details("kitten", body).unwrap();
        let senses = details.results.unwrap();
        assert_eq!(senses.len(), 2);
        assert_eq!(senses[0].type_of, vec!["young mammal"]);
        assert_eq!(senses[0].has_parts, vec!["whisker"]);
        assert!(senses[1].type_of.is_empty());
    }

    #[test]
    fn test_malformed_payload() {
        let err = parse_details("kitten", b"<html>").unwrap_err();
        assert_eq!(err.code(), ErrorCode::LexInvalidResponse);

        // `definition` is mandatory on every sense.
        let err = parse_details("kitten", br#"{"results": [{"typeOf": []}]}"#).unwrap_err();
        assert_eq!(err.code(), ErrorCode::LexInvalidResponse);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_lookup_failure() {
        let lexicon = WordsApiLexicon::new(&LexiconConfig {
            base_url: "http://127.0.0.1:9/words/".to_string(),
            timeout_secs: 2,
            ..config()
        })
        .unwrap();

        let err = lexicon.lookup("kitten").await.unwrap_err();
        assert!(matches!(err, JeevesError::ExternalLookupFailed { .. }));
    }

    /// Listener that accepts connections and never answers them.
    async fn silent_server() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut open = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                open.push(socket);
            }
        });
        format!("http://{}/words/", addr)
    }

    #[tokio::test]
    async fn test_silent_host_times_out() {
        let lexicon = WordsApiLexicon::new(&LexiconConfig {
            base_url: silent_server().await,
            timeout_secs: 1,
            ..config()
        })
        .unwrap();

        let err = lexicon.lookup("kitten").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::LexTimeout);
    }

    #[tokio::test]
    async fn test_timed_out_research_has_no_candidates() {
        use jeeves_core::{Hearing, InMemoryStore, LexiconAnalyzer, Memory, Research};
        use std::sync::Arc;

        let lexicon = WordsApiLexicon::new(&LexiconConfig {
            base_url: silent_server().await,
            timeout_secs: 1,
            ..config()
        })
        .unwrap();
        let memory = Memory::new(Arc::new(InMemoryStore::new()));
        let hearing = Hearing::new(Arc::new(LexiconAnalyzer::new()), memory);
        let research = Research::new(Arc::new(lexicon), hearing);

        assert!(research.research("kitten").await.unwrap().is_empty());
    }
}
