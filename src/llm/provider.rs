//! Static provider registry.
//!
//! Each supported LLM backend is described by one [`ProviderProfile`]: its
//! endpoint, where the credential goes, how the request body is shaped and
//! where the answer text sits in the response.  The dispatcher never branches
//! on the provider; it asks the profile.
//!
//! | Provider           | Auth                         | Request shape            | Text path                          |
//! |--------------------|------------------------------|--------------------------|------------------------------------|
//! | `gemini*`          | `?key=` query parameter      | single content-part      | `candidates[0].content.parts[0].text` |
//! | `claude`           | `x-api-key` + version header | one user message         | `content[0].text`                  |
//! | `perplexity`       | `Authorization: Bearer`      | system + user messages   | `choices[0].message.content`       |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use super::prompt::LINGUIST_SYSTEM_PROMPT;
use super::transport::HttpRequest;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";
const CLAUDE_MAX_TOKENS: u32 = 20_000;
const CLAUDE_TEMPERATURE: u32 = 1;
const PERPLEXITY_MODEL: &str = "sonar-pro";

// ---------------------------------------------------------------------------
// ProviderId
// ---------------------------------------------------------------------------

/// Identifier of a supported provider, as written in settings and on the
/// command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ProviderId {
    /// Gemini 2.0 Flash.
    #[default]
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "gemini-2.5-flash")]
    Gemini25Flash,
    #[serde(rename = "gemini-2.5-pro")]
    Gemini25Pro,
    /// Claude Sonnet 4.
    #[serde(rename = "claude")]
    Claude,
    /// Perplexity Sonar Pro.
    #[serde(rename = "perplexity")]
    Perplexity,
}

impl ProviderId {
    /// Every provider, in menu order.
    pub const ALL: [ProviderId; 5] = [
        ProviderId::Gemini,
        ProviderId::Gemini25Flash,
        ProviderId::Gemini25Pro,
        ProviderId::Claude,
        ProviderId::Perplexity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProviderId::Gemini => "gemini",
            ProviderId::Gemini25Flash => "gemini-2.5-flash",
            ProviderId::Gemini25Pro => "gemini-2.5-pro",
            ProviderId::Claude => "claude",
            ProviderId::Perplexity => "perplexity",
        }
    }

    /// The registry entry for this provider.
    pub fn profile(self) -> &'static ProviderProfile {
        match self {
            ProviderId::Gemini => &GEMINI,
            ProviderId::Gemini25Flash => &GEMINI_25_FLASH,
            ProviderId::Gemini25Pro => &GEMINI_25_PRO,
            ProviderId::Claude => &CLAUDE,
            ProviderId::Perplexity => &PERPLEXITY,
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a provider name is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown provider `{0}` (expected one of: gemini, gemini-2.5-flash, gemini-2.5-pro, claude, perplexity)")]
pub struct UnknownProvider(pub String);

impl FromStr for ProviderId {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownProvider(s.to_string()))
    }
}

impl TryFrom<String> for ProviderId {
    type Error = UnknownProvider;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ---------------------------------------------------------------------------
// ProviderProfile
// ---------------------------------------------------------------------------

/// Where the credential is attached to the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPlacement {
    /// Appended to the URL as a percent-encoded `?<name>=<key>` pair.
    QueryParam(&'static str),
    /// Sent verbatim in the named header.
    Header(&'static str),
    /// `Authorization: Bearer <key>`.
    Bearer,
}

/// Static description of one provider.
pub struct ProviderProfile {
    pub id: ProviderId,
    /// Name used in user-facing messages.
    pub display_name: &'static str,
    pub endpoint: &'static str,
    pub auth: AuthPlacement,
    /// Headers sent on every request besides the credential.
    pub extra_headers: &'static [(&'static str, &'static str)],
    /// Builds the JSON body from the model-facing text.
    pub build_body: fn(&str) -> Value,
    /// Locates the answer text in a successful response.
    pub extract_text: fn(&Value) -> Option<&str>,
}

impl ProviderProfile {
    /// Assemble the outgoing request for `text`, authenticated with `key`.
    pub fn build_request(&self, key: &str, text: &str) -> HttpRequest {
        let mut url = self.endpoint.to_string();
        let mut headers: Vec<(String, String)> = self
            .extra_headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        match self.auth {
            AuthPlacement::QueryParam(name) => {
                url = reqwest::Url::parse_with_params(self.endpoint, &[(name, key)])
                    .expect("registry endpoints are valid URLs")
                    .into();
            }
            AuthPlacement::Header(name) => headers.push((name.to_string(), key.to_string())),
            AuthPlacement::Bearer => {
                headers.push(("Authorization".to_string(), format!("Bearer {key}")))
            }
        }

        HttpRequest {
            url,
            headers,
            body: (self.build_body)(text),
        }
    }

    /// Answer text of a successful response, `None` when the expected path
    /// is missing.
    pub fn text_of<'a>(&self, response: &'a Value) -> Option<&'a str> {
        (self.extract_text)(response)
    }
}

impl fmt::Debug for ProviderProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderProfile")
            .field("id", &self.id)
            .field("endpoint", &self.endpoint)
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

static GEMINI: ProviderProfile = ProviderProfile {
    id: ProviderId::Gemini,
    display_name: "Gemini",
    endpoint: "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent",
    auth: AuthPlacement::QueryParam("key"),
    extra_headers: &[],
    build_body: gemini_body,
    extract_text: gemini_text,
};

static GEMINI_25_FLASH: ProviderProfile = ProviderProfile {
    id: ProviderId::Gemini25Flash,
    display_name: "Gemini 2.5 Flash",
    endpoint: "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent",
    auth: AuthPlacement::QueryParam("key"),
    extra_headers: &[],
    build_body: gemini_body,
    extract_text: gemini_text,
};

static GEMINI_25_PRO: ProviderProfile = ProviderProfile {
    id: ProviderId::Gemini25Pro,
    display_name: "Gemini 2.5 Pro",
    endpoint: "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-pro:generateContent",
    auth: AuthPlacement::QueryParam("key"),
    extra_headers: &[],
    build_body: gemini_body,
    extract_text: gemini_text,
};

static CLAUDE: ProviderProfile = ProviderProfile {
    id: ProviderId::Claude,
    display_name: "Claude",
    endpoint: "https://api.anthropic.com/v1/messages",
    auth: AuthPlacement::Header("x-api-key"),
    extra_headers: &[("anthropic-version", ANTHROPIC_VERSION)],
    build_body: claude_body,
    extract_text: claude_text,
};

static PERPLEXITY: ProviderProfile = ProviderProfile {
    id: ProviderId::Perplexity,
    display_name: "Perplexity",
    endpoint: "https://api.perplexity.ai/chat/completions",
    auth: AuthPlacement::Bearer,
    extra_headers: &[("accept", "application/json")],
    build_body: perplexity_body,
    extract_text: perplexity_text,
};

fn gemini_body(text: &str) -> Value {
    json!({
        "contents": [{
            "parts": [{ "text": text }]
        }]
    })
}

fn gemini_text(response: &Value) -> Option<&str> {
    response.pointer("/candidates/0/content/parts/0/text")?.as_str()
}

fn claude_body(text: &str) -> Value {
    json!({
        "model":       CLAUDE_MODEL,
        "max_tokens":  CLAUDE_MAX_TOKENS,
        "temperature": CLAUDE_TEMPERATURE,
        "messages": [
            { "role": "user", "content": text }
        ]
    })
}

fn claude_text(response: &Value) -> Option<&str> {
    response.pointer("/content/0/text")?.as_str()
}

fn perplexity_body(text: &str) -> Value {
    json!({
        "model": PERPLEXITY_MODEL,
        "messages": [
            { "role": "system", "content": LINGUIST_SYSTEM_PROMPT },
            { "role": "user",   "content": text }
        ]
    })
}

fn perplexity_text(response: &Value) -> Option<&str> {
    response.pointer("/choices/0/message/content")?.as_str()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_id() {
        for id in ProviderId::ALL {
            assert_eq!(id.as_str().parse::<ProviderId>(), Ok(id));
            assert_eq!(id.profile().id, id);
        }
    }

    #[test]
    fn parse_ignores_case_and_padding() {
        assert_eq!(" Claude ".parse::<ProviderId>(), Ok(ProviderId::Claude));
    }

    #[test]
    fn deserialize_accepts_the_same_spellings_as_parse() {
        let id: ProviderId = serde_json::from_str("\"Gemini-2.5-Pro\"").unwrap();
        assert_eq!(id, ProviderId::Gemini25Pro);
        assert!(serde_json::from_str::<ProviderId>("\"gpt-4\"").is_err());
        assert_eq!(serde_json::to_string(&ProviderId::Gemini25Flash).unwrap(), "\"gemini-2.5-flash\"");
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = "gpt-4".parse::<ProviderId>().unwrap_err();
        assert_eq!(err, UnknownProvider("gpt-4".into()));
        assert!(err.to_string().contains("gpt-4"));
    }

    #[test]
    fn gemini_key_goes_in_query() {
        let request = ProviderId::Gemini25Pro.profile().build_request("AIza", "hi");
        assert_eq!(
            request.url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-pro:generateContent?key=AIza"
        );
        assert!(request.headers.is_empty());
        assert_eq!(request.body["contents"][0]["parts"][0]["text"], "hi");
    }

    #[test]
    fn query_key_is_percent_encoded() {
        let request = ProviderId::Gemini.profile().build_request("a&b#c+d", "hi");
        assert!(request.url.ends_with(":generateContent?key=a%26b%23c%2Bd"));

        let url = reqwest::Url::parse(&request.url).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("key".to_string(), "a&b#c+d".to_string())]);
    }

    #[test]
    fn registry_endpoints_parse() {
        for id in ProviderId::ALL {
            assert!(reqwest::Url::parse(id.profile().endpoint).is_ok(), "{id}");
        }
    }

    #[test]
    fn claude_key_goes_in_header() {
        let request = ProviderId::Claude.profile().build_request("sk-ant", "hi");
        assert_eq!(request.url, "https://api.anthropic.com/v1/messages");
        assert_eq!(request.header("x-api-key"), Some("sk-ant"));
        assert_eq!(request.header("anthropic-version"), Some("2023-06-01"));
        assert_eq!(request.body["model"], CLAUDE_MODEL);
        assert_eq!(request.body["max_tokens"], 20_000);
        assert_eq!(request.body["temperature"], 1);
        assert_eq!(request.body["messages"][0]["role"], "user");
        assert_eq!(request.body["messages"][0]["content"], "hi");
    }

    #[test]
    fn perplexity_uses_bearer_and_system_message() {
        let request = ProviderId::Perplexity.profile().build_request("pplx", "hi");
        assert_eq!(request.header("authorization"), Some("Bearer pplx"));
        assert_eq!(request.body["model"], PERPLEXITY_MODEL);
        assert_eq!(request.body["messages"][0]["role"], "system");
        assert_eq!(request.body["messages"][0]["content"], LINGUIST_SYSTEM_PROMPT);
        assert_eq!(request.body["messages"][1]["role"], "user");
        assert_eq!(request.body["messages"][1]["content"], "hi");
    }

    #[test]
    fn extracts_text_from_each_schema() {
        let gemini = json!({"candidates": [{"content": {"parts": [{"text": "g"}]}}]});
        let claude = json!({"content": [{"type": "text", "text": "c"}]});
        let perplexity = json!({"choices": [{"message": {"content": "p"}}]});

        assert_eq!(ProviderId::Gemini.profile().text_of(&gemini), Some("g"));
        assert_eq!(ProviderId::Claude.profile().text_of(&claude), Some("c"));
        assert_eq!(ProviderId::Perplexity.profile().text_of(&perplexity), Some("p"));
    }

    #[test]
    fn missing_path_extracts_nothing() {
        let empty_candidates = json!({"candidates": []});
        assert_eq!(ProviderId::Gemini.profile().text_of(&empty_candidates), None);
        assert_eq!(ProviderId::Claude.profile().text_of(&json!({})), None);
        assert_eq!(
            ProviderId::Perplexity
                .profile()
                .text_of(&json!({"choices": [{"message": {"content": null}}]})),
            None
        );
    }
}
