//! Summaries of inferred schemas, written by an LLM when credentials are
//! available and by a deterministic offline fallback otherwise.

use anyhow::{Result, anyhow};
use eventsift_types::SchemaSuggestions;
use serde_json::{Value, json};
use std::time::Duration;

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Coordinates summary prompts against the OpenAI API.
///
/// Construction never fails and neither does `summarize`: every problem on
/// the network path (missing key, transport, auth, response shape) falls back
/// to [`offline_summary`].
pub struct SchemaAssistant {
    model: String,
    api_key: Option<String>,
}

impl SchemaAssistant {
    /// Build from `OPENAI_API_KEY` / `OPENAI_MODEL` in the environment.
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        let model = std::env::var("OPENAI_MODEL")
            .ok()
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        SchemaAssistant { model, api_key }
    }

    /// Assistant without credentials; always produces the offline summary.
    pub fn offline() -> Self {
        SchemaAssistant {
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }

    pub fn summarize(&self, suggestions: &SchemaSuggestions) -> String {
        let Some(api_key) = &self.api_key else {
            return offline_summary(suggestions);
        };
        self.request_summary(api_key, suggestions)
            .unwrap_or_else(|_| offline_summary(suggestions))
    }

    fn request_summary(&self, api_key: &str, suggestions: &SchemaSuggestions) -> Result<String> {
        let digest = serde_json::to_string_pretty(&structured_payload(suggestions))?;
        let body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": "You help data engineers design analytics imports."
                },
                {
                    "role": "user",
                    "content": format!(
                        "Summarize the inferred schema below and list the next steps for validation. \
                         Return 2-3 bullet points.\n\nSchema JSON:\n```json\n{}\n```",
                        digest
                    )
                }
            ]
        });

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let response: Value = client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        let message = response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow!("response carried no message content"))?;
        Ok(message.trim().to_string())
    }
}

/// Compact digest sent to the model: names only, no values.
fn structured_payload(suggestions: &SchemaSuggestions) -> Value {
    let event_types: Vec<&str> = suggestions
        .event_schemas
        .iter()
        .map(|schema| schema.event_type.as_str())
        .collect();
    let user_properties: Vec<&str> = suggestions
        .user_properties
        .iter()
        .map(|prop| prop.name.as_str())
        .collect();
    let group_properties: Vec<&str> = suggestions
        .group_properties
        .iter()
        .map(|prop| prop.name.as_str())
        .collect();

    json!({
        "event_types": event_types,
        "user_properties": user_properties,
        "group_properties": group_properties
    })
}

/// Deterministic fallback built only from the suggestions.
pub fn offline_summary(suggestions: &SchemaSuggestions) -> String {
    let events = suggestions
        .event_schemas
        .iter()
        .map(|schema| schema.event_type.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let events = if events.is_empty() {
        "no events found".to_string()
    } else {
        events
    };

    format!(
        "- Review inferred events: {}\n\
         - Map {} user properties and {} group properties in your analytics destination.\n\
         - Validate import settings before scheduling warehouse sync.",
        events,
        suggestions.user_properties.len(),
        suggestions.group_properties.len()
    )
}
