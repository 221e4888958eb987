//! Generative writing assistant.
//!
//! The rest of the crate only sees the [`Assistant`] trait: draft or refine
//! markdown, suggest topics, paint a cover. [`GeminiClient`] implements it
//! over the Gemini `generateContent` REST endpoint. Nothing here touches
//! the post store; callers decide what to do with the results.

use crate::config::AssistantSettings;
use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SYSTEM_INSTRUCTION: &str = "You are an expert blog writer. You write engaging, well-structured, and clear content using Markdown formatting. Use headers, bold text, and lists where appropriate.";

const IDEAS_PROMPT: &str = "Generate 5 creative and trending blog post topic ideas for a personal tech and lifestyle blog. Return only the list as a JSON array of strings.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub trait Assistant {
    /// Writes a markdown post about `topic`, or rewrites `draft` if given.
    fn generate_content(&self, topic: &str, draft: Option<&str>) -> Result<String>;

    /// Suggests short topic ideas.
    fn generate_ideas(&self) -> Result<Vec<String>>;

    /// Paints a 16:9 cover for `topic`, returned as a `data:` URL.
    fn generate_cover_image(&self, topic: &str) -> Result<String>;
}

pub struct GeminiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    settings: AssistantSettings,
}

impl GeminiClient {
    /// Creates a client reading the API key from the configured variable.
    pub fn from_env(settings: &AssistantSettings) -> Result<Self> {
        let api_key = std::env::var(&settings.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| BlogError::MissingApiKey(settings.api_key_env.clone()))?;
        Self::with_api_key(settings, api_key)
    }

    pub fn with_api_key(settings: &AssistantSettings, api_key: String) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BlogError::Assistant(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            api_key,
            settings: settings.clone(),
        })
    }

    fn generate(&self, model: &str, request: &GenerateRequest) -> Result<GenerateResponse> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.settings.endpoint.trim_end_matches('/'),
            model
        );
        tracing::debug!(%model, "Calling generateContent");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .map_err(|e| BlogError::Assistant(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(%model, %status, "Assistant request rejected");
            return Err(BlogError::Assistant(format!("{}: {}", status, body.trim())));
        }

        response
            .json::<GenerateResponse>()
            .map_err(|e| BlogError::Assistant(format!("Malformed response: {}", e)))
    }
}

impl Assistant for GeminiClient {
    fn generate_content(&self, topic: &str, draft: Option<&str>) -> Result<String> {
        let request = GenerateRequest {
            system_instruction: Some(Content::text(SYSTEM_INSTRUCTION)),
            generation_config: Some(GenerationConfig {
                thinking_config: Some(ThinkingConfig { thinking_budget: 0 }),
                ..GenerationConfig::default()
            }),
            ..GenerateRequest::prompt(content_prompt(topic, draft))
        };
        let response = self.generate(&self.settings.text_model, &request)?;
        Ok(response.text())
    }

    fn generate_ideas(&self) -> Result<Vec<String>> {
        let request = GenerateRequest {
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                ..GenerationConfig::default()
            }),
            ..GenerateRequest::prompt(IDEAS_PROMPT.to_string())
        };
        let response = self.generate(&self.settings.text_model, &request)?;
        parse_ideas(&response.text())
    }

    fn generate_cover_image(&self, topic: &str) -> Result<String> {
        let request = GenerateRequest {
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["IMAGE".to_string()]),
                image_config: Some(ImageConfig {
                    aspect_ratio: "16:9".to_string(),
                }),
                ..GenerationConfig::default()
            }),
            ..GenerateRequest::prompt(cover_prompt(topic))
        };
        let response = self.generate(&self.settings.image_model, &request)?;
        response
            .image_data_url()
            .ok_or_else(|| BlogError::Assistant("No image data found in response".to_string()))
    }
}

pub fn content_prompt(topic: &str, draft: Option<&str>) -> String {
    match draft.filter(|d| !d.trim().is_empty()) {
        Some(draft) => format!(
            "Rewrite or expand upon the following blog draft about \"{}\". \n\nDraft:\n{}",
            topic, draft
        ),
        None => format!(
            "Write a comprehensive, engaging blog post about: \"{}\". Include a catchy title in the first line if possible.",
            topic
        ),
    }
}

pub fn cover_prompt(topic: &str) -> String {
    format!(
        "Generate a high quality, artistic, abstract cover image for a blog post about: {}. Aspect ratio 16:9.",
        topic
    )
}

/// Parses the ideas reply, a JSON array of strings, possibly fenced.
pub fn parse_ideas(text: &str) -> Result<Vec<String>> {
    let trimmed = text.trim();
    let json = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed);

    let ideas: Vec<String> = serde_json::from_str(json.trim())
        .map_err(|e| BlogError::Assistant(format!("Ideas were not a JSON list: {}", e)))?;
    Ok(ideas
        .into_iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .collect())
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GenerateRequest {
    fn prompt(text: String) -> Self {
        Self {
            contents: vec![Content::text(text)],
            ..Self::default()
        }
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: i32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part {
                text: Some(text.into()),
                inline_data: None,
            }],
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateResponse {
    fn parts(&self) -> impl Iterator<Item = &Part> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .into_iter()
            .flat_map(|c| c.parts.iter())
    }

    /// Text of the first candidate, parts concatenated.
    fn text(&self) -> String {
        self.parts().filter_map(|p| p.text.as_deref()).collect()
    }

    /// First inline image of the first candidate as a `data:` URL.
    fn image_data_url(&self) -> Option<String> {
        self.parts()
            .filter_map(|p| p.inline_data.as_ref())
            .find(|d| !d.data.is_empty())
            .map(|d| {
                format!(
                    "data:{};base64,{}",
                    d.mime_type.as_deref().unwrap_or("image/png"),
                    d.data
                )
            })
    }
}
