use serde_json::Value;

use crate::utils::error::SuggestError;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

const PURPOSE: &str = "You generate a single creative suggestion in a \
                       brainstorming session. Try not to repeat yourself.";

/// Chat-completions client that turns the current board into one new
/// suggestion.
pub struct SuggestionClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl SuggestionClient {
    /// Creates a client with an explicit key and model.
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    /// Builds a client from `OPENAI_API_KEY`, using the default model.
    pub fn from_env() -> Result<Self, SuggestError> {
        let api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| SuggestError::MissingApiKey)?;
        if api_key.is_empty() {
            return Err(SuggestError::MissingApiKey);
        }
        Ok(Self::new(api_key, DEFAULT_MODEL.to_string()))
    }

    /// Asks the model for one new suggestion given the current board.
    pub async fn suggest(&self, ideas: &[String]) -> Result<String, SuggestError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": PURPOSE },
                { "role": "user", "content": build_prompt(ideas) },
            ],
        });

        let response = self
            .http
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let completion: Value = response.json().await?;
        parse_suggestion(&completion).ok_or(SuggestError::EmptyCompletion)
    }
}

/// Joins the board into the user prompt, one idea per line.
pub(crate) fn build_prompt(ideas: &[String]) -> String {
    if ideas.is_empty() {
        "Suggest the first idea for a brainstorming session.".to_string()
    } else {
        ideas.join("\n")
    }
}

/// Extracts the first non-empty line of the first choice's content.
pub(crate) fn parse_suggestion(completion: &Value) -> Option<String> {
    let content = completion
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()?;
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
