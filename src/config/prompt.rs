use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::sync::Arc;
use log::info;
use thiserror::Error;

pub const WELCOME_TEMPLATE: &str = "welcome";
pub const BRIEFING_TEMPLATE: &str = "briefing";
pub const CALL_TO_ACTION_TEMPLATE: &str = "call_to_action";

/// How many simulation variables the welcome message mentions.
pub const WELCOME_VARIABLE_LIMIT: usize = 2;

const DEFAULT_WELCOME: &str =
    "Welcome {user_name}! I'm your AI Coordinator, and I'm excited to guide you through today's '{simulation_name}' simulation. In this scenario, you'll have the opportunity to practice {variables} in a realistic workplace setting.";
const DEFAULT_BRIEFING: &str =
    "Here's your scenario: {simulation_description} Take your time to read through the situation and think about how you'd like to approach it.";
const DEFAULT_CALL_TO_ACTION: &str =
    "Are you ready to begin? Please let me know how you'd like to start approaching this situation.";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt template '{0}' not found")]
    TemplateNotFound(String),
    #[error("Prompt file IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Prompt JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize, Debug, Clone)]
pub struct PromptConfig {
    pub intro_templates: HashMap<String, String>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        let intro_templates = [
            (WELCOME_TEMPLATE, DEFAULT_WELCOME),
            (BRIEFING_TEMPLATE, DEFAULT_BRIEFING),
            (CALL_TO_ACTION_TEMPLATE, DEFAULT_CALL_TO_ACTION),
        ]
            .into_iter()
            .map(|(key, template)| (key.to_string(), template.to_string()))
            .collect();
        Self { intro_templates }
    }
}

pub fn load_prompts_from_str(content: &str) -> Result<Arc<PromptConfig>, PromptError> {
    let config: PromptConfig = serde_json::from_str(content)?;
    Ok(Arc::new(config))
}

pub fn load_prompts(path: &str) -> Result<Arc<PromptConfig>, PromptError> {
    let file_content = fs::read_to_string(path)?;
    let config = load_prompts_from_str(&file_content)?;
    info!("Loaded {} intro templates from '{}'", config.intro_templates.len(), path);
    Ok(config)
}

fn get_intro_template<'a>(config: &'a PromptConfig, key: &str) -> Result<&'a str, PromptError> {
    config.intro_templates
        .get(key)
        .map(|s| s.as_str())
        .ok_or_else(|| PromptError::TemplateNotFound(format!("intro_templates:{}", key)))
}

/// Substitutes `{name}` placeholders in a single pass, so values that happen
/// to contain placeholder syntax are inserted literally. Unknown placeholders
/// are left untouched.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let replaced = after.find('}').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, end))
        });
        match replaced {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

pub fn get_welcome_message(
    config: &PromptConfig,
    user_name: &str,
    simulation_name: &str,
    variables: &[String]
) -> Result<String, PromptError> {
    let template = get_intro_template(config, WELCOME_TEMPLATE)?;
    let topics = variables
        .iter()
        .take(WELCOME_VARIABLE_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    Ok(
        render(
            template,
            &[
                ("user_name", user_name),
                ("simulation_name", simulation_name),
                ("variables", &topics),
            ]
        )
    )
}

pub fn get_briefing_message(config: &PromptConfig, description: &str) -> Result<String, PromptError> {
    let template = get_intro_template(config, BRIEFING_TEMPLATE)?;
    Ok(render(template, &[("simulation_description", description)]))
}

pub fn get_call_to_action_message(config: &PromptConfig) -> Result<String, PromptError> {
    Ok(get_intro_template(config, CALL_TO_ACTION_TEMPLATE)?.to_string())
}
