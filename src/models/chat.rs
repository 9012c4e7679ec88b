use serde::{ Serialize, Deserialize };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    Text,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterInfo {
    pub id: i64,
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendMessage {
    pub id: String,
    pub message_type: MessageType,
    pub author: CharacterInfo,
    pub content: String,
    pub has_hint: bool,
    /// Seconds the user has to reply. Introductory messages leave this unset.
    pub response_time_limit: Option<u32>,
}

impl BackendMessage {
    pub fn text(id: String, author: CharacterInfo, content: String) -> Self {
        Self {
            id,
            message_type: MessageType::Text,
            author,
            content,
            has_hint: false,
            response_time_limit: None,
        }
    }
}

/// A conversation as the backend expects it. `chat_id` stays `None` until the
/// backend persists the chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendChat {
    pub chat_id: Option<String>,
    pub skill_id: i64,
    pub simulation_id: i64,
    pub messages: Vec<BackendMessage>,
    pub success: bool,
}
