use serde::{ Serialize, Deserialize };
use serde_json::{ Map, Value };

use super::chat::BackendChat;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationInfo {
    pub name: String,
    pub description: String,
    /// Topics the simulation exercises, most important first.
    pub variables: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateChatMessagesRequest {
    pub simulation: SimulationInfo,
    pub user: UserInfo,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateChatMessagesResponse {
    pub chat: BackendChat,
    pub metadata: Map<String, Value>,
}
