pub mod api;

use crate::chat_init::ChatInitService;
use std::error::Error;
use std::sync::Arc;
use log::{ info, warn };

pub struct Server {
    addr: String,
    service: Arc<ChatInitService>,
    api_key: Option<String>,
}

impl Server {
    pub fn new(addr: String, service: Arc<ChatInitService>, api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|k| !k.trim().is_empty());

        if api_key.is_some() {
            info!("Server configured with API Key authentication.");
        } else {
            warn!("Server configured WITHOUT API Key authentication. Endpoints are open.");
        }

        Self { addr, service, api_key }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let state = api::AppState::new(self.service.clone(), self.api_key.clone());
        api::start_http_server(&self.addr, state).await
    }
}
