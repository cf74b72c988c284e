use anyhow::Result;

use crate::backend::HttpComplaintClient;
use crate::chat::{ChatRepl, SessionController};
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::i18n::Language;

pub struct ChatOptions {
    pub endpoint: Option<String>,
    pub language: Option<Language>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = load_session_config(options)?;
    tracing::debug!(endpoint = %config.endpoint, language = %config.language, "starting session");

    let client = HttpComplaintClient::new(config.endpoint.clone());
    let controller = SessionController::new(config.language, client);
    let mut repl = ChatRepl::new(controller, config.endpoint);
    repl.run().await
}

fn load_session_config(options: ChatOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;

    resolve_config(
        &ResolveOptions {
            endpoint: options.endpoint,
            language: options.language,
        },
        &file_config,
    )
}
