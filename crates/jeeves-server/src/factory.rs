//! Factory for assembling a motor from configuration.

use std::sync::Arc;

use jeeves_core::config::JeevesConfig;
use jeeves_core::error::JeevesResult;
use jeeves_core::{LexiconAnalyzer, Motor};
use jeeves_lexicon::LexiconFactory;
use jeeves_stores::StoreFactory;
use tracing::info;

/// Build the store, the lexicon and the analyzer, and wire them into a motor.
pub async fn create_motor(config: &JeevesConfig) -> JeevesResult<Motor> {
    let store = StoreFactory::create(&config.store).await?;
    let lexicon = LexiconFactory::create(&config.lexicon)?;
    info!(
        store = store.provider_name(),
        research = lexicon.is_some(),
        "Jeeves is waking up"
    );

    Ok(Motor::new(
        store,
        lexicon,
        Arc::new(LexiconAnalyzer::new()),
        config.brain.clone(),
    ))
}

/// Load configuration the way both binaries do.
///
/// `JEEVES_CONFIG` names a config file; otherwise `~/.jeeves/config.toml` is
/// used when it exists, and the environment when it doesn't.
pub fn load_config() -> JeevesResult<JeevesConfig> {
    if let Ok(path) = std::env::var("JEEVES_CONFIG") {
        info!(path = %path, "Loading configuration file");
        return JeevesConfig::from_file(path);
    }

    let default_path = JeevesConfig::default_path();
    if default_path.exists() {
        info!(path = %default_path.display(), "Loading configuration file");
        return JeevesConfig::from_file(default_path);
    }

    JeevesConfig::from_env()
}
