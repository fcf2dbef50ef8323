//! Configuration show/set command handlers.

use anyhow::Result;

use crate::config::ConfigManager;
use crate::error::TranslateError;
use crate::translation::MODEL_ALIASES;
use crate::ui::Style;

/// Prints the current configuration to stdout.
pub fn show_config() -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default()?;

    println!("{}", Style::header("Current configuration"));
    println!(
        "  {} {}",
        Style::label("Config file:"),
        Style::secondary(manager.config_path().display().to_string())
    );
    println!(
        "  {} {}",
        Style::label("Native language:"),
        Style::value(config.native_language.as_deref().unwrap_or("(not set)"))
    );
    println!(
        "  {} {}",
        Style::label("Default model:"),
        Style::value(config.default_model.as_deref().unwrap_or("haiku (default)"))
    );

    Ok(())
}

/// Persists a new native language and reports the change.
pub fn set_native_language(lang: &str) -> Result<()> {
    let manager = ConfigManager::new();
    // A malformed file fails here instead of being overwritten, which
    // would silently drop the other key.
    let mut config = manager.load_if_present()?;
    config.native_language = Some(lang.to_string());
    manager.save(&config)?;

    println!("Native language set to: {lang}");
    Ok(())
}

/// Persists a new default model and reports the change.
///
/// The name is validated against the alias table up front so a typo
/// surfaces now instead of on the next translation.
pub fn set_default_model(model: &str) -> Result<()> {
    let known_alias = MODEL_ALIASES.iter().any(|(alias, _)| *alias == model);
    if !known_alias && !model.starts_with("claude-") {
        return Err(TranslateError::UnknownModel(model.to_string()).into());
    }

    let manager = ConfigManager::new();
    let mut config = manager.load_if_present()?;
    config.default_model = Some(model.to_string());
    manager.save(&config)?;

    println!("Default model set to: {model}");
    Ok(())
}
