use anyhow::Context;
use civ_config::CivConfig;

/// Load `.env` from the current directory, then the layered config.
pub fn load_config() -> anyhow::Result<CivConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }

    let config = CivConfig::load().context("failed to load civ configuration")?;
    tracing::debug!(
        empty_ids = %config.validation.empty_ids,
        report = %config.validation.report,
        locale = %config.messages.locale,
        "configuration loaded"
    );
    Ok(config)
}
