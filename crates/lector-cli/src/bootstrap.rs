use lector_config::LectorConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (`.env` included) and apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LectorConfig> {
    let mut config = LectorConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn apply_overrides(config: &mut LectorConfig, flags: &GlobalFlags) {
    if let Some(db) = &flags.db {
        config.storage.db_path.clone_from(db);
    }
}
