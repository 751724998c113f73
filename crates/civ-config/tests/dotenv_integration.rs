//! `.env` values flow through figment's env provider.
//!
//! `dotenvy` writes straight into the process environment, so each test uses
//! a variable no other test in this binary asserts on.

use civ_config::CivConfig;
use civ_core::enums::ReportMode;
use figment::Jail;

#[test]
fn dotenv_pairs_reach_the_config() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "CIV_VALIDATION__REPORT=all_errors\n")?;

        let pairs = dotenvy::from_path_iter(jail.directory().join(".env"))
            .map_err(|e| e.to_string())?;
        for pair in pairs {
            let (key, value) = pair.map_err(|e| e.to_string())?;
            jail.set_env(key, value);
        }

        let config: CivConfig = CivConfig::figment().extract()?;
        assert_eq!(config.validation.report, ReportMode::AllErrors);
        Ok(())
    });
}

#[test]
fn load_with_dotenv_reads_env_file_in_current_dir() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "CIV_MESSAGES__LOCALE=pt-BR\n")?;

        let config = CivConfig::load_with_dotenv().map_err(|e| e.to_string())?;
        assert_eq!(config.messages.locale, "pt-BR");
        Ok(())
    });
}
