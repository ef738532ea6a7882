use anyhow::Context;
use folio_config::FolioConfig;

/// Load the layered config, with `.env` from the working directory feeding
/// the environment layer.
pub fn load_config() -> anyhow::Result<FolioConfig> {
    FolioConfig::load_with_dotenv().context("failed to load folio configuration")
}
