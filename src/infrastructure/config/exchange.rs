//! Per-exchange client settings.

use serde::Deserialize;

use crate::adapter::outbound::bse::BseConfig;
use crate::adapter::outbound::nse::NseConfig;

/// `[exchanges]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExchangesConfig {
    #[serde(default)]
    pub nse: NseConfig,
    #[serde(default)]
    pub bse: BseConfig,
}
