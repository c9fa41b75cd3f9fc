//! # Config Commands

use tracing::debug;

use crate::state::ConfigState;

/// Gets the session configuration.
///
/// ## When Used
/// - Startup (currency symbol for display)
/// - Showing the recency window next to suggestions
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
