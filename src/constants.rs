//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Remote table the list view mirrors
pub const DISHES_TABLE: &str = "DISHES";

/// Page size requested by the list view
pub const DISHES_LIMIT: usize = 10;

/// Config file name looked up in the working directory and config dir
pub const CONFIG_FILE_NAME: &str = "ebconfig.yaml";

/// Directory under the platform config dir holding the config file
pub const CONFIG_DIR_NAME: &str = "dishes-tui";

/// Log file written in the working directory
pub const LOG_FILE_NAME: &str = "dishes-tui.log";

/// Default HTTP timeout when the config leaves it unset
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying the integration id on every request
pub const INTEGRATION_HEADER: &str = "X-Integration-Id";

/// Prompt shown for the first field of a new dish
pub const TITLE_PROMPT: &str = "Please enter a title for your Dish";

/// Prompt shown for the second field of a new dish
pub const INGREDIENTS_PROMPT: &str = "Please enter the ingredients";

/// Card width in terminal cells
pub const CARD_WIDTH: u16 = 50;
