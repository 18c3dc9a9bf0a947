//! Dashboard and category listing commands

use crate::config::Settings;
use crate::display::dashboard::{format_categories, format_dashboard};
use crate::error::TrackerResult;
use crate::reports::Dashboard;
use crate::storage::Storage;

/// Print the dashboard
pub fn handle_dashboard_command(storage: &Storage, settings: &Settings) -> TrackerResult<()> {
    let dashboard = Dashboard::generate(storage, settings);
    print!("{}", format_dashboard(&dashboard, settings));
    Ok(())
}

/// Print the allowed categories per transaction type
pub fn handle_categories_command(settings: &Settings) -> TrackerResult<()> {
    print!("{}", format_categories(&settings.categories));
    Ok(())
}
