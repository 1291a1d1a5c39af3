//! System tray provider output.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::commands::ProviderCommand;
use crate::traits::ClickTarget;

/// One tray icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TrayIcon {
    /// Identifier passed back to the provider on click.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub id: String,
    /// Tooltip text. Used as the sort key.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub tooltip: String,
    /// Icon image location.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub icon_url: String,
    /// Content hash of the icon image. Used as the exclusion key.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub icon_hash: String,
}

impl ClickTarget for TrayIcon {
    fn target_id(&self) -> &str {
        &self.id
    }

    fn on_left_click(&self) -> Option<ProviderCommand> {
        Some(ProviderCommand::TrayLeftClick {
            icon_id: self.id.clone(),
        })
    }

    fn on_middle_click(&self) -> Option<ProviderCommand> {
        Some(ProviderCommand::TrayMiddleClick {
            icon_id: self.id.clone(),
        })
    }

    fn on_right_click(&self) -> Option<ProviderCommand> {
        Some(ProviderCommand::TrayRightClick {
            icon_id: self.id.clone(),
        })
    }
}

/// Systray provider output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SystrayOutput {
    /// Icons in provider order.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub icons: Vec<TrayIcon>,
}

impl SystrayOutput {
    /// Returns the icons not in `excluded`, sorted by tooltip.
    ///
    /// The sort is stable, so icons with equal tooltips keep provider order.
    pub fn visible_icons<'a>(&'a self, excluded: &HashSet<String>) -> Vec<&'a TrayIcon> {
        let mut icons: Vec<&TrayIcon> = self
            .icons
            .iter()
            .filter(|icon| !excluded.contains(&icon.icon_hash))
            .collect();
        icons.sort_by(|a, b| a.tooltip.cmp(&b.tooltip));
        icons
    }
}
