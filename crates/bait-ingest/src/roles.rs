//! Mapping from semantic roles to source column names.

use serde::{Deserialize, Serialize};

use bait_model::BaitType;

/// Header names for the four columns every observation file must carry.
///
/// Source files may name the columns differently; the roles stay the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnRoles {
    pub subject_id: String,
    pub station_path: String,
    pub interaction_cereal: String,
    pub interaction_meat: String,
}

impl Default for ColumnRoles {
    fn default() -> Self {
        Self {
            subject_id: "KakapoID".to_string(),
            station_path: "RelativePath".to_string(),
            interaction_cereal: "Interaction20R".to_string(),
            interaction_meat: "InteractionRMS".to_string(),
        }
    }
}

impl ColumnRoles {
    /// Column holding the outcome for `bait`.
    pub fn interaction(&self, bait: BaitType) -> &str {
        match bait {
            BaitType::Cereal => &self.interaction_cereal,
            BaitType::Meat => &self.interaction_meat,
        }
    }
}
