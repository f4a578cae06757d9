use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::profile::WheelProfile;
use crate::error::{WheelError, WheelResult};

pub const PROFILE_FORMAT_VERSION: u32 = 1;

/// Versioned envelope for moving a profile in and out of the process.
///
/// Where the JSON ends up (file, clipboard, sync service) is the host's
/// concern; this type is the format boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    pub format_version: u32,
    pub exported_at_unix: i64,
    pub profile: WheelProfile,
}

impl ProfileDocument {
    #[must_use]
    pub fn export(profile: WheelProfile) -> Self {
        Self {
            format_version: PROFILE_FORMAT_VERSION,
            exported_at_unix: Utc::now().timestamp(),
            profile,
        }
    }

    pub fn to_json_string(&self) -> WheelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(json: &str) -> WheelResult<Self> {
        let document: Self = serde_json::from_str(json)?;
        if document.format_version != PROFILE_FORMAT_VERSION {
            return Err(WheelError::InvalidData(format!(
                "unsupported profile format version {}",
                document.format_version
            )));
        }
        Ok(document)
    }
}
