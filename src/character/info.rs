//! Character title and description

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Information {
    pub title: String,
    pub description: String,
}

impl Default for Information {
    fn default() -> Self {
        Self {
            title: "Default Title".to_string(),
            description: "Default Description".to_string(),
        }
    }
}

impl Information {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
