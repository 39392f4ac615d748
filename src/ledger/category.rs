use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-defined bucket that purchases are classified under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    /// Opaque glyph key (emoji or symbolic icon name). The core stores and
    /// passes it through; only the presentation layer interprets it.
    pub icon: String,
}

impl Category {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            icon: icon.into(),
        }
    }
}
