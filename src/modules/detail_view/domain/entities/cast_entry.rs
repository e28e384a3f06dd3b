use serde::{Deserialize, Serialize};

/// One character card on the Characters tab: a character reference paired
/// with its role label (Main / Supporting)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastEntry {
    pub character_name: String,
    pub character_image_url: Option<String>,
    pub role: String,
}
