use serde::{Deserialize, Serialize};

/// One member of the ring directory. Only `website_uuid` and `url` are
/// required on the wire; the rest default so a minimal record still parses.
/// Unknown fields in the body are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRecord {
    #[serde(default)]
    pub website_id: u32,
    pub website_uuid: String,
    #[serde(default)]
    pub website_name: String,
    #[serde(default)]
    pub is_anonymous: bool,
    pub url: String,
}

impl SiteRecord {
    pub fn new(website_uuid: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            website_id: 0,
            website_uuid: website_uuid.into(),
            website_name: String::new(),
            is_anonymous: false,
            url: url.into(),
        }
    }
}
