use crate::constants::{DEFAULT_API_BASE, DEFAULT_MUSIC_SRC, DEFAULT_NODE_ID, STORAGE_KEY};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// RFC 3986 unreserved characters stay as they are.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Start-up settings. Defaults come from `constants`; the web frontend may
/// override them from `data-*` attributes on `<body>`.
#[derive(Clone, Debug, PartialEq)]
pub struct TourConfig {
    pub default_node_id: String,
    pub api_base: String,
    pub music_src: String,
    pub storage_key: String,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            default_node_id: DEFAULT_NODE_ID.to_owned(),
            api_base: DEFAULT_API_BASE.to_owned(),
            music_src: DEFAULT_MUSIC_SRC.to_owned(),
            storage_key: STORAGE_KEY.to_owned(),
        }
    }
}

impl TourConfig {
    /// Build from a key lookup (`"default-node"`, `"api-base"`, `"music-src"`).
    /// Missing or blank values keep their defaults.
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        let mut take = |key: &str, slot: &mut String| {
            if let Some(v) = lookup(key).map(|v| v.trim().to_owned()) {
                if !v.is_empty() {
                    *slot = v;
                }
            }
        };
        take("default-node", &mut cfg.default_node_id);
        take("api-base", &mut cfg.api_base);
        take("music-src", &mut cfg.music_src);
        cfg.api_base = cfg.api_base.trim_end_matches('/').to_owned();
        cfg
    }

    pub fn panoramas_url(&self) -> String {
        format!("{}/panoramas", self.api_base)
    }

    /// `panorama_id` is percent-encoded as a single path segment.
    pub fn hotspots_url(&self, panorama_id: &str) -> String {
        format!(
            "{}/panoramas/{}/hotspots",
            self.api_base,
            utf8_percent_encode(panorama_id, PATH_SEGMENT)
        )
    }
}
