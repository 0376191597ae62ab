use ahash::AHashMap;

/// Hand-written conversion guidance keyed by canonical tool type.
///
/// The guidance text is embedded into the per-tool generation prompt when the
/// tool's type has an entry. The table is plain data injected by the caller;
/// the crate ships no built-in guide text.
#[derive(Debug, Clone, Default)]
pub struct GuideBook {
    entries: AHashMap<String, String>,
}

impl GuideBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Builds a guide book from a JSON object mapping tool types to guidance text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: AHashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn insert(&mut self, tool_type: impl Into<String>, guidance: impl Into<String>) {
        self.entries.insert(tool_type.into(), guidance.into());
    }

    /// Exact-match lookup on the canonical tool type.
    pub fn get(&self, tool_type: &str) -> Option<&str> {
        self.entries.get(tool_type).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
