use std::collections::BTreeMap;

use uuid::Uuid;

use crate::models::{Locale, LocaleContext};

const CURSOR_PREFIX: &str = "c.";
const OPEN_PREFIX: &str = "q.";

/// Interaction state of the sections on one page view: which slide each
/// carousel shows and which FAQ entry is expanded.
///
/// Encoded in the query string (`c.<section id>=<slide>`,
/// `q.<section id>=<entry>`) so navigation controls are plain links. Other
/// parameters the page needs to keep across those links (the preview's
/// `locale`) are carried with [`ViewState::with_param`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    params: BTreeMap<String, String>,
    cursors: BTreeMap<Uuid, usize>,
    open: BTreeMap<Uuid, usize>,
}

impl ViewState {
    pub fn from_query<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut state = Self::default();
        for (key, value) in pairs {
            let Ok(value) = value.as_ref().trim().parse::<usize>() else {
                continue;
            };
            let key = key.as_ref();
            if let Some(id) = section_key(key, CURSOR_PREFIX) {
                state.cursors.insert(id, value);
            } else if let Some(id) = section_key(key, OPEN_PREFIX) {
                state.open.insert(id, value);
            }
        }
        state
    }

    /// Keeps `key=value` on every link built from this state. The value is
    /// written as given, so it must already be URL-safe.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn cursor(&self, section_id: Uuid) -> usize {
        self.cursors.get(&section_id).copied().unwrap_or(0)
    }

    pub fn open_entry(&self, section_id: Uuid) -> Option<usize> {
        self.open.get(&section_id).copied()
    }

    pub fn with_cursor(&self, section_id: Uuid, index: usize) -> Self {
        let mut next = self.clone();
        next.cursors.insert(section_id, index);
        next
    }

    pub fn with_open_entry(&self, section_id: Uuid, entry: Option<usize>) -> Self {
        let mut next = self.clone();
        match entry {
            Some(entry) => next.open.insert(section_id, entry),
            None => next.open.remove(&section_id),
        };
        next
    }

    pub fn to_query(&self) -> String {
        let params = self.params.iter().map(|(k, v)| format!("{k}={v}"));
        let cursors = self
            .cursors
            .iter()
            .map(|(id, v)| format!("{CURSOR_PREFIX}{id}={v}"));
        let open = self.open.iter().map(|(id, v)| format!("{OPEN_PREFIX}{id}={v}"));
        params
            .chain(cursors)
            .chain(open)
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Link that re-renders the page with `self`'s state, scrolled back to
    /// the section.
    pub fn href(&self, anchor: &str) -> String {
        format!("?{}#{}", self.to_query(), anchor)
    }
}

fn section_key(key: &str, prefix: &str) -> Option<Uuid> {
    key.strip_prefix(prefix)
        .and_then(|id| Uuid::parse_str(id).ok())
}

/// Everything a renderer may read besides the section itself.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub locale: LocaleContext,
    pub state: ViewState,
}

impl RenderContext {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale: LocaleContext::for_locale(locale),
            state: ViewState::default(),
        }
    }

    pub fn with_state(mut self, state: ViewState) -> Self {
        self.state = state;
        self
    }
}
