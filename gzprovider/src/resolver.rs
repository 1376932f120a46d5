//! Compound model selectors (`"<prefix>:<model id>"`) and the selectable model catalog.
//!
//! ```rust
//! use gzprovider::{ProviderId, resolve_model};
//!
//! let resolved = resolve_model("hf:Qwen/Qwen2.5-72B-Instruct");
//! assert_eq!(resolved.provider, ProviderId::HuggingFace);
//! assert_eq!(resolved.model_id, "Qwen/Qwen2.5-72B-Instruct");
//!
//! let bare = resolve_model("some-model");
//! assert_eq!(bare.provider, ProviderId::Groq);
//! assert_eq!(bare.model_id, "some-model");
//! ```

use serde::Serialize;

use crate::ProviderId;

pub const DEFAULT_MODEL_SELECTOR: &str = "g:llama-3.3-70b-versatile";

/// Checked in order; the first matching prefix wins.
const PREFIXES: [(&str, ProviderId); 4] = [
    ("g:", ProviderId::Groq),
    ("hf:", ProviderId::HuggingFace),
    ("or:", ProviderId::OpenRouter),
    ("web:", ProviderId::Search),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModel {
    pub provider: ProviderId,
    pub model_id: String,
}

/// Unknown or missing prefixes route to Groq with the whole selector as model id.
pub fn resolve_model(selector: &str) -> ResolvedModel {
    for (prefix, provider) in PREFIXES {
        if let Some(model_id) = selector.strip_prefix(prefix) {
            return ResolvedModel {
                provider,
                model_id: model_id.to_string(),
            };
        }
    }

    ResolvedModel {
        provider: ProviderId::Groq,
        model_id: selector.to_string(),
    }
}

pub const fn selector_prefix(provider: ProviderId) -> &'static str {
    match provider {
        ProviderId::Groq => "g:",
        ProviderId::HuggingFace => "hf:",
        ProviderId::OpenRouter => "or:",
        ProviderId::Search => "web:",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: ProviderId,
    pub description: &'static str,
}

impl ModelInfo {
    pub fn selector(&self) -> String {
        format!("{}{}", selector_prefix(self.provider), self.id)
    }
}

pub const MODEL_CATALOG: &[ModelInfo] = &[
    ModelInfo {
        id: "llama-3.3-70b-versatile",
        name: "Fast",
        provider: ProviderId::Groq,
        description: "Lightning fast responses",
    },
    ModelInfo {
        id: "llama-3.1-8b-instant",
        name: "Instant",
        provider: ProviderId::Groq,
        description: "Ultra-fast smaller model",
    },
    ModelInfo {
        id: "mixtral-8x7b-32768",
        name: "Balanced",
        provider: ProviderId::Groq,
        description: "Good balance of speed and quality",
    },
    ModelInfo {
        id: "Qwen/Qwen2.5-72B-Instruct",
        name: "Creative",
        provider: ProviderId::HuggingFace,
        description: "Creative open model",
    },
    ModelInfo {
        id: "google/gemma-2-27b-it",
        name: "Light",
        provider: ProviderId::OpenRouter,
        description: "Lightweight and efficient",
    },
    ModelInfo {
        id: "web-search",
        name: "Search",
        provider: ProviderId::Search,
        description: "Search the web for answers",
    },
];

/// JSON shape of one catalog entry as served to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: &'static str,
    pub provider: &'static str,
    pub description: &'static str,
}

impl From<&ModelInfo> for CatalogEntry {
    fn from(value: &ModelInfo) -> Self {
        Self {
            id: value.selector(),
            name: value.name,
            provider: value.provider.as_str(),
            description: value.description,
        }
    }
}

pub fn catalog_entries() -> Vec<CatalogEntry> {
    MODEL_CATALOG.iter().map(CatalogEntry::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_prefixes_strip_exactly_the_prefix() {
        let cases = [
            ("g:llama-3.3-70b-versatile", ProviderId::Groq, "llama-3.3-70b-versatile"),
            ("hf:Qwen/Qwen2.5-72B-Instruct", ProviderId::HuggingFace, "Qwen/Qwen2.5-72B-Instruct"),
            ("or:google/gemma-2-27b-it", ProviderId::OpenRouter, "google/gemma-2-27b-it"),
            ("web:web-search", ProviderId::Search, "web-search"),
            ("g:", ProviderId::Groq, ""),
        ];

        for (selector, provider, model_id) in cases {
            let resolved = resolve_model(selector);
            assert_eq!(resolved.provider, provider, "selector {selector}");
            assert_eq!(resolved.model_id, model_id, "selector {selector}");
        }
    }

    #[test]
    fn unknown_prefixes_default_to_groq_with_full_selector() {
        for selector in ["llama-3.3-70b-versatile", "x:model", "", "G:upper", "hf-no-colon"] {
            let resolved = resolve_model(selector);
            assert_eq!(resolved.provider, ProviderId::Groq);
            assert_eq!(resolved.model_id, selector);
        }
    }

    #[test]
    fn catalog_selectors_resolve_back_to_their_entries() {
        for info in MODEL_CATALOG {
            let resolved = resolve_model(&info.selector());
            assert_eq!(resolved.provider, info.provider);
            assert_eq!(resolved.model_id, info.id);
        }
    }

    #[test]
    fn default_selector_is_the_first_catalog_entry() {
        assert_eq!(MODEL_CATALOG[0].selector(), DEFAULT_MODEL_SELECTOR);
        let entries = catalog_entries();
        assert_eq!(entries.len(), MODEL_CATALOG.len());
        assert_eq!(entries[5].id, "web:web-search");
        assert_eq!(entries[3].provider, "huggingface");
    }
}
