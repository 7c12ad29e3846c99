// SPDX-License-Identifier: MPL-2.0
//! Where translations come from.
//!
//! Loading a language is the one asynchronous step of timeline start-up.
//! A [`LanguageSource`] produces Fluent text for a locale; [`load_language`]
//! turns it into a [`Language`].

use super::fluent::{Asset, Language};
use crate::error::{Error, Result};
use std::future::Future;
use unic_langid::LanguageIdentifier;

/// Produces Fluent source text for a locale.
pub trait LanguageSource {
    fn fetch(&self, locale: &LanguageIdentifier) -> impl Future<Output = Result<String>>;
}

/// Translations compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    /// Locales available in the embedded assets.
    #[must_use]
    pub fn available_locales() -> Vec<LanguageIdentifier> {
        Asset::iter()
            .filter_map(|file| {
                file.strip_suffix(".ftl")
                    .and_then(|code| code.parse::<LanguageIdentifier>().ok())
            })
            .collect()
    }

    /// Best embedded match: exact locale, then language only, then any
    /// region of the same language.
    fn find(locale: &LanguageIdentifier) -> Option<String> {
        let available = Self::available_locales();
        let language = locale.language;
        available
            .iter()
            .find(|candidate| *candidate == locale)
            .or_else(|| {
                available
                    .iter()
                    .find(|candidate| candidate.language == language && candidate.region.is_none())
            })
            .or_else(|| available.iter().find(|candidate| candidate.language == language))
            .and_then(|found| Asset::get(&format!("{found}.ftl")))
            .map(|file| String::from_utf8_lossy(file.data.as_ref()).into_owned())
    }
}

impl LanguageSource for EmbeddedSource {
    async fn fetch(&self, locale: &LanguageIdentifier) -> Result<String> {
        Self::find(locale).ok_or_else(|| Error::Language {
            code: locale.to_string(),
            reason: "no embedded translation".to_string(),
        })
    }
}

/// Translations served next to the timeline assets, at
/// `<script_path>locale/<code>.ftl`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    #[must_use]
    pub fn new(script_path: impl Into<String>) -> Self {
        let mut base_url = script_path.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    #[must_use]
    pub fn url_for(&self, locale: &LanguageIdentifier) -> String {
        format!("{}locale/{}.ftl", self.base_url, locale)
    }
}

impl LanguageSource for HttpSource {
    async fn fetch(&self, locale: &LanguageIdentifier) -> Result<String> {
        let to_error = |err: reqwest::Error| Error::Language {
            code: locale.to_string(),
            reason: err.to_string(),
        };
        let response = self
            .client
            .get(self.url_for(locale))
            .send()
            .await
            .map_err(to_error)?
            .error_for_status()
            .map_err(to_error)?;
        response.text().await.map_err(to_error)
    }
}

/// Resolves a language code, `""`/`"auto"` meaning the OS locale.
#[must_use]
pub fn resolve_locale(code: &str) -> Option<LanguageIdentifier> {
    let code = code.trim();
    if code.is_empty() || code.eq_ignore_ascii_case("auto") {
        return sys_locale::get_locale().and_then(|os| os.parse().ok());
    }
    code.parse().ok()
}

/// Loads `code` from `source`.
///
/// # Errors
///
/// Returns [`Error::Language`] when the code is not a valid locale, the
/// source cannot supply it, or the text is not valid Fluent.
pub async fn load_language<S: LanguageSource>(source: &S, code: &str) -> Result<Language> {
    let locale = resolve_locale(code).ok_or_else(|| Error::Language {
        code: code.to_string(),
        reason: "invalid language code".to_string(),
    })?;
    let text = source.fetch(&locale).await?;
    Language::from_ftl(locale, text)
}
