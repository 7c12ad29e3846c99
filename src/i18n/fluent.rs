// SPDX-License-Identifier: MPL-2.0
use crate::domain::layout::TextDirection;
use crate::error::{DatasetError, Error, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use unic_langid::{CharacterDirection, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
pub(crate) struct Asset;

/// Locale every timeline can fall back to; always embedded.
pub const FALLBACK_LOCALE: &str = "en-US";

/// A loaded translation bundle.
pub struct Language {
    bundle: FluentBundle<FluentResource>,
    locale: LanguageIdentifier,
    direction: TextDirection,
}

impl std::fmt::Debug for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Language")
            .field("locale", &self.locale)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

impl Language {
    /// Builds a language from Fluent source text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Language`] if the text does not parse as Fluent.
    pub fn from_ftl(locale: LanguageIdentifier, source: String) -> Result<Self> {
        let resource = FluentResource::try_new(source).map_err(|(_, errors)| Error::Language {
            code: locale.to_string(),
            reason: format!("{} syntax error(s)", errors.len()),
        })?;
        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| Error::Language {
            code: locale.to_string(),
            reason: format!("{} conflicting message(s)", errors.len()),
        })?;
        let direction = match locale.character_direction() {
            CharacterDirection::RTL => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        };
        Ok(Self {
            bundle,
            locale,
            direction,
        })
    }

    /// The embedded `en-US` language.
    #[must_use]
    pub fn fallback() -> Self {
        let locale: LanguageIdentifier = FALLBACK_LOCALE.parse().unwrap_or_default();
        let source = Asset::get(&format!("{FALLBACK_LOCALE}.ftl"))
            .map(|file| String::from_utf8_lossy(file.data.as_ref()).into_owned())
            .unwrap_or_default();
        // The embedded fallback is part of the build; an empty bundle is the
        // only way this can fail and `tr` degrades to the key then.
        Self::from_ftl(locale.clone(), source).unwrap_or_else(|_| Self {
            bundle: FluentBundle::new(vec![locale.clone()]),
            locale,
            direction: TextDirection::Ltr,
        })
    }

    #[must_use]
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    #[must_use]
    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    /// Translates a message id, or returns `MISSING: <key>`.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates a message id with named arguments.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    /// User-facing text for a dataset or option problem.
    #[must_use]
    pub fn translate_error(&self, error: &DatasetError) -> String {
        let message = self.tr(error.i18n_key());
        match error.detail() {
            Some(detail) => format!("{message} [{detail}]"),
            None => message,
        }
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(pattern) = self.bundle.get_message(key).and_then(|msg| msg.value()) {
            let mut errors = vec![];
            let value = self.bundle.format_pattern(pattern, args, &mut errors);
            if errors.is_empty() {
                return value.into_owned();
            }
        }
        format!("MISSING: {}", key)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::fallback()
    }
}
