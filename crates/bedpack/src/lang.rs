//! `.lang` locale table builder.

/// Accumulates translation key/value pairs for one locale and assembles them
/// into the `.lang` text format: one `key=value` line per entry, followed by
/// a trailing blank line.
///
/// Entries keep insertion order; writing an existing key again replaces its
/// value in place.
#[derive(Debug, Clone)]
pub struct LangBuilder {
    locale: String,
    translations: Vec<(String, String)>,
}

impl LangBuilder {
    /// `locale` is a `language_COUNTRY` code (`en_US`, `cs_CZ`, ...).
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            translations: Vec::new(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn translation(
        &mut self,
        key: impl Into<String>,
        translation: impl Into<String>,
    ) -> &mut Self {
        let key = key.into();
        let translation = translation.into();
        match self.translations.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = translation,
            None => self.translations.push((key, translation)),
        }
        self
    }

    /// Serialize the table, ready to be written to `texts/<locale>.lang`.
    pub fn assemble(&self) -> String {
        let mut out = String::new();
        for (key, translation) in &self.translations {
            out.push_str(key);
            out.push('=');
            out.push_str(translation);
            out.push('\n');
        }
        out.push('\n');
        out
    }
}
