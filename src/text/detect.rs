use log::debug;

/// Stopword profile for one supported language.
///
/// The stopword list is a small set of very common short function words
/// (articles, conjunctions, pronouns) for the language. Order is
/// irrelevant; around 15-20 entries is enough signal for lyric-length text.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    /// Language code this profile detects (lowercase ISO 639-1)
    pub code: String,

    /// Common short function words for the language
    pub stopwords: Vec<String>,
}

impl LanguageProfile {
    /// Create a profile from a code and a stopword list.
    pub fn new(code: impl Into<String>, stopwords: &[&str]) -> Self {
        Self {
            code: code.into(),
            stopwords: stopwords.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Built-in Spanish profile.
    pub fn spanish() -> Self {
        Self::new(
            "es",
            &[
                "el", "la", "los", "las", "de", "que", "y", "en", "un", "una", "es", "con",
                "por", "para", "como", "pero", "más", "este", "cuando", "todo",
            ],
        )
    }

    /// Built-in English profile.
    pub fn english() -> Self {
        Self::new(
            "en",
            &[
                "the", "and", "is", "you", "that", "for", "are", "with", "this", "have",
                "from", "they", "will", "not", "what", "all", "when", "your", "can", "there",
            ],
        )
    }

    /// Built-in French profile.
    pub fn french() -> Self {
        Self::new(
            "fr",
            &[
                "le", "la", "les", "des", "une", "est", "et", "que", "pour", "dans", "avec",
                "sur", "pas", "vous", "tout", "mais", "comme", "plus", "bien", "nous",
            ],
        )
    }

    /// Built-in Portuguese profile.
    pub fn portuguese() -> Self {
        Self::new(
            "pt",
            &[
                "de", "que", "não", "uma", "com", "para", "mais", "mas", "como", "seu",
                "sua", "ele", "ela", "você", "este", "isso", "quando", "muito", "também", "são",
            ],
        )
    }

    /// Look up a built-in profile by language code.
    pub fn builtin(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "es" => Some(Self::spanish()),
            "en" => Some(Self::english()),
            "fr" => Some(Self::french()),
            "pt" => Some(Self::portuguese()),
            _ => None,
        }
    }
}

/// Heuristic language classifier over a fixed set of stopword profiles.
///
/// For each profile, counts how many of its stopwords appear as a substring
/// anywhere in the lowercased input (presence, not frequency; deliberately
/// not word-bounded). The profile with the strictly highest count wins; ties
/// and the all-zero case resolve to the configured default language.
///
/// This is a cheap, explainable frequency heuristic, not a probabilistic
/// model. Known limitation: unreliable on very short inputs and
/// code-switched text.
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    profiles: Vec<LanguageProfile>,
    default_code: String,
}

impl LanguageDetector {
    /// Create a detector from profiles and a default language code.
    ///
    /// The default is returned whenever no profile produces a strictly
    /// winning stopword count.
    pub fn new(profiles: Vec<LanguageProfile>, default_language: impl Into<String>) -> Self {
        Self {
            profiles,
            default_code: default_language.into(),
        }
    }

    /// Detector over the Spanish/English built-in pair, defaulting to Spanish.
    pub fn with_defaults() -> Self {
        Self::new(
            vec![LanguageProfile::spanish(), LanguageProfile::english()],
            "es",
        )
    }

    /// The configured default language code.
    pub fn default_language(&self) -> &str {
        &self.default_code
    }

    /// Classify a text block as one of the configured language codes.
    ///
    /// Never fails: empty input, numeric-only input, or text with no
    /// stopword signal all return the default language code.
    pub fn detect(&self, text: &str) -> &str {
        if text.trim().is_empty() || self.profiles.is_empty() {
            return &self.default_code;
        }

        let lowered = text.to_lowercase();

        let mut best: Option<(&str, usize)> = None;
        let mut tied = false;
        for profile in &self.profiles {
            let score = profile
                .stopwords
                .iter()
                .filter(|word| lowered.contains(word.as_str()))
                .count();
            debug!("language score: {} -> {}", profile.code, score);

            match best {
                Some((_, best_score)) if score > best_score => {
                    best = Some((&profile.code, score));
                    tied = false;
                }
                Some((_, best_score)) if score == best_score => {
                    tied = true;
                }
                None => {
                    best = Some((&profile.code, score));
                }
                _ => {}
            }
        }

        match best {
            Some((code, score)) if score > 0 && !tied => code,
            _ => &self.default_code,
        }
    }
}
