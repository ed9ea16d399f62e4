//! Locale support: the language set, string catalogs, and lookup.
//!
//! A deliberately small catalog: three locales, a fixed key set, linear
//! lookup over const tables. A missing key falls back to English and then
//! to the key itself, so a catalog gap degrades to a visible raw key
//! instead of a panic mid-render.

// ============================================================================
// LOCALES
// ============================================================================

/// The supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
    Fr,
}

/// Document-level text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl Locale {
    /// Every locale, in selector order.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ar, Locale::Fr];

    /// The language code.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
            Locale::Fr => "fr",
        }
    }

    /// Selector button label.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Ar => "AR",
            Locale::Fr => "FR",
        }
    }

    /// Arabic lays the whole document out right-to-left.
    pub fn direction(self) -> TextDirection {
        match self {
            Locale::Ar => TextDirection::RightToLeft,
            Locale::En | Locale::Fr => TextDirection::LeftToRight,
        }
    }

    /// The next locale in selector order, wrapping around.
    pub fn next(self) -> Locale {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::Fr,
            Locale::Fr => Locale::En,
        }
    }
}

// ============================================================================
// CATALOGS
// ============================================================================

const EN: &[(&str, &str)] = &[
    ("title", "The Insight Theory"),
    ("subtitle", "A Global Scientific Platform"),
    ("languages", "Languages"),
    ("totalFacts", "Total Facts"),
    ("activeLanguage", "Active Language"),
    ("topics", "Scientific Topics"),
    ("randomSection", "Random Fact Generator"),
    ("randomFactButton", "Generate Random Fact"),
    ("loadingFact", "Loading fact..."),
    ("searchSection", "Search Scientific Facts"),
    ("searchPlaceholder", "Search facts..."),
    ("noResults", "No facts found matching your search."),
    ("foundOne", "Found {count} fact"),
    ("foundOther", "Found {count} facts"),
    ("footer", "© 2026 The Insight Theory - A Global Scientific Platform"),
    (
        "tagline",
        "Dedicated to unveiling the universe's deepest secrets through data-driven insights",
    ),
];

const AR: &[(&str, &str)] = &[
    ("title", "نظرية البصيرة"),
    ("subtitle", "منصة علمية عالمية"),
    ("languages", "اللغات"),
    ("totalFacts", "إجمالي الحقائق"),
    ("activeLanguage", "اللغة النشطة"),
    ("topics", "مواضيع علمية"),
    ("randomSection", "مولد الحقائق العشوائية"),
    ("randomFactButton", "توليد حقيقة عشوائية"),
    ("loadingFact", "جاري تحميل الحقيقة..."),
    ("searchSection", "البحث في الحقائق العلمية"),
    ("searchPlaceholder", "ابحث في الحقائق..."),
    ("noResults", "لم يتم العثور على حقائق مطابقة لبحثك."),
    ("foundOne", "تم العثور على {count} حقيقة"),
    ("foundOther", "تم العثور على {count} حقائق"),
    ("footer", "© 2026 نظرية البصيرة - منصة علمية عالمية"),
    (
        "tagline",
        "مكرسة لكشف أعمق أسرار الكون من خلال رؤى قائمة على البيانات",
    ),
];

const FR: &[(&str, &str)] = &[
    ("title", "La Théorie de l'Insight"),
    ("subtitle", "Une plateforme scientifique mondiale"),
    ("languages", "Langues"),
    ("totalFacts", "Total des faits"),
    ("activeLanguage", "Langue active"),
    ("topics", "Sujets scientifiques"),
    ("randomSection", "Générateur de faits aléatoires"),
    ("randomFactButton", "Générer un fait aléatoire"),
    ("loadingFact", "Chargement du fait..."),
    ("searchSection", "Rechercher des faits scientifiques"),
    ("searchPlaceholder", "Rechercher des faits..."),
    ("noResults", "Aucun fait ne correspond à votre recherche."),
    ("foundOne", "{count} fait trouvé"),
    ("foundOther", "{count} faits trouvés"),
    ("footer", "© 2026 The Insight Theory - Une plateforme scientifique mondiale"),
    (
        "tagline",
        "Dédiée à percer les secrets les plus profonds de l'univers grâce à des analyses fondées sur les données",
    ),
];

fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => EN,
        Locale::Ar => AR,
        Locale::Fr => FR,
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

// ============================================================================
// LOOKUP AND FORMATTING
// ============================================================================

/// Look up `key` in the active locale's catalog, falling back to English
/// and then to the key itself. Never fails.
pub fn translate<'a>(locale: Locale, key: &'a str) -> &'a str {
    lookup(table(locale), key)
        .or_else(|| lookup(EN, key))
        .unwrap_or(key)
}

/// Replace `{name}` tokens with their values in a single pass.
///
/// Unknown tokens and unterminated braces pass through verbatim.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        match after.find('}') {
            Some(end) => {
                let name = &after[1..end];
                match args.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&after[..=end]),
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(after);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// The localized, pluralized "found n facts" line for search results.
pub fn found_label(locale: Locale, count: usize) -> String {
    let key = if count == 1 { "foundOne" } else { "foundOther" };
    interpolate(translate(locale, key), &[("count", &count.to_string())])
}

// ============================================================================
// TESTS
// ============================================================================
