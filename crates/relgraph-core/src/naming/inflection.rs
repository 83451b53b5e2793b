//! English pluralization for table names.
//!
//! Only the last word of a name is inflected (`cart_contact` becomes
//! `cart_contacts`, `OrderItem` becomes `OrderItems`), and its letter case
//! is preserved.

const UNCOUNTABLE: &[&str] = &[
    "audio",
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "information",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "staff",
];

/// `(singular, plural)` pairs not covered by the suffix rules.
const IRREGULAR: &[(&str, &str)] = &[
    ("alias", "aliases"),
    ("analysis", "analyses"),
    ("axis", "axes"),
    ("bus", "buses"),
    ("campus", "campuses"),
    ("child", "children"),
    ("criterion", "criteria"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("half", "halves"),
    ("index", "indices"),
    ("knife", "knives"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("man", "men"),
    ("matrix", "matrices"),
    ("medium", "media"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("quiz", "quizzes"),
    ("status", "statuses"),
    ("tooth", "teeth"),
    ("vertex", "vertices"),
    ("wife", "wives"),
    ("woman", "women"),
];

/// Singular words ending in a plain `s`; their plural adds `es`.
const SINGULAR_ENDING_IN_S: &[&str] = &[
    "atlas", "bias", "canvas", "chaos", "cosmos", "ethos", "gas", "lens", "pathos",
];

/// `(plural ending, singular ending)` pairs tried before the suffix rules.
const SINGULAR_EXCEPTIONS: &[(&str, &str)] = &[
    ("caches", "cache"),
    ("cliches", "cliche"),
    ("cookies", "cookie"),
    ("headaches", "headache"),
    ("movies", "movie"),
    ("niches", "niche"),
    ("shoes", "shoe"),
    ("zombies", "zombie"),
];

/// Plural form of `name`.
pub fn pluralize(name: &str) -> String {
    inflect_last_word(name, plural_of)
}

/// Singular form of `name`.
pub fn singularize(name: &str) -> String {
    inflect_last_word(name, singular_of)
}

fn plural_of(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(s, p)| *s == word || *p == word) {
        return plural.to_string();
    }
    if SINGULAR_ENDING_IN_S.contains(&word) {
        return format!("{word}es");
    }
    // Already plural.
    let singular = singular_of(word);
    if singular != word && suffix_plural(&singular) == word {
        return word.to_string();
    }
    suffix_plural(word)
}

fn suffix_plural(word: &str) -> String {
    if ["s", "x", "z", "ch", "sh"].iter().any(|s| word.ends_with(s)) {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix('y') {
        if stem.ends_with(|c: char| !is_vowel(c)) {
            return format!("{stem}ies");
        }
    }
    format!("{word}s")
}

fn singular_of(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(s, p)| *p == word || *s == word) {
        return singular.to_string();
    }
    if SINGULAR_ENDING_IN_S.contains(&word) {
        return word.to_string();
    }
    if let Some(singular) = SINGULAR_ENDING_IN_S
        .iter()
        .find(|s| word.strip_suffix("es") == Some(**s))
    {
        return singular.to_string();
    }
    for (plural, singular) in SINGULAR_EXCEPTIONS {
        if let Some(stem) = word.strip_suffix(plural) {
            return format!("{stem}{singular}");
        }
    }
    if word.len() > 3 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }
    for suffix in ["sses", "shes", "ches", "xes", "zzes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if ["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn inflect_last_word(name: &str, inflect: fn(&str) -> String) -> String {
    let (head, word) = split_last_word(name);
    if word.is_empty() {
        return name.to_string();
    }

    let inflected = inflect(&word.to_lowercase());
    let restored = if word.len() > 1 && word.chars().all(|c| c.is_uppercase()) {
        inflected.to_uppercase()
    } else if word.starts_with(char::is_uppercase) {
        let mut chars = inflected.chars();
        chars
            .next()
            .map(|first| first.to_uppercase().collect::<String>() + chars.as_str())
            .unwrap_or_default()
    } else {
        inflected
    };

    format!("{head}{restored}")
}

/// Split off the trailing alphabetic word, stopping at a separator or at a
/// lower-to-upper case boundary.
fn split_last_word(name: &str) -> (&str, &str) {
    let chars: Vec<(usize, char)> = name.char_indices().collect();
    let mut start = name.len();

    for i in (0..chars.len()).rev() {
        let (offset, c) = chars[i];
        if !c.is_alphabetic() {
            break;
        }
        start = offset;
        if c.is_uppercase() && i > 0 && chars[i - 1].1.is_lowercase() {
            break;
        }
    }

    name.split_at(start)
}
