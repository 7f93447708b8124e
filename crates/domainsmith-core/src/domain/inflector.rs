//! English pluralization and singularization.
//!
//! The rule tables follow the classic Rails / Doctrine inflector layout:
//! uncountable words first, then irregular pairs, then ordered regular
//! expression rules where the first matching rule wins.
//!
//! Compound identifiers are inflected on their **last word only**, so
//! `BlogPosts` singularizes to `BlogPost` and `order_item` pluralizes to
//! `order_items`. The casing of that last word is carried over to the
//! result (`Users` -> `User`, `USERS` -> `USER`).

use std::sync::LazyLock;

use regex::Regex;

const UNCOUNTABLE: &[&str] = &[
    "audio",
    "chassis",
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "police",
    "rice",
    "series",
    "sheep",
    "species",
    "traffic",
];

/// `(singular, plural)` pairs that no regular rule produces.
const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("criterion", "criteria"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("move", "moves"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

static PLURAL_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    compile(&[
        (r"(quiz)$", "${1}zes"),
        (r"^(ox)$", "${1}en"),
        (r"^(m|l)ouse$", "${1}ice"),
        (r"(matr)ix$", "${1}ices"),
        (r"(vert|ind)ex$", "${1}ices"),
        (r"(alias|status|virus|campus|bonus|census|bus)$", "${1}es"),
        (r"(x|ch|ss|sh)$", "${1}es"),
        (r"([^aeiouy]|qu)y$", "${1}ies"),
        (r"(wi|kni|li)fe$", "${1}ves"),
        (r"(hal|el|sel|shel|wol|lea|loa|thie|cal|scar|dwar|whar)f$", "${1}ves"),
        (r"(her|potat|tomat|ech|vet)o$", "${1}oes"),
        (r"^(ax|test|cris)is$", "${1}es"),
        (r"(analy|ba|diagno|parenthe|progno|synop|the)sis$", "${1}ses"),
        (r"s$", "s"),
        (r"$", "s"),
    ])
});

static SINGULAR_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    compile(&[
        (r"(database)s$", "${1}"),
        (r"(quiz)zes$", "${1}"),
        (r"(matr)ices$", "${1}ix"),
        (r"(vert|ind)ices$", "${1}ex"),
        (r"^(ox)en$", "${1}"),
        (r"(alias|status|virus|campus|bonus|census|bus)(es)?$", "${1}"),
        (r"^(ax|test|cris)(is|es)$", "${1}is"),
        (r"(analy|ba|diagno|parenthe|progno|synop|the)(sis|ses)$", "${1}sis"),
        (r"(shoe)s$", "${1}"),
        (r"(her|potat|tomat|ech|vet)oes$", "${1}o"),
        (r"^(m|l)ice$", "${1}ouse"),
        (r"(x|ch|ss|sh)es$", "${1}"),
        (r"(m)ovies$", "${1}ovie"),
        (r"([^aeiouy]|qu)ies$", "${1}y"),
        (r"(wi|kni|li)ves$", "${1}fe"),
        (r"(hal|el|sel|shel|wol|lea|loa|thie|cal|scar|dwar|whar)ves$", "${1}f"),
        (r"(hive|tive)s$", "${1}"),
        (r"(ss|us)$", "${1}"),
        (r"s$", ""),
    ])
});

fn compile(rules: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    rules
        .iter()
        .map(|(pattern, replacement)| {
            let regex = Regex::new(pattern).expect("static inflection rule must compile");
            (regex, *replacement)
        })
        .collect()
}

/// Pluralize an identifier.
///
/// ```
/// use domainsmith_core::domain::inflector::pluralize;
///
/// assert_eq!(pluralize("User"), "Users");
/// assert_eq!(pluralize("Category"), "Categories");
/// assert_eq!(pluralize("Person"), "People");
/// ```
pub fn pluralize(word: &str) -> String {
    inflect(word, Number::Plural)
}

/// Singularize an identifier.
///
/// Singularizing an already-singular word returns it unchanged for every
/// word the rule tables know about, so `singularize(singularize(x))` always
/// equals `singularize(x)`.
pub fn singularize(word: &str) -> String {
    inflect(word, Number::Singular)
}

#[derive(Clone, Copy)]
enum Number {
    Singular,
    Plural,
}

fn inflect(word: &str, number: Number) -> String {
    let (prefix, last) = split_last_word(word);
    if last.is_empty() {
        return word.to_string();
    }

    let lower = last.to_lowercase();
    let inflected = inflect_lowercase(&lower, number);

    format!("{prefix}{}", match_case(last, &inflected))
}

fn inflect_lowercase(word: &str, number: Number) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }

    for (singular, plural) in IRREGULAR {
        match number {
            Number::Plural if word == *singular || word == *plural => return plural.to_string(),
            Number::Singular if word == *plural || word == *singular => {
                return singular.to_string();
            }
            _ => {}
        }
    }

    let rules = match number {
        Number::Plural => &*PLURAL_RULES,
        Number::Singular => &*SINGULAR_RULES,
    };

    rules
        .iter()
        .find(|(regex, _)| regex.is_match(word))
        .map(|(regex, replacement)| regex.replace(word, *replacement).into_owned())
        .unwrap_or_else(|| word.to_string())
}

/// Carry the casing of `original` over to `inflected`.
fn match_case(original: &str, inflected: &str) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        return inflected.to_uppercase();
    }

    match original.chars().next() {
        Some(first) if first.is_uppercase() => {
            let mut chars = inflected.chars();
            match chars.next() {
                Some(head) => head.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        _ => inflected.to_string(),
    }
}

/// Split an identifier into everything before its last word, and the last word.
///
/// Word boundaries are separators (`_`, `-`, space), a lowercase/digit to
/// uppercase transition (`blogPosts`), and the end of an acronym
/// (`HTTPRequests` -> `HTTP` + `Requests`).
fn split_last_word(word: &str) -> (&str, &str) {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut start = 0;

    for (i, &(offset, c)) in chars.iter().enumerate() {
        if matches!(c, '_' | '-' | ' ') {
            start = offset + c.len_utf8();
            continue;
        }
        if i == 0 || !c.is_uppercase() {
            continue;
        }
        let prev = chars[i - 1].1;
        let next_is_lower = chars.get(i + 1).is_some_and(|(_, n)| n.is_lowercase());
        if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
            start = offset;
        }
    }

    word.split_at(start)
}
