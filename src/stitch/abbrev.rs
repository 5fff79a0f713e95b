//! Knitting abbreviation dictionary.
//!
//! A case-sensitive, read-only table built once at startup. Lookups never
//! fail: unknown abbreviations map to [`UNKNOWN_ABBREVIATION`] so a batch
//! can partially succeed.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Sentinel returned for abbreviations missing from the table.
pub const UNKNOWN_ABBREVIATION: &str = "unknown abbreviation";

/// Built-in abbreviation table.
const STANDARD_ABBREVIATIONS: &[(&str, &str)] = &[
    ("K", "knit"),
    ("P", "purl"),
    ("YO", "yarn over"),
    ("K2tog", "knit two stitches together (right-leaning decrease)"),
    ("p2tog", "purl two stitches together"),
    ("SSK", "slip, slip, knit the two slipped stitches together (left-leaning decrease)"),
    ("kfb", "knit into the front and back of the same stitch (increase)"),
    ("M1", "make one: lift the bar between stitches and knit into it"),
    ("sl", "slip a stitch from the left needle to the right without working it"),
    ("CO", "cast on"),
    ("BO", "bind off"),
    ("RS", "right side of the work"),
    ("WS", "wrong side of the work"),
    ("pm", "place marker"),
    ("sm", "slip marker"),
    ("tbl", "through the back loop"),
    ("st", "stitch"),
    ("sts", "stitches"),
    ("rep", "repeat"),
];

/// Markdown reference table served verbatim by `abbrev_table` and
/// `knit://abbreviations`.
pub const ABBREVIATION_TABLE_MARKDOWN: &str = "\
| Abbreviation | Meaning |
|--------------|---------|
| K | knit |
| P | purl |
| YO | yarn over |
| K2tog | knit two together |
| p2tog | purl two together |
| SSK | slip, slip, knit |
| kfb | knit front and back |
| M1 | make one |
| sl | slip |
| CO | cast on |
| BO | bind off |
| RS | right side |
| WS | wrong side |
| pm | place marker |
| sm | slip marker |
| tbl | through the back loop |
| st / sts | stitch / stitches |
| rep | repeat |
";

/// What a caller can ask the dictionary for: one comma-separated string,
/// or an explicit list of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AbbrevQuery {
    Delimited(String),
    Tokens(Vec<String>),
}

impl AbbrevQuery {
    /// Trimmed, non-empty tokens in request order.
    pub fn tokens(&self) -> Vec<&str> {
        let raw: Vec<&str> = match self {
            AbbrevQuery::Delimited(s) => s.split(',').collect(),
            AbbrevQuery::Tokens(items) => items.iter().map(String::as_str).collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

impl From<&str> for AbbrevQuery {
    fn from(s: &str) -> Self {
        AbbrevQuery::Delimited(s.to_string())
    }
}

impl From<Vec<String>> for AbbrevQuery {
    fn from(items: Vec<String>) -> Self {
        AbbrevQuery::Tokens(items)
    }
}

/// Read-only abbreviation lookup table.
#[derive(Debug, Clone)]
pub struct AbbreviationDictionary {
    entries: HashMap<&'static str, &'static str>,
}

impl AbbreviationDictionary {
    /// Build the dictionary from the built-in table.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, abbrev: &str) -> Option<&'static str> {
        self.entries.get(abbrev).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Translate every token in `query`. Duplicate tokens collapse into one key.
    pub fn translate(&self, query: &AbbrevQuery) -> BTreeMap<String, String> {
        query
            .tokens()
            .into_iter()
            .map(|token| {
                let meaning = self.get(token).unwrap_or(UNKNOWN_ABBREVIATION);
                (token.to_string(), meaning.to_string())
            })
            .collect()
    }
}

impl Default for AbbreviationDictionary {
    fn default() -> Self {
        Self::standard()
    }
}

/// Translate `query` against the built-in table.
pub fn translate_abbrev(query: &AbbrevQuery) -> BTreeMap<String, String> {
    AbbreviationDictionary::standard().translate(query)
}

/// The fixed Markdown reference table.
pub fn abbreviation_table() -> &'static str {
    ABBREVIATION_TABLE_MARKDOWN
}
