//! Wikitext sanitization.
//!
//! Diff cells contain raw wikitext (links, templates, references, some html).
//! [WikiSanitizer] turns it into lowercase plain ASCII text suitable for sentence splitting and tokenization.
use lazy_static::lazy_static;
use regex::Regex;
use unic_ucd::normal::decompose_canonical;
use unic_ucd::GeneralCategory;

use super::Sanitize;

lazy_static! {
    static ref REF: Regex = Regex::new(r#"<ref([-\w=" <>]+)?>.*?<( +)?/( +)?ref>"#).unwrap();
    static ref COMMENT: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref TEMPLATE: Regex = Regex::new(r"\{\{[^{}]*\}\}").unwrap();
    static ref LINK_WITH_TEXT: Regex = Regex::new(r"\[\[[^\[\]|]*\|([^\[\]]*)\]\]").unwrap();
    static ref LINK: Regex = Regex::new(r"\[\[([^\[\]|]*)\]\]").unwrap();
    static ref EXTERNAL_LINK_WITH_TEXT: Regex =
        Regex::new(r"\[(?:https?:)?//[^\s\]]+ ([^\]]*)\]").unwrap();
    static ref EXTERNAL_LINK: Regex = Regex::new(r"\[(?:https?:)?//[^\s\]]+\]").unwrap();
    static ref EMPHASIS: Regex = Regex::new(r"'{2,}").unwrap();
    static ref HEADING: Regex = Regex::new(r"={2,}").unwrap();
    static ref TAG: Regex = Regex::new(r"</?[a-z][^<>]*>").unwrap();
    static ref ENTITY: Regex = Regex::new(r"&(nbsp|amp|lt|gt|quot|#\d+);").unwrap();
    static ref SPACES: Regex = Regex::new(r"[ ]+").unwrap();
    static ref WORD: Regex = Regex::new(r"\w").unwrap();
    static ref URL: Regex = Regex::new(r"http\S+").unwrap();
    static ref EMPTY_PARENS: Regex = Regex::new(r"\([^\w]*\)").unwrap();
    static ref DEL_INS: Regex = Regex::new(r#"</?(del|ins)([-\w=" <>]+)?>"#).unwrap();
    static ref TABLE_FRAGMENT: Regex =
        Regex::new(r"(right ?\||left ?\||thumb ?\||frame ?\||\d+px ?\|)").unwrap();
}

/// Wikitext/html to plain text.
///
/// The result is lowercased, accent-folded, ASCII only, and stripped of every
/// punctuation sign but `.` (which is kept for sentence splitting, see [WikiSanitizer::without_periods]).
/// Lines that look like table artifacts or timestamps are sanitized into an empty string.
#[derive(Debug, Clone)]
pub struct WikiSanitizer {
    keep_periods: bool,
}

impl WikiSanitizer {
    /// Sanitizer that also removes periods, used on already split text.
    pub fn without_periods() -> Self {
        Self {
            keep_periods: false,
        }
    }
}

impl Default for WikiSanitizer {
    fn default() -> Self {
        Self { keep_periods: true }
    }
}

impl Sanitize for WikiSanitizer {
    fn sanitize(&self, text: &str) -> String {
        let x = fold_accents(&text.to_lowercase());
        let x: String = x.chars().filter(is_printable).collect();

        // refs first, including unterminated ones
        let x = remove_refs(x.trim());
        let x = SPACES.replace_all(&x, " ");

        let plaintext = strip_wikicode(&x);
        let plaintext = remove_refs(&plaintext);
        let plaintext = SPACES.replace_all(&plaintext, " ");
        let plaintext = strip_wikicode(&plaintext);

        // table artifacts
        if plaintext.starts_with(['!', '?', '|']) {
            return String::new();
        }

        if !WORD.is_match(&plaintext) {
            return String::new();
        }

        let plaintext = plaintext.replace("[ ", "[").replace(" ]", "]");
        let plaintext = strip_wikicode(&plaintext);
        let plaintext = plaintext.replace(['[', ']'], "");

        let plaintext = URL.replace_all(&plaintext, "");
        let plaintext = EMPTY_PARENS.replace_all(&plaintext, "");
        let plaintext = DEL_INS.replace_all(&plaintext, "");
        let plaintext = plaintext.replace('*', "");
        let plaintext = TABLE_FRAGMENT.replace_all(&plaintext, "");

        // timestamps
        if plaintext.contains("retrieved on") {
            return String::new();
        }

        let plaintext = plaintext
            .replace("<blockquote>", "")
            .replace(['\t', '\n'], " ")
            .replace('\r', "");
        let plaintext = SPACES.replace_all(&plaintext, " ");

        let plaintext: String = plaintext
            .trim()
            .chars()
            .filter(|c| !c.is_ascii_punctuation() || (self.keep_periods && *c == '.'))
            .collect();

        if self.keep_periods {
            plaintext
        } else {
            plaintext.trim().to_string()
        }
    }
}

/// Printable ASCII only, with newlines and tabs turned into spaces.
///
/// Used on raw chunk text before it is stored in a [crate::revision::RevisionDiff].
pub fn clean_wiki_text(text: &str) -> String {
    fold_accents(text)
        .chars()
        .filter(is_printable)
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .collect()
}

/// Replace accented letters by their base letter (`é` -> `e`).
pub fn fold_accents(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            folded.push(c);
        } else {
            decompose_canonical(c, |d| {
                if !GeneralCategory::of(d).is_mark() {
                    folded.push(d)
                }
            });
        }
    }
    folded
}

/// Same set as python's `string.printable`.
fn is_printable(c: &char) -> bool {
    c.is_ascii_graphic() || [' ', '\t', '\n', '\r', '\x0b', '\x0c'].contains(c)
}

fn remove_refs(text: &str) -> String {
    let mut text = REF.replace_all(text, " ").into_owned();

    // leading </ref>
    if text.contains("</ref>") {
        text = REF.replace_all(&format!("<ref>{}", text), " ").into_owned();
    }

    // trailing <ref>
    if text.contains("<ref") {
        text = REF.replace_all(&format!("{}</ref>", text), " ").into_owned();
    }

    text
}

/// Remove wiki markup, keeping the displayed text.
fn strip_wikicode(text: &str) -> String {
    let mut text = COMMENT.replace_all(text, "").into_owned();

    // templates and links can nest, strip from the inside out
    loop {
        let stripped = TEMPLATE.replace_all(&text, "");
        let stripped = LINK_WITH_TEXT.replace_all(&stripped, "$1");
        let stripped = LINK.replace_all(&stripped, "$1").into_owned();
        if stripped == text {
            break;
        }
        text = stripped;
    }

    let text = EXTERNAL_LINK_WITH_TEXT.replace_all(&text, "$1");
    let text = EXTERNAL_LINK.replace_all(&text, "");
    let text = EMPHASIS.replace_all(&text, "");
    let text = HEADING.replace_all(&text, "");
    let text = TAG.replace_all(&text, "");

    ENTITY
        .replace_all(&text, |caps: &regex::Captures| match &caps[1] {
            "amp" => "&".to_string(),
            "lt" => "<".to_string(),
            "gt" => ">".to_string(),
            "quot" => "\"".to_string(),
            _ => " ".to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_and_templates() {
        let s = WikiSanitizer::default();
        assert_eq!(
            s.sanitize("De [[Kat (dier)|kat]] is {{nowrap|heel}} '''zwart'''."),
            "de kat is zwart."
        );
        assert_eq!(s.sanitize("[[Amsterdam]] is groot"), "amsterdam is groot");
    }

    #[test]
    fn nested_templates() {
        let s = WikiSanitizer::default();
        assert_eq!(s.sanitize("a {{b|{{c}}}} d"), "a d");
    }

    #[test]
    fn refs() {
        let s = WikiSanitizer::default();
        assert_eq!(
            s.sanitize(r#"hij won<ref name="x">Bron, 2001</ref> de prijs."#),
            "hij won de prijs."
        );
        assert_eq!(s.sanitize("begin <ref>onafgemaakt"), "begin");
    }

    #[test]
    fn accents_and_punctuation() {
        let s = WikiSanitizer::default();
        assert_eq!(s.sanitize("Één, twee; drie!"), "een twee drie");
        let s = WikiSanitizer::without_periods();
        assert_eq!(s.sanitize("Het café is open."), "het cafe is open");
    }

    #[test]
    fn artifacts() {
        let s = WikiSanitizer::default();
        assert_eq!(s.sanitize("| style=\"x\" | cel"), "");
        assert_eq!(s.sanitize("( , , , )"), "");
        assert_eq!(s.sanitize("Retrieved on 12 May"), "");
        assert_eq!(s.sanitize("zie http://example.com hier"), "zie hier");
    }

    #[test]
    fn external_links() {
        let s = WikiSanitizer::default();
        assert_eq!(
            s.sanitize("lees [https://example.org het artikel] nu"),
            "lees het artikel nu"
        );
    }

    #[test]
    fn clean() {
        assert_eq!(clean_wiki_text("a\tb\nc ☃ é"), "a b c  e");
    }
}
