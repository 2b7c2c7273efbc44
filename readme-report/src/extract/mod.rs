//! Heuristic metadata extraction from README text.
//!
//! READMEs are treated as unstructured text: headings and sections are found
//! with regular expressions, never with a Markdown parser.

mod rules;

pub use rules::{TechStackRules, SECTION_PATTERNS, TECH_VOCABULARY};

use regex::Regex;
use std::sync::LazyLock;

/// Returned by [`extract_tech_stack`] when nothing could be derived.
pub const TECH_STACK_NOT_FOUND: &str = "Not found";

/// Returned by [`extract_use_case`] when nothing could be derived.
pub const USE_CASE_NOT_DESCRIBED: &str = "Not described";

/// Paragraphs shorter than this (in characters) are never used as a use case.
pub const MIN_USE_CASE_CHARS: usize = 20;

/// Use cases are truncated to this many characters.
pub const MAX_USE_CASE_CHARS: usize = 500;

static DEFAULT_RULES: LazyLock<TechStackRules> = LazyLock::new(TechStackRules::default);

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph pattern is valid"));

static IMAGE_OR_BADGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)!\[|\[!\[|badge").expect("badge pattern is valid"));

/// Derives a tech stack summary using the built-in [`TechStackRules`].
///
/// Returns [`TECH_STACK_NOT_FOUND`] for absent or empty text, or when neither a
/// labelled section nor a known technology name is present.
#[must_use]
pub fn extract_tech_stack(readme: Option<&str>) -> String {
    extract_tech_stack_with(&DEFAULT_RULES, readme)
}

/// Derives a tech stack summary using custom rules.
#[must_use]
pub fn extract_tech_stack_with(rules: &TechStackRules, readme: Option<&str>) -> String {
    let Some(text) = readme.filter(|text| !text.is_empty()) else {
        return TECH_STACK_NOT_FOUND.to_string();
    };

    if let Some(section) = rules.find_section(text) {
        return section;
    }

    let terms = rules.find_terms(text);
    if terms.is_empty() {
        TECH_STACK_NOT_FOUND.to_string()
    } else {
        terms.join(", ")
    }
}

/// Derives a one-paragraph use case description.
///
/// Picks the first paragraph (blank-line separated) that is neither an
/// image/badge block nor shorter than [`MIN_USE_CASE_CHARS`], collapses its
/// whitespace and truncates it to [`MAX_USE_CASE_CHARS`].
#[must_use]
pub fn extract_use_case(readme: Option<&str>) -> String {
    let Some(text) = readme.filter(|text| !text.is_empty()) else {
        return USE_CASE_NOT_DESCRIBED.to_string();
    };

    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .filter(|paragraph| !IMAGE_OR_BADGE.is_match(paragraph))
        .find(|paragraph| paragraph.chars().count() >= MIN_USE_CASE_CHARS)
        .map(|paragraph| {
            collapse_whitespace(paragraph)
                .chars()
                .take(MAX_USE_CASE_CHARS)
                .collect()
        })
        .unwrap_or_else(|| USE_CASE_NOT_DESCRIBED.to_string())
}

/// Replaces every whitespace run with a single space.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_empty_text_yields_sentinels() {
        for readme in [None, Some("")] {
            assert_eq!(extract_tech_stack(readme), "Not found");
            assert_eq!(extract_use_case(readme), "Not described");
        }
    }

    #[test]
    fn labelled_tech_stack_line_is_used() {
        let readme = "# Project\n\nTech Stack: Go, Postgres, Docker\n\nMore text here.";
        assert_eq!(extract_tech_stack(Some(readme)), "Go, Postgres, Docker");
    }

    #[test]
    fn heading_label_is_followed_to_next_line() {
        let readme = "## Built with\nRust\n";
        assert_eq!(extract_tech_stack(Some(readme)), "Rust");
    }

    #[test]
    fn technologies_label_is_case_insensitive() {
        let readme = "TECHNOLOGIES: Vue,   Firebase";
        assert_eq!(extract_tech_stack(Some(readme)), "Vue, Firebase");
    }

    #[test]
    fn second_pattern_matches_mid_line_labels() {
        let readme = "This service's Stack: Elixir and Phoenix";
        assert_eq!(extract_tech_stack(Some(readme)), "Elixir and Phoenix");
    }

    #[test]
    fn vocabulary_fallback_finds_whole_words() {
        let readme = "A dashboard written in React.";
        assert!(extract_tech_stack(Some(readme)).contains("React"));
    }

    #[test]
    fn vocabulary_fallback_uses_vocabulary_order() {
        let readme = "Runs on Kubernetes. The API is Django, the UI is TypeScript.";
        assert_eq!(
            extract_tech_stack(Some(readme)),
            "Django, TypeScript, Kubernetes"
        );
    }

    #[test]
    fn unknown_technologies_yield_not_found() {
        let readme = "Just a collection of notes about cooking.";
        assert_eq!(extract_tech_stack(Some(readme)), "Not found");
    }

    #[test]
    fn custom_rules_are_honoured() {
        let rules = TechStackRules::new(&[r"(?m)^Runtime:\s*(.+)$"], &["Zig"]).unwrap();
        assert_eq!(
            extract_tech_stack_with(&rules, Some("Runtime: Deno")),
            "Deno"
        );
        assert_eq!(
            extract_tech_stack_with(&rules, Some("Rewritten in zig.")),
            "Zig"
        );
        assert_eq!(
            extract_tech_stack_with(&rules, Some("Written in Rust.")),
            "Not found"
        );
    }

    #[test]
    fn badge_paragraph_is_skipped() {
        let readme = "![build](https://ci.example.com/badge.svg)\n\nA command line tool that tidies up photo libraries.";
        assert_eq!(
            extract_use_case(Some(readme)),
            "A command line tool that tidies up photo libraries."
        );
    }

    #[test]
    fn linked_badges_and_badge_word_are_skipped() {
        let readme = "[![CI](https://x/ci.svg)](https://x)\n\nSee the Badge list for this long paragraph.\n\nStores recipes in a local database.";
        assert_eq!(
            extract_use_case(Some(readme)),
            "Stores recipes in a local database."
        );
    }

    #[test]
    fn short_paragraphs_are_skipped() {
        let readme = "# demo\n\nTiny intro.\n\nThis paragraph is long enough to be chosen.";
        assert_eq!(
            extract_use_case(Some(readme)),
            "This paragraph is long enough to be chosen."
        );
    }

    #[test]
    fn use_case_whitespace_is_collapsed() {
        let readme = "Line one of the description\ncontinues   here\twith tabs.";
        assert_eq!(
            extract_use_case(Some(readme)),
            "Line one of the description continues here with tabs."
        );
    }

    #[test]
    fn use_case_is_capped() {
        let readme = "word ".repeat(1_000);
        let use_case = extract_use_case(Some(&readme));
        assert_eq!(use_case.chars().count(), MAX_USE_CASE_CHARS);
    }

    #[test]
    fn use_case_cap_counts_characters() {
        let readme = "é".repeat(2_000);
        let use_case = extract_use_case(Some(&readme));
        assert_eq!(use_case.chars().count(), MAX_USE_CASE_CHARS);
    }

    #[test]
    fn no_usable_paragraph_yields_sentinel() {
        let readme = "# x\n\n![logo](logo.png)\n\nshort";
        assert_eq!(extract_use_case(Some(readme)), "Not described");
    }

    #[test]
    fn paragraphs_split_on_whitespace_only_lines() {
        let readme = "tiny\n   \nThe second paragraph is the real description.";
        assert_eq!(
            extract_use_case(Some(readme)),
            "The second paragraph is the real description."
        );
    }
}
