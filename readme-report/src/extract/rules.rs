//! Tech stack detection rules.

use regex::Regex;

/// Labelled-section patterns, tried in order. Group 1 holds the stack text.
pub const SECTION_PATTERNS: &[&str] = &[
    r"(?mi)^(?:##+\s*)?(?:built with|built-with|technolog(?:ies|y)|tech(?: stack)?)[:\s\-]*\n?(.+)$",
    r"(?mi)(?:Built with|Technologies|Tech stack|Stack):\s*(.+)",
];

/// Well-known technology names, in reporting order.
pub const TECH_VOCABULARY: &[&str] = &[
    "Python",
    "Django",
    "Flask",
    "FastAPI",
    "JavaScript",
    "TypeScript",
    "React",
    "Vue",
    "Angular",
    "Node",
    "Express",
    "Go",
    "Rust",
    "C++",
    "Java",
    "Spring",
    "Ruby",
    "Rails",
    "PHP",
    "Laravel",
    "SQL",
    "Postgres",
    "MySQL",
    "MongoDB",
    "Docker",
    "Kubernetes",
];

/// Compiled rules used to derive a tech stack summary from README text.
///
/// Section patterns are first-match-wins. When none match, every vocabulary
/// term found as a whole word (case-insensitive) is reported, in vocabulary
/// order rather than the order the terms appear in the text.
#[derive(Debug, Clone)]
pub struct TechStackRules {
    sections: Vec<Regex>,
    vocabulary: Vec<(String, Regex)>,
}

impl Default for TechStackRules {
    fn default() -> Self {
        Self::new(SECTION_PATTERNS, TECH_VOCABULARY)
            .expect("built-in tech stack patterns are valid")
    }
}

impl TechStackRules {
    /// Compiles a custom set of section patterns and vocabulary terms.
    ///
    /// Each section pattern must contain at least one capture group; the first
    /// group is used as the stack text. Vocabulary terms are matched literally.
    ///
    /// # Errors
    ///
    /// Returns [`regex::Error`] if a section pattern fails to compile.
    pub fn new<P, V>(sections: &[P], vocabulary: &[V]) -> Result<Self, regex::Error>
    where
        P: AsRef<str>,
        V: AsRef<str>,
    {
        let sections = sections
            .iter()
            .map(|pattern| Regex::new(pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let vocabulary = vocabulary
            .iter()
            .map(|term| {
                let term = term.as_ref();
                let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
                Regex::new(&pattern).map(|re| (term.to_string(), re))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            sections,
            vocabulary,
        })
    }

    /// Returns the stack text from the first labelled section that matches.
    ///
    /// Whitespace runs (newlines included) collapse to a single space.
    #[must_use]
    pub fn find_section(&self, text: &str) -> Option<String> {
        self.sections.iter().find_map(|re| {
            re.captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| super::collapse_whitespace(m.as_str().trim()))
        })
    }

    /// Returns every vocabulary term present in `text`, in vocabulary order.
    #[must_use]
    pub fn find_terms(&self, text: &str) -> Vec<&str> {
        self.vocabulary
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(term, _)| term.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_rules_compile() {
        let rules = TechStackRules::default();
        assert_eq!(rules.sections.len(), SECTION_PATTERNS.len());
        assert_eq!(rules.vocabulary.len(), TECH_VOCABULARY.len());
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let result = TechStackRules::new(&["(unclosed"], TECH_VOCABULARY);
        assert!(result.is_err());
    }

    #[test]
    fn custom_patterns_are_tried_in_order() {
        let rules =
            TechStackRules::new(&[r"(?m)^Runtime:\s*(.+)$", r"(?m)^Stack:\s*(.+)$"], &["Go"])
                .unwrap();

        let text = "Stack: second\nRuntime: first";
        assert_eq!(rules.find_section(text).as_deref(), Some("first"));
    }

    #[test]
    fn terms_follow_vocabulary_order() {
        let rules = TechStackRules::default();
        let found = rules.find_terms("Deployed with Docker, written in Rust and some Python.");
        assert_eq!(found, vec!["Python", "Rust", "Docker"]);
    }

    #[test]
    fn terms_require_whole_words() {
        let rules = TechStackRules::default();
        assert!(rules.find_terms("Reactive streams").is_empty());
        assert_eq!(rules.find_terms("uses react hooks"), vec!["React"]);
    }

    #[test]
    fn section_collapses_whitespace() {
        let rules = TechStackRules::default();
        let text = "Built with:   Rust,\tTokio   and  Serde  ";
        assert_eq!(
            rules.find_section(text).as_deref(),
            Some("Rust, Tokio and Serde")
        );
    }
}
