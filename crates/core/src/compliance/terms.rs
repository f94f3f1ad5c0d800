//! Rule term tables: static configuration data for the compliance engine.
//!
//! All entries are lowercase; matching is case-insensitive substring
//! containment against the input text. Keeping the tables here, separate
//! from the matching logic, means the rule set can be extended and
//! unit-tested without touching the engine.

/// Prohibited advertising language under AHPRA guidelines (Section 133,
/// National Law): superlatives, guarantees, and sensational claims.
pub const PROHIBITED_TERMS: &[&str] = &[
    "miracle",
    "cure",
    "guarantee",
    "instant",
    "painless",
    "risk-free",
    "100% safe",
    "totally safe",
    "completely safe",
    "no side effects",
    "magic",
    "breakthrough",
    "revolutionary",
    "amazing results",
    "best doctor",
    "top specialist",
    "leading expert",
];

/// Unproven therapeutic claims regulated by the TGA.
pub const THERAPEUTIC_CLAIM_TERMS: &[&str] = &[
    "cures",
    "heals",
    "treats successfully",
    "eliminates",
    "fixes permanently",
    "reverses",
    "prevents all",
    "stops all",
    "clinically proven",
    "scientifically proven",
    "doctor recommended",
    "medically proven",
];

/// Indicators of patient testimonials, which AHPRA prohibits outright in
/// health service advertising.
pub const TESTIMONIAL_INDICATOR_TERMS: &[&str] = &[
    "testimonial",
    "patient says",
    "patient said",
    "client review",
    "success story",
    "before and after",
    "patient story",
    "grateful patient",
    "happy patient",
    "satisfied patient",
    "cured her",
    "cured him",
    "cured me",
];

/// Professional-boundary violations in practitioner communications.
pub const BOUNDARY_VIOLATION_TERMS: &[&str] = &[
    "friendship",
    "personal relationship",
    "special treatment",
    "special discount for you",
    "favourite patient",
    "favorite patient",
    "gifts",
    "social media friend",
    "add me on",
];

/// Advice-giving verbs that trigger the disclaimer requirement.
pub const ADVICE_TERMS: &[&str] = &[
    "should",
    "must",
    "recommend",
    "advise",
    "treatment",
    "diagnosis",
];

/// Phrases indicating an adequate disclaimer is already present.
pub const DISCLAIMER_TERMS: &[&str] = &[
    "disclaimer",
    "consult",
    "seek professional",
    "individual circumstances",
];

/// Disclaimer text suggested when advice-giving content lacks one.
pub const RECOMMENDED_DISCLAIMER: &str =
    "This information is general in nature. Please consult your healthcare \
     professional for advice specific to your individual circumstances.";

// Category labels used in violation messages.
pub const PROHIBITED_LABEL: &str = "Prohibited advertising terms";
pub const THERAPEUTIC_LABEL: &str = "Unproven therapeutic claims";
pub const TESTIMONIAL_LABEL: &str = "Patient testimonial content";
pub const BOUNDARY_LABEL: &str = "Professional boundary violations";

// Fixed remediation suggestions, one per category.
pub const PROHIBITED_SUGGESTION: &str =
    "Remove superlatives and guarantees; describe services factually";
pub const THERAPEUTIC_SUGGESTION: &str =
    "Replace therapeutic claims with evidence-based statements and cite sources";
pub const TESTIMONIAL_SUGGESTION: &str =
    "Remove patient testimonials; AHPRA prohibits them in health service advertising";
pub const BOUNDARY_SUGGESTION: &str =
    "Keep communications professional; avoid language implying personal relationships";

/// Collect every table entry appearing as a substring of `haystack`.
///
/// `haystack` must already be lowercased by the caller; the tables are
/// stored lowercase so a single pass suffices.
pub fn matched_terms(haystack: &str, table: &'static [&'static str]) -> Vec<&'static str> {
    table
        .iter()
        .filter(|term| haystack.contains(*term))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tables_are_lowercase() {
        for table in [
            PROHIBITED_TERMS,
            THERAPEUTIC_CLAIM_TERMS,
            TESTIMONIAL_INDICATOR_TERMS,
            BOUNDARY_VIOLATION_TERMS,
            ADVICE_TERMS,
            DISCLAIMER_TERMS,
        ] {
            for term in table {
                assert_eq!(*term, term.to_lowercase(), "term not lowercase: {term}");
            }
        }
    }

    #[test]
    fn matched_terms_finds_substrings() {
        let matches = matched_terms("a true miracle cure", PROHIBITED_TERMS);
        assert!(matches.contains(&"miracle"));
        assert!(matches.contains(&"cure"));
    }

    #[test]
    fn matched_terms_empty_on_clean_text() {
        assert!(matched_terms("routine dental check-up", PROHIBITED_TERMS).is_empty());
    }

    #[test]
    fn tables_are_disjoint() {
        // The four violation tables must not share entries, otherwise one
        // phrase would fire two categories with the same meaning.
        let tables = [
            PROHIBITED_TERMS,
            THERAPEUTIC_CLAIM_TERMS,
            TESTIMONIAL_INDICATOR_TERMS,
            BOUNDARY_VIOLATION_TERMS,
        ];
        for (i, a) in tables.iter().enumerate() {
            for b in tables.iter().skip(i + 1) {
                for term in *a {
                    assert!(!b.contains(term), "duplicate term across tables: {term}");
                }
            }
        }
    }
}
