use std::ops::RangeInclusive;

use regex::Regex;

/// One phone-number format: a whole-token pattern plus the digit count the
/// token must carry once separators are stripped. New formats are added as
/// table entries, not as new inline patterns.
#[derive(Clone, Debug)]
pub struct NumberRule {
    pub name: String,
    pub pattern: Regex,
    pub digit_count: RangeInclusive<usize>,
}

impl NumberRule {
    pub fn new(name: &str, pattern: &str, digit_count: RangeInclusive<usize>) -> Self {
        Self {
            name: name.to_string(),
            pattern: Regex::new(pattern).expect("invalid number rule pattern"),
            digit_count,
        }
    }

    pub fn matches(&self, token: &str) -> bool {
        if !self.pattern.is_match(token) {
            return false;
        }
        let digits = token.chars().filter(|c| c.is_ascii_digit()).count();
        self.digit_count.contains(&digits)
    }
}

/// Ordered rule table; the first matching rule classifies a token.
#[derive(Clone, Debug)]
pub struct RuleSet {
    rules: Vec<NumberRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<NumberRule>) -> Self {
        Self { rules }
    }

    /// Canonical rule set: Thai-style numbers with a leading zero, optional
    /// `-`/`.` separators between digits, 9 or 10 digits in total. Mobile
    /// numbers start 06/08/09 (10 digits), landlines 02 (9 digits), and a
    /// loose rule accepts any other leading-zero number in range.
    pub fn default() -> Self {
        Self::new(vec![
            NumberRule::new("mobile", r"^0[689](?:[-.]?[0-9]){8}$", 10..=10),
            NumberRule::new("landline", r"^02(?:[-.]?[0-9]){7}$", 9..=9),
            NumberRule::new("loose", r"^0(?:[-.]?[0-9]){8,9}$", 9..=10),
        ])
    }

    pub fn classify(&self, token: &str) -> Option<&NumberRule> {
        self.rules.iter().find(|rule| rule.matches(token))
    }

    pub fn rules(&self) -> &[NumberRule] {
        &self.rules
    }
}
