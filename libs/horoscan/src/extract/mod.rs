mod rules;

pub use rules::{NumberRule, RuleSet};

use std::collections::HashSet;

use crate::common::PhoneCandidate;

/// Sum of the decimal digit values in `text`; separators and any other
/// non-digit characters contribute nothing.
pub fn digit_sum(text: &str) -> u32 {
    text.chars().filter_map(|c| c.to_digit(10)).sum()
}

/// Pull every rule-matching token out of the recognized text. Tokens are
/// whitespace-separated words; duplicates collapse to the first occurrence and
/// the returned order is first-encountered order.
pub fn extract_candidates(text: &str, rules: &RuleSet) -> Vec<PhoneCandidate> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        log::debug!("line {}: {:?}", index, line);

        for token in line.split_whitespace() {
            if let Some(rule) = rules.classify(token) {
                if seen.insert(token.to_string()) {
                    log::debug!("token {:?} matched rule {:?}", token, rule.name);
                    candidates.push(PhoneCandidate {
                        text: token.to_string(),
                        digit_sum: digit_sum(token),
                    });
                }
            }
        }
    }

    candidates
}
