//! Rule building blocks shared by the document extractors.

pub mod normalize;
pub mod patterns;
pub mod province;

pub use normalize::{
    before_label, clean_address, collapse_whitespace, non_empty, normalize_date_separators,
};
pub use province::{province_name, provinces};

use regex::{Captures, Regex};

/// Turns a match into a field value; `None` rejects the match.
pub type Handler = fn(&Captures<'_>) -> Option<String>;

/// One pattern in a fallback chain.
pub struct Rule {
    /// Short name used in trace output.
    pub name: &'static str,
    pub pattern: &'static Regex,
    pub handler: Handler,
}

impl Rule {
    pub fn new(name: &'static str, pattern: &'static Regex, handler: Handler) -> Self {
        Self {
            name,
            pattern,
            handler,
        }
    }

    /// Apply the rule to `text`: the first match (left to right) whose handler
    /// yields a non-empty value.
    pub fn apply(&self, text: &str) -> Option<String> {
        self.pattern
            .captures_iter(text)
            .find_map(|caps| (self.handler)(&caps).and_then(|v| non_empty(&v)))
    }
}

/// Ordered list of rules evaluated until one produces a value.
///
/// Earlier rules always win over later ones, even when a later rule would
/// match earlier in the text.
pub struct FallbackChain {
    field: &'static str,
    rules: Vec<Rule>,
}

impl FallbackChain {
    pub fn new(field: &'static str, rules: Vec<Rule>) -> Self {
        Self { field, rules }
    }

    /// Field this chain extracts.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Evaluate the chain, returning the first value produced.
    pub fn evaluate(&self, text: &str) -> Option<String> {
        self.rules.iter().find_map(|rule| {
            let value = rule.apply(text)?;
            tracing::trace!(field = self.field, rule = rule.name, "matched {}", value);
            Some(value)
        })
    }
}

/// Handler returning capture group 1 verbatim.
pub fn group1(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).map(|m| m.as_str().to_string())
}

/// Handler returning capture group 1 upper-cased.
pub fn group1_upper(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).map(|m| m.as_str().trim().to_uppercase())
}

/// Handler returning the whole match upper-cased.
pub fn whole_upper(caps: &Captures<'_>) -> Option<String> {
    caps.get(0).map(|m| m.as_str().trim().to_uppercase())
}
