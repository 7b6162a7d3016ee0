//! Close-match suggestions for mistyped keywords.

use strsim::jaro_winkler;

use super::command::CommandRegistry;

/// Minimum similarity score for a suggestion (0.0-1.0).
pub const FUZZY_THRESHOLD: f64 = 0.8;

/// Find the registered keyword closest to `input`, if any is close enough.
pub fn suggest_keyword<'r>(registry: &'r CommandRegistry, input: &str) -> Option<&'r str> {
    let input_lower = input.to_lowercase();
    registry
        .keywords()
        .map(|kw| (kw, jaro_winkler(&input_lower, kw)))
        .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(kw, _)| kw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Operation;

    fn registry() -> CommandRegistry {
        let mut r = CommandRegistry::new();
        r.register("help", "", 0, Operation::Help);
        r.register("quit", "", 0, Operation::Quit);
        r.register("history", "", 0, Operation::History);
        r
    }

    #[test]
    fn suggests_transposed_letters() {
        let r = registry();
        assert_eq!(suggest_keyword(&r, "quti"), Some("quit"));
        assert_eq!(suggest_keyword(&r, "HLEP"), Some("help"));
    }

    #[test]
    fn nothing_for_unrelated_words() {
        let r = registry();
        assert_eq!(suggest_keyword(&r, "fly"), None);
        assert_eq!(suggest_keyword(&r, "xyzzy"), None);
    }

    #[test]
    fn empty_registry_suggests_nothing() {
        assert_eq!(suggest_keyword(&CommandRegistry::new(), "help"), None);
    }
}
