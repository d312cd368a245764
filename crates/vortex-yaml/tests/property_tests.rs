use std::collections::HashSet;

use proptest::prelude::*;
use vortex_yaml::{MatchStatus, ProfileExpression, ProfileMatcher, naming::unique_names};

fn profile() -> impl Strategy<Value = String> {
    "[a-d]"
}

fn profiles() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(profile(), 0..4)
}

proptest! {
    #[test]
    fn test_active_negated_profile_always_vetoes(
        positive in profiles(),
        negative in prop::collection::vec(profile(), 1..3),
        active in profiles(),
    ) {
        let tokens = positive
            .iter()
            .cloned()
            .chain(negative.iter().map(|p| format!("!{}", p)));
        let expr = ProfileExpression::from_tokens(tokens);
        let vetoed = negative.iter().any(|p| active.contains(p));

        let matchers = [
            ProfileMatcher::generic(active.clone()),
            ProfileMatcher::for_default_profile(active.clone()),
            ProfileMatcher::for_specific_profile("a", active.clone()).unwrap(),
        ];
        for matcher in matchers {
            let status = matcher.matches(&expr);
            prop_assert_ne!(status, MatchStatus::Abstain);
            if vetoed {
                prop_assert_eq!(status, MatchStatus::NotFound);
            }
        }
    }

    #[test]
    fn test_specific_mode_selects_exactly_listing_documents(
        positive in prop::collection::vec(profile(), 1..4),
    ) {
        let expr = ProfileExpression::from_tokens(positive.clone());
        let matcher = ProfileMatcher::for_specific_profile("b", ["a", "c"]).unwrap();

        prop_assert_eq!(
            matcher.matches(&expr).is_found(),
            positive.iter().any(|p| p == "b")
        );
    }

    #[test]
    fn test_unique_names_are_unique(names in prop::collection::vec("YAML \\[[a-c]\\]", 0..8)) {
        let unique = unique_names(&names);

        prop_assert_eq!(unique.len(), names.len());
        prop_assert_eq!(unique.iter().collect::<HashSet<_>>().len(), names.len());
        for (original, renamed) in names.iter().zip(&unique) {
            prop_assert!(renamed.starts_with(original.as_str()));
        }
        // The first occurrence of every name is untouched.
        for name in names.iter().collect::<HashSet<_>>() {
            let first = names.iter().position(|n| n == name).unwrap();
            prop_assert_eq!(&unique[first], name);
        }
    }
}
