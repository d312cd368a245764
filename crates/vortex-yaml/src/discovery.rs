//! Discovery of the profiles activated from inside a YAML stream.
//!
//! Whether a document applies can depend on a profile that another document
//! activates, possibly one further down the stream. Discovery therefore
//! repeats full passes over the documents, each with a matcher built from
//! the profiles known so far, until a pass activates nothing new. Profile
//! names are finite and the set only grows, so this terminates after at
//! most one pass per distinct name plus one.

use indexmap::IndexSet;
use tracing::debug;

use crate::document::YamlDocument;
use crate::matcher::ProfileMatcher;

/// The active profiles once discovery has converged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredProfiles {
    active: IndexSet<String>,
    passes: usize,
}

impl DiscoveredProfiles {
    /// Active profiles in activation order: the initially active ones first.
    pub fn active(&self) -> &IndexSet<String> {
        &self.active
    }

    /// Number of passes it took to reach the fixed point.
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn into_active(self) -> IndexSet<String> {
        self.active
    }
}

/// Runs discovery over `documents`.
///
/// `spring.profiles.active` is honoured only when no `profile` is sought and
/// nothing is active yet, so profiles supplied from outside always win over
/// ones declared in the file, and the first declaration wins over later
/// ones. `spring.profiles.include` is always honoured.
pub fn discover_profiles<I, S>(
    documents: &[YamlDocument],
    profile: Option<&str>,
    initially_active: I,
) -> DiscoveredProfiles
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut active: IndexSet<String> = initially_active.into_iter().map(Into::into).collect();
    let mut passes = 0;

    loop {
        passes += 1;
        let matcher = ProfileMatcher::generic(active.iter().cloned());
        let mut grew = false;

        for document in documents {
            if !matcher.matches(document.profiles()).is_found() {
                continue;
            }
            let declared = document.declarations();

            if profile.is_none() && active.is_empty() {
                grew |= extend(&mut active, &declared.active);
            }
            grew |= extend(&mut active, &declared.include);
        }

        debug!(
            "Profile discovery pass {}: active profiles {:?}",
            passes, active
        );

        if !grew {
            return DiscoveredProfiles { active, passes };
        }
    }
}

fn extend(active: &mut IndexSet<String>, profiles: &[String]) -> bool {
    let before = active.len();
    active.extend(profiles.iter().cloned());
    active.len() > before
}
