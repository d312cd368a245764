//! Deciding whether a document applies to a set of active profiles.
//!
//! A document declares positive profiles (at least one must be active) and
//! negated profiles (none may be active). The matcher evaluates each side
//! separately, yielding a three-valued [`MatchStatus`], then combines them:
//!
//! 1. a negated profile that is active vetoes the document;
//! 2. otherwise, if positive profiles were declared, their match decides;
//! 3. otherwise the document is unconstrained and selected.
//!
//! The three matcher variants only differ in how the positive side is
//! evaluated.

use indexmap::IndexSet;
use tracing::trace;
use vortex_core::{Result, VortexError};

use crate::profiles::ProfileExpression;

/// Outcome of matching one side of a profile expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// A declared profile matched.
    Found,
    /// Profiles were declared and none matched.
    NotFound,
    /// Nothing was declared, so there is no opinion.
    Abstain,
}

impl MatchStatus {
    /// Returns true for [`MatchStatus::Found`].
    pub fn is_found(self) -> bool {
        self == MatchStatus::Found
    }
}

/// Selects documents given the profiles that are active.
///
/// A matcher is an immutable value: when the active profiles change, build
/// a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileMatcher {
    /// Profile discovery: a positive profile matches when it is active.
    Generic { active: IndexSet<String> },
    /// Selection of the default documents: only documents without positive
    /// profiles (or with a blank one) match.
    DefaultProfile { active: IndexSet<String> },
    /// Selection of the documents for one requested profile.
    SpecificProfile {
        profile: String,
        active: IndexSet<String>,
    },
}

impl ProfileMatcher {
    /// Creates a discovery matcher over the given active profiles.
    pub fn generic<I, S>(active: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Generic {
            active: collect(active),
        }
    }

    /// Creates a matcher for the default (no profile requested) search.
    pub fn for_default_profile<I, S>(active: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::DefaultProfile {
            active: collect(active),
        }
    }

    /// Creates a matcher seeking the documents of `profile`.
    ///
    /// Fails with [`VortexError::InvalidArgument`] if `profile` is blank.
    pub fn for_specific_profile<I, S>(profile: &str, active: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if profile.trim().is_empty() {
            return Err(VortexError::invalid_argument(
                profile,
                "cannot seek null/empty/blank profile",
            ));
        }
        Ok(Self::SpecificProfile {
            profile: profile.to_string(),
            active: collect(active),
        })
    }

    /// The active profiles this matcher was built with.
    pub fn active_profiles(&self) -> &IndexSet<String> {
        match self {
            Self::Generic { active }
            | Self::DefaultProfile { active }
            | Self::SpecificProfile { active, .. } => active,
        }
    }

    /// Decides whether a document declaring `expr` is selected.
    ///
    /// Never returns [`MatchStatus::Abstain`]: an unconstrained document is
    /// [`MatchStatus::Found`].
    pub fn matches(&self, expr: &ProfileExpression) -> MatchStatus {
        let status = if !expr.negative().is_empty() && self.matches_negative(expr).is_found() {
            MatchStatus::NotFound
        } else if expr.positive().is_empty() {
            MatchStatus::Found
        } else {
            self.matches_positive(expr)
        };

        trace!("Profile expression '{}' -> {:?} ({:?})", expr, status, self);
        status
    }

    /// Matches the declared positive profiles.
    pub fn matches_positive(&self, expr: &ProfileExpression) -> MatchStatus {
        let matcher = match self {
            Self::Generic { active } => ProfilesMatcher::active_or_empty(active),
            Self::DefaultProfile { .. } => ProfilesMatcher::Empty,
            Self::SpecificProfile { profile, .. } => ProfilesMatcher::Single(profile),
        };
        matcher.matches(expr.positive())
    }

    /// Matches the declared negated profiles. `Found` means a negated
    /// profile is active.
    pub fn matches_negative(&self, expr: &ProfileExpression) -> MatchStatus {
        ProfilesMatcher::active_or_empty(self.active_profiles()).matches(expr.negative())
    }
}

fn collect<I, S>(profiles: I) -> IndexSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    profiles.into_iter().map(Into::into).collect()
}

enum ProfilesMatcher<'a> {
    /// Matches a blank profile name; used when nothing is active.
    Empty,
    /// Matches when any declared profile is active.
    Active(&'a IndexSet<String>),
    /// Matches when the one sought profile is declared.
    Single(&'a str),
}

impl<'a> ProfilesMatcher<'a> {
    fn active_or_empty(active: &'a IndexSet<String>) -> Self {
        if active.is_empty() {
            ProfilesMatcher::Empty
        } else {
            ProfilesMatcher::Active(active)
        }
    }

    fn matches(&self, profiles: &[String]) -> MatchStatus {
        if profiles.is_empty() {
            return MatchStatus::Abstain;
        }
        let found = match self {
            ProfilesMatcher::Empty => profiles.iter().any(|p| p.trim().is_empty()),
            ProfilesMatcher::Active(active) => profiles.iter().any(|p| active.contains(p.as_str())),
            ProfilesMatcher::Single(profile) => profiles.iter().any(|p| p == profile),
        };
        if found {
            MatchStatus::Found
        } else {
            MatchStatus::NotFound
        }
    }
}
