//! Profile declarations: expression parsing and binding of the reserved keys.

mod binder;
mod expression;

pub use binder::{
    ACTIVE_PROFILES_KEY, INCLUDE_PROFILES_KEY, NEGATED_PROFILES_KEY, PROFILES_KEY,
    ProfileDeclarations, is_reserved_key,
};
pub use expression::{NEGATION_PREFIX, ProfileExpression, split_list};
