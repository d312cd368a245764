//! Names of per-document property sources.

use std::collections::HashMap;

use crate::profiles::ProfileExpression;

/// Builds the name of a document source: `"<prefix> [<profiles>]"`, with
/// `default_label` standing in for documents that declare no profiles.
///
/// The declaration is used verbatim, so `spring.profiles: dev, !cloud`
/// yields `YAML [dev, !cloud]`.
pub fn document_name(prefix: &str, default_label: &str, profiles: &ProfileExpression) -> String {
    match profiles.raw() {
        Some(raw) => format!("{} [{}]", prefix, raw),
        None => format!("{} [{}]", prefix, default_label),
    }
}

/// Makes a list of names unique.
///
/// The first occurrence of a name is kept as is; each later occurrence gets
/// a suffix `[0]`, `[1]`, ... counted per name. Unique names are untouched.
pub fn unique_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let count = seen.entry(name).or_insert(0);
            let unique = if *count == 0 {
                name.to_string()
            } else {
                format!("{}[{}]", name, *count - 1)
            };
            *count += 1;
            unique
        })
        .collect()
}
