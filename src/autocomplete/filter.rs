//! Suggestion filtering - prefix match against the catalog

/// Filter the catalog down to entries whose text starts with
/// `trigger + partial`, case-insensitively.
///
/// The filter is stable: catalog order is preserved and no re-sorting
/// happens. Pure function, identical inputs yield identical output.
pub fn filter(catalog: &[String], trigger: char, partial: &str) -> Vec<String> {
    let mut prefix = String::with_capacity(1 + partial.len());
    prefix.push(trigger);
    prefix.push_str(partial);
    let prefix = prefix.to_lowercase();

    catalog
        .iter()
        .filter(|entry| entry.to_lowercase().starts_with(&prefix))
        .cloned()
        .collect()
}
