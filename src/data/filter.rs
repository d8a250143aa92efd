use super::model::Catalog;

// ---------------------------------------------------------------------------
// Name search over the merged catalog
// ---------------------------------------------------------------------------

/// Return indices of records whose name contains `text` as a
/// case-insensitive substring, ordered ascending by unit price.
///
/// The sort is stable, so records with equal unit prices keep their catalog
/// order and repeated calls on an unchanged catalog yield identical output.
/// Lowercasing is Unicode-aware; the catalog vocabulary is mostly Cyrillic.
pub fn search(catalog: &Catalog, text: &str) -> Vec<usize> {
    let needle = text.to_lowercase();

    let mut hits: Vec<usize> = catalog
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| rec.name.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect();

    hits.sort_by(|&a, &b| {
        catalog.records[a]
            .unit_price
            .total_cmp(&catalog.records[b].unit_price)
    });
    hits
}
