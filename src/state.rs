use crate::data::filter::search;
use crate::data::model::Catalog;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Where the session currently is. The shell only moves forward through
/// `AwaitingFolder` once; after that it cycles between the query states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingFolder,
    AwaitingQuery,
    ShowingResults,
}

/// The full session state, independent of any console I/O.
pub struct AppState {
    /// Merged catalog. Empty until a folder is loaded and never mutated
    /// afterwards; an empty catalog after load is still a valid session.
    pub catalog: Catalog,

    /// Current state-machine phase.
    pub phase: Phase,

    /// Indices of the last query's matches, sorted by unit price (cached
    /// so the export step sees exactly what was rendered).
    pub last_results: Vec<usize>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
            phase: Phase::AwaitingFolder,
            last_results: Vec::new(),
        }
    }
}

impl AppState {
    /// Ingest a freshly loaded catalog and enter the query loop.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.last_results.clear();
        self.phase = Phase::AwaitingQuery;
    }

    /// Run a name search and cache the result view.
    pub fn run_query(&mut self, text: &str) -> &[usize] {
        self.last_results = search(&self.catalog, text);
        self.phase = if self.last_results.is_empty() {
            Phase::AwaitingQuery
        } else {
            Phase::ShowingResults
        };
        &self.last_results
    }

    /// Discard the current result view and return to the query prompt.
    pub fn clear_results(&mut self) {
        self.last_results.clear();
        self.phase = Phase::AwaitingQuery;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::PriceRecord;

    fn catalog_with(names: &[&str]) -> Catalog {
        Catalog {
            records: names
                .iter()
                .map(|n| PriceRecord {
                    name: n.to_string(),
                    price: 10.0,
                    weight: 1.0,
                    unit_price: 10.0,
                    source_file: "price1.csv".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn starts_awaiting_a_folder() {
        let state = AppState::default();
        assert_eq!(state.phase, Phase::AwaitingFolder);
        assert!(state.catalog.is_empty());
    }

    #[test]
    fn loading_enters_the_query_loop_even_when_empty() {
        let mut state = AppState::default();
        state.set_catalog(Catalog::default());
        assert_eq!(state.phase, Phase::AwaitingQuery);
    }

    #[test]
    fn query_transitions_depend_on_matches() {
        let mut state = AppState::default();
        state.set_catalog(catalog_with(&["Milk", "Bread"]));

        assert!(state.run_query("juice").is_empty());
        assert_eq!(state.phase, Phase::AwaitingQuery);

        assert_eq!(state.run_query("milk"), &[0]);
        assert_eq!(state.phase, Phase::ShowingResults);

        state.clear_results();
        assert_eq!(state.phase, Phase::AwaitingQuery);
        assert!(state.last_results.is_empty());
    }
}
