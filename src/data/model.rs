use std::fmt;

// ---------------------------------------------------------------------------
// Field – canonical schema targets for heterogeneous headers
// ---------------------------------------------------------------------------

/// A canonical column every price list must provide under one of several
/// recognized header spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Price,
    Weight,
}

impl Field {
    /// All canonical fields, in resolution order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Price, Field::Weight];

    /// Header spellings recognized for this field. Matching is
    /// case-insensitive and exact, so the entries here are lowercase.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Name => &["название", "продукт", "товар", "наименование"],
            Field::Price => &["цена", "розница"],
            Field::Weight => &["фасовка", "масса", "вес"],
        }
    }

    /// Whether `header` is a recognized spelling of this field.
    pub fn matches(self, header: &str) -> bool {
        let lower = header.to_lowercase();
        self.aliases().iter().any(|alias| *alias == lower)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Price => write!(f, "price"),
            Field::Weight => write!(f, "weight"),
        }
    }
}

// ---------------------------------------------------------------------------
// PriceRecord – one normalized row
// ---------------------------------------------------------------------------

/// A single normalized price-list row.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    pub name: String,
    pub price: f64,
    /// Pack size the price covers. Never zero: the loader drops rows whose
    /// weight would make the unit price undefined.
    pub weight: f64,
    /// `price / weight`, the common basis for cross-file comparison.
    pub unit_price: f64,
    /// File the row came from, for traceability across merged lists.
    pub source_file: String,
}

// ---------------------------------------------------------------------------
// Catalog – the complete merged dataset
// ---------------------------------------------------------------------------

/// All normalized records from every successfully loaded file, in file
/// discovery order then row order. Built once per run, read-only afterwards.
/// An empty catalog is a valid value, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub records: Vec<PriceRecord>,
}

impl Catalog {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_match_case_insensitively() {
        assert!(Field::Name.matches("Название"));
        assert!(Field::Name.matches("ТОВАР"));
        assert!(Field::Price.matches("розница"));
        assert!(Field::Weight.matches("Вес"));
    }

    #[test]
    fn aliases_require_exact_words() {
        assert!(!Field::Name.matches("названием"));
        assert!(!Field::Price.matches("цена, руб"));
        assert!(!Field::Weight.matches(""));
    }
}
