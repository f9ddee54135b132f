use crate::element::{AtomicNumber, Block, ElementRecord};
use crate::normalize::normalize_guess;

/// Ordered, immutable set of element records.
///
/// Order is significant: when two records answer to the same name or symbol,
/// the earlier one wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<ElementRecord>,
}

impl Catalog {
    #[must_use]
    pub fn new(records: Vec<ElementRecord>) -> Self {
        Self { records }
    }

    /// The six-element fallback set used when no richer data is available.
    #[must_use]
    pub fn minimal() -> Self {
        Self::new(vec![
            record(1, "Hydrogen", "H", Some(1), 1, Block::S, "Nonmetal", "1s1", 1.008),
            record(2, "Helium", "He", Some(18), 1, Block::S, "Noble Gas", "1s2", 4.0026),
            record(6, "Carbon", "C", Some(14), 2, Block::P, "Nonmetal", "[He] 2s2 2p2", 12.011),
            record(8, "Oxygen", "O", Some(16), 2, Block::P, "Nonmetal", "[He] 2s2 2p4", 15.999),
            record(
                26,
                "Iron",
                "Fe",
                Some(8),
                4,
                Block::D,
                "Transition Metal",
                "[Ar] 3d6 4s2",
                55.845,
            ),
            record(
                79,
                "Gold",
                "Au",
                Some(11),
                6,
                Block::D,
                "Transition Metal",
                "[Xe] 4f14 5d10 6s1",
                196.97,
            ),
        ])
    }

    /// Every record, in catalog order.
    #[must_use]
    pub fn list_all(&self) -> &[ElementRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose name or symbol equals `key` exactly.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&ElementRecord> {
        self.records.iter().find(|record| record.answers_to(key))
    }

    /// Normalize free-form player text, then [`find`](Self::find) it.
    #[must_use]
    pub fn lookup(&self, raw: &str) -> Option<&ElementRecord> {
        let key = normalize_guess(raw);
        if key.is_empty() {
            return None;
        }
        self.find(&key)
    }

    /// Lowest and highest atomic number present.
    #[must_use]
    pub fn atomic_range(&self) -> Option<(AtomicNumber, AtomicNumber)> {
        let min = self.records.iter().map(|r| r.atomic_number).min()?;
        let max = self.records.iter().map(|r| r.atomic_number).max()?;
        Some((min, max))
    }
}

impl FromIterator<ElementRecord> for Catalog {
    fn from_iter<T: IntoIterator<Item = ElementRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    atomic_number: u8,
    name: &str,
    symbol: &str,
    group_id: Option<u8>,
    period: u8,
    block: Block,
    series: &str,
    econf: &str,
    mass: f64,
) -> ElementRecord {
    ElementRecord {
        atomic_number: AtomicNumber(atomic_number),
        name: name.to_string(),
        symbol: symbol.to_string(),
        group_id,
        period,
        block,
        series: series.to_string(),
        econf: Some(econf.to_string()),
        mass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_set_is_ordered_by_atomic_number() {
        let catalog = Catalog::minimal();
        let names: Vec<&str> = catalog.list_all().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            ["Hydrogen", "Helium", "Carbon", "Oxygen", "Iron", "Gold"]
        );
    }

    #[test]
    fn lookup_normalizes_before_matching() {
        let catalog = Catalog::minimal();
        assert_eq!(catalog.lookup("  au ").unwrap().name, "Gold");
        assert_eq!(catalog.lookup("IRON").unwrap().symbol, "Fe");
        assert!(catalog.lookup("Unobtainium").is_none());
        assert!(catalog.lookup("   ").is_none());
    }

    #[test]
    fn duplicate_keys_resolve_to_first_in_order() {
        let mut records = Catalog::minimal().list_all().to_vec();
        let mut impostor = records[5].clone();
        impostor.atomic_number = AtomicNumber(100);
        records.insert(0, impostor);

        let catalog = Catalog::new(records);
        assert_eq!(catalog.find("Au").unwrap().atomic_number.value(), 100);
    }

    #[test]
    fn atomic_range_spans_catalog() {
        let (lo, hi) = Catalog::minimal().atomic_range().unwrap();
        assert_eq!((lo.value(), hi.value()), (1, 79));
        assert!(Catalog::default().atomic_range().is_none());
    }
}
