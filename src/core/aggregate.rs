use super::expense::{Category, ExpenseRecord};
use rust_decimal::Decimal;

/// Per-category spend totals, kept in first-seen category order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<(Category, Decimal)>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount to a category, appending the category if not yet seen
    pub fn add(&mut self, category: Category, amount: Decimal) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category, amount)),
        }
    }

    pub fn get(&self, category: Category) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, total)| *total)
    }

    /// Sum over all categories
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|(_, total)| *total).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        self.entries.iter().copied()
    }
}

/// Group expense records into per-category totals
pub fn aggregate<'a, I>(records: I) -> CategoryTotals
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut totals = CategoryTotals::new();
    for record in records {
        totals.add(record.category, record.amount);
    }
    totals
}
