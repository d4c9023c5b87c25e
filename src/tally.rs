//! Counting rational values. Keys are kept in ascending order, so the summary statistics fall out
//! of the map directly.

use std::collections::BTreeMap;

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul};
use tabled::{settings::Style, Table, Tabled};

use crate::rational::{BaseInt, Rational};

/// How many times each distinct value has been seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: BTreeMap<Rational, usize>,
}

/// One line of [`Tally::table`].
#[derive(Tabled)]
struct TallyRow {
    value: Rational,
    count: usize,
    decimal: String,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `value`, returning how many there are now.
    pub fn insert(&mut self, value: Rational) -> usize {
        let count = self.counts.entry(value).or_default();
        *count += 1;
        *count
    }

    pub fn count(&self, value: &Rational) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// The number of distinct values.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// The number of values inserted, counting repeats.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Every inserted value, repeats included, in ascending order.
    pub fn values(&self) -> impl Iterator<Item = Rational> + '_ {
        self.counts
            .iter()
            .flat_map(|(v, &c)| std::iter::repeat(*v).take(c))
    }

    /// Distinct values with their counts, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Rational, usize)> + '_ {
        self.counts.iter().map(|(v, &c)| (*v, c))
    }

    /// The sum of every inserted value, or `None` if it does not fit in a [`Rational`].
    pub fn sum(&self) -> Option<Rational> {
        self.values()
            .try_fold(Rational::ZERO, |acc, v| acc.checked_add(&v))
    }

    /// The product of every inserted value, or `None` if it does not fit in a [`Rational`].
    pub fn product(&self) -> Option<Rational> {
        self.values()
            .try_fold(Rational::ONE, |acc, v| acc.checked_mul(&v))
    }

    pub fn min(&self) -> Option<Rational> {
        self.counts.keys().next().copied()
    }

    pub fn max(&self) -> Option<Rational> {
        self.counts.keys().next_back().copied()
    }

    /// The arithmetic mean, or `None` if there is nothing to average or the sum or count does not
    /// fit.
    pub fn mean(&self) -> Option<Rational> {
        let n = BaseInt::try_from(self.total()).ok()?;
        self.sum()?.checked_div(&Rational::from(n))
    }

    /// Renders the counts as a table, one row per distinct value.
    pub fn table(&self) -> String {
        let rows = self.iter().map(|(value, count)| TallyRow {
            value,
            count,
            decimal: format!("{:.6}", f64::from(value)),
        });

        Table::new(rows).with(Style::modern()).to_string()
    }
}

impl FromIterator<Rational> for Tally {
    fn from_iter<T: IntoIterator<Item = Rational>>(iter: T) -> Self {
        let mut tally = Self::new();
        tally.extend(iter);
        tally
    }
}

impl Extend<Rational> for Tally {
    fn extend<T: IntoIterator<Item = Rational>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}
