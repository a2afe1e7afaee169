//! Batch classification for tables and coverage reports.

use super::detect::Classifier;
use crate::core::{AssetInput, AssetTypeCategory};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Number of inputs per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    counts: BTreeMap<AssetTypeCategory, usize>,
}

impl CategoryCounts {
    pub fn record(&mut self, category: AssetTypeCategory) {
        *self.counts.entry(category).or_insert(0) += 1;
    }

    pub fn merge(mut self, other: CategoryCounts) -> CategoryCounts {
        for (category, count) in other.counts {
            *self.counts.entry(category).or_insert(0) += count;
        }
        self
    }

    pub fn get(&self, category: AssetTypeCategory) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Non-zero counts in category order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetTypeCategory, usize)> + '_ {
        self.counts.iter().map(|(c, n)| (*c, *n))
    }
}

impl FromIterator<AssetTypeCategory> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = AssetTypeCategory>>(iter: I) -> Self {
        let mut counts = CategoryCounts::default();
        for category in iter {
            counts.record(category);
        }
        counts
    }
}

impl Classifier {
    /// Classify every input, preserving order.
    pub fn classify_all(&self, inputs: &[AssetInput]) -> Vec<AssetTypeCategory> {
        if inputs.len() < self.config().parallel_threshold {
            return inputs.iter().map(|input| self.detect(input)).collect();
        }
        debug!(items = inputs.len(), "Classifying batch in parallel");
        inputs.par_iter().map(|input| self.detect(input)).collect()
    }

    /// Per-category counts over `inputs`.
    pub fn summarize(&self, inputs: &[AssetInput]) -> CategoryCounts {
        if inputs.len() < self.config().parallel_threshold {
            return inputs.iter().map(|input| self.detect(input)).collect();
        }
        inputs
            .par_iter()
            .map(|input| self.detect(input))
            .fold(CategoryCounts::default, |mut acc, category| {
                acc.record(category);
                acc
            })
            .reduce(CategoryCounts::default, CategoryCounts::merge)
    }
}

/// Classify every input with the default classifier, preserving order.
pub fn classify_all(inputs: &[AssetInput]) -> Vec<AssetTypeCategory> {
    super::detect::default_classifier().classify_all(inputs)
}

/// Per-category counts with the default classifier.
pub fn summarize(inputs: &[AssetInput]) -> CategoryCounts {
    super::detect::default_classifier().summarize(inputs)
}
