use std::path::Path;

use log::{debug, info};
use ndarray::prelude::*;

use crate::category::Category;
use crate::error::{DatasetError, Result};
use crate::frame::{dataframe_from_csv, features_from_dataframe, labels_from_dataframe};
use crate::normalize::shift_by_scaled_mean;
use crate::options::LoadOptions;

/// One row of the dataset: normalized measurements and the species label id.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub features: Array1<f32>,
    pub label: i64,
}

impl Sample {
    /// The label as a [`Category`].
    pub fn category(&self) -> Option<Category> {
        Category::from_id(self.label)
    }
}

/// An immutable, indexable table of iris samples loaded from a headerless CSV file.
///
/// Rows keep the order they have in the file. Features are stored as `f32`
/// after [`shift_by_scaled_mean`], labels as `i64` ids from [`Category`].
#[derive(Debug, Clone)]
pub struct IrisDataset {
    features: Array2<f32>,
    labels: Array1<i64>,
}

impl IrisDataset {
    /// Loads a comma separated file with no header row.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_options(path, &LoadOptions::default())
    }

    /// Loads a file laid out as described by `options`.
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the table. Checked for existence before anything is parsed.
    /// * `options` - Separator and header settings.
    ///
    /// # Returns
    ///
    /// * The dataset, or the first error found: a missing file, a malformed
    ///   table, or a label outside the category table.
    pub fn with_options(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DatasetError::MissingSource(path.to_path_buf()));
        }
        debug!("reading iris table from {}", path.display());

        let df = dataframe_from_csv(path, options)?;
        let labels = labels_from_dataframe(&df)?;
        let raw = features_from_dataframe(&df)?;

        // normalize in f64, store as f32
        let features = shift_by_scaled_mean(&raw).mapv(|v| v as f32);

        let dataset = Self { features, labels };
        info!(
            "loaded {} samples from {} (per class: {:?})",
            dataset.len(),
            path.display(),
            dataset.class_counts()
        );
        Ok(dataset)
    }

    /// Number of rows read from the source file.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the sample at `index`, or [`DatasetError::IndexOutOfRange`] past the end.
    pub fn get(&self, index: usize) -> Result<Sample> {
        if index >= self.len() {
            return Err(DatasetError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.sample_at(index))
    }

    /// All normalized features, one row per sample.
    pub fn features(&self) -> ArrayView2<'_, f32> {
        self.features.view()
    }

    /// All label ids, in row order.
    pub fn labels(&self) -> ArrayView1<'_, i64> {
        self.labels.view()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        // every stored id came through the category table
        self.labels.iter().filter_map(|&id| Category::from_id(id))
    }

    /// Number of samples per label id.
    pub fn class_counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for category in self.categories() {
            counts[category as usize] += 1;
        }
        counts
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            dataset: self,
            next: 0,
        }
    }

    fn sample_at(&self, index: usize) -> Sample {
        Sample {
            features: self.features.row(index).to_owned(),
            label: self.labels[index],
        }
    }
}

/// Iterator over the samples of an [`IrisDataset`], in file order.
pub struct Iter<'a> {
    dataset: &'a IrisDataset,
    next: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.next >= self.dataset.len() {
            return None;
        }
        let sample = self.dataset.sample_at(self.next);
        self.next += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dataset.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a IrisDataset {
    type Item = Sample;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
