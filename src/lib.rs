//! Loads the iris measurements table into ndarray tensors for model training.
//!
//! ```no_run
//! use iris_loader::IrisDataset;
//!
//! let dataset = IrisDataset::new("data/iris.data")?;
//! let sample = dataset.get(0)?;
//! assert_eq!(sample.features.len(), 4);
//! # Ok::<(), iris_loader::DatasetError>(())
//! ```

pub mod category;
pub mod dataset;
pub mod error;
pub mod frame;
pub mod normalize;
pub mod options;

pub use category::Category;
pub use dataset::{IrisDataset, Sample};
pub use error::{DatasetError, Result};
pub use options::LoadOptions;
