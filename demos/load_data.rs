use std::path::PathBuf;

use anyhow::Result;
use iris_loader::IrisDataset;

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/data/iris_sample.csv"));

    let train_dataset = IrisDataset::new(&path)?;
    println!("samples: {}", train_dataset.len());
    println!("per class: {:?}", train_dataset.class_counts());
    println!("first sample: {:#?}", train_dataset.get(0)?);

    Ok(())
}
