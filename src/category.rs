use std::fmt;
use std::str::FromStr;

use crate::error::DatasetError;

/// The three iris species found in the label column.
///
/// The discriminant is the label id stored in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Setosa = 0,
    Versicolor = 1,
    Virginica = 2,
}

impl Category {
    /// All categories, in label-id order.
    pub const ALL: [Category; 3] = [Category::Setosa, Category::Versicolor, Category::Virginica];

    /// Looks up a category by the exact string used in the source file.
    ///
    /// Surrounding whitespace is ignored, case is not.
    pub fn from_name(name: &str) -> Option<Category> {
        match name.trim() {
            "Iris-setosa" => Some(Category::Setosa),
            "Iris-versicolor" => Some(Category::Versicolor),
            "Iris-virginica" => Some(Category::Virginica),
            _ => None,
        }
    }

    pub fn from_id(id: i64) -> Option<Category> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Category::ALL.get(i).copied())
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Setosa => "Iris-setosa",
            Category::Versicolor => "Iris-versicolor",
            Category::Virginica => "Iris-virginica",
        }
    }

    pub fn id(self) -> i64 {
        self as i64
    }
}

impl FromStr for Category {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_name(s).ok_or_else(|| DatasetError::UnknownCategory {
            row: None,
            value: s.to_string(),
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable() {
        assert_eq!(Category::from_name("Iris-setosa").map(Category::id), Some(0));
        assert_eq!(Category::from_name("Iris-versicolor").map(Category::id), Some(1));
        assert_eq!(Category::from_name("Iris-virginica").map(Category::id), Some(2));
    }

    #[test]
    fn id_and_name_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
            assert_eq!(category.name().parse::<Category>().unwrap(), category);
            assert_eq!(category.to_string(), category.name());
        }
        assert_eq!(Category::from_id(3), None);
        assert_eq!(Category::from_id(-1), None);
    }

    #[test]
    fn lookup_is_case_sensitive_but_trims() {
        assert_eq!(Category::from_name(" Iris-setosa\r"), Some(Category::Setosa));
        assert_eq!(Category::from_name("iris-setosa"), None);
        assert!(matches!(
            "Iris-unknown".parse::<Category>(),
            Err(DatasetError::UnknownCategory { row: None, .. })
        ));
    }
}
