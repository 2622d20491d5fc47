
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Value used in place of a missing `category` query parameter.
pub const DEFAULT_CATEGORY: &str = "default_category";

#[derive(Eq, PartialEq, Clone, Copy, Hash, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Music,
    News,
    RealtimeSearch,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Music => "music",
            Category::News => "news",
            Category::RealtimeSearch => "realtime-search",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "music" => Ok(Category::Music),
            "news" => Ok(Category::News),
            "realtime-search" => Ok(Category::RealtimeSearch),
            other => Err(CategoryError::Unrecognized(other.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CategoryError {
    #[error("category parameter is empty")]
    Empty,
    #[error("unrecognized category: {0}")]
    Unrecognized(String),
    #[error("unrecognized category combination: {0}")]
    UnrecognizedCombination(String),
}

/// Categories requested by the caller, in the order given, without duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCategoryList {
    raw: String,
    categories: Vec<Category>,
}

impl ParsedCategoryList {
    pub fn parse(raw: &str) -> Result<Self, CategoryError> {
        let mut categories = Vec::with_capacity(3);

        for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let category = token.parse::<Category>()?;

            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        if categories.is_empty() {
            return Err(CategoryError::Empty);
        }

        Ok(Self {
            raw: raw.to_string(),
            categories,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn as_slice(&self) -> &[Category] {
        &self.categories
    }

    pub fn contains(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

/// How a parsed list is matched against the known category combinations.
#[derive(Eq, PartialEq, Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Any order is accepted.
    #[default]
    Unordered,
    /// Pairs and triples must come in the canonical order
    /// (`music`, `news`, `realtime-search`).
    Positional,
}

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum Combination {
    Music,
    News,
    RealtimeSearch,
    MusicAndNews,
    MusicAndRealtimeSearch,
    NewsAndRealtimeSearch,
    All,
}

impl Combination {
    pub fn select(list: &ParsedCategoryList, mode: MatchMode) -> Result<Self, CategoryError> {
        let combination = match mode {
            MatchMode::Unordered => Self::select_unordered(list),
            MatchMode::Positional => Self::select_positional(list.as_slice()),
        };

        combination.ok_or_else(|| CategoryError::UnrecognizedCombination(list.raw().to_string()))
    }

    fn select_unordered(list: &ParsedCategoryList) -> Option<Self> {
        match (
            list.contains(Category::Music),
            list.contains(Category::News),
            list.contains(Category::RealtimeSearch),
        ) {
            (true, false, false) => Some(Combination::Music),
            (false, true, false) => Some(Combination::News),
            (false, false, true) => Some(Combination::RealtimeSearch),
            (true, true, false) => Some(Combination::MusicAndNews),
            (true, false, true) => Some(Combination::MusicAndRealtimeSearch),
            (false, true, true) => Some(Combination::NewsAndRealtimeSearch),
            (true, true, true) => Some(Combination::All),
            (false, false, false) => None,
        }
    }

    fn select_positional(categories: &[Category]) -> Option<Self> {
        use Category::*;

        match categories {
            [Music] => Some(Combination::Music),
            [News] => Some(Combination::News),
            [RealtimeSearch] => Some(Combination::RealtimeSearch),
            [Music, News] => Some(Combination::MusicAndNews),
            [Music, RealtimeSearch] => Some(Combination::MusicAndRealtimeSearch),
            [News, RealtimeSearch] => Some(Combination::NewsAndRealtimeSearch),
            [Music, News, RealtimeSearch, ..] => Some(Combination::All),
            _ => None,
        }
    }

    pub fn categories(&self) -> &'static [Category] {
        match self {
            Combination::Music => &[Category::Music],
            Combination::News => &[Category::News],
            Combination::RealtimeSearch => &[Category::RealtimeSearch],
            Combination::MusicAndNews => &[Category::Music, Category::News],
            Combination::MusicAndRealtimeSearch => &[Category::Music, Category::RealtimeSearch],
            Combination::NewsAndRealtimeSearch => &[Category::News, Category::RealtimeSearch],
            Combination::All => &[Category::Music, Category::News, Category::RealtimeSearch],
        }
    }
}
