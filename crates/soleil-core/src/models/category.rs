use serde::Serialize;

/// Query type of a simulated request. Closed vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "TOP 20")]
    Top20,
    #[serde(rename = "CARTE")]
    Map,
    #[serde(rename = "EXPOSÉES")]
    Exposed,
    #[serde(rename = "ANALYSE")]
    Analysis,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Top20,
        Category::Map,
        Category::Exposed,
        Category::Analysis,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Top20 => "TOP 20",
            Self::Map => "CARTE",
            Self::Exposed => "EXPOSÉES",
            Self::Analysis => "ANALYSE",
        }
    }

    /// Map lookups name a specific venue instead of a neighborhood.
    pub fn names_venue(&self) -> bool {
        matches!(self, Self::Map)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
