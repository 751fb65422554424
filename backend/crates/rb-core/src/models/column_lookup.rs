use std::fmt;

/// Which column field to match when resolving a column on a board.
///
/// Title lookups ignore case, id lookups are exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnLookup {
    Title(String),
    Id(String),
}

impl ColumnLookup {
    pub fn title<S: Into<String>>(title: S) -> Self {
        Self::Title(title.into())
    }

    pub fn id<S: Into<String>>(id: S) -> Self {
        Self::Id(id.into())
    }
}

impl fmt::Display for ColumnLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title(title) => write!(f, "title '{}'", title),
            Self::Id(id) => write!(f, "id '{}'", id),
        }
    }
}
