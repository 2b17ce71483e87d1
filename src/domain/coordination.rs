use serde::Serialize;

/// One coordination record: an identifier plus its ordered groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coordination {
    pub id: String,
    pub groups: Vec<CoordinationGroup>,
}

/// A named group of free-text coordination items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordinationGroup {
    pub group: String,
    pub items: Vec<String>,
}

impl Coordination {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            groups: Vec::new(),
        }
    }
}

impl CoordinationGroup {
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            items: Vec::new(),
        }
    }
}
