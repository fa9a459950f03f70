use crate::config::StartPage;

/// Tab identifiers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Analysis,
    Weights,
}

impl TabId {
    pub const ALL: [TabId; 2] = [TabId::Analysis, TabId::Weights];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Analysis => "Creator Analysis",
            TabId::Weights => "Algorithm Weights",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Analysis => 0,
            TabId::Weights => 1,
        }
    }
}

impl From<StartPage> for TabId {
    fn from(page: StartPage) -> Self {
        match page {
            StartPage::Analysis => TabId::Analysis,
            StartPage::Weights => TabId::Weights,
        }
    }
}
