//! Global search criterion shared between the navbar and the explore page.

/// Index the explore page opens on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchIndex {
    Table,
    Topic,
    Dashboard,
    Pipeline,
    MlModel,
    Container,
    Glossary,
    Tag,
}

impl SearchIndex {
    /// Explore route tab segment for this index.
    pub fn tab_path(self) -> &'static str {
        match self {
            Self::Table => "tables",
            Self::Topic => "topics",
            Self::Dashboard => "dashboards",
            Self::Pipeline => "pipelines",
            Self::MlModel => "mlmodels",
            Self::Container => "containers",
            Self::Glossary => "glossaries",
            Self::Tag => "tags",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlobalSearchState {
    /// `None` means "all indexes": no tab segment on the explore route.
    pub criteria: Option<SearchIndex>,
}

impl GlobalSearchState {
    pub fn tab_path(&self) -> &'static str {
        self.criteria.map_or("", SearchIndex::tab_path)
    }
}
