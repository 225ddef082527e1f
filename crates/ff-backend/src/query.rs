//! List-query building.
//!
//! A [`FindQuery`] carries the three knobs the dashboard uses: equality
//! filters, joined relations, and a sort. It renders to the backend's query
//! string dialect (`{field}_eq=`, `relations=`, `orderBy=`/`order=`).

use std::fmt;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter / include / sort options for a collection listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindQuery {
    filters: Vec<(String, String)>,
    include: Vec<String>,
    sort: Option<(String, SortOrder)>,
}

impl FindQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only rows where `field` equals `value`.
    #[must_use]
    pub fn filter_eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    /// Join a relation onto each row.
    #[must_use]
    pub fn include(mut self, relation: impl Into<String>) -> Self {
        let relation = relation.into();
        if !self.include.contains(&relation) {
            self.include.push(relation);
        }
        self
    }

    /// Sort by `field`. A later call replaces an earlier one.
    #[must_use]
    pub fn sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort = Some((field.into(), order));
        self
    }

    /// Value of the first equality filter on `field`.
    #[must_use]
    pub fn filter_value(&self, field: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn includes(&self) -> &[String] {
        &self.include
    }

    #[must_use]
    pub fn sort_by(&self) -> Option<(&str, SortOrder)> {
        self.sort
            .as_ref()
            .map(|(field, order)| (field.as_str(), *order))
    }

    /// Render as a query string (without the leading `?`).
    ///
    /// `per_page` is always sent so a listing comes back in one call.
    #[must_use]
    pub fn to_query_string(&self, per_page: u32) -> String {
        let mut pairs: Vec<String> = self
            .filters
            .iter()
            .map(|(field, value)| {
                format!(
                    "{}_eq={}",
                    urlencoding::encode(field),
                    urlencoding::encode(value)
                )
            })
            .collect();

        if !self.include.is_empty() {
            pairs.push(format!(
                "relations={}",
                urlencoding::encode(&self.include.join(","))
            ));
        }

        if let Some((field, order)) = &self.sort {
            pairs.push(format!("orderBy={}", urlencoding::encode(field)));
            pairs.push(format!("order={order}"));
        }

        pairs.push(format!("perPage={per_page}"));
        pairs.join("&")
    }
}
