/// A record type that can be filtered by a free-text query.
///
/// `COLUMNS` lists every column a well-formed record carries (checked by the
/// loader), while `match_fields` yields only the values a query is tested
/// against.
pub trait Searchable {
    const COLUMNS: &'static [&'static str];

    fn match_fields(&self) -> impl Iterator<Item = Option<&str>>;

    /// True if any designated field contains `needle`, which must already be
    /// normalized with [`normalize_query`].
    fn matches(&self, needle: &str) -> bool {
        self.match_fields().any(|field| field_contains(field, needle))
    }
}

/// Outcome of a table search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult<T> {
    /// Nothing matched; carries a human-readable message
    Empty { message: String },
    /// One or more matches, `count == rows.len()`
    Found { rows: Vec<T>, count: usize },
}

impl<T> MatchResult<T> {
    /// Wrap collected rows, turning an empty collection into `Empty`.
    pub fn from_rows(rows: Vec<T>, empty_message: &str) -> Self {
        if rows.is_empty() {
            MatchResult::Empty {
                message: empty_message.to_string(),
            }
        } else {
            let count = rows.len();
            MatchResult::Found { rows, count }
        }
    }

    pub fn count(&self) -> usize {
        match self {
            MatchResult::Empty { .. } => 0,
            MatchResult::Found { count, .. } => *count,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MatchResult::Empty { .. })
    }

    pub fn rows(&self) -> &[T] {
        match self {
            MatchResult::Empty { .. } => &[],
            MatchResult::Found { rows, .. } => rows,
        }
    }
}

/// Trim and lowercase a raw query
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Missing values never match.
pub fn field_contains(value: Option<&str>, needle: &str) -> bool {
    value.is_some_and(|v| v.to_lowercase().contains(needle))
}

/// Rows matching `needle`, in table order.
pub fn filter_rows<'a, R: Searchable>(
    rows: &'a [R],
    needle: &'a str,
) -> impl Iterator<Item = &'a R> + 'a {
    rows.iter().filter(move |row| row.matches(needle))
}
