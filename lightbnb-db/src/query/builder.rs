//! Clause-list SELECT builder
//!
//! Filters are accumulated as a list of [`Clause`]s and rendered in one pass:
//! the first clause of a section gets the section keyword (`WHERE` or
//! `HAVING`), later ones get `AND`. Placeholders are numbered while rendering,
//! so `$k` is always the k-th value pushed, whatever combination of clauses
//! was accumulated.
//!
//! Clause fragments mark bind positions with `?`. Column names and operators
//! in fragments are trusted text; every caller-supplied value goes through a
//! bind.

use super::{SqlValue, Statement};

/// Marker for a bind position inside a clause fragment
const BIND_MARKER: char = '?';

/// One predicate with its bound values
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    fragment: String,
    values: Vec<SqlValue>,
}

impl Clause {
    /// Create a clause from a fragment containing one `?` per value.
    pub fn new(fragment: impl Into<String>, values: Vec<SqlValue>) -> Self {
        let fragment = fragment.into();
        debug_assert_eq!(
            fragment.matches(BIND_MARKER).count(),
            values.len(),
            "bind marker count must match value count in `{fragment}`"
        );
        Self { fragment, values }
    }

    /// `column = ?`
    pub fn eq(column: &str, value: impl Into<SqlValue>) -> Self {
        Self::new(format!("{column} = ?"), vec![value.into()])
    }

    /// `column >= ?`
    pub fn gte(column: &str, value: impl Into<SqlValue>) -> Self {
        Self::new(format!("{column} >= ?"), vec![value.into()])
    }

    /// `column <= ?`
    pub fn lte(column: &str, value: impl Into<SqlValue>) -> Self {
        Self::new(format!("{column} <= ?"), vec![value.into()])
    }

    /// `column BETWEEN ? AND ?`
    pub fn between(column: &str, low: impl Into<SqlValue>, high: impl Into<SqlValue>) -> Self {
        Self::new(
            format!("{column} BETWEEN ? AND ?"),
            vec![low.into(), high.into()],
        )
    }

    /// Case-insensitive substring match. LIKE metacharacters in `needle` are
    /// escaped so they match literally.
    pub fn contains_ignore_case(column: &str, needle: &str) -> Self {
        Self::new(
            format!("{column} ILIKE ?"),
            vec![SqlValue::Text(format!("%{}%", escape_like(needle)))],
        )
    }

    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// Append the fragment to `sql`, pushing values and numbering each marker
    /// from the running parameter count.
    fn render_into(&self, sql: &mut String, params: &mut Vec<SqlValue>) {
        let mut values = self.values.iter();
        for ch in self.fragment.chars() {
            if ch == BIND_MARKER {
                if let Some(value) = values.next() {
                    params.push(value.clone());
                    sql.push('$');
                    sql.push_str(&params.len().to_string());
                    continue;
                }
            }
            sql.push(ch);
        }
    }
}

/// Escape `\`, `%` and `_` for a LIKE pattern using PostgreSQL's default
/// escape character.
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Builder for a SELECT with optional WHERE, GROUP BY, HAVING, ORDER BY,
/// LIMIT and OFFSET sections, rendered in that order.
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    base: String,
    filters: Vec<Clause>,
    group_by: Option<String>,
    having: Vec<Clause>,
    order_by: Option<String>,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl SelectBuilder {
    /// Start from a fixed `SELECT ... FROM ... [JOIN ...]` text.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            filters: Vec::new(),
            group_by: None,
            having: Vec::new(),
            order_by: None,
            limit: None,
            offset: None,
        }
    }

    /// Add a per-row filter to the WHERE section.
    pub fn filter(&mut self, clause: Clause) -> &mut Self {
        self.filters.push(clause);
        self
    }

    pub fn group_by(&mut self, columns: impl Into<String>) -> &mut Self {
        self.group_by = Some(columns.into());
        self
    }

    /// Add an aggregate filter to the HAVING section.
    pub fn having(&mut self, clause: Clause) -> &mut Self {
        self.having.push(clause);
        self
    }

    pub fn order_by(&mut self, ordering: impl Into<String>) -> &mut Self {
        self.order_by = Some(ordering.into());
        self
    }

    pub fn limit(&mut self, limit: i64) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(&mut self, offset: i64) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    /// Render the accumulated sections into a statement.
    pub fn build(&self) -> Statement {
        let mut sql = self.base.trim().to_owned();
        let mut params = Vec::new();

        render_section(&mut sql, &mut params, "WHERE", &self.filters);

        if let Some(group_by) = &self.group_by {
            sql.push_str("\nGROUP BY ");
            sql.push_str(group_by);
        }

        render_section(&mut sql, &mut params, "HAVING", &self.having);

        if let Some(order_by) = &self.order_by {
            sql.push_str("\nORDER BY ");
            sql.push_str(order_by);
        }

        if let Some(limit) = self.limit {
            params.push(SqlValue::Int(limit));
            sql.push_str(&format!("\nLIMIT ${}", params.len()));
        }

        if let Some(offset) = self.offset {
            params.push(SqlValue::Int(offset));
            sql.push_str(&format!("\nOFFSET ${}", params.len()));
        }

        Statement::new(sql, params)
    }
}

fn render_section(sql: &mut String, params: &mut Vec<SqlValue>, keyword: &str, clauses: &[Clause]) {
    for (emitted, clause) in clauses.iter().enumerate() {
        sql.push('\n');
        sql.push_str(if emitted == 0 { keyword } else { "AND" });
        sql.push(' ');
        clause.render_into(sql, params);
    }
}
