//! Parameterized statements
//!
//! A `Statement` pairs SQL text using PostgreSQL positional placeholders
//! (`$1..$n`) with the values bound to them. Placeholder `$k` always refers to
//! `params()[k - 1]`.

use std::fmt;

use super::SqlValue;

/// SQL text plus its ordered bound values
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<SqlValue>,
}

impl Statement {
    /// Create a statement from literal SQL and its parameters.
    ///
    /// The caller is responsible for numbering placeholders; use
    /// [`SelectBuilder`](super::SelectBuilder) when clauses are conditional.
    pub fn new(sql: impl Into<String>, params: Vec<SqlValue>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Placeholder indices in the order they appear in the SQL text.
    pub fn placeholder_indices(&self) -> Vec<usize> {
        let bytes = self.sql.as_bytes();
        let mut indices = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] == b'$' {
                let start = i + 1;
                let mut end = start;
                while end < bytes.len() && bytes[end].is_ascii_digit() {
                    end += 1;
                }
                if end > start {
                    if let Ok(n) = self.sql[start..end].parse() {
                        indices.push(n);
                    }
                }
                i = end.max(i + 1);
            } else {
                i += 1;
            }
        }

        indices
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.sql)?;
        for (i, param) in self.params.iter().enumerate() {
            writeln!(f, "  ${} = {}", i + 1, param)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_placeholders_in_order() {
        let stmt = Statement::new(
            "SELECT * FROM users WHERE email = $1 AND id = $2 LIMIT $3",
            vec!["a@b.c".into(), 1_i64.into(), 10_i64.into()],
        );
        assert_eq!(stmt.placeholder_indices(), vec![1, 2, 3]);
    }

    #[test]
    fn ignores_bare_dollar_and_casts() {
        let stmt = Statement::new("SELECT avg(rating)::float8, '$' FROM t WHERE x = $12", vec![]);
        assert_eq!(stmt.placeholder_indices(), vec![12]);
    }

    #[test]
    fn display_lists_params() {
        let stmt = Statement::new("SELECT $1", vec!["x".into()]);
        assert_eq!(stmt.to_string(), "SELECT $1\n  $1 = 'x'\n");
    }
}
