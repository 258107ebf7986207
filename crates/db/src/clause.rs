//! Dynamic `WHERE` / `SET` clause assembly with positional placeholders.
//!
//! Repositories that filter or patch on a caller-chosen subset of columns
//! push `(column, operator, value)` triples into a [`ClauseBuilder`] in a
//! fixed order. The builder renders each fragment with its `$n` placeholder
//! as it is pushed and keeps the values in a parallel list, so the text and
//! the bind order cannot drift apart. Trailing parameters such as `LIMIT`,
//! `OFFSET` or the row id are added with [`ClauseBuilder::param`] after all
//! fragments.

use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

/// Comparison used by a single fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `column = $n`. Also used for `SET` assignments.
    Eq,
    /// `column ILIKE $n`, with the value wrapped as `%value%`.
    Contains,
}

/// A value bound to one placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Int(i32),
    BigInt(i64),
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::BigInt(value)
    }
}

/// Accumulates clause fragments and their bind values.
#[derive(Debug, Default)]
pub struct ClauseBuilder {
    fragments: Vec<String>,
    params: Vec<SqlValue>,
}

impl ClauseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment for `column`.
    pub fn push(&mut self, column: &'static str, op: Op, value: impl Into<SqlValue>) -> &mut Self {
        let value = match (op, value.into()) {
            (Op::Contains, SqlValue::Text(text)) => {
                SqlValue::Text(format!("%{}%", escape_like(&text)))
            }
            (_, other) => other,
        };
        let placeholder = self.param(value);
        let fragment = match op {
            Op::Eq => format!("{column} = {placeholder}"),
            Op::Contains => format!("{column} ILIKE {placeholder}"),
        };
        self.fragments.push(fragment);
        self
    }

    /// Append a fragment only when `value` is `Some`.
    pub fn push_opt<V: Into<SqlValue>>(
        &mut self,
        column: &'static str,
        op: Op,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.push(column, op, value);
        }
        self
    }

    /// Register a bare parameter and return its placeholder (e.g. `$3`).
    pub fn param(&mut self, value: impl Into<SqlValue>) -> String {
        self.params.push(value.into());
        format!("${}", self.params.len())
    }

    /// `true` when no fragment has been pushed.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// ` WHERE a AND b`, or an empty string when there are no fragments.
    pub fn where_clause(&self) -> String {
        if self.fragments.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.fragments.join(" AND "))
        }
    }

    /// `a = $1, b = $2` for an `UPDATE ... SET` statement.
    pub fn set_clause(&self) -> String {
        self.fragments.join(", ")
    }

    /// Bound values in placeholder order.
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Bind every collected value onto `query` in placeholder order.
    pub fn bind_all<'q, O>(
        self,
        mut query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        for value in self.params {
            query = match value {
                SqlValue::Text(text) => query.bind(text),
                SqlValue::Int(int) => query.bind(int),
                SqlValue::BigInt(int) => query.bind(int),
            };
        }
        query
    }
}

/// Escape `ILIKE` wildcards so user input matches literally.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
