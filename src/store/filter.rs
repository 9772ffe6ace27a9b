use super::error::StoreError;

/// Filter over document fields, compiled to a parameterized SQL WHERE clause
/// against the JSONB `doc` column.
///
/// The surface is deliberately small: the API only ever needs equality on a
/// single field, a case-insensitive substring match, and an OR of substring
/// matches across fields.
#[derive(Debug, Clone, Default)]
pub struct DocFilter {
    conditions: Vec<Condition>,
}

#[derive(Debug, Clone)]
enum Condition {
    Eq(String, String),
    ContainsCi(String, String),
    AnyContainsCi(Vec<String>, String),
}

impl DocFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact match on a field: `{ field: value }`.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.conditions.push(Condition::Eq(field.into(), value.into()));
        self
    }

    /// Case-insensitive substring match on a field.
    pub fn contains_ci(mut self, field: impl Into<String>, needle: impl Into<String>) -> Self {
        self.conditions
            .push(Condition::ContainsCi(field.into(), needle.into()));
        self
    }

    /// Case-insensitive substring match against any of the given fields,
    /// OR-combined.
    pub fn any_contains_ci(mut self, fields: &[&str], needle: impl Into<String>) -> Self {
        self.conditions.push(Condition::AnyContainsCi(
            fields.iter().map(|f| f.to_string()).collect(),
            needle.into(),
        ));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Compile to a WHERE clause plus positional parameters ($1, $2, ...).
    /// Conditions are AND-combined; an empty filter matches everything.
    pub fn to_sql(&self) -> Result<(String, Vec<String>), StoreError> {
        let mut params: Vec<String> = vec![];
        let mut clauses: Vec<String> = vec![];

        for condition in &self.conditions {
            match condition {
                Condition::Eq(field, value) => {
                    params.push(value.clone());
                    clauses.push(format!("{} = ${}", field_expr(field)?, params.len()));
                }
                Condition::ContainsCi(field, needle) => {
                    params.push(like_pattern(needle));
                    clauses.push(format!(
                        "{} ILIKE ${} ESCAPE '\\'",
                        field_expr(field)?,
                        params.len()
                    ));
                }
                Condition::AnyContainsCi(fields, needle) => {
                    let mut alternatives = vec![];
                    for field in fields {
                        params.push(like_pattern(needle));
                        alternatives.push(format!(
                            "{} ILIKE ${} ESCAPE '\\'",
                            field_expr(field)?,
                            params.len()
                        ));
                    }
                    clauses.push(format!("({})", alternatives.join(" OR ")));
                }
            }
        }

        let where_clause = if clauses.is_empty() {
            "1=1".to_string()
        } else {
            clauses.join(" AND ")
        };
        Ok((where_clause, params))
    }
}

/// SQL expression extracting a document field as text. Field names come from
/// route code, but validate anyway so no quoting context can be escaped.
fn field_expr(field: &str) -> Result<String, StoreError> {
    if field.is_empty() || !field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(StoreError::InvalidField(field.to_string()));
    }
    Ok(format!("doc->>'{}'", field))
}

/// Build a `%needle%` pattern with LIKE metacharacters escaped so the needle
/// matches as a literal substring.
fn like_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}
