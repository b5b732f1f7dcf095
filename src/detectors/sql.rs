use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use super::scoring::{pattern, pattern_set};
use crate::context::DetectionContext;

/// SQL embedded in host-language code is not SQL
static HOST_LANGUAGE: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?m)^\s*(def|function|func|fn|fun|public|private|class|import|const|var|let|package|#include|using)\s",
        r"(?m)^\s*(print|console\.log|System\.out|echo)\b",
        r#"["'`]\s*(SELECT|INSERT|UPDATE|DELETE)\s"#,
    ])
});

static STATEMENT: Lazy<RegexSet> = Lazy::new(|| {
    pattern_set(&[
        r"(?ims)^\s*SELECT\b.+?\bFROM\b",
        r"(?im)^\s*INSERT\s+INTO\s+[\w.\[\]`\x22]+",
        r"(?ims)^\s*UPDATE\s+[\w.\[\]`\x22]+\s+SET\b",
        r"(?im)^\s*DELETE\s+FROM\s+\S+",
        r"(?im)^\s*CREATE\s+(OR\s+REPLACE\s+)?(TEMP(ORARY)?\s+)?(TABLE|INDEX|UNIQUE\s+INDEX|VIEW|DATABASE|SCHEMA|PROCEDURE|FUNCTION|TRIGGER|SEQUENCE|TYPE|EXTENSION)\b",
        r"(?im)^\s*ALTER\s+(TABLE|INDEX|VIEW|DATABASE|SEQUENCE)\b",
        r"(?im)^\s*DROP\s+(TABLE|INDEX|VIEW|DATABASE|SCHEMA|PROCEDURE|FUNCTION|TRIGGER)\b",
        r"(?ims)^\s*WITH\s+(RECURSIVE\s+)?\w+\s+AS\s*\(",
        r"(?im)^\s*(GRANT|REVOKE)\s+\w+.*\bON\b",
        r"(?im)^\s*TRUNCATE\s+TABLE\b",
    ])
});

static PLSQL: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?im)\bDBMS_OUTPUT\.|\bCREATE\s+OR\s+REPLACE\s+(PROCEDURE|FUNCTION|PACKAGE)\b[^;]*\b(IS|AS)\s*$|%(ROWTYPE|TYPE)\b|\bEXCEPTION\s+WHEN\b")
});

static TSQL: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?im)^\s*GO\s*$|\bDECLARE\s+@\w+|@@(ROWCOUNT|IDENTITY|ERROR)\b|\bSELECT\s+TOP\s*\(?\d+|\[dbo\]\.|\bNVARCHAR\s*\(|\bEXEC(UTE)?\s+sp_\w+")
});

pub fn detect(ctx: &DetectionContext<'_>) -> Option<&'static str> {
    let text = ctx.first_100_lines.as_str();

    if HOST_LANGUAGE.is_match(text) || !STATEMENT.is_match(text) {
        return None;
    }

    if TSQL.is_match(text) {
        return Some("tsql");
    }
    if PLSQL.is_match(text) {
        return Some("plsql");
    }
    Some("sql")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql(code: &str) -> Option<&'static str> {
        detect(&DetectionContext::new(code))
    }

    #[test]
    fn test_select() {
        assert_eq!(sql("SELECT * FROM users WHERE id = 1;"), Some("sql"));
        assert_eq!(sql("select name\nfrom users\nwhere active = true"), Some("sql"));
    }

    #[test]
    fn test_ddl() {
        let code = "CREATE TABLE users (\n  id INTEGER PRIMARY KEY,\n  name TEXT NOT NULL\n);";
        assert_eq!(sql(code), Some("sql"));
    }

    #[test]
    fn test_tsql() {
        let code = "DECLARE @count INT;\nSELECT TOP 10 * FROM [dbo].[Users];\nGO";
        assert_eq!(sql(code), Some("tsql"));
    }

    #[test]
    fn test_plsql() {
        let code = "CREATE OR REPLACE PROCEDURE greet IS\nBEGIN\n  DBMS_OUTPUT.PUT_LINE('hi');\nEND;";
        assert_eq!(sql(code), Some("plsql"));
    }

    #[test]
    fn test_embedded_query_is_not_sql() {
        let code = "def load(db):\n    return db.execute(\"SELECT * FROM users\")";
        assert_eq!(sql(code), None);
    }
}
