// src/process/mod.rs
use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use std::collections::HashMap;
use tracing::debug;

pub mod utils;

/// One data line of the sheet, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    /// Pair headers with values. Short rows are padded with `""`, extra values are
    /// dropped, and with duplicate header names the rightmost column wins.
    pub fn from_record(headers: &[String], values: &[String]) -> Self {
        let mut fields = HashMap::with_capacity(headers.len());
        for (i, h) in headers.iter().enumerate() {
            let v = values.get(i).cloned().unwrap_or_default();
            fields.insert(h.clone(), v);
        }
        Self { fields }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parse CSV text into rows, using the first non-empty line as headers.
///
/// - Lines end in `\n` or `\r\n`; blank lines are skipped.
/// - Quoted fields may contain commas and newlines; `""` inside quotes is a literal `"`.
/// - Every field is trimmed.
///
/// Empty input (or input with only a header line) yields no rows.
#[tracing::instrument(level = "debug", skip(text), fields(bytes = text.len()))]
pub fn parse_csv(text: &str) -> Result<Vec<Row>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // rows may be shorter or longer than the header
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at record {}", idx))?;
        let values: Vec<String> = record.iter().map(str::to_string).collect();

        match headers {
            None => headers = Some(values),
            Some(ref h) => rows.push(Row::from_record(h, &values)),
        }
    }

    debug!(
        columns = headers.as_ref().map_or(0, Vec::len),
        rows = rows.len(),
        "parsed csv"
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    const VALUE_COL: &str = "Value added in the agricultural sector as percent of GDP";

    #[test]
    fn parses_sheet_export() -> Result<()> {
        let text = "Year,Value added in the agricultural sector as percent of GDP\r\n\
                    1961,22.5\r\n\
                    1962,21.9\r\n";
        let rows = parse_csv(text)?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Year"), Some("1961"));
        assert_eq!(rows[1].get(VALUE_COL), Some("21.9"));
        Ok(())
    }

    #[test]
    fn quoted_fields_keep_commas_and_escaped_quotes() -> Result<()> {
        let text = "Name,Note,Year\n\"Oman, Sultanate of\",\"said \"\"hi\"\"\",2011\n";
        let rows = parse_csv(text)?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Name"), Some("Oman, Sultanate of"));
        assert_eq!(rows[0].get("Note"), Some("said \"hi\""));
        assert_eq!(rows[0].get("Year"), Some("2011"));
        Ok(())
    }

    #[test]
    fn blank_lines_skipped_and_fields_trimmed() -> Result<()> {
        let text = "\n Year , Value \n\n  2001 ,  3.25  \n\n";
        let rows = parse_csv(text)?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Year"), Some("2001"));
        assert_eq!(rows[0].get("Value"), Some("3.25"));
        Ok(())
    }

    #[test]
    fn short_rows_padded_long_rows_truncated() -> Result<()> {
        let text = "a,b,c\n1\n1,2,3,4\n";
        let rows = parse_csv(text)?;
        assert_eq!(rows[0].get("a"), Some("1"));
        assert_eq!(rows[0].get("b"), Some(""));
        assert_eq!(rows[0].get("c"), Some(""));
        assert_eq!(rows[1].len(), 3);
        assert_eq!(rows[1].get("c"), Some("3"));
        Ok(())
    }

    #[test]
    fn quoted_field_may_span_lines() -> Result<()> {
        let text = "Year,Note\n2011,\"first line\nsecond line\"\n2012,plain\n";
        let rows = parse_csv(text)?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Note"), Some("first line\nsecond line"));
        assert_eq!(rows[1].get("Year"), Some("2012"));
        Ok(())
    }

    #[test]
    fn quoted_header_is_trimmed() -> Result<()> {
        let rows = parse_csv("\"  Year  \",\" Value \"\n2011,\" 1.5 \"\n")?;
        assert_eq!(rows[0].get("Year"), Some("2011"));
        assert_eq!(rows[0].get("Value"), Some("1.5"));
        assert_eq!(rows[0].get("  Year  "), None);
        Ok(())
    }

    #[test]
    fn duplicate_header_rightmost_wins() -> Result<()> {
        let rows = parse_csv("x,x\n1,2\n")?;
        assert_eq!(rows[0].get("x"), Some("2"));
        Ok(())
    }

    #[test]
    fn empty_and_header_only_input() -> Result<()> {
        assert!(parse_csv("")?.is_empty());
        assert!(parse_csv("\r\n\n")?.is_empty());
        assert!(parse_csv("Year,Value\n")?.is_empty());
        Ok(())
    }
}
