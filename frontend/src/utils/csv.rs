use chrono::NaiveDate;

pub const UTF8_BOM: &str = "\u{feff}";
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// One exported column: a header and how to read the cell from a row.
pub struct Column<T> {
    pub header: &'static str,
    pub value: fn(&T) -> String,
}

impl<T> Column<T> {
    pub const fn new(header: &'static str, value: fn(&T) -> String) -> Self {
        Self { header, value }
    }
}

fn escape_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// BOM, unquoted header line, then one fully quoted line per row. Every line ends in `\n`.
pub fn to_csv<T>(rows: &[T], columns: &[Column<T>]) -> Vec<u8> {
    let mut buffer = String::from(UTF8_BOM);
    let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
    buffer.push_str(&headers.join(","));
    buffer.push('\n');
    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| escape_cell(&(column.value)(row)))
            .collect();
        buffer.push_str(&cells.join(","));
        buffer.push('\n');
    }
    buffer.into_bytes()
}

pub fn export_file_name(base: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", base, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        a: &'static str,
        b: &'static str,
    }

    fn columns() -> [Column<Pair>; 2] {
        [
            Column::new("a", |row| row.a.to_string()),
            Column::new("b", |row| row.b.to_string()),
        ]
    }

    #[test]
    fn values_are_quoted_and_header_is_not() {
        let bytes = to_csv(&[Pair { a: "x", b: "y,z" }], &columns());
        assert_eq!(
            String::from_utf8(bytes).expect("utf8"),
            "\u{feff}a,b\n\"x\",\"y,z\"\n"
        );
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let bytes = to_csv(&[Pair { a: "say \"hi\"", b: "" }], &columns());
        let text = String::from_utf8(bytes).expect("utf8");
        assert!(text.ends_with("\"say \"\"hi\"\"\",\"\"\n"));
    }

    #[test]
    fn empty_rows_still_emit_header() {
        let bytes = to_csv::<Pair>(&[], &columns());
        assert_eq!(bytes, "\u{feff}a,b\n".as_bytes());
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn file_name_carries_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).expect("date");
        assert_eq!(export_file_name("audit_logs", date), "audit_logs_2025-03-07.csv");
    }
}
