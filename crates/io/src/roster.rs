// Roster table: CSV in, records out, scan results written back

use std::path::Path;

use rollcall_recon::{ColumnMapping, RosterRecord};

use crate::csv::{parse_table, read_table, sniff_delimiter, write_table, Table};
use crate::error::IoError;

/// The roster as loaded, every column and row kept in file order.
#[derive(Debug, Clone)]
pub struct RosterTable {
    table: Table,
}

impl RosterTable {
    pub fn load(path: &Path) -> Result<Self, IoError> {
        let table = read_table(path)?;
        log::debug!(
            "roster {}: {} rows, columns [{}]",
            path.display(),
            table.rows.len(),
            table.headers.join(", ")
        );
        Ok(Self { table })
    }

    pub fn from_csv_str(content: &str) -> Result<Self, IoError> {
        let table = parse_table(content, sniff_delimiter(content))?;
        Ok(Self { table })
    }

    pub fn headers(&self) -> &[String] {
        &self.table.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.table.rows
    }

    pub fn len(&self) -> usize {
        self.table.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.rows.is_empty()
    }

    fn require(&self, column: &str) -> Result<usize, IoError> {
        self.table
            .column(column)
            .ok_or_else(|| IoError::MissingColumn {
                column: column.to_string(),
                available: self.table.headers.clone(),
            })
    }

    /// One record per row, indexed by row position, with prior scan results.
    ///
    /// The name columns are required. A missing attended column means
    /// nothing has been scanned yet, so every record starts unattended.
    pub fn records(&self, columns: &ColumnMapping) -> Result<Vec<RosterRecord>, IoError> {
        self.collect_records(columns, true)
    }

    /// Records for a fresh scan. Existing attended and score cells are
    /// ignored, since the scan overwrites both.
    pub fn scan_records(&self, columns: &ColumnMapping) -> Result<Vec<RosterRecord>, IoError> {
        self.collect_records(columns, false)
    }

    fn collect_records(
        &self,
        columns: &ColumnMapping,
        read_previous: bool,
    ) -> Result<Vec<RosterRecord>, IoError> {
        let first_col = self.require(&columns.first_name)?;
        let last_col = self.require(&columns.last_name)?;
        let (attended_col, score_col) = if read_previous {
            (
                self.table.column(&columns.attended),
                self.table.column(&columns.match_score),
            )
        } else {
            (None, None)
        };

        self.table
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let attended = match attended_col {
                    Some(col) => parse_attended(&row[col], index)?,
                    None => false,
                };
                let match_score = score_col
                    .and_then(|col| row[col].trim().parse::<f64>().ok())
                    .unwrap_or(0.0);
                Ok(RosterRecord {
                    index,
                    first_name: row[first_col].trim().to_string(),
                    last_name: row[last_col].trim().to_string(),
                    attended,
                    match_score,
                })
            })
            .collect()
    }

    /// Write attended flags and scores back, adding the columns if needed.
    pub fn apply_scan(&mut self, records: &[RosterRecord], columns: &ColumnMapping) {
        let attended_col = self.table.ensure_column(&columns.attended);
        let score_col = self.table.ensure_column(&columns.match_score);
        for record in records {
            if let Some(row) = self.table.rows.get_mut(record.index) {
                row[attended_col] = if record.attended { "1" } else { "0" }.to_string();
                row[score_col] = format_score(record.match_score);
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), IoError> {
        write_table(&self.table, path)
    }
}

/// Shortest round-tripping decimal, always with a fractional part (`0.0`).
pub fn format_score(score: f64) -> String {
    format!("{score:?}")
}

fn parse_attended(value: &str, row: usize) -> Result<bool, IoError> {
    let v = value.trim();
    if v.is_empty() {
        return Ok(false);
    }
    if let Ok(n) = v.parse::<f64>() {
        if n == 0.0 {
            return Ok(false);
        }
        if n == 1.0 {
            return Ok(true);
        }
    }
    match v.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" => Ok(true),
        "false" | "no" | "n" => Ok(false),
        _ => Err(IoError::InvalidAttended {
            row,
            value: v.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn records_from_minimal_roster() {
        let roster = RosterTable::from_csv_str("First Name,Last Name\n José , Núñez \nAna,Cruz\n").unwrap();
        let records = roster.records(&ColumnMapping::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].first_name, "José");
        assert_eq!(records[0].last_name, "Núñez");
        assert_eq!(records[1].index, 1);
        assert!(records.iter().all(|r| !r.attended && r.match_score == 0.0));
    }

    #[test]
    fn records_read_previous_scan() {
        let roster = RosterTable::from_csv_str(
            "First Name,Last Name,Attended,MatchScore\nAna,Cruz,1,185.5\nBob,Ray,0,0.0\nCy,Lo,,\n",
        )
        .unwrap();
        let records = roster.records(&ColumnMapping::default()).unwrap();
        assert!(records[0].attended);
        assert_eq!(records[0].match_score, 185.5);
        assert!(!records[1].attended);
        assert!(!records[2].attended);
    }

    #[test]
    fn missing_name_column() {
        let roster = RosterTable::from_csv_str("Given,Last Name\nAna,Cruz\n").unwrap();
        let err = roster.records(&ColumnMapping::default()).unwrap_err();
        match err {
            IoError::MissingColumn { column, available } => {
                assert_eq!(column, "First Name");
                assert_eq!(available, vec!["Given", "Last Name"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn custom_column_mapping() {
        let roster = RosterTable::from_csv_str("Given;Family\nAna;Cruz\n").unwrap();
        let columns = ColumnMapping {
            first_name: "Given".into(),
            last_name: "Family".into(),
            ..ColumnMapping::default()
        };
        let records = roster.records(&columns).unwrap();
        assert_eq!(records[0].last_name, "Cruz");
    }

    #[test]
    fn invalid_attended_value() {
        let roster =
            RosterTable::from_csv_str("First Name,Last Name,Attended\nAna,Cruz,maybe\n").unwrap();
        let err = roster.records(&ColumnMapping::default()).unwrap_err();
        assert!(matches!(err, IoError::InvalidAttended { row: 0, .. }));
    }

    #[test]
    fn scan_records_ignore_hand_filled_attended() {
        let roster = RosterTable::from_csv_str(
            "First Name,Last Name,Attended,MatchScore\nAna,Cruz,P,x\nBob,Ray,A,\n",
        )
        .unwrap();
        let records = roster.scan_records(&ColumnMapping::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| !r.attended && r.match_score == 0.0));
        assert!(roster.records(&ColumnMapping::default()).is_err());
    }

    #[test]
    fn empty_cell_rows_become_records() {
        let roster = RosterTable::from_csv_str("First Name,Last Name\nJane,Doe\n,\nJohn,Smith\n").unwrap();
        let records = roster.scan_records(&ColumnMapping::default()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].first_name, "");
        assert_eq!(records[2].index, 2);
    }

    #[test]
    fn attended_spellings() {
        assert!(parse_attended("1", 0).unwrap());
        assert!(parse_attended("1.0", 0).unwrap());
        assert!(parse_attended("True", 0).unwrap());
        assert!(!parse_attended("0", 0).unwrap());
        assert!(!parse_attended(" ", 0).unwrap());
        assert!(parse_attended("2", 0).is_err());
    }

    #[test]
    fn apply_scan_preserves_columns_and_order() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("roster.csv");
        fs::write(&input, "Section,First Name,Last Name\nA,Ana,Cruz\nB,Bob,Ray\n").unwrap();

        let mut roster = RosterTable::load(&input).unwrap();
        let columns = ColumnMapping::default();
        let mut records = roster.records(&columns).unwrap();
        records[0].attended = true;
        records[0].match_score = 185.71428571428572;
        roster.apply_scan(&records, &columns);

        let output = dir.path().join("roster_new.csv");
        roster.save(&output).unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Section,First Name,Last Name,Attended,MatchScore\n\
             A,Ana,Cruz,1,185.71428571428572\n\
             B,Bob,Ray,0,0.0\n"
        );
    }

    #[test]
    fn apply_scan_overwrites_existing_columns() {
        let mut roster = RosterTable::from_csv_str(
            "First Name,Last Name,Attended,MatchScore\nAna,Cruz,1,150.0\n",
        )
        .unwrap();
        let columns = ColumnMapping::default();
        let mut records = roster.records(&columns).unwrap();
        records[0].attended = false;
        records[0].match_score = 0.0;
        roster.apply_scan(&records, &columns);
        assert_eq!(roster.headers().len(), 4);
        assert_eq!(roster.rows()[0], vec!["Ana", "Cruz", "0", "0.0"]);
    }
}
