use crate::core::models::torsion::{
    MISSING_ANGLE_SENTINEL, TorsionKind, TorsionRow, TorsionTable,
};
use crate::core::utils::identifiers::residue_type_label;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

pub const STANDARD_HEADER: [&str; 2] = [
    "Residue  Alpha    Beta    Gamma   Delta  Epsilon   Zeta      Chi",
    "------- -------- ------- ------- ------- -------- ------- -------",
];

pub const RESIDUE_TYPE_HEADER: [&str; 2] = [
    "Residue Type   Alpha    Beta    Gamma   Delta  Epsilon   Zeta      Chi",
    "------- ---- -------- ------- ------- ------- -------- ------- -------",
];

/// Column arrangement of the fixed-width table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportLayout {
    /// Residue number followed by the seven angles.
    #[default]
    Standard,
    /// Adds a nucleotide-type column after the residue number.
    WithResidueType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Fixed-width text table with a two-line header.
    #[default]
    Table,
    /// Comma-separated values with a single header row.
    Csv,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: ReportFormat,
    /// Only applies to [`ReportFormat::Table`]; CSV output always carries the
    /// chain and residue name columns.
    pub layout: ReportLayout,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// One data line of a torsion table read back from text.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub residue_number: isize,
    /// Present when the table carries a residue-type column.
    pub residue_type: Option<String>,
    /// `None` where the table holds the missing-angle sentinel.
    pub angles: [Option<f64>; TorsionKind::COUNT],
}

#[derive(Serialize)]
struct CsvRow<'a> {
    residue: isize,
    chain: char,
    residue_name: &'a str,
    alpha: f64,
    beta: f64,
    gamma: f64,
    delta: f64,
    epsilon: f64,
    zeta: f64,
    chi: f64,
}

impl<'a> From<&'a TorsionRow> for CsvRow<'a> {
    fn from(row: &'a TorsionRow) -> Self {
        Self {
            residue: row.residue_number(),
            chain: row.key.chain_id,
            residue_name: &row.residue_name,
            alpha: row.value_or_sentinel(TorsionKind::Alpha),
            beta: row.value_or_sentinel(TorsionKind::Beta),
            gamma: row.value_or_sentinel(TorsionKind::Gamma),
            delta: row.value_or_sentinel(TorsionKind::Delta),
            epsilon: row.value_or_sentinel(TorsionKind::Epsilon),
            zeta: row.value_or_sentinel(TorsionKind::Zeta),
            chi: row.value_or_sentinel(TorsionKind::Chi),
        }
    }
}

/// Formats the seven angles of a row with the fixed column widths of the table.
fn format_angles(row: &TorsionRow) -> String {
    let v = |kind| row.value_or_sentinel(kind);
    format!(
        "{:8.1} {:7.1} {:7.1} {:7.1} {:8.1} {:7.1} {:7.1}",
        v(TorsionKind::Alpha),
        v(TorsionKind::Beta),
        v(TorsionKind::Gamma),
        v(TorsionKind::Delta),
        v(TorsionKind::Epsilon),
        v(TorsionKind::Zeta),
        v(TorsionKind::Chi),
    )
}

/// Formats one data line of the fixed-width table.
pub fn format_row(row: &TorsionRow, layout: ReportLayout) -> String {
    match layout {
        ReportLayout::Standard => format!("{:7} {}", row.residue_number(), format_angles(row)),
        ReportLayout::WithResidueType => format!(
            "{:7} {:>4} {}",
            row.residue_number(),
            residue_type_label(&row.residue_name),
            format_angles(row)
        ),
    }
}

fn write_fixed_width(
    table: &TorsionTable,
    layout: ReportLayout,
    writer: &mut impl Write,
) -> Result<(), ReportError> {
    let header = match layout {
        ReportLayout::Standard => STANDARD_HEADER,
        ReportLayout::WithResidueType => RESIDUE_TYPE_HEADER,
    };
    for line in header {
        writeln!(writer, "{}", line)?;
    }
    for row in table.rows() {
        writeln!(writer, "{}", format_row(row, layout))?;
    }
    Ok(())
}

fn write_csv(table: &TorsionTable, writer: &mut impl Write) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in table.rows() {
        csv_writer.serialize(CsvRow::from(row))?;
    }
    if table.is_empty() {
        csv_writer.write_record([
            "residue",
            "chain",
            "residue_name",
            "alpha",
            "beta",
            "gamma",
            "delta",
            "epsilon",
            "zeta",
            "chi",
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the torsion table in the requested format.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_table(
    table: &TorsionTable,
    options: &ReportOptions,
    writer: &mut impl Write,
) -> Result<(), ReportError> {
    match options.format {
        ReportFormat::Table => write_fixed_width(table, options.layout, writer),
        ReportFormat::Csv => write_csv(table, writer),
    }
}

/// Writes the torsion table to a file, creating or truncating it.
pub fn write_table_to_path<P: AsRef<Path>>(
    table: &TorsionTable,
    options: &ReportOptions,
    path: P,
) -> Result<(), ReportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_table(table, options, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn parse_angle(token: &str, line: usize) -> Result<Option<f64>, ReportError> {
    let value: f64 = token.parse().map_err(|_| ReportError::Parse {
        line,
        message: format!("invalid angle value '{}'", token),
    })?;
    Ok((value != MISSING_ANGLE_SENTINEL).then_some(value))
}

/// Reads a fixed-width torsion table back into entries.
///
/// Blank lines and header lines (containing `Residue` or `---`) are skipped. Data
/// lines hold the residue number, an optional non-numeric residue-type column, and
/// seven angles; the missing-angle sentinel becomes `None`.
///
/// # Errors
///
/// Returns [`ReportError::Parse`] for a data line with too few fields or
/// non-numeric values.
pub fn read_table(reader: &mut impl BufRead) -> Result<Vec<ReportEntry>, ReportError> {
    let mut entries = Vec::new();

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.contains("Residue") || trimmed.contains("---") {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() < 1 + TorsionKind::COUNT {
            return Err(ReportError::Parse {
                line: line_num,
                message: format!(
                    "expected at least {} fields, found {}",
                    1 + TorsionKind::COUNT,
                    fields.len()
                ),
            });
        }

        let residue_number: isize = fields[0].parse().map_err(|_| ReportError::Parse {
            line: line_num,
            message: format!("invalid residue number '{}'", fields[0]),
        })?;

        let (residue_type, angle_fields) = if fields[1].parse::<f64>().is_ok() {
            (None, &fields[1..])
        } else {
            (Some(fields[1].to_string()), &fields[2..])
        };
        if angle_fields.len() < TorsionKind::COUNT {
            return Err(ReportError::Parse {
                line: line_num,
                message: format!("expected {} angle values", TorsionKind::COUNT),
            });
        }

        let mut angles = [None; TorsionKind::COUNT];
        for (slot, token) in angles.iter_mut().zip(angle_fields) {
            *slot = parse_angle(token, line_num)?;
        }

        entries.push(ReportEntry {
            residue_number,
            residue_type,
            angles,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::residue::ResidueKey;
    use std::io::Cursor;

    fn sample_table() -> TorsionTable {
        let mut first = TorsionRow::new(ResidueKey::new('A', 1), "G");
        first.set(TorsionKind::Beta, Some(-172.34));
        first.set(TorsionKind::Gamma, Some(54.26));
        first.set(TorsionKind::Chi, Some(-158.0));

        let mut second = TorsionRow::new(ResidueKey::new('A', 12), "DC");
        for (i, kind) in TorsionKind::ALL.into_iter().enumerate() {
            second.set(kind, Some(-60.0 + i as f64 * 10.0));
        }

        TorsionTable::new(vec![first, second])
    }

    fn render(table: &TorsionTable, options: ReportOptions) -> String {
        let mut buffer = Vec::new();
        write_table(table, &options, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn standard_table_matches_fixed_column_layout() {
        let text = render(&sample_table(), ReportOptions::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], STANDARD_HEADER[0]);
        assert_eq!(lines[1], STANDARD_HEADER[1]);
        assert_eq!(
            lines[2],
            "      1    999.0  -172.3    54.3   999.0    999.0   999.0  -158.0"
        );
        assert_eq!(
            lines[3],
            "     12    -60.0   -50.0   -40.0   -30.0    -20.0   -10.0     0.0"
        );
    }

    #[test]
    fn residue_type_layout_inserts_one_letter_code() {
        let options = ReportOptions {
            layout: ReportLayout::WithResidueType,
            ..Default::default()
        };
        let text = render(&sample_table(), options);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], RESIDUE_TYPE_HEADER[0]);
        assert_eq!(
            lines[2],
            "      1    G    999.0  -172.3    54.3   999.0    999.0   999.0  -158.0"
        );
        assert!(lines[3].starts_with("     12    C "));
    }

    #[test]
    fn empty_table_writes_only_the_header() {
        let text = render(&TorsionTable::default(), ReportOptions::default());
        assert_eq!(text, format!("{}\n{}\n", STANDARD_HEADER[0], STANDARD_HEADER[1]));
    }

    #[test]
    fn csv_output_has_header_and_sentinels() {
        let options = ReportOptions {
            format: ReportFormat::Csv,
            ..Default::default()
        };
        let text = render(&sample_table(), options);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "residue,chain,residue_name,alpha,beta,gamma,delta,epsilon,zeta,chi"
        );
        assert_eq!(lines[1], "1,A,G,999.0,-172.34,54.26,999.0,999.0,999.0,-158.0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn csv_output_for_empty_table_still_has_header() {
        let options = ReportOptions {
            format: ReportFormat::Csv,
            ..Default::default()
        };
        let text = render(&TorsionTable::default(), options);
        assert_eq!(
            text.trim_end(),
            "residue,chain,residue_name,alpha,beta,gamma,delta,epsilon,zeta,chi"
        );
    }

    #[test]
    fn read_table_parses_standard_layout() {
        let text = render(&sample_table(), ReportOptions::default());
        let entries = read_table(&mut Cursor::new(text)).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].residue_number, 1);
        assert_eq!(entries[0].residue_type, None);
        assert_eq!(entries[0].angles[TorsionKind::Alpha.index()], None);
        assert_eq!(entries[0].angles[TorsionKind::Beta.index()], Some(-172.3));
        assert_eq!(entries[1].angles[TorsionKind::Chi.index()], Some(0.0));
    }

    #[test]
    fn read_table_parses_residue_type_layout() {
        let options = ReportOptions {
            layout: ReportLayout::WithResidueType,
            ..Default::default()
        };
        let text = render(&sample_table(), options);
        let entries = read_table(&mut Cursor::new(text)).unwrap();

        assert_eq!(entries[0].residue_type.as_deref(), Some("G"));
        assert_eq!(entries[1].residue_type.as_deref(), Some("C"));
        assert_eq!(entries[1].angles[TorsionKind::Alpha.index()], Some(-60.0));
    }

    #[test]
    fn read_table_rejects_truncated_lines() {
        let text = format!("{}\n{}\n   3   10.0  20.0\n", STANDARD_HEADER[0], STANDARD_HEADER[1]);
        match read_table(&mut Cursor::new(text)) {
            Err(ReportError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn read_table_rejects_non_numeric_angles() {
        let text = "   3  A  1.0 2.0 3.0 4.0 5.0 6.0 x\n";
        assert!(matches!(
            read_table(&mut Cursor::new(text)),
            Err(ReportError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn write_table_to_path_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("torsion_angles.dat");

        write_table_to_path(&sample_table(), &ReportOptions::default(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(STANDARD_HEADER[0]));
        assert_eq!(content.lines().count(), 4);
    }
}
