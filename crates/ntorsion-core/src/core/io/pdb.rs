use crate::core::io::traits::StructureFile;
use crate::core::models::atom::AtomRecord;
use crate::core::utils::hybrid36;
use nalgebra::Point3;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

/// Shortest `ATOM` line that still carries all three coordinates (columns 1-54).
const MIN_ATOM_LINE_LEN: usize = 54;
/// Written in the serial columns when a record has no representable serial.
const SERIAL_OVERFLOW: &str = "*****";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PdbReadOptions {
    /// Soft limit on the number of atoms read. Once reached, a warning is logged
    /// and the remaining records are ignored.
    pub max_atoms: Option<usize>,
}

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for ATOM record (must be at least 54 chars)")]
    LineTooShort,
}

/// Columns `start..end` (zero-based, exclusive end) of a raw line, decoded and
/// trimmed. Bytes that are not UTF-8 become replacement characters.
fn column(line: &[u8], start: usize, end: usize) -> Cow<'_, str> {
    let end = end.min(line.len());
    let start = start.min(end);
    match String::from_utf8_lossy(&line[start..end]) {
        Cow::Borrowed(text) => Cow::Borrowed(text.trim()),
        Cow::Owned(text) => Cow::Owned(text.trim().to_string()),
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn parse_int<T: std::str::FromStr>(
    line: &[u8],
    line_num: usize,
    (start, end): (usize, usize),
) -> Result<T, PdbError> {
    let value = column(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: format!("{}-{}", start + 1, end),
            value: value.into_owned(),
        },
    })
}

fn parse_float(
    line: &[u8],
    line_num: usize,
    (start, end): (usize, usize),
) -> Result<f64, PdbError> {
    let value = column(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, end),
            value: value.into_owned(),
        },
    })
}

/// Blank or absent columns read as `0.0`.
fn parse_optional_float(
    line: &[u8],
    line_num: usize,
    columns: (usize, usize),
) -> Result<f64, PdbError> {
    if column(line, columns.0, columns.1).is_empty() {
        return Ok(0.0);
    }
    parse_float(line, line_num, columns)
}

fn parse_atom_line(line: &[u8], line_num: usize) -> Result<AtomRecord, PdbError> {
    if line.len() < MIN_ATOM_LINE_LEN {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::LineTooShort,
        });
    }

    // The serial takes no part in any computation; overflow markers are kept as `None`.
    let serial_field = column(line, 6, 11);
    let serial = hybrid36::decode(&serial_field);
    if serial.is_none() {
        debug!(line = line_num, value = %serial_field, "Unreadable atom serial number.");
    }

    let name = column(line, 12, 16);
    if name.is_empty() {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::MissingRequiredField {
                columns: "13-16".into(),
            },
        });
    }
    let residue_name = column(line, 17, 20);
    // A blank chain column is a valid identifier of its own.
    let chain_id = line.get(21).map_or(' ', |&byte| char::from(byte));
    let residue_number: isize = parse_int(line, line_num, (22, 26))?;

    let x = parse_float(line, line_num, (30, 38))?;
    let y = parse_float(line, line_num, (38, 46))?;
    let z = parse_float(line, line_num, (46, 54))?;
    let occupancy = parse_optional_float(line, line_num, (54, 60))?;
    let temperature_factor = parse_optional_float(line, line_num, (60, 66))?;

    Ok(AtomRecord {
        serial,
        name: name.into_owned(),
        residue_name: residue_name.into_owned(),
        residue_number,
        chain_id,
        position: Point3::new(x, y, z),
        occupancy,
        temperature_factor,
    })
}

/// Atom name in columns 13-16: names shorter than four characters start in column 14.
fn padded_atom_name(name: &str) -> String {
    if name.len() >= 4 {
        name.to_string()
    } else {
        format!(" {:<3}", name)
    }
}

/// Formats a record as a fixed-column `ATOM` line.
///
/// Serials above 99999 are written in hybrid-36; a missing serial is written as
/// `*****`.
pub fn format_atom_line(atom: &AtomRecord) -> String {
    let serial = atom
        .serial
        .and_then(hybrid36::encode)
        .unwrap_or_else(|| SERIAL_OVERFLOW.to_string());
    format!(
        "ATOM  {:>5} {:<4} {:>3} {:1}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}",
        serial,
        padded_atom_name(&atom.name),
        atom.residue_name,
        atom.chain_id,
        atom.residue_number,
        atom.position.x,
        atom.position.y,
        atom.position.z,
        atom.occupancy,
        atom.temperature_factor,
    )
}

pub struct PdbFile;

impl StructureFile for PdbFile {
    type Options = PdbReadOptions;
    type Error = PdbError;

    /// Reads `ATOM` records up to the first `END` record.
    ///
    /// Lines are handled as raw bytes, so header records in other encodings (such
    /// as Latin-1 author names) never interrupt reading.
    fn read_from(
        reader: &mut impl BufRead,
        options: &Self::Options,
    ) -> Result<Vec<AtomRecord>, Self::Error> {
        let mut atoms = Vec::new();
        let mut buffer = Vec::new();
        let mut line_num = 0;

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            line_num += 1;

            let line = strip_line_ending(&buffer);
            let record = &line[..line.len().min(6)];
            if record == b"ATOM  " {
                if options.max_atoms.is_some_and(|max| atoms.len() >= max) {
                    warn!(
                        "Coordinate file has more atoms than the configured limit of {}; ignoring the remainder (from line {}).",
                        atoms.len(),
                        line_num
                    );
                    break;
                }
                atoms.push(parse_atom_line(line, line_num)?);
            } else if record.trim_ascii_end() == b"END" {
                debug!("END record on line {}; stopping.", line_num);
                break;
            }
        }

        if atoms.is_empty() {
            return Err(PdbError::MissingRecord("ATOM records".into()));
        }
        let without_serial = atoms.iter().filter(|a| a.serial.is_none()).count();
        if without_serial > 0 {
            warn!(
                "{} ATOM records carry serial numbers that are neither decimal nor hybrid-36; they were read without one.",
                without_serial
            );
        }
        debug!("Parsed {} ATOM records.", atoms.len());
        Ok(atoms)
    }

    fn write_to(atoms: &[AtomRecord], writer: &mut impl Write) -> Result<(), Self::Error> {
        for atom in atoms {
            writeln!(writer, "{}", format_atom_line(atom))?;
        }
        writeln!(writer, "END")?;
        Ok(())
    }
}
