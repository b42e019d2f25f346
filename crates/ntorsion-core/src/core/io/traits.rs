use crate::core::models::atom::AtomRecord;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing atom records in a coordinate
/// file format.
pub trait StructureFile {
    /// Format-specific reading options.
    type Options: Default;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads atom records, in file order, from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    /// * `options` - Format-specific reading options.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(
        reader: &mut impl BufRead,
        options: &Self::Options,
    ) -> Result<Vec<AtomRecord>, Self::Error>;

    /// Writes atom records to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(atoms: &[AtomRecord], writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads atom records from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
        options: &Self::Options,
    ) -> Result<Vec<AtomRecord>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, options)
    }

    /// Writes atom records to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(atoms: &[AtomRecord], path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(atoms, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
