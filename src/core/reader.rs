use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Terminator, Trim};
use log::debug;
use serde::de::DeserializeOwned;
use std::{cell::RefCell, fs::File, io::Read, marker::PhantomData, path::Path};

use crate::{
    core::record::{parse_match_date, MatchRecord},
    error::{Result, StatsError},
};

/// Strategy for turning one CSV row into a typed record.
///
/// The reader owns the file handling and row iteration; the mapper owns the
/// shape of a row. Supplying a different mapper reuses the same reading
/// machinery for a different schema.
///
/// `line` is the 1-based line number of the row in the source, so mappers can
/// report the offending line when a field does not parse.
pub trait RowMapper {
    type Record;

    fn map_row(&self, line: u64, fields: &StringRecord) -> Result<Self::Record>;
}

/// Maps the seven-column match results schema to [`MatchRecord`].
///
/// Expected columns: `date(dd/mm/yyyy), home team, away team, home goals,
/// away goals, result code, extra`. Any other arity or an unparseable
/// date/goal/result field is a [`StatsError::MalformedRow`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MatchRowMapper;

impl MatchRowMapper {
    const FIELD_COUNT: usize = 7;

    fn field<'a>(fields: &'a StringRecord, index: usize) -> &'a str {
        // Arity is checked before any field access.
        fields.get(index).unwrap_or_default()
    }
}

impl RowMapper for MatchRowMapper {
    type Record = MatchRecord;

    fn map_row(&self, line: u64, fields: &StringRecord) -> Result<MatchRecord> {
        let malformed = |reason: String| StatsError::MalformedRow { line, reason };

        if fields.len() != Self::FIELD_COUNT {
            return Err(malformed(format!(
                "expected {} fields, got {}",
                Self::FIELD_COUNT,
                fields.len()
            )));
        }

        let date = parse_match_date(Self::field(fields, 0))
            .map_err(|err| malformed(format!("invalid date: {err}")))?;

        let parse_goals = |index: usize| {
            Self::field(fields, index)
                .parse::<u32>()
                .map_err(|err| malformed(format!("invalid goal count: {err}")))
        };
        let home_goals = parse_goals(3)?;
        let away_goals = parse_goals(4)?;

        let result = Self::field(fields, 5)
            .parse()
            .map_err(|err| malformed(format!("invalid result: {err}")))?;

        Ok(MatchRecord {
            date,
            home_team: Self::field(fields, 1).to_string(),
            away_team: Self::field(fields, 2).to_string(),
            home_goals,
            away_goals,
            result,
            extra: Self::field(fields, 6).to_string(),
        })
    }
}

/// Maps rows positionally into any `DeserializeOwned` type via serde.
///
/// Useful for alternate schemas that do not need custom field handling.
#[derive(Debug)]
pub struct SerdeRowMapper<T> {
    record_type: PhantomData<T>,
}

impl<T> SerdeRowMapper<T> {
    pub fn new() -> Self {
        Self {
            record_type: PhantomData,
        }
    }
}

impl<T> Default for SerdeRowMapper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> RowMapper for SerdeRowMapper<T> {
    type Record = T;

    fn map_row(&self, line: u64, fields: &StringRecord) -> Result<T> {
        fields
            .deserialize(None)
            .map_err(|err| StatsError::MalformedRow {
                line,
                reason: err.to_string(),
            })
    }
}

/// A CSV record reader parameterized over its row-mapping strategy.
///
/// Reads rows from any `Read` source, skips rows whose fields are all empty
/// (the usual artifact of a trailing newline), and maps everything else
/// through the configured [`RowMapper`]. The first malformed row aborts the
/// load with the offending line number.
///
/// # Examples
///
/// ```
/// use matchstats::core::reader::{CsvRecordReaderBuilder, MatchRowMapper};
///
/// let data = "\
/// 10/08/2018,Man United,Leicester,2,1,H,A Marriner
/// 11/08/2018,Bournemouth,Cardiff,2,0,H,K Friend";
///
/// let reader = CsvRecordReaderBuilder::new()
///     .has_headers(false)
///     .from_reader(MatchRowMapper, data.as_bytes());
///
/// let records = reader.load().unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].home_team, "Man United");
/// ```
pub struct CsvRecordReader<R, M> {
    /// Iterator over the raw CSV rows.
    ///
    /// `RefCell` gives interior mutability so `read` can advance the iterator
    /// behind a shared reference, as batch readers conventionally do.
    rows: RefCell<StringRecordsIntoIter<R>>,
    mapper: M,
}

impl<R: Read, M: RowMapper> CsvRecordReader<R, M> {
    /// Reads and maps the next row.
    ///
    /// Returns `Ok(None)` once the source is exhausted. All-empty rows are
    /// skipped, never handed to the mapper.
    pub fn read(&self) -> Result<Option<M::Record>> {
        loop {
            let Some(row) = self.rows.borrow_mut().next() else {
                return Ok(None);
            };
            let row = row?;
            let line = row.position().map_or(0, |pos| pos.line());

            if row.iter().all(str::is_empty) {
                debug!("Skipping empty row at line {line}");
                continue;
            }

            return self.mapper.map_row(line, &row).map(Some);
        }
    }

    /// Reads the whole source into a collection of typed records.
    ///
    /// The returned collection is the read-only input of every analysis; it
    /// is never mutated afterwards.
    pub fn load(&self) -> Result<Vec<M::Record>> {
        debug!("Start loading records");

        let mut records = Vec::new();
        while let Some(record) = self.read()? {
            records.push(record);
        }

        debug!("End loading records: {} loaded", records.len());
        Ok(records)
    }
}

/// A builder for configuring CSV record reading.
///
/// Defaults: comma delimiter, no header row (match results files carry none),
/// all fields trimmed, strict parsing.
#[derive(Debug)]
pub struct CsvRecordReaderBuilder {
    delimiter: u8,
    terminator: Terminator,
    has_headers: bool,
}

impl Default for CsvRecordReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvRecordReaderBuilder {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            terminator: Terminator::CRLF,
            has_headers: false,
        }
    }

    /// Sets the field delimiter (default: comma).
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the line terminator (default: CRLF, which also accepts bare LF).
    pub fn terminator(mut self, terminator: Terminator) -> Self {
        self.terminator = terminator;
        self
    }

    /// Sets whether the first row is a header row and must be skipped.
    pub fn has_headers(mut self, yes: bool) -> Self {
        self.has_headers = yes;
        self
    }

    /// Creates a reader over any `Read` source.
    pub fn from_reader<R: Read, M: RowMapper>(self, mapper: M, rdr: R) -> CsvRecordReader<R, M> {
        let rdr = self.csv_reader_builder().from_reader(rdr);

        CsvRecordReader {
            rows: RefCell::new(rdr.into_records()),
            mapper,
        }
    }

    /// Creates a reader over a file.
    ///
    /// A missing or unreadable file is reported as [`StatsError::File`]
    /// instead of a panic, so a one-shot run can exit with a proper error.
    pub fn from_path<P: AsRef<Path>, M: RowMapper>(
        self,
        mapper: M,
        path: P,
    ) -> Result<CsvRecordReader<File, M>> {
        let file = File::open(path)?;
        Ok(self.from_reader(mapper, file))
    }

    fn csv_reader_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .trim(Trim::All)
            .delimiter(self.delimiter)
            .terminator(self.terminator)
            .has_headers(self.has_headers)
            .flexible(false);
        builder
    }
}
