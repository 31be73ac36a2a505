//! # Persistence
//!
//! The engine hands one record per committed generation to a
//! `PersistenceSink`: the generation number, the best fitness and the display
//! form of the best chromosome. Records are only produced after a generation
//! has been committed, so a sink never sees a partial generation.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::error::{GeneticError, Result, ResultExt};

pub trait PersistenceSink: Send {
    fn record(&mut self, generation: usize, fitness: f64, chromosome: &str) -> Result<()>;
}

/// One committed generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRecord {
    pub generation: usize,
    pub fitness: f64,
    pub chromosome: String,
}

/// Keeps records in memory. Clones share the same storage, so a handle kept by
/// the caller sees what the engine recorded.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<GenerationRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the records.
    pub fn records(&self) -> Vec<GenerationRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PersistenceSink for MemorySink {
    fn record(&mut self, generation: usize, fitness: f64, chromosome: &str) -> Result<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| GeneticError::Persistence("Record store lock poisoned".to_string()))?;
        records.push(GenerationRecord {
            generation,
            fitness,
            chromosome: chromosome.to_string(),
        });
        Ok(())
    }
}

/// Writes one CSV row per generation after a `generation,fitness,chromosome`
/// header. Fields are quoted only when they need it.
#[derive(Debug)]
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

fn csv_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder.terminator(csv::Terminator::Any(b'\n'));
    builder
}

impl<W: Write + Send> CsvSink<W> {
    pub fn new(writer: W) -> Result<Self> {
        Self::with_header(csv_builder().from_writer(writer))
    }

    fn with_header(mut writer: csv::Writer<W>) -> Result<Self> {
        writer
            .write_record(["generation", "fitness", "chromosome"])
            .context("Failed to write CSV header")?;
        Ok(Self { writer })
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| GeneticError::Persistence(e.to_string()))
    }
}

impl CsvSink<File> {
    /// Creates (or truncates) the file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let writer = csv_builder()
            .from_path(path)
            .context(format!("Failed to create {}", path.display()))?;
        Self::with_header(writer)
    }
}

impl<W: Write + Send> PersistenceSink for CsvSink<W> {
    fn record(&mut self, generation: usize, fitness: f64, chromosome: &str) -> Result<()> {
        self.writer
            .write_record([generation.to_string(), fitness.to_string(), chromosome.to_string()])
            .map_err(|e| GeneticError::Persistence(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_shares_storage() {
        let handle = MemorySink::new();
        let mut sink = handle.clone();
        sink.record(1, 4.0, "[1][3]").unwrap();
        sink.record(2, 5.0, "[2][3]").unwrap();

        assert_eq!(handle.len(), 2);
        assert_eq!(
            handle.records()[1],
            GenerationRecord {
                generation: 2,
                fitness: 5.0,
                chromosome: "[2][3]".to_string()
            }
        );
    }

    #[test]
    fn test_csv_sink_format() {
        let mut sink = CsvSink::new(Vec::new()).unwrap();
        sink.record(0, 1.5, "[a][\"b\"]").unwrap();
        sink.record(1, 3.0, "[1][2]").unwrap();
        sink.record(2, 4.0, "[x,y]").unwrap();
        let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(
            text,
            "generation,fitness,chromosome\n0,1.5,\"[a][\"\"b\"\"]\"\n1,3,[1][2]\n2,4,\"[x,y]\"\n"
        );
    }

    #[test]
    fn test_csv_sink_rows_read_back() {
        let mut sink = CsvSink::new(Vec::new()).unwrap();
        sink.record(7, 12.5, "[\"q\"][,]").unwrap();
        let bytes = sink.into_inner().unwrap();

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers, vec!["generation", "fitness", "chromosome"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["7", "12.5", "[\"q\"][,]"]);
    }

    #[test]
    fn test_csv_sink_bad_path() {
        let result = CsvSink::create("/nonexistent-dir/for/sure/log.csv");
        match result {
            Err(GeneticError::Other(msg)) => assert!(msg.starts_with("Failed to create")),
            _ => panic!("Expected contextual error"),
        }
    }
}
