use super::{Output, Writer};
use crate::error::Result;
use crate::streams::OutputStream;
use std::io::Write;

/// Pretty-printed JSON: an object for a single record, an array for a listing
pub struct JsonWriter {
    out: OutputStream,
}

impl JsonWriter {
    pub fn new(out: OutputStream) -> Self {
        Self { out }
    }
}

impl Writer for JsonWriter {
    fn write(&mut self, output: &Output) -> Result<()> {
        let json = match output {
            Output::Single(record) => serde_json::to_string_pretty(record)?,
            Output::List(records) => serde_json::to_string_pretty(records)?,
        };
        writeln!(self.out, "{}", json)?;
        Ok(())
    }
}
