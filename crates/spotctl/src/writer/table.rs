use super::{Output, Writer};
use crate::error::Result;
use crate::streams::OutputStream;
use chrono::{DateTime, Utc};
use std::io::Write;

/// One row per record with the identity columns only
pub struct TableWriter {
    out: OutputStream,
}

impl TableWriter {
    pub fn new(out: OutputStream) -> Self {
        Self { out }
    }
}

fn timestamp(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

impl Writer for TableWriter {
    fn write(&mut self, output: &Output) -> Result<()> {
        let mut table = comfy_table::Table::new();
        table.load_preset(comfy_table::presets::NOTHING);
        table.set_header(vec!["ID", "NAME", "KIND", "CREATED", "UPDATED"]);

        for record in output.records() {
            table.add_row(vec![
                record.id.clone(),
                record.name.clone(),
                record.kind.clone(),
                timestamp(record.created_at),
                timestamp(record.updated_at),
            ]);
        }

        writeln!(self.out, "{}", table)?;
        Ok(())
    }
}
