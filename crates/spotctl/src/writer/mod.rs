//! Output writers
//!
//! - `table` aims at people reading results in a terminal.
//! - `json` and `yaml` emit the full resource for scripts.

mod json;
mod table;
mod yaml;

pub use json::JsonWriter;
pub use table::TableWriter;
pub use yaml::YamlWriter;

use crate::error::{CliError, Result};
use crate::streams::OutputStream;
use chrono::{DateTime, Utc};
use serde::Serialize;
use spotctl_cloud::{Envelope, Resource};
use std::str::FromStr;

/// Emit command results in one format
pub trait Writer: Send {
    fn write(&mut self, output: &Output) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Table,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Json, Format::Yaml, Format::Table];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Table => "table",
        }
    }
}

impl FromStr for Format {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| CliError::UnknownFormat(s.to_string()))
    }
}

/// Flattened view of one envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub kind: String,
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub spec: serde_json::Value,
}

impl Record {
    pub fn from_envelope<P>(envelope: &Envelope<P>) -> Result<Self>
    where
        P: Resource + Serialize,
    {
        Ok(Self {
            kind: envelope.kind().to_string(),
            id: envelope.id().to_string(),
            name: envelope.name().to_string(),
            created_at: envelope.created_at(),
            updated_at: envelope.updated_at(),
            spec: serde_json::to_value(envelope.payload())?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Single(Record),
    List(Vec<Record>),
}

impl Output {
    pub fn records(&self) -> &[Record] {
        match self {
            Output::Single(record) => std::slice::from_ref(record),
            Output::List(records) => records,
        }
    }
}

/// Look up a writer by format name
pub fn get_instance(format: &str, out: OutputStream) -> Result<Box<dyn Writer>> {
    let writer: Box<dyn Writer> = match Format::from_str(format)? {
        Format::Json => Box::new(JsonWriter::new(out)),
        Format::Yaml => Box::new(YamlWriter::new(out)),
        Format::Table => Box::new(TableWriter::new(out)),
    };
    Ok(writer)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;
    use spotctl_cloud::payload::aws;
    use spotctl_cloud::{ClusterPayload, ObjectMeta, OceanCluster};

    pub(crate) fn sample_records() -> Vec<Record> {
        let clusters = [("o-1", "prod"), ("o-2", "staging")].map(|(id, name)| {
            OceanCluster::from_remote(
                ObjectMeta {
                    id: id.to_string(),
                    name: name.to_string(),
                    created_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
                    updated_at: None,
                },
                ClusterPayload::Aws(aws::Cluster {
                    id: Some(id.to_string()),
                    name: Some(name.to_string()),
                    ..Default::default()
                }),
            )
        });

        clusters
            .iter()
            .map(|c| Record::from_envelope(c).unwrap())
            .collect()
    }

    #[test]
    fn test_format_lookup() {
        assert_eq!(Format::from_str("JSON").unwrap(), Format::Json);
        assert_eq!(Format::from_str("table").unwrap(), Format::Table);
        assert!(matches!(
            Format::from_str("xml"),
            Err(CliError::UnknownFormat(f)) if f == "xml"
        ));
    }

    #[test]
    fn test_unknown_writer() {
        let out = OutputStream::new(std::io::sink());
        assert!(get_instance("csv", out.clone()).is_err());
        assert!(get_instance("yaml", out).is_ok());
    }

    #[test]
    fn test_record_from_envelope() {
        let records = sample_records();
        assert_eq!(records[0].kind, "Cluster");
        assert_eq!(records[0].id, "o-1");
        assert_eq!(records[1].spec["name"], "staging");
    }

    #[test]
    fn test_output_records() {
        let records = sample_records();
        assert_eq!(Output::Single(records[0].clone()).records().len(), 1);
        assert_eq!(Output::List(records).records().len(), 2);
    }
}
