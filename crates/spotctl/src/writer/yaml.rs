use super::{Output, Writer};
use crate::error::Result;
use crate::streams::OutputStream;
use std::io::Write;

pub struct YamlWriter {
    out: OutputStream,
}

impl YamlWriter {
    pub fn new(out: OutputStream) -> Self {
        Self { out }
    }
}

impl Writer for YamlWriter {
    fn write(&mut self, output: &Output) -> Result<()> {
        let yaml = match output {
            Output::Single(record) => serde_yaml::to_string(record)?,
            Output::List(records) => serde_yaml::to_string(records)?,
        };
        write!(self.out, "{}", yaml)?;
        Ok(())
    }
}
