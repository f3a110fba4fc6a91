use crate::label::RelevanceLabel;
use anyhow::Context;
use csv::StringRecord;
use std::path::Path;

/// One input row. The fields are immutable once read; the designated text
/// column is resolved against the header at load time.
#[derive(Debug, Clone)]
pub struct ArticleRecord {
    fields: StringRecord,
    text_index: usize,
}

impl ArticleRecord {
    /// The text used to build this row's prompt. An absent or empty field
    /// yields an empty string; the row is still classified, never dropped.
    pub fn text(&self) -> &str {
        self.fields.get(self.text_index).unwrap_or("")
    }

    pub fn fields(&self) -> &StringRecord {
        &self.fields
    }
}

/// The full input table: header plus every row, in file order.
#[derive(Debug, Clone)]
pub struct ArticleTable {
    headers: StringRecord,
    records: Vec<ArticleRecord>,
}

impl ArticleTable {
    /// Reads a delimited file with a header row. Fails if the file cannot be
    /// opened or the designated text column is not present in the header.
    pub fn read_from_path<P: AsRef<Path>>(path: P, text_column: &str) -> crate::Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to open input file {}", path.display()))?;
        let headers = reader
            .headers()
            .with_context(|| format!("failed to read header row of {}", path.display()))?
            .clone();
        let text_index = headers
            .iter()
            .position(|column| column == text_column)
            .ok_or_else(|| {
                crate::anyhow!(
                    "input file {} has no '{}' column",
                    path.display(),
                    text_column
                )
            })?;

        let mut records = Vec::new();
        for record in reader.records() {
            let fields =
                record.with_context(|| format!("failed to read row of {}", path.display()))?;
            records.push(ArticleRecord { fields, text_index });
        }
        Ok(Self { headers, records })
    }

    pub fn records(&self) -> &[ArticleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes every row, in input order, with one appended label column.
    /// `labels` must hold exactly one label per record.
    pub fn write_labeled<P: AsRef<Path>>(
        &self,
        path: P,
        output_column: &str,
        labels: &[RelevanceLabel],
    ) -> crate::Result<()> {
        if labels.len() != self.records.len() {
            crate::bail!(
                "label count {} does not match row count {}",
                labels.len(),
                self.records.len()
            );
        }
        let path = path.as_ref();
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("failed to create output file {}", path.display()))?;

        let mut header = self.headers.clone();
        header.push_field(output_column);
        writer.write_record(&header)?;

        for (record, label) in self.records.iter().zip(labels) {
            let mut row = record.fields.clone();
            row.push_field(label.as_str());
            writer.write_record(&row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
