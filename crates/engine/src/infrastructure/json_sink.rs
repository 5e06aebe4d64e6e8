//! Table commands written out as JSON.
//!
//! Each command is one pretty-printed document followed by a newline, so a
//! selector change after the first load appends a second document.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use ffrkdb_shared::TableCommand;

use crate::infrastructure::ports::{SinkError, TableSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for Output {
    fn from(path: Option<PathBuf>) -> Self {
        path.map(Self::File).unwrap_or(Self::Stdout)
    }
}

pub struct JsonTableSink {
    output: Output,
}

impl JsonTableSink {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

#[async_trait]
impl TableSink for JsonTableSink {
    async fn apply(&self, command: TableCommand) -> Result<(), SinkError> {
        let mut payload = serde_json::to_vec_pretty(&command)?;
        payload.push(b'\n');

        match &self.output {
            Output::Stdout => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(&payload).await?;
                stdout.flush().await?;
            }
            Output::File(path) => {
                let mut file = tokio::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .await?;
                file.write_all(&payload).await?;
                file.flush().await?;
            }
        }

        tracing::debug!(
            table_id = %command.table_id(),
            rows = command.rows().len(),
            "Wrote table command"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ffrkdb_shared::{RenderedRow, TableColumn};

    #[tokio::test]
    async fn appends_commands_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");
        let sink = JsonTableSink::new(Output::File(path.clone()));

        sink.apply(TableCommand::Rebuild {
            table_id: "table".to_string(),
            columns: vec![TableColumn::new("alt", "")],
            rows: vec![RenderedRow::default()],
        })
        .await
        .unwrap();
        sink.apply(TableCommand::Load {
            table_id: "table".to_string(),
            rows: Vec::new(),
        })
        .await
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let documents: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&written)
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0]["method"], "rebuild");
        assert_eq!(documents[0]["columns"][0]["field"], "alt");
        assert_eq!(documents[1]["method"], "load");
    }

    #[test]
    fn output_defaults_to_stdout() {
        assert_eq!(Output::from(None), Output::Stdout);
        assert_eq!(
            Output::from(Some(PathBuf::from("out.json"))),
            Output::File(PathBuf::from("out.json"))
        );
    }
}
