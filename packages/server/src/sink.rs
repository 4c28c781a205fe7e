//! Record sink: where workflow-ready records go after normalization.
//!
//! Records are pushed into a bounded channel; a single writer task drains it
//! as newline-delimited JSON.

use serde_json::Value;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const SINK_CAPACITY: usize = 1024;

pub type RecordSender = mpsc::Sender<Value>;

pub fn channel() -> (RecordSender, mpsc::Receiver<Value>) {
    mpsc::channel(SINK_CAPACITY)
}

/// Drain records into `writer`, one JSON document per line.
///
/// Ends when every sender is dropped.
pub fn spawn_writer<W>(mut records: mpsc::Receiver<Value>, mut writer: W) -> JoinHandle<()>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        while let Some(record) = records.recv().await {
            let mut line = record.to_string();
            line.push('\n');
            if let Err(e) = writer.write_all(line.as_bytes()).await {
                tracing::error!(error = %e, "Failed to write record");
                continue;
            }
            if let Err(e) = writer.flush().await {
                tracing::error!(error = %e, "Failed to flush records");
            }
        }
        tracing::debug!("Record sink closed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_writes_ndjson() {
        let (tx, rx) = channel();
        let (writer, mut reader) = tokio::io::duplex(4096);
        let handle = spawn_writer(rx, writer);

        tx.send(json!({"id": "1"})).await.unwrap();
        tx.send(json!({"id": "2"})).await.unwrap();
        drop(tx);
        handle.await.unwrap();

        let mut out = String::new();
        tokio::io::AsyncReadExt::read_to_string(&mut reader, &mut out)
            .await
            .unwrap();
        assert_eq!(out, "{\"id\":\"1\"}\n{\"id\":\"2\"}\n");
    }
}
