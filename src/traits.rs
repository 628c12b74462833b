use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt};

use crate::schema::Document;
use crate::text_splitters::Chunk;
use crate::Result;

/// Trait for any component that can be invoked with an input and produces an output asynchronously.
///
/// Splitters implement this so they slot into the same `invoke` / `batch` / `stream`
/// vocabulary as the rest of a retrieval pipeline.
#[async_trait]
pub trait Runnable<Input: Send + 'static, Output: 'static> {
    /// Run the component on the given input and return the output.
    async fn invoke(&self, input: Input) -> Result<Output>;

    /// Stream the output of the component (default: wraps invoke in a stream).
    async fn stream(&self, input: Input) -> Result<BoxStream<'static, Result<Output>>>
    where
        Self: Sized,
        Output: Send,
    {
        let output = self.invoke(input).await?;
        Ok(futures::stream::once(async move { Ok(output) }).boxed())
    }

    /// Run the component on a batch of inputs.
    async fn batch(&self, inputs: Vec<Input>) -> Result<Vec<Result<Output>>>
    where
        Self: Sized,
        Input: Sync,
        Output: Send,
    {
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            results.push(self.invoke(input).await);
        }
        Ok(results)
    }
}

/// Trait for text splitters (chunking documents/text).
pub trait TextSplitter {
    /// Split text into chunks that remember where they came from.
    fn split_chunks(&self, text: &str) -> Result<Vec<Chunk>>;

    /// Split text into chunk strings.
    fn split_text(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .split_chunks(text)?
            .into_iter()
            .map(|chunk| chunk.text)
            .collect())
    }

    /// Split documents into chunk documents.
    ///
    /// Every chunk inherits its parent's metadata plus `start_index`, `end_index`
    /// (byte offsets into the parent) and `chunk_index`.
    fn split_documents(&self, documents: Vec<Document>) -> Result<Vec<Document>> {
        let mut result = Vec::new();

        for doc in documents {
            let chunks = self.split_chunks(&doc.page_content)?;

            for (index, chunk) in chunks.into_iter().enumerate() {
                let new_doc = Document::with_metadata(chunk.text, doc.metadata.clone())
                    .with_metadata_entry("start_index", chunk.start)
                    .with_metadata_entry("end_index", chunk.end)
                    .with_metadata_entry("chunk_index", index);
                result.push(new_doc);
            }
        }

        Ok(result)
    }
}
