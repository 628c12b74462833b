//! Example: Sliding-window chunking of prose
//! Run with: RUST_LOG=chunkwise=debug cargo run --bin window_splitter

use chunkwise::prelude::*;
use tracing_subscriber::EnvFilter;

const TEXT: &str = "Rust is a systems programming language. It runs fast and prevents segfaults.\n\n\
Ownership rules are checked at compile time! Nothing is garbage collected. \
Does that make it hard to learn? Sometimes.\n\n\
Chunks overlap when the step is smaller than a window.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Windows of ~80 characters, advancing one sentence at a time
    let config = SplitterConfig::default()
        .with_window_size(80)
        .with_step_size(1)
        .with_min_chunk_length(11);
    let splitter = DynamicWindowSplitter::new(config)?;

    for chunk in splitter.split(TEXT) {
        println!(
            "[{:>3}..{:>3}] segments {:?}: {:?}",
            chunk.start, chunk.end, chunk.segments, chunk.text
        );
    }

    // The same splitter as a pipeline component
    let texts = splitter.invoke(TEXT.to_string()).await?;
    println!("\n{} chunks via invoke", texts.len());

    // Largest chunks first
    let config = SplitterConfig::default()
        .with_window_size(80)
        .with_step_size(2)
        .with_output_order(OutputOrder::SizeDescending);
    for text in split(TEXT, &config)?.into_iter().map(|c| c.text).take(3) {
        println!("{} chars: {:?}", text.chars().count(), text);
    }

    Ok(())
}
