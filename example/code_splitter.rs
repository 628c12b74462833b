//! Example: Chunking source code with a language separator profile
//! Run with: cargo run --bin code_splitter -- python

use chunkwise::prelude::*;
use tracing_subscriber::EnvFilter;

const PYTHON: &str = r#"import os

class Loader:
    def __init__(self, root):
        self.root = root

    def files(self):
        return os.listdir(self.root)

def main():
    loader = Loader(".")
    for name in loader.files():
        print(name)
"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let language_id = std::env::args().nth(1).unwrap_or_else(|| "python".to_string());
    let (separators, is_regex) = match resolve_separators_for(&language_id) {
        Ok(separators) => (separators, true),
        Err(err) => {
            eprintln!("{}; falling back to plain-text separators", err);
            (SplitterConfig::default().separators, false)
        }
    };
    println!("{} separators for {:?}", separators.len(), language_id);

    let config = SplitterConfig::default()
        .with_separators(separators)
        .with_separator_regex(is_regex)
        .with_window_size(60)
        .with_step_size(40);
    let splitter = DynamicWindowSplitter::new(config)?.with_length_function(TokenLength);

    let documents = vec![Document::new(PYTHON).with_metadata_entry("source", "loader.py")];
    for doc in splitter.split_documents(documents)? {
        println!("--- {} ---\n{}", doc.metadata["start_index"], doc.page_content);
    }

    Ok(())
}
