use clap::Parser;
use docsearch::cli::{Cli, Commands};
use docsearch::search::{build_index, JiebaTokenizer, SearchIndex};
use docsearch::{extract, raw, tracing as tracing_init};

fn main() {
    tracing_init::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: &Commands) -> docsearch::error::Result<()> {
    let config = command.to_config();

    match command {
        Commands::Extract { .. } => {
            let docs = extract::extract_all(&config.source_root_path, &config.url_prefix);
            tracing::info!(count = docs.len(), "extracted documents");
            raw::write(&config.raw_file_path, &docs)?;
            println!("wrote {} documents to {}", docs.len(), config.raw_file_path.display());
        }
        Commands::Build { .. } => {
            let docs = raw::read(&config.raw_file_path);
            let tokenizer = JiebaTokenizer::new();
            let built = build_index(docs, &tokenizer, &config);
            println!(
                "built index: {} documents, {} terms",
                built.forward.len(),
                built.inverted.term_count()
            );
        }
        Commands::Search { query, .. } => {
            let docs = raw::read(&config.raw_file_path);
            let tokenizer = JiebaTokenizer::new();
            let built = build_index(docs, &tokenizer, &config);
            let index = SearchIndex::new(built, Box::new(tokenizer), config);
            println!("{}", index.search(query));
        }
    }

    Ok(())
}
