//! # neutrality-corpus
//!
//! Builds a corpus of biased/neutral sentence pairs from Wikipedia revision diffs.
//!
//! ## Getting started
//!
//! ```sh
//! neutrality-corpus 0.1.0
//! biased edit corpus generation from Wikipedia revisions.
//!
//! USAGE:
//!     neutrality-corpus <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     annotate    Annotate changed spans of revision sentences
//!     diff        Extract the changed text of each revision
//!     help        Prints this message or the help of the given subcommand(s)
//!     prepare     Build the filtered corpus of aligned sentence edits
//! ```
//!
//! Logging is configured through `RUST_LOG` (e.g. `RUST_LOG=neutrality_corpus=info`).
use std::path::Path;

use structopt::StructOpt;

use neutrality_corpus::config::Config;
use neutrality_corpus::error::Error;
use neutrality_corpus::extraction::SpanExtractor;
use neutrality_corpus::pipelines::{AnnotatePipeline, DiffPipeline, Pipeline, PreparePipeline};
use neutrality_corpus::text::TextTools;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::NeutralityCorpus::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::NeutralityCorpus::Diff(d) => {
            set_workers(d.workers)?;
            let p = DiffPipeline::new(d.src, d.dst, SpanExtractor::new()?);
            let nb = p.run()?;
            info!("{} revision diffs written", nb);
        }

        cli::NeutralityCorpus::Prepare(p) => {
            set_workers(p.workers)?;
            let config = load_config(p.config.as_deref())?;
            let tools = text_tools(p.tokenizer.as_deref())?;
            let pipeline = PreparePipeline::new(p.src, p.dst, config, SpanExtractor::new()?, tools);
            let nb = pipeline.run()?;
            info!("{} examples written", nb);
        }

        cli::NeutralityCorpus::Annotate(a) => {
            set_workers(a.workers)?;
            let config = load_config(a.config.as_deref())?;
            let p = AnnotatePipeline::new(
                a.src,
                a.dst,
                config,
                SpanExtractor::new()?,
                TextTools::default(),
            );
            let nb = p.run()?;
            info!("{} annotated sentences written", nb);
        }
    };
    Ok(())
}

fn set_workers(workers: Option<usize>) -> Result<(), Error> {
    if let Some(n) = workers {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| Error::Custom(format!("could not build thread pool: {}", e)))?;
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    match path {
        Some(path) => {
            info!("loading configuration from {:?}", path);
            Config::from_path(path)
        }
        None => Ok(Config::default()),
    }
}

#[cfg(feature = "hf-tokenizer")]
fn text_tools(tokenizer: Option<&Path>) -> Result<TextTools, Error> {
    use neutrality_corpus::text::HfTokenizer;

    let tools = TextTools::default();
    match tokenizer {
        Some(path) => Ok(tools.with_subword(Box::new(HfTokenizer::from_file(path)?))),
        None => Ok(tools),
    }
}

#[cfg(not(feature = "hf-tokenizer"))]
fn text_tools(tokenizer: Option<&Path>) -> Result<TextTools, Error> {
    match tokenizer {
        Some(path) => Err(Error::Custom(format!(
            "cannot load {:?}: built without the hf-tokenizer feature",
            path
        ))),
        None => Ok(TextTools::default()),
    }
}
