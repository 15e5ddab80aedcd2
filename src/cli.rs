//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "neutrality-corpus",
    about = "biased edit corpus generation from Wikipedia revisions."
)]
/// Holds every command that is callable by the `neutrality-corpus` command.
pub enum NeutralityCorpus {
    #[structopt(about = "Extract the changed text of each revision")]
    Diff(Diff),
    #[structopt(about = "Build the filtered corpus of aligned sentence edits")]
    Prepare(Prepare),
    #[structopt(about = "Annotate changed spans of revision sentences")]
    Annotate(Annotate),
}

#[derive(Debug, StructOpt)]
/// Diff command and parameters.
///
/// ```sh
/// neutrality-corpus-diff 0.1.0
/// Extract the changed text of each revision
///
/// USAGE:
///     neutrality-corpus diff [OPTIONS] <src> <dst>
///
/// OPTIONS:
///     -w, --workers <workers>    number of worker threads. Defaults to the number of cores.
///
/// ARGS:
///     <src>    revisions location (file, folder or glob)
///     <dst>    destination file
/// ```
pub struct Diff {
    #[structopt(parse(from_os_str), help = "revisions location (file, folder or glob)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination file")]
    pub dst: PathBuf,
    #[structopt(
        short = "w",
        long = "workers",
        help = "number of worker threads. Defaults to the number of cores."
    )]
    pub workers: Option<usize>,
}

#[derive(Debug, StructOpt)]
/// Prepare command and parameters.
pub struct Prepare {
    #[structopt(parse(from_os_str), help = "revisions location (file, folder or glob)")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "destination file. Use a .gz extension for compressed output."
    )]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "c",
        long = "config",
        help = "path to a JSON configuration file"
    )]
    pub config: Option<PathBuf>,
    #[structopt(
        short = "w",
        long = "workers",
        help = "number of worker threads. Defaults to the number of cores."
    )]
    pub workers: Option<usize>,
    #[structopt(
        parse(from_os_str),
        short = "t",
        long = "tokenizer",
        help = "path to a tokenizer.json file (needs the hf-tokenizer feature)"
    )]
    pub tokenizer: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Annotate command and parameters.
pub struct Annotate {
    #[structopt(parse(from_os_str), help = "revisions location (file, folder or glob)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination file")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "c",
        long = "config",
        help = "path to a JSON configuration file"
    )]
    pub config: Option<PathBuf>,
    #[structopt(
        short = "w",
        long = "workers",
        help = "number of worker threads. Defaults to the number of cores."
    )]
    pub workers: Option<usize>,
}
