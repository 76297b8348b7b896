//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use segalign::lang::LangAlias;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "segalign",
    about = "root text/translation segmentation and alignment tool."
)]
/// Holds every command that is callable by the `segalign` command.
pub enum Segalign {
    #[structopt(about = "Extract aligned payloads of the selected titles")]
    Extract(Extract),
    #[structopt(about = "List the titles selected by the category filter")]
    Titles(Titles),
    #[structopt(about = "Print the JSON schema of extracted payloads")]
    Schema,
}

#[derive(Debug, StructOpt)]
pub struct Store {
    #[structopt(
        parse(from_os_str),
        long = "store",
        env = "SEGALIGN_STORE",
        help = "document store location"
    )]
    pub location: PathBuf,
    #[structopt(
        long = "category",
        short = "c",
        number_of_values = 1,
        help = "required category (repeatable). Defaults to the Bodhicaryavatara root texts."
    )]
    pub categories: Vec<String>,
}

#[derive(Debug, StructOpt)]
/// Titles command and parameters.
pub struct Titles {
    #[structopt(flatten)]
    pub store: Store,
}

#[derive(Debug, StructOpt)]
/// Extract command and parameters.
///
/// ```sh
/// segalign-extract 0.1.0
/// Extract aligned payloads of the selected titles
///
/// USAGE:
///     segalign extract [FLAGS] [OPTIONS] <dst> --store <location>
///
/// FLAGS:
///         --raw       keep inline line breaks and surrounding whitespace in fragments
///         --strict       fail titles whose translations do not have as many segments as their root text
///
/// ARGS:
///     <dst>    destination of the JSON payloads
/// ```
pub struct Extract {
    #[structopt(flatten)]
    pub store: Store,
    #[structopt(parse(from_os_str), help = "destination of the JSON payloads")]
    pub dst: PathBuf,
    #[structopt(
        long = "raw",
        help = "keep inline line breaks and surrounding whitespace in fragments"
    )]
    pub raw: bool,
    #[structopt(
        long = "strict",
        help = "fail titles whose translations do not have as many segments as their root text"
    )]
    pub strict: bool,
    #[structopt(long = "root-lang", default_value = "bo", help = "language of root texts")]
    pub root_lang: String,
    #[structopt(
        long = "lang-alias",
        default_value = "he=zh",
        number_of_values = 1,
        help = "store language code replacement, as <from>=<to> (repeatable)"
    )]
    pub lang_aliases: Vec<LangAlias>,
    #[structopt(long = "category-id", default_value = "rw8oWUd1WtwqeD2x0ZMSm")]
    pub category_id: String,
    #[structopt(long = "license", default_value = "CC0")]
    pub license: String,
    #[structopt(long = "copyright", default_value = "Public Domain")]
    pub copyright: String,
}
