//! # segalign
//!
//! Extracts root texts and their translations from a document store,
//! flattens their chapters into character-offset segmentations
//! and aligns each translation with its root text, segment by segment.
//!
//! ## Getting started
//!
//! ```sh
//! segalign 0.1.0
//! root text/translation segmentation and alignment tool.
//!
//! USAGE:
//!     segalign <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     extract    Extract aligned payloads of the selected titles
//!     help       Prints this message or the help of the given subcommand(s)
//!     schema     Print the JSON schema of extracted payloads
//!     titles     List the titles selected by the category filter
//! ```
//!
//! The store location is taken from `--store` or from the `SEGALIGN_STORE` environment variable.
use structopt::StructOpt;

use segalign::error::Error;
use segalign::filtering::CategoryFilter;
use segalign::io::{DocumentStore, JsonStore, PayloadWriter};
use segalign::lang::LanguageConfig;
use segalign::pipelines::extract::types::TitlePayload;
use segalign::pipelines::{extract::ExtractOptions, Extract, Pipeline};
use segalign::segment::Flattener;

#[macro_use]
extern crate log;

mod cli;

fn category_filter(store: &cli::Store) -> CategoryFilter {
    if store.categories.is_empty() {
        CategoryFilter::default()
    } else {
        CategoryFilter::new(store.categories.clone())
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Segalign::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Segalign::Extract(e) => {
            info!("segalign extract v{}", Extract::<JsonStore>::version());
            let options = ExtractOptions {
                flattener: Flattener::new(!e.raw),
                strict: e.strict,
                languages: LanguageConfig::new(&e.root_lang, e.lang_aliases)?,
                category_id: e.category_id,
                license: e.license,
                copyright: e.copyright,
            };
            let filter = category_filter(&e.store);
            let store = JsonStore::open(&e.store.location)?;
            let writer = PayloadWriter::new(&e.dst)?;

            let report = Extract::new(store, writer, filter, options).run()?;
            report.log_summary();
        }

        cli::Segalign::Titles(t) => {
            let filter = category_filter(&t.store);
            let store = JsonStore::open(&t.store.location)?;
            for title in store.titles(&filter)? {
                println!("{}", title);
            }
        }

        cli::Segalign::Schema => {
            println!("{}", TitlePayload::schema()?);
        }
    };
    Ok(())
}
