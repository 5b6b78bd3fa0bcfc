//! `rollcall normalize`: show what the matcher will see.

use std::path::PathBuf;

use serde::Serialize;

use rollcall_io::load_document;
use rollcall_recon::{Cleaner, Token};

use crate::config::load_config;
use crate::{print_json, CliError, RunMeta};

#[derive(Serialize)]
struct NormalizeOutput<'a> {
    meta: RunMeta,
    document: String,
    cleaned: &'a str,
    tokens: &'a [Token],
}

pub fn cmd_normalize(
    document_path: PathBuf,
    config_path: Option<PathBuf>,
    json: bool,
) -> Result<(), CliError> {
    let config = load_config(config_path.as_deref())?;
    let cleaner = Cleaner::new(&config.rules)?;
    let doc = load_document(&document_path, &cleaner)?;

    if json {
        print_json(&NormalizeOutput {
            meta: RunMeta::new("normalize"),
            document: document_path.display().to_string(),
            cleaned: doc.cleaned(),
            tokens: doc.tokens(),
        })?;
    } else {
        println!("{}", doc.normalized());
    }
    eprintln!("{} tokens", doc.len());
    Ok(())
}
