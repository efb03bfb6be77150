//! Whole-document read

use crate::Cli;
use statelog_core::{ExError, JournalError};
use statelog_engine::{read_document, Route};
use statelog_store::fs::serialize_document;
use statelog_store::DocumentStore;

pub fn execute(route: Route, cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.texts.is_empty() {
        let err = JournalError::InvalidInput {
            reason: format!("show takes no text arguments, got {}", cli.texts.len()),
        };
        return Err(ExError::from(err).with_op("show").into());
    }

    let store = DocumentStore::new(cli.dir.clone());
    let (name, document) = read_document(&route.scope, &store)?;
    let bytes = serialize_document(&name, &document)?;
    print!("{}", String::from_utf8_lossy(&bytes));

    Ok(())
}
