//! Append and resolve commands

use crate::Cli;
use statelog_core::{ExError, ExErrorKind, SystemClock};
use statelog_engine::{
    apply_journal_command, render_confirmation, JournalCommand, NoMatchPolicy, Route,
};
use statelog_store::fs::serialize_document;
use statelog_store::DocumentStore;

pub fn execute(
    route: Route,
    cli: &Cli,
    policy: NoMatchPolicy,
) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = JournalCommand::from_route(route, &cli.texts, policy).map_err(ExError::from)?;
    let store = DocumentStore::new(cli.dir.clone());

    let outcome = match apply_journal_command(cmd, &store, &SystemClock) {
        Ok(outcome) => outcome,
        Err(e) => {
            if e.kind() == ExErrorKind::NoMatchFound {
                if let Some(open) = e.candidates().filter(|c| !c.is_empty()) {
                    eprintln!("Open questions:");
                    for q in open {
                        eprintln!("  • {}", q);
                    }
                }
            }
            return Err(e.into());
        }
    };

    println!("{}", render_confirmation(&outcome));

    if cli.json {
        let bytes = serialize_document(&outcome.document_name, &outcome.document)?;
        print!("{}", String::from_utf8_lossy(&bytes));
    }

    Ok(())
}
