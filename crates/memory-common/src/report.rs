//! Failure reporting for the command binaries.

use crate::output::{ErrorResponse, emit};
use memory_store::{Category, StoreError};
use std::process;

/// Report a store failure and exit non-zero.
///
/// Not-found is a structured JSON outcome on stdout so callers can
/// treat it as a normal result; everything else is a stderr
/// diagnostic with nothing on stdout.
pub fn fail(err: StoreError) -> ! {
    match &err {
        StoreError::NotFound(_) => {
            let _ = emit(&ErrorResponse::new(err.to_string()));
        }
        StoreError::InvalidCategory(_) => {
            eprintln!("{err}");
            eprintln!("Valid categories: {}", valid_categories());
        }
        StoreError::AlreadyExists(_) => {
            eprintln!("{err}");
            eprintln!("Use memory-update to modify an existing memory.");
        }
        _ => eprintln!("{err}"),
    }
    process::exit(1);
}

/// Comma-joined category names for usage messages.
pub fn valid_categories() -> String {
    Category::ALL
        .iter()
        .map(|category| category.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
