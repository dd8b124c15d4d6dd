//! Parallel parsing of independent documents.

use rayon::prelude::*;
use tokio_util::sync::CancellationToken;

use super::options::ParserOptions;
use super::parse::{Parse, ParseFailure, run};
use crate::grammar::GrammarBundle;
use crate::token::Token;

/// Parse every document on the rayon pool.
///
/// Each document gets its own context and cursor; only the bundle (and its
/// lazily built caches) is shared. Results are in input order.
pub fn parse_batch<'t, D>(
    bundle: &GrammarBundle,
    documents: &[D],
    root: Option<&str>,
    options: &ParserOptions,
) -> Vec<Result<Parse, ParseFailure>>
where
    D: AsRef<[Token<'t>]> + Sync,
{
    batch(bundle, documents, root, options, None)
}

/// Like [`parse_batch`]; one token cancels every parse still running
pub fn parse_batch_with_cancel<'t, D>(
    bundle: &GrammarBundle,
    documents: &[D],
    root: Option<&str>,
    options: &ParserOptions,
    cancel: &CancellationToken,
) -> Vec<Result<Parse, ParseFailure>>
where
    D: AsRef<[Token<'t>]> + Sync,
{
    batch(bundle, documents, root, options, Some(cancel))
}

fn batch<'t, D>(
    bundle: &GrammarBundle,
    documents: &[D],
    root: Option<&str>,
    options: &ParserOptions,
    cancel: Option<&CancellationToken>,
) -> Vec<Result<Parse, ParseFailure>>
where
    D: AsRef<[Token<'t>]> + Sync,
{
    tracing::debug!(dialect = %bundle.dialect(), documents = documents.len(), "parsing batch");
    documents
        .par_iter()
        .map(|document| run(bundle, document.as_ref(), root, options, cancel))
        .collect()
}
