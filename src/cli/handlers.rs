//! Command handlers.
//!
//! Each handler makes one repository call and hands the result to the
//! output formatter. Errors are returned to the caller, which reports them
//! and exits non-zero.

use std::io::Write;

use crate::cli::{BeersArgs, Command, SearchArgs};
use crate::error::Result;
use crate::models::SearchTerms;
use crate::output;
use crate::repository::BeerRepository;

/// Run a parsed command against `repo`, printing to `out`.
pub async fn execute<R, W>(repo: &R, command: &Command, out: &mut W, colored: bool) -> Result<()>
where
    R: BeerRepository + ?Sized,
    W: Write,
{
    match command {
        Command::Beers(args) => handle_beers(repo, args, out, colored).await,
        Command::Search(args) => handle_search(repo, args, out, colored).await,
    }
}

async fn handle_beers<R, W>(repo: &R, args: &BeersArgs, out: &mut W, colored: bool) -> Result<()>
where
    R: BeerRepository + ?Sized,
    W: Write,
{
    let beers = match args.id {
        Some(id) => repo.get_by_id(id).await?,
        None => repo.list_all().await?,
    };

    output::emit(out, &beers, args.output.format(), &args.output.sink(), colored)
}

async fn handle_search<R, W>(
    repo: &R,
    args: &SearchArgs,
    out: &mut W,
    colored: bool,
) -> Result<()>
where
    R: BeerRepository + ?Sized,
    W: Write,
{
    let terms = SearchTerms::from(args.filters());
    tracing::debug!(filters = terms.len(), "searching");

    let beers = repo.search(&terms).await?;

    output::emit(out, &beers, args.output.format(), &args.output.sink(), colored)
}
