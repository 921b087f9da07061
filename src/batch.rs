use crate::client::Directory;
use crate::entry::NamePair;
use crate::error::SleuthError;
use crate::present::Presenter;
use std::io::Write;
use tracing::{info, trace};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub searched: usize,
    pub matched: usize,
    pub not_found: usize,
}

/// Look up each pair in order and present what was found. The first failed
/// search stops the batch.
pub async fn run_batch<D, W, I>(
    directory: &mut D,
    pairs: I,
    presenter: &mut Presenter<W>,
) -> Result<BatchSummary, SleuthError>
where
    D: Directory,
    W: Write,
    I: IntoIterator<Item = NamePair>,
{
    let mut summary = BatchSummary::default();

    for pair in pairs {
        trace!(first = %pair.first_name, last = %pair.last_name, "lookup");
        let entries = directory.search(&pair).await?;
        summary.searched += 1;
        if entries.is_empty() {
            summary.not_found += 1;
        } else {
            summary.matched += entries.len();
        }
        presenter.result(&pair, &entries)?;
    }

    info!(
        searched = summary.searched,
        matched = summary.matched,
        not_found = summary.not_found,
        "Batch complete"
    );
    Ok(summary)
}
