use crate::batch::run_batch;
use crate::client::Connector;
use crate::error::SleuthError;
use crate::present::Presenter;
use crate::source::InputSource;
use std::io::Write;
use tracing::{debug, error};

fn report<W: Write>(presenter: &mut Presenter<W>, e: &SleuthError) -> i32 {
    if presenter.failure(e).is_err() {
        error!("{}", e);
    }
    e.exit_code()
}

/// Everything after the arguments are parsed: bind with the prompted
/// password, look up every pair, then release the session. Returns the
/// process exit status.
pub async fn run_lookup<C, W>(
    connector: &C,
    password: std::io::Result<String>,
    source: &InputSource,
    presenter: &mut Presenter<W>,
) -> i32
where
    C: Connector,
    W: Write,
{
    let password = match password {
        Ok(p) => p,
        Err(e) => return report(presenter, &SleuthError::Password(e.to_string())),
    };

    let mut session = match connector.connect(&password).await {
        Ok(s) => s,
        Err(e) => return report(presenter, &e),
    };

    let result = match source.pairs() {
        Ok(pairs) => run_batch(&mut session, pairs, presenter).await,
        Err(e) => Err(e),
    };

    connector.disconnect(session).await;

    match result {
        Ok(summary) => {
            debug!(?summary, "done");
            0
        }
        Err(e) => {
            if let SleuthError::Query { .. } = e {
                error!(error = ?e, "Search aborted the batch");
            }
            report(presenter, &e)
        }
    }
}
