//! Line-oriented interactive session
//!
//! Each stdin line is one user action. A plain line replaces the text field,
//! an empty line is the Ctrl+Enter shortcut, and slash commands press the
//! buttons.

use hatecheck_client::{
    AnalysisController, ConnectivityProber, Key, KeyChord, SubmitOutcome, UiEvent,
};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const HELP: &str = "\
Type text and press Enter to put it in the input field.
  <empty line>  submit (Ctrl+Enter), only when enough text is entered
  /submit       press Analyze
  /clear        press Clear
  /help         show this help
  /quit         leave";

/// One parsed stdin line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Event(UiEvent),
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Action {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.trim() {
        "" => Action::Event(UiEvent::Key(KeyChord::ctrl(Key::Enter))),
        "/submit" => Action::Event(UiEvent::Submit),
        "/clear" => Action::Event(UiEvent::Clear),
        "/help" => Action::Help,
        "/quit" | "/exit" => Action::Quit,
        _ => Action::Event(UiEvent::Input(line.to_string())),
    }
}

/// Run the session until `/quit` or end of input.
///
/// The probe runs once in the background while input is already accepted.
pub async fn run<R>(
    prober: ConnectivityProber,
    controller: Arc<AnalysisController>,
    input: R,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let probe = tokio::spawn(async move { prober.probe().await });

    controller.mount();
    println!("{}", HELP);

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Action::Quit => break,
            Action::Help => println!("{}", HELP),
            Action::Event(event) => {
                if let Some(outcome) = controller.handle(event).await {
                    log_outcome(&outcome);
                }
            }
        }
    }

    // Nothing left to show the badge to
    probe.abort();
    Ok(())
}

fn log_outcome(outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Rendered { provenance, result } => {
            tracing::debug!(?provenance, class = result.class, "Result rendered");
        }
        SubmitOutcome::Busy => tracing::debug!("Submission ignored, one is in flight"),
        SubmitOutcome::Rejected(rejection) => tracing::debug!(?rejection, "Submission rejected"),
        SubmitOutcome::Failed(reason) => tracing::debug!(%reason, "Submission failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line(""),
            Action::Event(UiEvent::Key(KeyChord::ctrl(Key::Enter)))
        );
        assert_eq!(parse_line("/clear"), Action::Event(UiEvent::Clear));
        assert_eq!(parse_line("/submit\r"), Action::Event(UiEvent::Submit));
        assert_eq!(parse_line("/quit"), Action::Quit);
        assert_eq!(parse_line("/help"), Action::Help);
        assert_eq!(
            parse_line("  keep my spacing  "),
            Action::Event(UiEvent::Input("  keep my spacing  ".to_string()))
        );
    }
}
