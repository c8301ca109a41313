use indicatif::{ProgressBar, ProgressStyle};

/// Spinner for jobs whose length is not known up front.
pub fn progress_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.set_style(ProgressStyle::with_template(" {spinner} {msg}").unwrap());
    spinner
}
