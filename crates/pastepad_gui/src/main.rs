//! Desktop client binary entry point.

fn main() {
    let exit_code = run_and_report(pastepad_gui::run);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run_and_report<F, E>(runner: F) -> i32
where
    F: FnOnce() -> Result<(), E>,
    E: std::fmt::Display,
{
    match runner() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("pastepad error: {}", err);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::run_and_report;

    #[test]
    fn run_and_report_returns_zero_on_success() {
        assert_eq!(run_and_report(|| Ok::<(), &str>(())), 0);
    }

    #[test]
    fn run_and_report_returns_non_zero_on_failure() {
        assert_eq!(run_and_report(|| Err::<(), &str>("boom")), 1);
    }
}
