pub mod file;
pub mod stdin;

use home_loan_core::analysis::HomeLoanInput;

/// Resolve the analysis input: `--input` file, then piped stdin, then flags.
pub fn resolve_home_loan_input(
    path: Option<&str>,
    from_flags: impl FnOnce() -> HomeLoanInput,
) -> Result<HomeLoanInput, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        tracing::debug!(path, "reading loan input from file");
        file::read_input(path)
    } else if let Some(data) = stdin::read_stdin()? {
        tracing::debug!("reading loan input from stdin");
        Ok(serde_json::from_value(data)?)
    } else {
        Ok(from_flags())
    }
}
