//! Evaluate-ethics command implementation.

use crate::cli::EthicsArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the evaluate-ethics command.
///
/// Framework reasoning is not implemented; the command only prepares the
/// directory layout and reports that.
pub fn execute_evaluate_ethics(
    args: EthicsArgs,
    settings: &Settings,
    formatter: &Formatter,
) -> Result<String> {
    settings.ensure_dirs()?;
    let message = format!(
        "Ethics evaluation stub for {}. Framework reasoning to be implemented.",
        args.scenario_file.display()
    );
    println!("{}", formatter.warning(&message));
    Ok(message)
}
