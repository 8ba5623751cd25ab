//! Confirm-then-print flow behind the resume download button.

#[cfg(test)]
#[path = "print_test.rs"]
mod print_test;

#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error("print flow failed: {0}")]
    Host(String),
}

/// Host dialogs used by the flow.
pub trait PrintHost {
    /// Blocking yes/no prompt. `false` means the user cancelled.
    fn confirm(&self, message: &str) -> bool;
    /// Open the native print dialog.
    fn print(&self) -> Result<(), PrintError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintOutcome {
    Printed,
    Cancelled,
}

/// Ask for confirmation with `prompt` and print only if accepted.
pub fn request_print<H: PrintHost + ?Sized>(host: &H, prompt: &str) -> Result<PrintOutcome, PrintError> {
    if !host.confirm(prompt) {
        log::debug!("print: cancelled by user");
        return Ok(PrintOutcome::Cancelled);
    }
    host.print()?;
    Ok(PrintOutcome::Printed)
}
