use super::*;
use std::cell::{Cell, RefCell};

use crate::consts::PRINT_PROMPT;

struct FakeHost {
    accept: bool,
    fail_print: bool,
    prompts: RefCell<Vec<String>>,
    prints: Cell<usize>,
}

impl FakeHost {
    fn new(accept: bool) -> Self {
        Self { accept, fail_print: false, prompts: RefCell::new(Vec::new()), prints: Cell::new(0) }
    }
}

impl PrintHost for FakeHost {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_owned());
        self.accept
    }

    fn print(&self) -> Result<(), PrintError> {
        if self.fail_print {
            return Err(PrintError::Host("blocked".to_owned()));
        }
        self.prints.set(self.prints.get() + 1);
        Ok(())
    }
}

#[test]
fn accepted_prompt_prints_once() {
    let host = FakeHost::new(true);
    let outcome = request_print(&host, PRINT_PROMPT).expect("print succeeds");
    assert_eq!(outcome, PrintOutcome::Printed);
    assert_eq!(host.prints.get(), 1);
    assert_eq!(*host.prompts.borrow(), vec![PRINT_PROMPT.to_owned()]);
}

#[test]
fn cancelled_prompt_has_no_side_effects() {
    let host = FakeHost::new(false);
    let outcome = request_print(&host, PRINT_PROMPT).expect("cancel is not an error");
    assert_eq!(outcome, PrintOutcome::Cancelled);
    assert_eq!(host.prints.get(), 0);
}

#[test]
fn host_print_failure_is_reported() {
    let mut host = FakeHost::new(true);
    host.fail_print = true;
    assert!(matches!(request_print(&host, "go?"), Err(PrintError::Host(_))));
}
