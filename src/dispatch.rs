use crate::components::error::{InvalidParamNumberSnafu, Result};
use crate::components::fault::FaultKind;
use crate::triggers::{arith, global, heap, null, stack};
use crate::crashme_debug;

/// Checks that exactly one argument follows the program name and resolves it
/// to a fault.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<FaultKind> {
    match args {
        [_, name] => name.as_ref().parse(),
        _ => InvalidParamNumberSnafu { count: args.len() }.fail(),
    }
}

/// Fires the fault. `argc` counts the program name too, so a valid invocation
/// always passes 2.
pub fn trigger(kind: FaultKind, argc: usize) {
    match kind {
        FaultKind::DivisionByZero => arith::division_by_zero(argc as i32),
        FaultKind::NullDerefRead => null::null_deref_read(),
        FaultKind::NullDerefWrite => null::null_deref_write(),
        FaultKind::DoubleFree => heap::double_free(),
        FaultKind::GlobalBufferOverflow => global::global_buffer_overflow(argc),
        FaultKind::HeapBufferOverflow => heap::heap_buffer_overflow(argc),
        FaultKind::HeapUseAfterFree => heap::heap_use_after_free(),
        FaultKind::NullPointerDereference => null::null_point_deref(),
        FaultKind::Shifts => arith::undefined_shifts(),
        FaultKind::StackBufferOverflow => stack::stack_buffer_overflow(argc),
        FaultKind::StackOverflow => stack::stack_overflow(),
        FaultKind::StackUseAfterScope => stack::stack_use_after_scope(),
        FaultKind::SignedIntegerOverflow => arith::signed_integer_overflow(),
        FaultKind::ContainerOverflow => {
            heap::container_overflow();
        }
    }
}

/// Runs one invocation and returns the exit code. Misuse is reported on
/// stderr and still exits with 0; a fault is expected to take the process
/// down before this returns.
pub fn run<S: AsRef<str>>(args: &[S]) -> i32 {
    let kind = match parse_args(args) {
        Ok(kind) => kind,
        Err(err) => {
            crashme_debug!("rejected {} argument(s): {:?}", args.len(), err);
            eprintln!("{}", err);
            return 0;
        }
    };

    let report = kind.expected_report();
    match serde_json::to_string(&report) {
        Ok(json) => crashme_debug!("expected report: {}", json),
        Err(err) => crashme_debug!("cannot serialize expected report: {}", err),
    }
    crashme_debug!("Trigger {}", kind);
    trigger(kind, args.len());
    crashme_debug!("{} returned without being caught", kind);
    0
}
