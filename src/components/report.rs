use std::fmt::{Display, Formatter};

use crate::components::fault::FaultKind;

/// How a sanitizer report analyzer rates the fault.
#[derive(Debug, Copy, Clone, Hash, Ord, PartialOrd, Eq, PartialEq, Serialize)]
pub enum Security {
    None,
    Medium,
    High,
}

impl Display for Security {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Security::None => "None",
                Security::Medium => "Medium",
                Security::High => "High",
            }
        )
    }
}

/// What a harness should find in the detector output for a given fault.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Serialize)]
pub struct ExpectedReport {
    pub fault: FaultKind,
    pub error_type: &'static str,
    pub security: Security,
}

impl FaultKind {
    pub fn expected_report(self) -> ExpectedReport {
        let (error_type, security) = match self {
            FaultKind::DivisionByZero => ("divide-by-zero", Security::None),
            FaultKind::NullDerefRead => ("null-dereference READ", Security::None),
            FaultKind::NullDerefWrite => ("null-dereference WRITE", Security::High),
            FaultKind::DoubleFree => ("double-free", Security::High),
            // UBSan's bounds check fires before ASan sees the access.
            FaultKind::GlobalBufferOverflow => ("index-out-of-bounds", Security::Medium),
            FaultKind::HeapBufferOverflow => ("heap-buffer-overflow", Security::Medium),
            FaultKind::HeapUseAfterFree => ("heap-use-after-free", Security::High),
            FaultKind::NullPointerDereference => ("null-dereference", Security::High),
            FaultKind::Shifts => ("undefined-shift", Security::None),
            FaultKind::StackBufferOverflow => ("index-out-of-bounds", Security::Medium),
            FaultKind::StackOverflow => ("stack-overflow", Security::None),
            FaultKind::StackUseAfterScope => ("stack-use-after-scope", Security::High),
            FaultKind::SignedIntegerOverflow => ("signed-integer-overflow", Security::None),
            FaultKind::ContainerOverflow => ("container-overflow", Security::Medium),
        };
        ExpectedReport { fault: self, error_type, security }
    }

    /// The bug type an AddressSanitizer-only build prints in its `ERROR:`
    /// line. Rust has no UBSan, so the out-of-bounds reads show up under their
    /// ASan names and the arithmetic faults are trapped by Rust itself.
    pub fn asan_bug_type(self) -> Option<&'static str> {
        match self {
            FaultKind::DoubleFree
            | FaultKind::HeapBufferOverflow
            | FaultKind::HeapUseAfterFree
            | FaultKind::StackUseAfterScope
            | FaultKind::StackOverflow
            | FaultKind::ContainerOverflow => Some(self.expected_report().error_type),
            FaultKind::GlobalBufferOverflow => Some("global-buffer-overflow"),
            FaultKind::StackBufferOverflow => Some("stack-buffer-overflow"),
            FaultKind::NullDerefRead
            | FaultKind::NullDerefWrite
            | FaultKind::NullPointerDereference => Some("SEGV"),
            FaultKind::DivisionByZero
            | FaultKind::Shifts
            | FaultKind::SignedIntegerOverflow => None,
        }
    }
}
