use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::components::error::{Error, InvalidParamSnafu};

/// Every fault the dispatcher knows how to trigger.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FaultKind {
    DivisionByZero,
    NullDerefRead,
    NullDerefWrite,
    DoubleFree,
    GlobalBufferOverflow,
    HeapBufferOverflow,
    HeapUseAfterFree,
    NullPointerDereference,
    Shifts,
    StackBufferOverflow,
    StackOverflow,
    StackUseAfterScope,
    SignedIntegerOverflow,
    ContainerOverflow,
}

impl FaultKind {
    /// In the order the dispatcher matches them.
    pub const ALL: [FaultKind; 14] = [
        FaultKind::DivisionByZero,
        FaultKind::NullDerefRead,
        FaultKind::NullDerefWrite,
        FaultKind::DoubleFree,
        FaultKind::GlobalBufferOverflow,
        FaultKind::HeapBufferOverflow,
        FaultKind::HeapUseAfterFree,
        FaultKind::NullPointerDereference,
        FaultKind::Shifts,
        FaultKind::StackBufferOverflow,
        FaultKind::StackOverflow,
        FaultKind::StackUseAfterScope,
        FaultKind::SignedIntegerOverflow,
        FaultKind::ContainerOverflow,
    ];

    /// The command-line spelling.
    pub fn name(self) -> &'static str {
        match self {
            FaultKind::DivisionByZero => "division-by-zero",
            FaultKind::NullDerefRead => "null-deref-read",
            FaultKind::NullDerefWrite => "null-deref-write",
            FaultKind::DoubleFree => "double-free",
            FaultKind::GlobalBufferOverflow => "global-buffer-overflow",
            FaultKind::HeapBufferOverflow => "heap-buffer-overflow",
            FaultKind::HeapUseAfterFree => "heap-use-after-free",
            FaultKind::NullPointerDereference => "null-pointer-dereference",
            FaultKind::Shifts => "shifts",
            FaultKind::StackBufferOverflow => "stack-buffer-overflow",
            FaultKind::StackOverflow => "stack-overflow",
            FaultKind::StackUseAfterScope => "stack-use-after-scope",
            FaultKind::SignedIntegerOverflow => "signed-integer-overflow",
            FaultKind::ContainerOverflow => "container-overflow",
        }
    }
}

impl Display for FaultKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FaultKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FaultKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| InvalidParamSnafu { name: s }.build())
    }
}
