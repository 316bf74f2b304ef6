use std::fmt;

/// Non-fatal conditions surfaced to the user during release and docs
/// processing. Processing continues after each of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// No published release exists; fall back to the development path
    NoLatestRelease,
    /// A manually supplied next version disagrees with the version derived
    /// from commit history
    ManualVersionMismatch { manual: String, convco: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::NoLatestRelease => write!(f, "No latest release found"),
            Warning::ManualVersionMismatch { manual, convco } => {
                write!(
                    f,
                    "Manual version ({}) not equal to version determined by conventional commit history ({})",
                    manual, convco
                )
            }
        }
    }
}
