//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show status plus details such as the resolved components directory.
    Verbose,
    /// Show status messages.
    #[default]
    Normal,
    /// Show nothing except errors and requested data.
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the global `--quiet` / `--verbose` flags.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows detail messages.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
