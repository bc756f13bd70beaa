/// Configuration subsystem - viewer settings and preferences
///
/// Loads settings from a .bdagdocsrc file; command-line flags override
/// whatever the rc file provides.

pub mod rc;

// Re-export public interface
pub use rc::{RcConfig, RcLoader};
