//! Logging targets for the variant styling system.
//!
//! The crate emits diagnostics through `tracing`. To see them, install a
//! subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Theme merging target.
    pub const THEME: &str = "horizon_lattice_variants::theme";
    /// Style cache target.
    pub const CACHE: &str = "horizon_lattice_variants::cache";
    /// Engine and declaration target.
    pub const ENGINE: &str = "horizon_lattice_variants::engine";
    /// Color mode target.
    pub const MODE: &str = "horizon_lattice_variants::mode";
}
