//! Filesystem persistence of encoded offset maps and their manifest.

/// Writers and readers for the on-disk layout.
pub mod files;
