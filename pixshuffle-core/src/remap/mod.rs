//! CPU reference for the texture-sampling consumer of encoded offset maps.

/// Nearest-neighbor frame remapping.
pub mod cpu;
