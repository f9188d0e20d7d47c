//! Asset preparation helpers
//!
//! Small single-pass tools used while preparing app assets: generating the
//! pattern color palette, proposing sample file names, and rasterizing
//! Material Design icons with ImageMagick.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod doctor;
pub mod icons;
pub mod models;
pub mod palette;
pub mod samples;
