//! # Voxel Client Entry Point
//!
//! Thin binary wrapper around the library's `run()` function.

fn main() {
    voxel_client::run();
}
