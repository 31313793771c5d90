// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{load, build, export, copy, download}.

mod build;     // src/gui/actions/build.rs
mod copy;      // src/gui/actions/copy.rs
mod download;  // src/gui/actions/download.rs
mod export;    // src/gui/actions/export.rs
mod load;      // src/gui/actions/load.rs

pub use build::build;
pub use copy::copy;
pub use download::download;
pub use export::export;
pub use load::load;
