//! Unit test tree mirroring the source module layout

mod algorithm;
mod analysis;
mod io;
mod sizing;
