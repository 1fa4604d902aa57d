#![forbid(unsafe_code)]

//! Core: host-coordinate geometry shared by the slotmenu crates.

pub mod geometry;
