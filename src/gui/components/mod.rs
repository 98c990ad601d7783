// src/gui/components/mod.rs
pub mod data_table;
pub mod histogram;
pub mod selectors;
pub mod status_bar;
