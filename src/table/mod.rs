//! Tabular Input Module
//!
//! CSV readers for the two input files the bridge consumes: the data table
//! (header row = column names, one document per data row) and the companion
//! schema file (a two-column table whose second column holds the engine type
//! tag for each field).

pub mod reader;
