// Copyright (c) 2016-2020 Fabian Schuiki

//! This crate contains the utilities shared by the moore name registry
//! crates. At the moment that is the diagnostics machinery used to report
//! integrity defects in the name tables.

pub mod errors;
