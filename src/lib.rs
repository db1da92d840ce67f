// Copyright (c) 2016-2020 Fabian Schuiki

//! The standard names of the moore compiler framework.
//!
//! Every reserved word, operator, attribute, predefined name, directive and
//! system name of the supported languages (VHDL, VHDL-AMS, Verilog,
//! SystemVerilog, PSL, EDIF and Bluespec) has a pinned code in a single
//! dense code space. The code space is partitioned into category ranges
//! delimited by First/Last markers, such that classifying a code is a plain
//! range check.
//!
//! ```
//! use moore_names::{category_of, lookup_code, Category, NameCode};
//!
//! assert_eq!(lookup_code("Architecture"), Some(NameCode(265)));
//! assert_eq!(category_of(NameCode(265)), Some(Category::Vhdl87Keyword));
//! assert_eq!(lookup_code("NotAKeyword"), None);
//! ```

pub extern crate moore_names_common as common;
pub use crate::common::errors;

pub mod category;
pub mod code;
pub mod lang;
pub mod registry;
pub mod table;

pub use crate::category::{Category, Dialects};
pub use crate::code::NameCode;
pub use crate::registry::{
    get_registry, is_in_range, BuildOptions, CategoryRange, IntegrityError, Registry,
};

/// Find the code of a standard name in the global registry.
pub fn lookup_code(name: &str) -> Option<NameCode> {
    get_registry().lookup_code(name)
}

/// Classify a code using the global registry.
pub fn category_of(code: NameCode) -> Option<Category> {
    get_registry().category_of(code)
}

/// Iterate over all standard names and their codes, in declaration order.
pub fn all_names() -> impl ExactSizeIterator<Item = (&'static str, NameCode)> + Clone {
    get_registry().all_names()
}
