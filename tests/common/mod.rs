// Copyright (c) 2016-2020 Fabian Schuiki
#![allow(dead_code)]

//! Utilities for name registry tests.

pub extern crate moore_names as names;
pub use crate::names::*;

/// Install a logger and get the global registry.
pub fn registry() -> &'static Registry {
    let _ = pretty_env_logger::try_init();
    get_registry()
}

/// Look up a name that must exist.
pub fn code(name: &str) -> NameCode {
    match registry().lookup_code(name) {
        Some(code) => code,
        None => panic!("`{}` is not a standard name", name),
    }
}
