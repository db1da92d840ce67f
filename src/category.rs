// Copyright (c) 2016-2020 Fabian Schuiki

//! The categories that partition the name code space, and the dialects they
//! belong to.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// A set of languages.
    pub struct Dialects: u8 {
        const VHDL = 1 << 0;
        const VHDL_AMS = 1 << 1;
        const VERILOG = 1 << 2;
        const SYSTEM_VERILOG = 1 << 3;
        const PSL = 1 << 4;
        const BSV = 1 << 5;
        const EDIF = 1 << 6;
    }
}

/// Generates the `Category` enum from a list of categories.
macro_rules! declare_categories {(
    $( $(#[$attr:meta])* ($konst: ident, $string: expr) )*
) => {
    /// The classification of a name code.
    #[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
    pub enum Category {
        $($(#[$attr])* $konst,)*
    }

    impl Category {
        /// All categories, in declaration order.
        pub const ALL: &'static [Category] = &[$(Category::$konst,)*];

        /// A human-readable description of the category.
        pub fn as_str(self) -> &'static str {
            match self {
                $(Category::$konst => $string,)*
            }
        }
    }

    impl fmt::Display for Category {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "{}", self.as_str())
        }
    }
}}

declare_categories! {
    /// Single characters, one name per byte value.
    (Character,          "character")
    (Vhdl87Keyword,      "VHDL-87 keyword")
    (Vhdl93Keyword,      "VHDL-93 keyword")
    (Vhdl00Keyword,      "VHDL-00 keyword")
    (Vhdl08Keyword,      "VHDL-08 keyword")
    (AmsKeyword,         "VHDL-AMS keyword")
    /// Umbrella over all VHDL and VHDL-AMS keywords.
    (Keyword,            "keyword")
    (Verilog95Keyword,   "Verilog keyword")
    (Verilog2001Keyword, "Verilog-2001 keyword")
    (Verilog2005Keyword, "Verilog-2005 keyword")
    (Sv30Keyword,        "SystemVerilog 3.0 keyword")
    (Sv31Keyword,        "SystemVerilog 3.1 keyword")
    (Sv31aKeyword,       "SystemVerilog 3.1a keyword")
    (Sv2009Keyword,      "SystemVerilog 2009 keyword")
    /// Operator symbols that may be overloaded.
    (Operator,           "operator")
    (Attribute,          "attribute")
    (Vhdl87Attribute,    "VHDL-87 attribute")
    (Vhdl93Attribute,    "VHDL-93 attribute")
    (Vhdl08Attribute,    "VHDL-08 attribute")
    (AmsAttribute,       "VHDL-AMS attribute")
    /// Names declared in package STANDARD.
    (Standard,           "standard name")
    /// Names of the non-graphic characters.
    (Charname,           "character name")
    (Misc,               "predefined name")
    /// Names from the IEEE libraries.
    (Ieee,               "IEEE library name")
    (Synthesis,          "synthesis name")
    /// Compiler directives, such as `` `define ``.
    (Directive,          "directive")
    (Systask,            "system task")
    (SvMethod,           "SystemVerilog built-in method")
    (Bsv,                "Bluespec keyword")
    /// Words recognized in pragma comments.
    (Comment,            "comment pragma")
    (Psl,                "PSL keyword")
    (Edif,               "EDIF keyword")
}

impl Category {
    /// The umbrella category this category is nested in, if any.
    pub fn parent(self) -> Option<Category> {
        use self::Category::*;
        match self {
            Vhdl87Keyword | Vhdl93Keyword | Vhdl00Keyword | Vhdl08Keyword | AmsKeyword => {
                Some(Keyword)
            }
            _ => None,
        }
    }

    /// Check if names of this category are reserved words.
    pub fn is_keyword(self) -> bool {
        use self::Category::*;
        match self {
            Vhdl87Keyword | Vhdl93Keyword | Vhdl00Keyword | Vhdl08Keyword | AmsKeyword
            | Keyword | Verilog95Keyword | Verilog2001Keyword | Verilog2005Keyword
            | Sv30Keyword | Sv31Keyword | Sv31aKeyword | Sv2009Keyword | Bsv | Psl | Edif => true,
            _ => false,
        }
    }

    /// The languages which use names of this category.
    pub fn dialects(self) -> Dialects {
        use self::Category::*;
        match self {
            Character => Dialects::all(),
            Vhdl87Keyword | Vhdl93Keyword | Vhdl00Keyword | Vhdl08Keyword => Dialects::VHDL,
            AmsKeyword | AmsAttribute => Dialects::VHDL_AMS,
            Keyword => Dialects::VHDL | Dialects::VHDL_AMS,
            Verilog95Keyword | Verilog2001Keyword | Verilog2005Keyword | Directive | Systask => {
                Dialects::VERILOG | Dialects::SYSTEM_VERILOG
            }
            Sv30Keyword | Sv31Keyword | Sv31aKeyword | Sv2009Keyword | SvMethod => {
                Dialects::SYSTEM_VERILOG
            }
            Operator | Attribute | Vhdl87Attribute | Vhdl93Attribute | Vhdl08Attribute
            | Standard | Charname | Misc | Ieee | Synthesis => Dialects::VHDL,
            Comment => Dialects::VHDL | Dialects::VERILOG | Dialects::SYSTEM_VERILOG,
            Bsv => Dialects::BSV,
            Psl => Dialects::PSL,
            Edif => Dialects::EDIF,
        }
    }
}
