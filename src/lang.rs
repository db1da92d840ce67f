// Copyright (c) 2016-2020 Fabian Schuiki

//! Language revisions and the keywords they reserve.
//!
//! Each revision of a language reserves all keywords up to some marker in the
//! name table, so checking whether a code is a keyword under a revision boils
//! down to a single range check.

use crate::code::NameCode;
use crate::registry::is_in_range;
use crate::table;
use std::fmt;

/// A revision of the VHDL standard.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum VhdlStd {
    /// IEEE 1076-1987.
    Vhdl87,
    /// IEEE 1076-1993.
    Vhdl93,
    /// IEEE 1076-2000.
    Vhdl00,
    /// IEEE 1076-2002.
    Vhdl02,
    /// IEEE 1076-2008.
    Vhdl08,
    /// IEEE 1076-2019.
    Vhdl19,
}

impl VhdlStd {
    pub const ALL: &'static [VhdlStd] = &[
        VhdlStd::Vhdl87,
        VhdlStd::Vhdl93,
        VhdlStd::Vhdl00,
        VhdlStd::Vhdl02,
        VhdlStd::Vhdl08,
        VhdlStd::Vhdl19,
    ];

    /// The last keyword reserved by this revision.
    pub fn last_keyword(self) -> NameCode {
        match self {
            VhdlStd::Vhdl87 => table::LAST_VHDL87,
            VhdlStd::Vhdl93 => table::LAST_VHDL93,
            VhdlStd::Vhdl00 | VhdlStd::Vhdl02 => table::LAST_VHDL00,
            VhdlStd::Vhdl08 | VhdlStd::Vhdl19 => table::LAST_VHDL08,
        }
    }

    /// Check if `code` is a keyword under this revision. The AMS keywords
    /// are only reserved if `ams` is set.
    pub fn is_keyword(self, code: NameCode, ams: bool) -> bool {
        is_in_range(code, table::FIRST_KEYWORD, self.last_keyword())
            || (ams && is_in_range(code, table::FIRST_AMS_KEYWORD, table::LAST_AMS_VHDL))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VhdlStd::Vhdl87 => "VHDL-87",
            VhdlStd::Vhdl93 => "VHDL-93",
            VhdlStd::Vhdl00 => "VHDL-00",
            VhdlStd::Vhdl02 => "VHDL-02",
            VhdlStd::Vhdl08 => "VHDL-08",
            VhdlStd::Vhdl19 => "VHDL-19",
        }
    }
}

impl fmt::Display for VhdlStd {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A revision of Verilog or SystemVerilog.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum VerilogStd {
    /// IEEE 1364-1995.
    V1995,
    /// IEEE 1364-2001.
    V2001,
    /// IEEE 1364-2005.
    V2005,
    /// Accellera SystemVerilog 3.0.
    Sv30,
    /// Accellera SystemVerilog 3.1.
    Sv31,
    /// Accellera SystemVerilog 3.1a.
    Sv31a,
    /// IEEE 1800-2005.
    Sv2005,
    /// IEEE 1800-2009.
    Sv2009,
    /// IEEE 1800-2012.
    Sv2012,
    /// IEEE 1800-2017.
    Sv2017,
}

impl VerilogStd {
    pub const ALL: &'static [VerilogStd] = &[
        VerilogStd::V1995,
        VerilogStd::V2001,
        VerilogStd::V2005,
        VerilogStd::Sv30,
        VerilogStd::Sv31,
        VerilogStd::Sv31a,
        VerilogStd::Sv2005,
        VerilogStd::Sv2009,
        VerilogStd::Sv2012,
        VerilogStd::Sv2017,
    ];

    /// The last keyword reserved by this revision.
    pub fn last_keyword(self) -> NameCode {
        match self {
            VerilogStd::V1995 => table::LAST_VERILOG,
            VerilogStd::V2001 => table::LAST_V2001,
            VerilogStd::V2005 => table::UWIRE,
            VerilogStd::Sv30 => table::LAST_SV3_0,
            VerilogStd::Sv31 => table::LAST_SV3_1,
            VerilogStd::Sv31a | VerilogStd::Sv2005 => table::LAST_SV3_1A,
            VerilogStd::Sv2009 | VerilogStd::Sv2012 | VerilogStd::Sv2017 => table::LAST_SV2009,
        }
    }

    /// Check if `code` is a keyword under this revision.
    pub fn is_keyword(self, code: NameCode) -> bool {
        is_in_range(code, table::FIRST_VERILOG, self.last_keyword())
    }

    /// Check if this is a SystemVerilog revision.
    pub fn is_system_verilog(self) -> bool {
        self >= VerilogStd::Sv30
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VerilogStd::V1995 => "Verilog-1995",
            VerilogStd::V2001 => "Verilog-2001",
            VerilogStd::V2005 => "Verilog-2005",
            VerilogStd::Sv30 => "SystemVerilog 3.0",
            VerilogStd::Sv31 => "SystemVerilog 3.1",
            VerilogStd::Sv31a => "SystemVerilog 3.1a",
            VerilogStd::Sv2005 => "SystemVerilog 2005",
            VerilogStd::Sv2009 => "SystemVerilog 2009",
            VerilogStd::Sv2012 => "SystemVerilog 2012",
            VerilogStd::Sv2017 => "SystemVerilog 2017",
        }
    }
}

impl fmt::Display for VerilogStd {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check if `code` is a PSL keyword.
pub fn is_psl_keyword(code: NameCode) -> bool {
    is_in_range(code, table::FIRST_PSL, table::LAST_PSL)
}

/// Check if `code` is a Bluespec keyword.
pub fn is_bsv_keyword(code: NameCode) -> bool {
    is_in_range(code, table::FIRST_BSV, table::LAST_BSV)
}

/// Check if `code` is an EDIF keyword.
pub fn is_edif_keyword(code: NameCode) -> bool {
    is_in_range(code, table::FIRST_EDIF, table::LAST_EDIF)
}

/// Check if `code` is a Verilog compiler directive.
pub fn is_directive(code: NameCode) -> bool {
    is_in_range(code, table::FIRST_DIRECTIVE, table::LAST_DIRECTIVE)
}
