// Copyright (c) 2016-2020 Fabian Schuiki

//! The standard name table. Every keyword, operator, attribute, predefined
//! name, directive and system name known to the front ends has a pinned code
//! here. The codes are stored by external consumers, so existing entries must
//! never be renumbered; new names are appended at the end.
//!
//! Each name and marker is available as a constant, e.g. `ARCHITECTURE` or
//! `FIRST_VERILOG`, and the whole table as `STD_NAMES`.

use crate::category::Category;
use crate::code::NameCode;
use crate::registry::{Bound, Entry, RangeDecl, Reservation, Table};

/// Generates the name and marker constants and the declaration slices from
/// a list of names.
macro_rules! declare_names {(
    names { $( ($konst: ident, $string: expr, $code: expr) )* }
    markers { $( ($mkonst: ident, $mstring: expr, $mcode: expr) )* }
) => {
    $(pub const $konst: NameCode = NameCode($code);)*
    $(pub const $mkonst: NameCode = NameCode($mcode);)*

    /// All names, in declaration order.
    pub const NAMES: &[Entry] = &[
        $(Entry { name: $string, code: $konst },)*
    ];

    /// All First/Last markers.
    pub const MARKERS: &[Entry] = &[
        $(Entry { name: $mstring, code: $mkonst },)*
    ];
}}

const fn is_strictly_increasing(entries: &[Entry]) -> bool {
    let mut i = 1;
    while i < entries.len() {
        if entries[i].code.0 <= entries[i - 1].code.0 {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    is_strictly_increasing(NAMES),
    "standard name codes must be strictly increasing"
);

declare_names! {
    names {
        // Keywords as per IEEE 1076-1987, followed by the ones added in each
        // revision of the standard.
        (MOD,                    "Mod",                    257)
        (REM,                    "Rem",                    258)
        (ABS,                    "Abs",                    259)
        (NOT,                    "Not",                    260)
        (ACCESS,                 "Access",                 261)
        (AFTER,                  "After",                  262)
        (ALIAS,                  "Alias",                  263)
        (ALL,                    "All",                    264)
        (ARCHITECTURE,           "Architecture",           265)
        (ARRAY,                  "Array",                  266)
        (ASSERT,                 "Assert",                 267)
        (ATTRIBUTE,              "Attribute",              268)
        (BEGIN,                  "Begin",                  269)
        (BLOCK,                  "Block",                  270)
        (BODY,                   "Body",                   271)
        (BUFFER,                 "Buffer",                 272)
        (BUS,                    "Bus",                    273)
        (CASE,                   "Case",                   274)
        (COMPONENT,              "Component",              275)
        (CONFIGURATION,          "Configuration",          276)
        (CONSTANT,               "Constant",               277)
        (DISCONNECT,             "Disconnect",             278)
        (DOWNTO,                 "Downto",                 279)
        (ELSE,                   "Else",                   280)
        (ELSIF,                  "Elsif",                  281)
        (END,                    "End",                    282)
        (ENTITY,                 "Entity",                 283)
        (EXIT,                   "Exit",                   284)
        (FILE,                   "File",                   285)
        (FOR,                    "For",                    286)
        (FUNCTION,               "Function",               287)
        (GENERATE,               "Generate",               288)
        (GENERIC,                "Generic",                289)
        (GUARDED,                "Guarded",                290)
        (IF,                     "If",                     291)
        (IN,                     "In",                     292)
        (INOUT,                  "Inout",                  293)
        (IS,                     "Is",                     294)
        (LABEL,                  "Label",                  295)
        (LIBRARY,                "Library",                296)
        (LINKAGE,                "Linkage",                297)
        (LOOP,                   "Loop",                   298)
        (MAP,                    "Map",                    299)
        (NEW,                    "New",                    300)
        (NEXT,                   "Next",                   301)
        (NULL,                   "Null",                   302)
        (OF,                     "Of",                     303)
        (ON,                     "On",                     304)
        (OPEN,                   "Open",                   305)
        (OTHERS,                 "Others",                 306)
        (OUT,                    "Out",                    307)
        (PACKAGE,                "Package",                308)
        (PORT,                   "Port",                   309)
        (PROCEDURE,              "Procedure",              310)
        (PROCESS,                "Process",                311)
        (RANGE,                  "Range",                  312)
        (RECORD,                 "Record",                 313)
        (REGISTER,               "Register",               314)
        (REPORT,                 "Report",                 315)
        (RETURN,                 "Return",                 316)
        (SELECT,                 "Select",                 317)
        (SEVERITY,               "Severity",               318)
        (SIGNAL,                 "Signal",                 319)
        (SUBTYPE,                "Subtype",                320)
        (THEN,                   "Then",                   321)
        (TO,                     "To",                     322)
        (TRANSPORT,              "Transport",              323)
        (TYPE,                   "Type",                   324)
        (UNITS,                  "Units",                  325)
        (UNTIL,                  "Until",                  326)
        (USE,                    "Use",                    327)
        (VARIABLE,               "Variable",               328)
        (WAIT,                   "Wait",                   329)
        (WHEN,                   "When",                   330)
        (WHILE,                  "While",                  331)
        (WITH,                   "With",                   332)
        (AND,                    "And",                    333)
        (OR,                     "Or",                     334)
        (XOR,                    "Xor",                    335)
        (NAND,                   "Nand",                   336)
        (NOR,                    "Nor",                    337)

        // VHDL-93
        (XNOR,                   "Xnor",                   338)
        (GROUP,                  "Group",                  339)
        (IMPURE,                 "Impure",                 340)
        (INERTIAL,               "Inertial",               341)
        (LITERAL,                "Literal",                342)
        (POSTPONED,              "Postponed",              343)
        (PURE,                   "Pure",                   344)
        (REJECT,                 "Reject",                 345)
        (SHARED,                 "Shared",                 346)
        (UNAFFECTED,             "Unaffected",             347)
        (SLL,                    "Sll",                    348)
        (SLA,                    "Sla",                    349)
        (SRA,                    "Sra",                    350)
        (SRL,                    "Srl",                    351)
        (ROL,                    "Rol",                    352)
        (ROR,                    "Ror",                    353)

        // VHDL-00
        (PROTECTED,              "Protected",              354)

        // VHDL-08
        (ASSUME,                 "Assume",                 355)
        (CONTEXT,                "Context",                356)
        (COVER,                  "Cover",                  357)
        (DEFAULT,                "Default",                358)
        (PARAMETER,              "Parameter",              359)
        (PROPERTY,               "Property",               360)
        (RESTRICT,               "Restrict",               361)
        (RESTRICT_GUARANTEE,     "Restrict_Guarantee",     362)
        (SEQUENCE,               "Sequence",               363)
        (VMODE,                  "Vmode",                  364)
        (VPROP,                  "Vprop",                  365)
        (VUNIT,                  "Vunit",                  366)

        // VHDL-AMS
        (ACROSS,                 "Across",                 367)
        (BREAK,                  "Break",                  368)
        (LIMIT,                  "Limit",                  369)
        (NATURE,                 "Nature",                 370)
        (NOISE,                  "Noise",                  371)
        (PROCEDURAL,             "Procedural",             372)
        (QUANTITY,               "Quantity",               373)
        (REFERENCE,              "Reference",              374)
        (SPECTRUM,               "Spectrum",               375)
        (SUBNATURE,              "Subnature",              376)
        (TERMINAL,               "Terminal",               377)
        (THROUGH,                "Through",                378)
        (TOLERANCE,              "Tolerance",              379)

        // Verilog keywords as per IEEE 1364-1995
        (ALWAYS,                 "Always",                 380)
        (ASSIGN,                 "Assign",                 381)
        (BUF,                    "Buf",                    382)
        (BUFIF0,                 "Bufif0",                 383)
        (BUFIF1,                 "Bufif1",                 384)
        (CASEX,                  "Casex",                  385)
        (CASEZ,                  "Casez",                  386)
        (CMOS,                   "Cmos",                   387)
        (DEASSIGN,               "Deassign",               388)
        (DEFPARAM,               "Defparam",               389)
        (DISABLE,                "Disable",                390)
        (EDGE,                   "Edge",                   391)
        (ENDCASE,                "Endcase",                392)
        (ENDFUNCTION,            "Endfunction",            393)
        (ENDMODULE,              "Endmodule",              394)
        (ENDPRIMITIVE,           "Endprimitive",           395)
        (ENDSPECIFY,             "Endspecify",             396)
        (ENDTABLE,               "Endtable",               397)
        (ENDTASK,                "Endtask",                398)
        (FORCE,                  "Force",                  399)
        (FOREVER,                "Forever",                400)
        (FORK,                   "Fork",                   401)
        (HIGHZ0,                 "Highz0",                 402)
        (HIGHZ1,                 "Highz1",                 403)
        (IFNONE,                 "Ifnone",                 404)
        (INITIAL,                "Initial",                405)
        (INPUT,                  "Input",                  406)
        (JOIN,                   "Join",                   407)
        (LARGE,                  "Large",                  408)
        (MACROMODULE,            "Macromodule",            409)
        (MEDIUM,                 "Medium",                 410)
        (MODULE,                 "Module",                 411)
        (NEGEDGE,                "Negedge",                412)
        (NMOS,                   "Nmos",                   413)
        (NOTIF0,                 "Notif0",                 414)
        (NOTIF1,                 "Notif1",                 415)
        (OUTPUT,                 "Output",                 416)
        (PMOS,                   "Pmos",                   417)
        (POSEDGE,                "Posedge",                418)
        (PRIMITIVE,              "Primitive",              419)
        (PULL0,                  "Pull0",                  420)
        (PULL1,                  "Pull1",                  421)
        (PULLDOWN,               "Pulldown",               422)
        (PULLUP,                 "Pullup",                 423)
        (REALTIME,               "Realtime",               424)
        (RELEASE,                "Release",                425)
        (REG,                    "Reg",                    426)
        (REPEAT,                 "Repeat",                 427)
        (RCMOS,                  "Rcmos",                  428)
        (RNMOS,                  "Rnmos",                  429)
        (RPMOS,                  "Rpmos",                  430)
        (RTRAN,                  "Rtran",                  431)
        (RTRANIF0,               "Rtranif0",               432)
        (RTRANIF1,               "Rtranif1",               433)
        (SCALARED,               "Scalared",               434)
        (SMALL,                  "Small",                  435)
        (SPECIFY,                "Specify",                436)
        (SPECPARAM,              "Specparam",              437)
        (STRONG0,                "Strong0",                438)
        (STRONG1,                "Strong1",                439)
        (SUPPLY0,                "Supply0",                440)
        (SUPPLY1,                "Supply1",                441)
        (TABLEX,                 "Tablex",                 442)
        (TASK,                   "Task",                   443)
        (TRAN,                   "Tran",                   444)
        (TRANIF0,                "Tranif0",                445)
        (TRANIF1,                "Tranif1",                446)
        (TRI,                    "Tri",                    447)
        (TRI0,                   "Tri0",                   448)
        (TRI1,                   "Tri1",                   449)
        (TRIAND,                 "Triand",                 450)
        (TRIOR,                  "Trior",                  451)
        (TRIREG,                 "Trireg",                 452)
        (VECTORED,               "Vectored",               453)
        (WAND,                   "Wand",                   454)
        (WEAK0,                  "Weak0",                  455)
        (WEAK1,                  "Weak1",                  456)
        (WIRE,                   "Wire",                   457)
        (WOR,                    "Wor",                    458)

        // Verilog-2001
        (AUTOMATIC,              "Automatic",              459)
        (ENDGENERATE,            "Endgenerate",            460)
        (GENVAR,                 "Genvar",                 461)
        (LOCALPARAM,             "Localparam",             462)
        (UNSIGNED,               "Unsigned",               463)
        (SIGNED,                 "Signed",                 464)

        // Verilog-2005
        (UWIRE,                  "Uwire",                  465)

        // SystemVerilog 3.0
        (ALWAYS_COMB,            "Always_Comb",            466)
        (ALWAYS_FF,              "Always_Ff",              467)
        (ALWAYS_LATCH,           "Always_Latch",           468)
        (BIT,                    "Bit",                    469)
        (BYTE,                   "Byte",                   470)
        (CHANGED,                "Changed",                471)
        (CHAR,                   "Char",                   472)
        (CONST,                  "Const",                  473)
        (CONTINUE,               "Continue",               474)
        (DO,                     "Do",                     475)
        (ENDINTERFACE,           "Endinterface",           476)
        (ENDTRANSITION,          "Endtransition",          477)
        (ENUM,                   "Enum",                   478)
        (EXPORT,                 "Export",                 479)
        (EXTERN,                 "Extern",                 480)
        (FORKJOIN,               "Forkjoin",               481)
        (IFF,                    "Iff",                    482)
        (IMPORT,                 "Import",                 483)
        (INT,                    "Int",                    484)
        (INTERFACE,              "Interface",              485)
        (LOGIC,                  "Logic",                  486)
        (LONGINT,                "Longint",                487)
        (LONGREAL,               "Longreal",               488)
        (MODPORT,                "Modport",                489)
        (PACKED,                 "Packed",                 490)
        (PRIORITY,               "Priority",               491)
        (SHORTINT,               "Shortint",               492)
        (SHORTREAL,              "Shortreal",              493)
        (STATIC,                 "Static",                 494)
        (STRUCT,                 "Struct",                 495)
        (TIMEPRECISION,          "Timeprecision",          496)
        (TIMEUNIT,               "Timeunit",               497)
        (TRANSITION,             "Transition",             498)
        (TYPEDEF,                "Typedef",                499)
        (UNION,                  "Union",                  500)
        (UNIQUE,                 "Unique",                 501)
        (UNIQUE0,                "Unique0",                502)
        (VOID,                   "Void",                   503)

        // SystemVerilog 3.1
        (CHANDLE,                "Chandle",                504)
        (CLASS,                  "Class",                  505)
        (CLOCKING,               "Clocking",               506)
        (CONSTRAINT,             "Constraint",             507)
        (DIST,                   "Dist",                   508)
        (ENDCLASS,               "Endclass",               509)
        (ENDCLOCKING,            "Endclocking",            510)
        (ENDPROGRAM,             "Endprogram",             511)
        (ENDPROPERTY,            "Endproperty",            512)
        (ENDSEQUENCE,            "Endsequence",            513)
        (EXTENDS,                "Extends",                514)
        (FINAL,                  "Final",                  515)
        (FIRST_MATCH,            "First_Match",            516)
        (INSIDE,                 "Inside",                 517)
        (INTERSECT,              "Intersect",              518)
        (JOIN_ANY,               "Join_Any",               519)
        (JOIN_NONE,              "Join_None",              520)
        (LOCAL,                  "Local",                  521)
        (PROGRAM,                "Program",                522)
        (RAND,                   "Rand",                   523)
        (RANDC,                  "Randc",                  524)
        (REF,                    "Ref",                    525)
        (SOLVE,                  "Solve",                  526)
        (STRING,                 "String",                 527)
        (SUPER,                  "Super",                  528)
        (THIS,                   "This",                   529)
        (THROUGHOUT,             "Throughout",             530)
        (VAR,                    "Var",                    531)
        (VIRTUAL,                "Virtual",                532)
        (WAIT_ORDER,             "Wait_Order",             533)

        // SystemVerilog 3.1a
        (COVERGROUP,             "Covergroup",             534)
        (COVERPOINT,             "Coverpoint",             535)
        (ENDGROUP,               "Endgroup",               536)
        (ENDPACKAGE,             "Endpackage",             537)
        (EXPECT,                 "Expect",                 538)
        (FOREACH,                "Foreach",                539)
        (IGNORE_BINS,            "Ignore_Bins",            540)
        (ILLEGAL_BINS,           "Illegal_Bins",           541)
        (MATCHES,                "Matches",                542)
        (RANDCASE,               "Randcase",               543)
        (RANDSEQUENCE,           "Randsequence",           544)
        (TAGGED,                 "Tagged",                 545)
        (WILDCARD,               "Wildcard",               546)

        // SystemVerilog 2009
        (IMPLIES,                "Implies",                547)
        (S_UNTIL,                "S_Until",                548)
        (S_UNTIL_WITH,           "S_Until_With",           549)
        (UNTIL_WITH,             "Until_With",             550)

        // Overloadable operators
        (OP_EQUALITY,            "Op_Equality",            551)
        (OP_INEQUALITY,          "Op_Inequality",          552)
        (OP_LESS,                "Op_Less",                553)
        (OP_LESS_EQUAL,          "Op_Less_Equal",          554)
        (OP_GREATER,             "Op_Greater",             555)
        (OP_GREATER_EQUAL,       "Op_Greater_Equal",       556)
        (OP_PLUS,                "Op_Plus",                557)
        (OP_MINUS,               "Op_Minus",               558)
        (OP_MUL,                 "Op_Mul",                 559)
        (OP_DIV,                 "Op_Div",                 560)
        (OP_EXP,                 "Op_Exp",                 561)
        (OP_CONCATENATION,       "Op_Concatenation",       562)
        (OP_CONDITION,           "Op_Condition",           563)
        (OP_MATCH_EQUALITY,      "Op_Match_Equality",      564)
        (OP_MATCH_INEQUALITY,    "Op_Match_Inequality",    565)
        (OP_MATCH_LESS,          "Op_Match_Less",          566)
        (OP_MATCH_LESS_EQUAL,    "Op_Match_Less_Equal",    567)
        (OP_MATCH_GREATER,       "Op_Match_Greater",       568)
        (OP_MATCH_GREATER_EQUAL, "Op_Match_Greater_Equal", 569)

        // Predefined attributes
        (BASE,                   "Base",                   570)
        (LEFT,                   "Left",                   571)
        (RIGHT,                  "Right",                  572)
        (HIGH,                   "High",                   573)
        (LOW,                    "Low",                    574)
        (POS,                    "Pos",                    575)
        (VAL,                    "Val",                    576)
        (SUCC,                   "Succ",                   577)
        (PRED,                   "Pred",                   578)
        (LEFTOF,                 "Leftof",                 579)
        (RIGHTOF,                "Rightof",                580)
        (REVERSE_RANGE,          "Reverse_Range",          581)
        (LENGTH,                 "Length",                 582)
        (DELAYED,                "Delayed",                583)
        (STABLE,                 "Stable",                 584)
        (QUIET,                  "Quiet",                  585)
        (TRANSACTION,            "Transaction",            586)
        (EVENT,                  "Event",                  587)
        (ACTIVE,                 "Active",                 588)
        (LAST_EVENT,             "Last_Event",             589)
        (LAST_ACTIVE,            "Last_Active",            590)
        (LAST_VALUE,             "Last_Value",             591)

        // Attributes only defined in VHDL-87
        (BEHAVIOR,               "Behavior",               592)
        (STRUCTURE,              "Structure",              593)

        // Attributes added in VHDL-93
        (ASCENDING,              "Ascending",              594)
        (IMAGE,                  "Image",                  595)
        (VALUE,                  "Value",                  596)
        (DRIVING,                "Driving",                597)
        (DRIVING_VALUE,          "Driving_Value",          598)
        (SIMPLE_NAME,            "Simple_Name",            599)
        (INSTANCE_NAME,          "Instance_Name",          600)
        (PATH_NAME,              "Path_Name",              601)

        // Attributes added in VHDL-08
        (ELEMENT,                "Element",                602)

        // VHDL-AMS attributes
        (CONTRIBUTION,           "Contribution",           603)
        (DOT,                    "Dot",                    604)
        (INTEG,                  "Integ",                  605)
        (ABOVE,                  "Above",                  606)
        (ZOH,                    "ZOH",                    607)
        (LTF,                    "LTF",                    608)
        (ZTF,                    "ZTF",                    609)
        (RAMP,                   "Ramp",                   610)
        (SLEW,                   "Slew",                   611)

        // Package STANDARD
        (STD,                    "Std",                    612)
        (STANDARD,               "Standard",               613)
        (BOOLEAN,                "Boolean",                614)
        (NFALSE,                 "NFalse",                 615)
        (NTRUE,                  "NTrue",                  616)
        (CHARACTER,              "Character",              617)
        (SEVERITY_LEVEL,         "Severity_Level",         618)
        (NOTE,                   "Note",                   619)
        (WARNING,                "Warning",                620)
        (ERROR,                  "Error",                  621)
        (FAILURE,                "Failure",                622)
        (UNIVERSAL_INTEGER,      "Universal_Integer",      623)
        (UNIVERSAL_REAL,         "Universal_Real",         624)
        (CONVERTIBLE_INTEGER,    "Convertible_Integer",    625)
        (CONVERTIBLE_REAL,       "Convertible_Real",       626)
        (INTEGER,                "Integer",                627)
        (REAL,                   "Real",                   628)
        (TIME,                   "Time",                   629)
        (FS,                     "Fs",                     630)
        (PS,                     "Ps",                     631)
        (NS,                     "Ns",                     632)
        (US,                     "Us",                     633)
        (MS,                     "Ms",                     634)
        (SEC,                    "Sec",                    635)
        (MIN,                    "Min",                    636)
        (HR,                     "Hr",                     637)
        (MAX,                    "Max",                    638)
        (DELAY_LENGTH,           "Delay_Length",           639)
        (NOW,                    "Now",                    640)
        (NATURAL,                "Natural",                641)
        (POSITIVE,               "Positive",               642)
        (BIT_VECTOR,             "Bit_Vector",             643)
        (FILE_OPEN_KIND,         "File_Open_Kind",         644)
        (READ_MODE,              "Read_Mode",              645)
        (WRITE_MODE,             "Write_Mode",             646)
        (APPEND_MODE,            "Append_Mode",            647)
        (FILE_OPEN_STATUS,       "File_Open_Status",       648)
        (OPEN_OK,                "Open_Ok",                649)
        (STATUS_ERROR,           "Status_Error",           650)
        (NAME_ERROR,             "Name_Error",             651)
        (MODE_ERROR,             "Mode_Error",             652)
        (FOREIGN,                "Foreign",                653)
        (BOOLEAN_VECTOR,         "Boolean_Vector",         654)
        (TO_BSTRING,             "To_Bstring",             655)
        (TO_BINARY_STRING,       "To_Binary_String",       656)
        (TO_OSTRING,             "To_Ostring",             657)
        (TO_OCTAL_STRING,        "To_Octal_String",        658)
        (TO_HSTRING,             "To_Hstring",             659)
        (TO_HEX_STRING,          "To_Hex_String",          660)
        (INTEGER_VECTOR,         "Integer_Vector",         661)
        (REAL_VECTOR,            "Real_Vector",            662)
        (TIME_VECTOR,            "Time_Vector",            663)
        (DIGITS,                 "Digits",                 664)
        (FORMAT,                 "Format",                 665)
        (UNIT,                   "Unit",                   666)
        (DOMAIN_TYPE,            "Domain_Type",            667)
        (QUIESCENT_DOMAIN,       "Quiescent_Domain",       668)
        (TIME_DOMAIN,            "Time_Domain",            669)
        (FREQUENCY_DOMAIN,       "Frequency_Domain",       670)
        (DOMAIN,                 "Domain",                 671)
        (FREQUENCY,              "Frequency",              672)

        // Names of the non-graphic characters
        (NUL,                    "Nul",                    673)
        (SOH,                    "Soh",                    674)
        (STX,                    "Stx",                    675)
        (ETX,                    "Etx",                    676)
        (EOT,                    "Eot",                    677)
        (ENQ,                    "Enq",                    678)
        (ACK,                    "Ack",                    679)
        (BEL,                    "Bel",                    680)
        (BS,                     "Bs",                     681)
        (HT,                     "Ht",                     682)
        (LF,                     "Lf",                     683)
        (VT,                     "Vt",                     684)
        (FF,                     "Ff",                     685)
        (CR,                     "Cr",                     686)
        (SO,                     "So",                     687)
        (SI,                     "Si",                     688)
        (DLE,                    "Dle",                    689)
        (DC1,                    "Dc1",                    690)
        (DC2,                    "Dc2",                    691)
        (DC3,                    "Dc3",                    692)
        (DC4,                    "Dc4",                    693)
        (NAK,                    "Nak",                    694)
        (SYN,                    "Syn",                    695)
        (ETB,                    "Etb",                    696)
        (CAN,                    "Can",                    697)
        (EM,                     "Em",                     698)
        (SUB,                    "Sub",                    699)
        (ESC,                    "Esc",                    700)
        (FSP,                    "Fsp",                    701)
        (GSP,                    "Gsp",                    702)
        (RSP,                    "Rsp",                    703)
        (USP,                    "Usp",                    704)
        (DEL,                    "Del",                    705)
        (C128,                   "C128",                   706)
        (C129,                   "C129",                   707)
        (C130,                   "C130",                   708)
        (C131,                   "C131",                   709)
        (C132,                   "C132",                   710)
        (C133,                   "C133",                   711)
        (C134,                   "C134",                   712)
        (C135,                   "C135",                   713)
        (C136,                   "C136",                   714)
        (C137,                   "C137",                   715)
        (C138,                   "C138",                   716)
        (C139,                   "C139",                   717)
        (C140,                   "C140",                   718)
        (C141,                   "C141",                   719)
        (C142,                   "C142",                   720)
        (C143,                   "C143",                   721)
        (C144,                   "C144",                   722)
        (C145,                   "C145",                   723)
        (C146,                   "C146",                   724)
        (C147,                   "C147",                   725)
        (C148,                   "C148",                   726)
        (C149,                   "C149",                   727)
        (C150,                   "C150",                   728)
        (C151,                   "C151",                   729)
        (C152,                   "C152",                   730)
        (C153,                   "C153",                   731)
        (C154,                   "C154",                   732)
        (C155,                   "C155",                   733)
        (C156,                   "C156",                   734)
        (C157,                   "C157",                   735)
        (C158,                   "C158",                   736)
        (C159,                   "C159",                   737)

        // Miscellaneous predefined names
        (GUARD,                  "Guard",                  738)
        (DEALLOCATE,             "Deallocate",             739)
        (FILE_OPEN,              "File_Open",              740)
        (FILE_CLOSE,             "File_Close",             741)
        (READ,                   "Read",                   742)
        (WRITE,                  "Write",                  743)
        (FLUSH,                  "Flush",                  744)
        (ENDFILE,                "Endfile",                745)
        (I,                      "I",                      746)
        (J,                      "J",                      747)
        (F,                      "F",                      748)
        (L,                      "L",                      749)
        (P,                      "P",                      750)
        (R,                      "R",                      751)
        (S,                      "S",                      752)
        (V,                      "V",                      753)
        (EXTERNAL_NAME,          "External_Name",          754)
        (OPEN_KIND,              "Open_Kind",              755)
        (FIRST,                  "First",                  756)
        (LAST,                   "Last",                   757)
        (TEXTIO,                 "Textio",                 758)
        (WORK,                   "Work",                   759)
        (TEXT,                   "Text",                   760)
        (TO_STRING,              "To_String",              761)
        (MINIMUM,                "Minimum",                762)
        (MAXIMUM,                "Maximum",                763)
        (UNTRUNCATED_TEXT_READ,  "Untruncated_Text_Read",  764)
        (TEXTIO_READ_REAL,       "Textio_Read_Real",       765)
        (TEXTIO_WRITE_REAL,      "Textio_Write_Real",      766)
        (GET_RESOLUTION_LIMIT,   "Get_Resolution_Limit",   767)
        (CONTROL_SIMULATION,     "Control_Simulation",     768)
        (STEP,                   "Step",                   769)
        (INDEX,                  "Index",                  770)
        (ITEM,                   "Item",                   771)
        (UU_FILE_UU,             "Uu_File_Uu",             772)
        (UU_LINE_UU,             "Uu_Line_Uu",             773)
        (LABEL_APPLIES_TO,       "Label_Applies_To",       774)
        (RETURN_PORT_NAME,       "Return_Port_Name",       775)
        (MAP_TO_OPERATOR,        "Map_To_Operator",        776)
        (TYPE_FUNCTION,          "Type_Function",          777)
        (BUILT_IN,               "Built_In",               778)
        (NNONE,                  "NNone",                  779)

        // IEEE libraries and packages
        (IEEE,                   "Ieee",                   780)
        (STD_LOGIC_1164,         "Std_Logic_1164",         781)
        (STD_ULOGIC,             "Std_Ulogic",             782)
        (STD_ULOGIC_VECTOR,      "Std_Ulogic_Vector",      783)
        (STD_LOGIC,              "Std_Logic",              784)
        (STD_LOGIC_VECTOR,       "Std_Logic_Vector",       785)
        (RISING_EDGE,            "Rising_Edge",            786)
        (FALLING_EDGE,           "Falling_Edge",           787)
        (VITAL_TIMING,           "VITAL_Timing",           788)
        (VITAL_LEVEL0,           "VITAL_Level0",           789)
        (VITAL_LEVEL1,           "VITAL_Level1",           790)
        (NUMERIC_STD,            "Numeric_Std",            791)
        (NUMERIC_BIT,            "Numeric_Bit",            792)
        (UNRESOLVED_UNSIGNED,    "Unresolved_Unsigned",    793)
        (UNRESOLVED_SIGNED,      "Unresolved_Signed",      794)
        (STD_LOGIC_ARITH,        "Std_Logic_Arith",        795)
        (STD_LOGIC_SIGNED,       "Std_Logic_Signed",       796)
        (STD_LOGIC_UNSIGNED,     "Std_Logic_Unsigned",     797)
        (STD_LOGIC_TEXTIO,       "Std_Logic_Textio",       798)
        (TO_INTEGER,             "To_Integer",             799)
        (TO_UNSIGNED,            "To_Unsigned",            800)
        (TO_SIGNED,              "To_Signed",              801)
        (RESIZE,                 "Resize",                 802)
        (STD_MATCH,              "Std_Match",              803)
        (SHIFT_LEFT,             "Shift_Left",             804)
        (SHIFT_RIGHT,            "Shift_Right",            805)
        (ROTATE_LEFT,            "Rotate_Left",            806)
        (ROTATE_RIGHT,           "Rotate_Right",           807)
        (TO_BITVECTOR,           "To_Bitvector",           808)
        (IS_X,                   "Is_X",                   809)
        (CONV_SIGNED,            "Conv_Signed",            810)
        (CONV_UNSIGNED,          "Conv_Unsigned",          811)
        (CONV_INTEGER,           "Conv_Integer",           812)
        (MATH_REAL,              "Math_Real",              813)
        (CEIL,                   "Ceil",                   814)
        (LOG2,                   "Log2",                   815)
        (SIN,                    "Sin",                    816)
        (COS,                    "Cos",                    817)

        // Formal synthesis
        (ALLCONST,               "Allconst",               818)
        (ALLSEQ,                 "Allseq",                 819)
        (ANYCONST,               "Anyconst",               820)
        (ANYSEQ,                 "Anyseq",                 821)

        // Verilog compiler directives
        (DEFINE,                 "Define",                 822)
        (ENDIF,                  "Endif",                  823)
        (IFDEF,                  "Ifdef",                  824)
        (IFNDEF,                 "Ifndef",                 825)
        (INCLUDE,                "Include",                826)
        (TIMESCALE,              "Timescale",              827)
        (UNDEF,                  "Undef",                  828)
        (PROTECT,                "Protect",                829)
        (BEGIN_PROTECTED,        "Begin_Protected",        830)
        (END_PROTECTED,          "End_Protected",          831)
        (KEY_BLOCK,              "Key_Block",              832)
        (DATA_BLOCK,             "Data_Block",             833)
        (LINE,                   "Line",                   834)
        (CELLDEFINE,             "Celldefine",             835)
        (ENDCELLDEFINE,          "Endcelldefine",          836)
        (DEFAULT_NETTYPE,        "Default_Nettype",        837)
        (RESETALL,               "Resetall",               838)

        // System tasks
        (BITS,                   "Bits",                   839)
        (D_ROOT,                 "D_Root",                 840)
        (D_UNIT,                 "D_Unit",                 841)

        // SystemVerilog built-in methods
        (SIZE,                   "Size",                   842)
        (INSERT,                 "Insert",                 843)
        (DELETE,                 "Delete",                 844)
        (POP_FRONT,              "Pop_Front",              845)
        (POP_BACK,               "Pop_Back",               846)
        (PUSH_FRONT,             "Push_Front",             847)
        (PUSH_BACK,              "Push_Back",              848)
        (NAME,                   "Name",                   849)
        (LEN,                    "Len",                    850)
        (SUBSTR,                 "Substr",                 851)
        (EXISTS,                 "Exists",                 852)
        (ATOI,                   "Atoi",                   853)
        (ITOA,                   "Itoa",                   854)
        (FIND,                   "Find",                   855)
        (FIND_INDEX,             "Find_Index",             856)
        (FIND_FIRST,             "Find_First",             857)
        (FIND_FIRST_INDEX,       "Find_First_Index",       858)
        (FIND_LAST,              "Find_Last",              859)
        (FIND_LAST_INDEX,        "Find_Last_Index",        860)
        (NUM,                    "Num",                    861)
        (RANDOMIZE,              "Randomize",              862)
        (PRE_RANDOMIZE,          "Pre_Randomize",          863)
        (POST_RANDOMIZE,         "Post_Randomize",         864)
        (SRANDOM,                "Srandom",                865)
        (GET_RANDSTATE,          "Get_Randstate",          866)
        (SET_RANDSTATE,          "Set_Randstate",          867)
        (SEED,                   "Seed",                   868)
        (STATE,                  "State",                  869)

        // Bluespec
        (U_ACTION,               "uAction",                870)
        (U_ACTION_VALUE,         "uActionValue",           871)
        (BVI,                    "BVI",                    872)
        (U_C,                    "uC",                     873)
        (U_CF,                   "uCF",                    874)
        (U_E,                    "uE",                     875)
        (U_SB,                   "uSB",                    876)
        (U_SBR,                  "uSBR",                   877)
        (ACTION,                 "Action",                 878)
        (ENDACTION,              "Endaction",              879)
        (ACTIONVALUE,            "Actionvalue",            880)
        (ENDACTIONVALUE,         "Endactionvalue",         881)
        (ANCESTOR,               "Ancestor",               882)
        (CLOCKED_BY,             "Clocked_By",             883)
        (DEFAULT_CLOCK,          "Default_Clock",          884)
        (DEFAULT_RESET,          "Default_Reset",          885)
        (DEPENDENCIES,           "Dependencies",           886)
        (DERIVING,               "Deriving",               887)
        (DETERMINES,             "Determines",             888)
        (ENABLE,                 "Enable",                 889)
        (IFC_INOUT,              "Ifc_Inout",              890)
        (INPUT_CLOCK,            "Input_Clock",            891)
        (INPUT_RESET,            "Input_Reset",            892)
        (INSTANCE,               "Instance",               893)
        (ENDINSTANCE,            "Endinstance",            894)
        (LET,                    "Let",                    895)
        (MATCH,                  "Match",                  896)
        (METHOD,                 "Method",                 897)
        (ENDMETHOD,              "Endmethod",              898)
        (NUMERIC,                "Numeric",                899)
        (OUTPUT_CLOCK,           "Output_Clock",           900)
        (OUTPUT_RESET,           "Output_Reset",           901)
        (PAR,                    "Par",                    902)
        (ENDPAR,                 "Endpar",                 903)
        (PATH,                   "Path",                   904)
        (PROVISOS,               "Provisos",               905)
        (READY,                  "Ready",                  906)
        (RESET_BY,               "Reset_By",               907)
        (RULE,                   "Rule",                   908)
        (ENDRULE,                "Endrule",                909)
        (RULES,                  "Rules",                  910)
        (ENDRULES,               "Endrules",               911)
        (SAME_FAMILY,            "Same_Family",            912)
        (SCHEDULE,               "Schedule",               913)
        (SEQ,                    "Seq",                    914)
        (ENDSEQ,                 "Endseq",                 915)
        (TYPECLASS,              "Typeclass",              916)
        (ENDTYPECLASS,           "Endtypeclass",           917)
        (VALUEOF,                "Valueof",                918)
        (U_VALUEOF,              "uValueof",               919)

        // Pragma comments
        (PSL,                    "Psl",                    920)
        (PRAGMA,                 "Pragma",                 921)
        (SYNTHESIS,              "Synthesis",              922)
        (SYNOPSYS,               "Synopsys",               923)
        (TRANSLATE_OFF,          "Translate_Off",          924)
        (TRANSLATE_ON,           "Translate_On",           925)

        // PSL
        (A,                      "A",                      926)
        (AF,                     "Af",                     927)
        (AG,                     "Ag",                     928)
        (AX,                     "Ax",                     929)
        (ABORT,                  "Abort",                  930)
        (ASSUME_GUARANTEE,       "Assume_Guarantee",       931)
        (BEFORE,                 "Before",                 932)
        (CLOCK,                  "Clock",                  933)
        (E,                      "E",                      934)
        (EF,                     "Ef",                     935)
        (EG,                     "Eg",                     936)
        (EX,                     "Ex",                     937)
        (ENDPOINT,               "Endpoint",               938)
        (EVENTUALLY,             "Eventually",             939)
        (FAIRNESS,               "Fairness",               940)
        (FELL,                   "Fell",                   941)
        (FORALL,                 "Forall",                 942)
        (G,                      "G",                      943)
        (INF,                    "Inf",                    944)
        (INHERIT,                "Inherit",                945)
        (NEVER,                  "Never",                  946)
        (NEXT_A,                 "Next_A",                 947)
        (NEXT_E,                 "Next_E",                 948)
        (NEXT_EVENT,             "Next_Event",             949)
        (NEXT_EVENT_A,           "Next_Event_A",           950)
        (NEXT_EVENT_E,           "Next_Event_E",           951)
        (PREV,                   "Prev",                   952)
        (ROSE,                   "Rose",                   953)
        (STRONG,                 "Strong",                 954)
        (W,                      "W",                      955)
        (WHILENOT,               "Whilenot",               956)
        (WITHIN,                 "Within",                 957)
        (X,                      "X",                      958)

        // EDIF
        (CELLTYPE,               "Celltype",               969)
        (VIEW,                   "View",                   970)
        (VIEWTYPE,               "Viewtype",               971)
        (DIRECTION,              "Direction",              972)
        (CONTENTS,               "Contents",               973)
        (NET,                    "Net",                    974)
        (VIEWREF,                "Viewref",                975)
        (CELLREF,                "Cellref",                976)
        (LIBRARYREF,             "Libraryref",             977)
        (PORTINSTANCE,           "Portinstance",           978)
        (JOINED,                 "Joined",                 979)
        (PORTREF,                "Portref",                980)
        (INSTANCEREF,            "Instanceref",            981)
        (DESIGN,                 "Design",                 982)
        (DESIGNATOR,             "Designator",             983)
        (OWNER,                  "Owner",                  984)
        (MEMBER,                 "Member",                 985)
        (NUMBER,                 "Number",                 986)
        (RENAME,                 "Rename",                 987)
        (USERDATA,               "Userdata",               988)
    }
    markers {
        (FIRST_CHARACTER,        "First_Character",        1)
        (LAST_CHARACTER,         "Last_Character",         256)
        (FIRST_KEYWORD,          "First_Keyword",          257)
        (LAST_VHDL87,            "Last_Vhdl87",            337)
        (LAST_VHDL93,            "Last_Vhdl93",            353)
        (LAST_VHDL00,            "Last_Vhdl00",            354)
        (LAST_VHDL08,            "Last_Vhdl08",            366)
        (FIRST_AMS_KEYWORD,      "First_Ams_Keyword",      367)
        (LAST_AMS_VHDL,          "Last_AMS_Vhdl",          379)
        (LAST_KEYWORD,           "Last_Keyword",           379)
        (FIRST_VERILOG,          "First_Verilog",          380)
        (LAST_VERILOG,           "Last_Verilog",           458)
        (FIRST_V2001,            "First_V2001",            459)
        (LAST_V2001,             "Last_V2001",             464)
        (FIRST_SV3_0,            "First_SV3_0",            466)
        (LAST_SV3_0,             "Last_SV3_0",             503)
        (FIRST_SV3_1,            "First_SV3_1",            504)
        (LAST_SV3_1,             "Last_SV3_1",             533)
        (FIRST_SV3_1A,           "First_SV3_1a",           534)
        (LAST_SV3_1A,            "Last_SV3_1a",            546)
        (FIRST_SV2009,           "First_SV2009",           547)
        (LAST_SV2009,            "Last_SV2009",            550)
        (FIRST_OPERATOR,         "First_Operator",         551)
        (LAST_OPERATOR,          "Last_Operator",          569)
        (FIRST_ATTRIBUTE,        "First_Attribute",        570)
        (LAST_ATTRIBUTE,         "Last_Attribute",         591)
        (FIRST_VHDL87_ATTRIBUTE, "First_Vhdl87_Attribute", 592)
        (LAST_VHDL87_ATTRIBUTE,  "Last_Vhdl87_Attribute",  593)
        (FIRST_VHDL93_ATTRIBUTE, "First_Vhdl93_Attribute", 594)
        (LAST_VHDL93_ATTRIBUTE,  "Last_Vhdl93_Attribute",  601)
        (FIRST_VHDL08_ATTRIBUTE, "First_Vhdl08_Attribute", 602)
        (LAST_VHDL08_ATTRIBUTE,  "Last_Vhdl08_Attribute",  602)
        (FIRST_AMS_ATTRIBUTE,    "First_AMS_Attribute",    603)
        (LAST_AMS_ATTRIBUTE,     "Last_AMS_Attribute",     611)
        (FIRST_STANDARD,         "First_Standard",         612)
        (LAST_STANDARD,          "Last_Standard",          672)
        (FIRST_CHARNAME,         "First_Charname",         673)
        (LAST_CHARNAME,          "Last_Charname",          737)
        (FIRST_MISC,             "First_Misc",             738)
        (LAST_MISC,              "Last_Misc",              779)
        (FIRST_IEEE,             "First_Ieee",             780)
        (LAST_IEEE,              "Last_Ieee",              817)
        (FIRST_SYNTHESIS,        "First_Synthesis",        818)
        (LAST_SYNTHESIS,         "Last_Synthesis",         821)
        (FIRST_DIRECTIVE,        "First_Directive",        822)
        (LAST_DIRECTIVE,         "Last_Directive",         838)
        (FIRST_SYSTASK,          "First_Systask",          839)
        (LAST_SYSTASK,           "Last_Systask",           841)
        (FIRST_SV_METHOD,        "First_SV_Method",        842)
        (LAST_SV_METHOD,         "Last_SV_Method",         869)
        (FIRST_BSV,              "First_BSV",              870)
        (LAST_BSV,               "Last_BSV",               919)
        (FIRST_COMMENT,          "First_Comment",          920)
        (LAST_COMMENT,           "Last_Comment",           925)
        (FIRST_PSL,              "First_PSL",              926)
        (LAST_PSL,               "Last_PSL",               958)
        (FIRST_EDIF,             "First_Edif",             959)
        (LAST_EDIF,              "Last_Edif",              988)
    }
}

macro_rules! range {
    ($category: ident, $first: expr, $last: expr) => {
        RangeDecl {
            category: Category::$category,
            first: $first,
            last: $last,
        }
    };
}

/// The category ranges, most specific first. Several revision ranges only
/// have a closing marker and start right after the previous revision.
pub const RANGES: &[RangeDecl] = {
    use self::Bound::*;
    &[
        range!(Character, Marker("First_Character"), Marker("Last_Character")),
        range!(Vhdl87Keyword, Marker("First_Keyword"), Marker("Last_Vhdl87")),
        range!(Vhdl93Keyword, After("Last_Vhdl87"), Marker("Last_Vhdl93")),
        range!(Vhdl00Keyword, After("Last_Vhdl93"), Marker("Last_Vhdl00")),
        range!(Vhdl08Keyword, After("Last_Vhdl00"), Marker("Last_Vhdl08")),
        range!(AmsKeyword, Marker("First_Ams_Keyword"), Marker("Last_AMS_Vhdl")),
        range!(Verilog95Keyword, Marker("First_Verilog"), Marker("Last_Verilog")),
        range!(Verilog2001Keyword, Marker("First_V2001"), Marker("Last_V2001")),
        range!(Verilog2005Keyword, After("Last_V2001"), Before("First_SV3_0")),
        range!(Sv30Keyword, Marker("First_SV3_0"), Marker("Last_SV3_0")),
        range!(Sv31Keyword, Marker("First_SV3_1"), Marker("Last_SV3_1")),
        range!(Sv31aKeyword, Marker("First_SV3_1a"), Marker("Last_SV3_1a")),
        range!(Sv2009Keyword, Marker("First_SV2009"), Marker("Last_SV2009")),
        range!(Operator, Marker("First_Operator"), Marker("Last_Operator")),
        range!(Attribute, Marker("First_Attribute"), Marker("Last_Attribute")),
        range!(Vhdl87Attribute, Marker("First_Vhdl87_Attribute"), Marker("Last_Vhdl87_Attribute")),
        range!(Vhdl93Attribute, Marker("First_Vhdl93_Attribute"), Marker("Last_Vhdl93_Attribute")),
        range!(Vhdl08Attribute, Marker("First_Vhdl08_Attribute"), Marker("Last_Vhdl08_Attribute")),
        range!(AmsAttribute, Marker("First_AMS_Attribute"), Marker("Last_AMS_Attribute")),
        range!(Standard, Marker("First_Standard"), Marker("Last_Standard")),
        range!(Charname, Marker("First_Charname"), Marker("Last_Charname")),
        range!(Misc, Marker("First_Misc"), Marker("Last_Misc")),
        range!(Ieee, Marker("First_Ieee"), Marker("Last_Ieee")),
        range!(Synthesis, Marker("First_Synthesis"), Marker("Last_Synthesis")),
        range!(Directive, Marker("First_Directive"), Marker("Last_Directive")),
        range!(Systask, Marker("First_Systask"), Marker("Last_Systask")),
        range!(SvMethod, Marker("First_SV_Method"), Marker("Last_SV_Method")),
        range!(Bsv, Marker("First_BSV"), Marker("Last_BSV")),
        range!(Comment, Marker("First_Comment"), Marker("Last_Comment")),
        range!(Psl, Marker("First_PSL"), Marker("Last_PSL")),
        range!(Edif, Marker("First_Edif"), Marker("Last_Edif")),
        range!(Keyword, Marker("First_Keyword"), Marker("Last_Keyword")),
    ]
};

/// Codes held back within the EDIF range. `First_Edif` sits right after the
/// PSL names, the first EDIF name follows ten codes later.
pub const RESERVED: &[Reservation] = &[Reservation {
    category: Category::Edif,
    first: NameCode(FIRST_EDIF.0 + 1),
    last: NameCode(CELLTYPE.0 - 1),
}];

/// The standard name table.
pub static STD_NAMES: Table = Table {
    names: NAMES,
    markers: MARKERS,
    ranges: RANGES,
    reserved: RESERVED,
};
