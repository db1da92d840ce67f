// Copyright (c) 2016-2020 Fabian Schuiki

mod common;
use crate::common::*;
use std::collections::HashSet;

#[test]
fn architecture_is_a_vhdl_keyword() {
    assert_eq!(lookup_code("Architecture"), Some(NameCode(265)));
    let cat = category_of(NameCode(265)).unwrap();
    assert_eq!(cat, Category::Vhdl87Keyword);
    assert_eq!(cat.parent(), Some(Category::Keyword));
    assert!(cat.dialects().contains(Dialects::VHDL));
}

#[test]
fn module_is_a_verilog_keyword() {
    let module = code("Module");
    assert_eq!(module, NameCode(411));
    let first = code("First_Verilog");
    let last = code("Last_Verilog");
    assert_eq!((first, last), (NameCode(380), NameCode(458)));
    assert!(is_in_range(module, first, last));
    assert!(first < module && module < last);
    assert_eq!(category_of(module), Some(Category::Verilog95Keyword));
}

#[test]
fn unknown_names_are_not_reserved() {
    assert_eq!(lookup_code("NotAKeyword"), None);
    assert_eq!(lookup_code(""), None);
    assert_eq!(lookup_code("architecture"), None);
    assert_eq!(lookup_code("ARCHITECTURE"), None);
}

#[test]
fn edif_gap_is_preserved() {
    let reg = registry();
    let last_psl = code("Last_PSL");
    let first_edif = code("First_Edif");
    let celltype = code("Celltype");
    assert_eq!(last_psl, NameCode(958));
    assert_eq!(first_edif, NameCode(959));
    assert_eq!(celltype, NameCode(969));
    assert_eq!(reg.name_of(NameCode(958)), Some("X"));
    assert_eq!(reg.name_of(first_edif), None);
    for c in 960..969 {
        assert_eq!(reg.name_of(NameCode(c)), None);
        assert!(reg.is_reserved(NameCode(c)));
        assert_eq!(reg.category_of(NameCode(c)), None);
    }
    assert_eq!(reg.category_of(first_edif), Some(Category::Edif));
    assert_eq!(reg.category_of(celltype), Some(Category::Edif));

    // The first EDIF name does not follow the last PSL name.
    let names: Vec<_> = reg.all_names().collect();
    let idx = names.iter().position(|&(n, _)| n == "Celltype").unwrap();
    assert_eq!(names[idx - 1], ("X", NameCode(958)));
    assert_ne!(names[idx - 1].1 .0 + 1, names[idx].1 .0);
}

#[test]
fn lookup_is_injective() {
    let reg = registry();
    let mut seen = HashSet::new();
    for (name, code) in reg.all_names() {
        assert!(seen.insert(code), "code {} of `{}` is taken", code, name);
    }
    assert_eq!(seen.len(), reg.len());
}

#[test]
fn round_trip() {
    let reg = registry();
    for (name, code) in reg.all_names() {
        assert_eq!(reg.lookup_code(name), Some(code));
        assert_eq!(reg.name_of(code), Some(name));
        assert_eq!(code.name(), Some(name));
    }
}

#[test]
fn enumeration_is_monotonic_and_restartable() {
    let reg = registry();
    let names = reg.all_names();
    let codes: Vec<_> = names.clone().map(|(_, c)| c).collect();
    assert!(codes.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(names.count(), codes.len());
    assert_eq!(all_names().next(), Some(("Mod", NameCode(257))));
    assert_eq!(all_names().last(), Some(("Userdata", NameCode(988))));
    assert_eq!(all_names().len(), 722);
}

#[test]
fn markers_resolve_to_codes() {
    let reg = registry();
    assert_eq!(reg.markers().len(), 58);
    for (name, code) in reg.markers() {
        assert_eq!(reg.lookup_code(name), Some(code));
    }
    assert_eq!(code("First_Character"), NameCode(1));
    assert_eq!(code("Last_Character"), NameCode(256));
    assert_eq!(code("Last_Keyword"), code("Tolerance"));
}

#[test]
fn names_that_look_like_markers() {
    let reg = registry();
    for &(name, value) in &[
        ("First_Match", 516),
        ("Last_Event", 589),
        ("Last_Active", 590),
        ("Last_Value", 591),
        ("First", 756),
        ("Last", 757),
    ] {
        assert_eq!(reg.lookup_code(name), Some(NameCode(value)));
        assert_eq!(reg.name_of(NameCode(value)), Some(name));
        assert!(reg.markers().all(|(m, _)| m != name));
    }
    // Last_Value doubles as the Last_Attribute marker.
    assert_eq!(code("Last_Attribute"), NameCode(591));
}

#[test]
fn ranges_are_well_formed() {
    let reg = registry();
    for range in reg.ranges() {
        assert!(range.first <= range.last, "{:?}", range);
        if range.category != Category::Keyword {
            assert_eq!(reg.category_of(range.first), Some(range.category));
            assert_eq!(reg.category_of(range.last), Some(range.category));
        }
        assert!(reg.categories_of(range.first).any(|c| c == range.category));
        assert!(reg.categories_of(range.last).any(|c| c == range.category));
        assert_eq!(reg.range_of(range.category), Some(range));
    }
    assert_eq!(reg.ranges().len(), Category::ALL.len());
}

#[test]
fn range_boundaries() {
    let reg = registry();
    let mut leaves: Vec<_> = reg
        .ranges()
        .iter()
        .filter(|r| r.category != Category::Keyword)
        .collect();
    leaves.sort_by_key(|r| r.first);
    for range in &leaves {
        let before = NameCode(range.first.0 - 1);
        let after = NameCode(range.last.0 + 1);
        assert_ne!(reg.category_of(before), Some(range.category));
        assert_ne!(reg.category_of(after), Some(range.category));
    }
    // The leaf ranges tile the code space without holes.
    for pair in leaves.windows(2) {
        assert_eq!(pair[0].last.0 + 1, pair[1].first.0);
    }
    assert_eq!(reg.category_of(NameCode(0)), None);
    assert_eq!(reg.category_of(NameCode(989)), None);
}

#[test]
fn umbrella_keyword_range() {
    let reg = registry();
    let kw = *reg.range_of(Category::Keyword).unwrap();
    assert_eq!((kw.first, kw.last), (NameCode(257), NameCode(379)));
    assert_eq!(kw.len(), 123);
    assert_eq!(
        reg.categories_of(code("Across")).collect::<Vec<_>>(),
        vec![Category::AmsKeyword, Category::Keyword]
    );
    assert!(reg.is_in_category(code("Vunit"), Category::Keyword));
    assert!(!reg.is_in_category(code("Always"), Category::Keyword));
}

#[test]
fn derived_revision_ranges() {
    let reg = registry();
    assert_eq!(category_of(code("Xnor")), Some(Category::Vhdl93Keyword));
    assert_eq!(category_of(code("Ror")), Some(Category::Vhdl93Keyword));
    assert_eq!(category_of(code("Protected")), Some(Category::Vhdl00Keyword));
    assert_eq!(category_of(code("Assume")), Some(Category::Vhdl08Keyword));
    assert_eq!(category_of(code("Uwire")), Some(Category::Verilog2005Keyword));
    let v2005 = reg.range_of(Category::Verilog2005Keyword).unwrap();
    assert_eq!((v2005.first, v2005.last), (NameCode(465), NameCode(465)));
}

#[test]
fn assorted_categories() {
    assert_eq!(category_of(code("Op_Equality")), Some(Category::Operator));
    assert_eq!(category_of(code("Last_Value")), Some(Category::Attribute));
    assert_eq!(category_of(code("Behavior")), Some(Category::Vhdl87Attribute));
    assert_eq!(category_of(code("Element")), Some(Category::Vhdl08Attribute));
    assert_eq!(category_of(code("NFalse")), Some(Category::Standard));
    assert_eq!(category_of(code("C159")), Some(Category::Charname));
    assert_eq!(category_of(code("NNone")), Some(Category::Misc));
    assert_eq!(category_of(code("Std_Logic")), Some(Category::Ieee));
    assert_eq!(category_of(code("Anyseq")), Some(Category::Synthesis));
    assert_eq!(category_of(code("Timescale")), Some(Category::Directive));
    assert_eq!(category_of(code("D_Root")), Some(Category::Systask));
    assert_eq!(category_of(code("Push_Back")), Some(Category::SvMethod));
    assert_eq!(category_of(code("uValueof")), Some(Category::Bsv));
    assert_eq!(category_of(code("Translate_Off")), Some(Category::Comment));
    assert_eq!(category_of(code("Eventually")), Some(Category::Psl));
    assert_eq!(category_of(NameCode::from_char(b'a')), Some(Category::Character));
}

#[test]
fn constants_match_registry() {
    use crate::common::names::table;
    assert_eq!(code("Architecture"), table::ARCHITECTURE);
    assert_eq!(code("uActionValue"), table::U_ACTION_VALUE);
    assert_eq!(code("Std_Logic_1164"), table::STD_LOGIC_1164);
    assert_eq!(code("First_SV3_1a"), table::FIRST_SV3_1A);
}

#[test]
fn global_table_builds_with_tracing() {
    let opts = BuildOptions {
        trace: true,
        ..BuildOptions::default()
    };
    let reg = Registry::build(&names::table::STD_NAMES, &opts).unwrap();
    assert_eq!(reg.len(), registry().len());
}

#[test]
fn concurrent_lookups() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let reg = get_registry();
                let (name, code) = reg.all_names().nth(i * 50).unwrap();
                assert_eq!(reg.lookup_code(name), Some(code));
                code
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), NameCode(257 + i as u32 * 50));
    }
}
