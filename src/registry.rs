// Copyright (c) 2016-2020 Fabian Schuiki

//! The name registry. Maps the symbolic names of a name table to their
//! pinned codes and classifies codes by the category ranges delimited by the
//! table's First/Last markers.
//!
//! A registry is built once from a `Table`, validated, and is immutable from
//! then on. The process-wide registry of the standard names is obtained
//! through `get_registry()`; it is built on first access.

use crate::category::Category;
use crate::code::NameCode;
use crate::common::errors::DiagBuilder2;
use crate::table;
use log::{debug, error, trace};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A declaration of a name and its code.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Entry {
    pub name: &'static str,
    pub code: NameCode,
}

impl Entry {
    pub const fn new(name: &'static str, code: u32) -> Entry {
        Entry {
            name,
            code: NameCode(code),
        }
    }
}

/// One end of a category range, expressed in terms of a marker.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bound {
    /// The code of the marker itself.
    Marker(&'static str),
    /// The code right after the marker.
    After(&'static str),
    /// The code right before the marker.
    Before(&'static str),
}

impl Bound {
    fn marker(self) -> &'static str {
        match self {
            Bound::Marker(m) | Bound::After(m) | Bound::Before(m) => m,
        }
    }
}

/// The declaration of a category range.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RangeDecl {
    pub category: Category,
    pub first: Bound,
    pub last: Bound,
}

/// A run of codes deliberately left unassigned within a category.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Reservation {
    pub category: Category,
    pub first: NameCode,
    pub last: NameCode,
}

impl Reservation {
    pub fn contains(&self, code: NameCode) -> bool {
        code.is_in(self.first, self.last)
    }
}

/// The raw declarations a registry is built from.
///
/// `names` lists the substantive names in declaration order, `markers` the
/// First/Last sentinels. `ranges` is in priority order: when classifying a
/// code, earlier ranges win over later ones.
#[derive(Clone, Copy, Debug)]
pub struct Table {
    pub names: &'static [Entry],
    pub markers: &'static [Entry],
    pub ranges: &'static [RangeDecl],
    pub reserved: &'static [Reservation],
}

/// A resolved category range. Covers the codes `first..=last`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CategoryRange {
    pub category: Category,
    pub first: NameCode,
    pub last: NameCode,
}

impl CategoryRange {
    /// Check if `code` lies within the range.
    pub fn contains(&self, code: NameCode) -> bool {
        code.is_in(self.first, self.last)
    }

    /// The number of codes covered by the range. An inverted range is empty.
    pub fn len(&self) -> usize {
        if self.first > self.last {
            return 0;
        }
        (self.last.0 - self.first.0) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Options that control how a registry is built.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BuildOptions {
    /// Reject tables whose names skip codes outside of reservation gaps.
    pub check_contiguity: bool,
    /// Log every resolved category range.
    pub trace: bool,
}

impl Default for BuildOptions {
    fn default() -> BuildOptions {
        BuildOptions {
            check_contiguity: true,
            trace: false,
        }
    }
}

/// A defect in a name table that prevents building a registry from it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum IntegrityError {
    DuplicateName {
        name: &'static str,
    },
    DuplicateCode {
        code: NameCode,
        first: &'static str,
        second: &'static str,
    },
    OutOfOrder {
        name: &'static str,
        code: NameCode,
        previous: &'static str,
        previous_code: NameCode,
    },
    MarkerOutOfRange {
        name: &'static str,
        code: NameCode,
    },
    UnknownMarker {
        category: Category,
        marker: &'static str,
    },
    BoundOutOfRange {
        category: Category,
        marker: &'static str,
    },
    InvertedRange {
        category: Category,
        first: NameCode,
        last: NameCode,
    },
    DuplicateRange {
        category: Category,
    },
    OverlappingRanges {
        first: Category,
        second: Category,
    },
    EscapedRange {
        category: Category,
        parent: Category,
    },
    ReservedInUse {
        name: &'static str,
        code: NameCode,
    },
    ReservedMarker {
        name: &'static str,
        code: NameCode,
    },
    StrayReservation {
        category: Category,
        first: NameCode,
        last: NameCode,
    },
    Gap {
        after: &'static str,
        before: &'static str,
        missing: NameCode,
    },
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::IntegrityError::*;
        match *self {
            DuplicateName { name } => write!(f, "name `{}` is declared more than once", name),
            DuplicateCode {
                code,
                first,
                second,
            } => write!(f, "names `{}` and `{}` share code {}", first, second, code),
            OutOfOrder {
                name,
                code,
                previous,
                previous_code,
            } => write!(
                f,
                "name `{}` has code {}, which does not follow code {} of `{}`",
                name, code, previous_code, previous
            ),
            MarkerOutOfRange { name, code } => write!(
                f,
                "marker `{}` has code {}, which lies outside the declared names",
                name, code
            ),
            UnknownMarker { category, marker } => {
                write!(f, "{} range refers to unknown marker `{}`", category, marker)
            }
            BoundOutOfRange { category, marker } => write!(
                f,
                "bound next to marker `{}` of {} range lies outside the code space",
                marker, category
            ),
            InvertedRange {
                category,
                first,
                last,
            } => write!(f, "{} range is inverted ({} > {})", category, first, last),
            DuplicateRange { category } => {
                write!(f, "{} range is declared more than once", category)
            }
            OverlappingRanges { first, second } => {
                write!(f, "{} and {} ranges overlap", first, second)
            }
            EscapedRange { category, parent } => write!(
                f,
                "{} range is not contained in the {} range",
                category, parent
            ),
            ReservedInUse { name, code } => write!(
                f,
                "name `{}` uses code {} within a reservation gap",
                name, code
            ),
            ReservedMarker { name, code } => write!(
                f,
                "marker `{}` uses code {} within a reservation gap",
                name, code
            ),
            StrayReservation {
                category,
                first,
                last,
            } => write!(
                f,
                "reservation {}..={} does not lie strictly within the {} range",
                first, last, category
            ),
            Gap {
                after,
                before,
                missing,
            } => write!(
                f,
                "code {} between `{}` and `{}` is neither assigned nor reserved",
                missing, after, before
            ),
        }
    }
}

impl std::error::Error for IntegrityError {}

impl From<IntegrityError> for DiagBuilder2 {
    fn from(err: IntegrityError) -> DiagBuilder2 {
        use self::IntegrityError::*;
        let diag = DiagBuilder2::bug(format!("corrupt name table: {}", err));
        let diag = match err {
            DuplicateCode {
                code,
                first,
                second,
            } => diag.entry(first, code.0).entry(second, code.0),
            OutOfOrder {
                name,
                code,
                previous,
                previous_code,
            } => diag.entry(previous, previous_code.0).entry(name, code.0),
            InvertedRange { first, last, .. } => diag
                .add_note(format!("first code is {}", first))
                .add_note(format!("last code is {}", last)),
            ReservedInUse { name, code }
            | ReservedMarker { name, code }
            | MarkerOutOfRange { name, code } => diag.entry(name, code.0),
            Gap { .. } => diag.add_note(
                "new names must be appended with the next free code; declare a reservation to leave codes unused",
            ),
            _ => diag,
        };
        diag.add_note("no lookup in this table can be trusted")
    }
}

/// An immutable mapping between standard names and their codes.
#[derive(Debug)]
pub struct Registry {
    names: &'static [Entry],
    markers: &'static [Entry],
    reserved: &'static [Reservation],
    ranges: Vec<CategoryRange>,
    by_name: HashMap<&'static str, NameCode>,
    by_category: HashMap<Category, usize>,
}

impl Registry {
    /// Build a registry from a table, checking its integrity.
    pub fn build(table: &Table, options: &BuildOptions) -> Result<Registry, IntegrityError> {
        let mut by_name = HashMap::with_capacity(table.names.len() + table.markers.len());
        let mut by_code = HashMap::with_capacity(table.names.len());
        let mut previous: Option<&Entry> = None;
        for entry in table.names {
            if by_name.insert(entry.name, entry.code).is_some() {
                return Err(IntegrityError::DuplicateName { name: entry.name });
            }
            if let Some(first) = by_code.insert(entry.code, entry.name) {
                return Err(IntegrityError::DuplicateCode {
                    code: entry.code,
                    first,
                    second: entry.name,
                });
            }
            if let Some(prev) = previous {
                if entry.code < prev.code {
                    return Err(IntegrityError::OutOfOrder {
                        name: entry.name,
                        code: entry.code,
                        previous: prev.name,
                        previous_code: prev.code,
                    });
                }
            }
            previous = Some(entry);
        }

        // Markers share the name space with the names, but not the code space.
        let last_code = table.names.last().map_or(NameCode(0), |e| e.code);
        let mut markers = HashMap::with_capacity(table.markers.len());
        for marker in table.markers {
            if by_name.insert(marker.name, marker.code).is_some() {
                return Err(IntegrityError::DuplicateName { name: marker.name });
            }
            if marker.code.0 == 0 || marker.code > last_code {
                return Err(IntegrityError::MarkerOutOfRange {
                    name: marker.name,
                    code: marker.code,
                });
            }
            markers.insert(marker.name, marker.code);
        }

        for res in table.reserved {
            if res.first > res.last {
                return Err(IntegrityError::InvertedRange {
                    category: res.category,
                    first: res.first,
                    last: res.last,
                });
            }
            if let Some(entry) = table.names.iter().find(|e| res.contains(e.code)) {
                return Err(IntegrityError::ReservedInUse {
                    name: entry.name,
                    code: entry.code,
                });
            }
            if let Some(marker) = table.markers.iter().find(|m| res.contains(m.code)) {
                return Err(IntegrityError::ReservedMarker {
                    name: marker.name,
                    code: marker.code,
                });
            }
        }

        let mut ranges = Vec::with_capacity(table.ranges.len());
        let mut by_category = HashMap::with_capacity(table.ranges.len());
        for decl in table.ranges {
            let first = resolve_bound(decl.category, decl.first, &markers)?;
            let last = resolve_bound(decl.category, decl.last, &markers)?;
            if first > last {
                return Err(IntegrityError::InvertedRange {
                    category: decl.category,
                    first,
                    last,
                });
            }
            if by_category.insert(decl.category, ranges.len()).is_some() {
                return Err(IntegrityError::DuplicateRange {
                    category: decl.category,
                });
            }
            if options.trace {
                trace!("{} range {}..={}", decl.category, first, last);
            }
            ranges.push(CategoryRange {
                category: decl.category,
                first,
                last,
            });
        }

        // Leaf ranges partition the code space; umbrella ranges cover their
        // children.
        let mut leaves: Vec<&CategoryRange> = ranges
            .iter()
            .filter(|r| !is_umbrella(r.category))
            .collect();
        leaves.sort_by_key(|r| r.first);
        for pair in leaves.windows(2) {
            if pair[1].first <= pair[0].last {
                return Err(IntegrityError::OverlappingRanges {
                    first: pair[0].category,
                    second: pair[1].category,
                });
            }
        }
        for range in &ranges {
            let parent = match range.category.parent() {
                Some(p) => p,
                None => continue,
            };
            if let Some(&idx) = by_category.get(&parent) {
                let outer: &CategoryRange = &ranges[idx];
                if !outer.contains(range.first) || !outer.contains(range.last) {
                    return Err(IntegrityError::EscapedRange {
                        category: range.category,
                        parent,
                    });
                }
            }
        }

        // Reservations sit strictly inside the range of their category, so the
        // range bounds stay classified.
        for res in table.reserved {
            let inside = by_category
                .get(&res.category)
                .map(|&idx| &ranges[idx])
                .map_or(false, |r| r.first < res.first && res.last < r.last);
            if !inside {
                return Err(IntegrityError::StrayReservation {
                    category: res.category,
                    first: res.first,
                    last: res.last,
                });
            }
        }

        // Every code between two names is held by a marker or reserved.
        if options.check_contiguity {
            for pair in table.names.windows(2) {
                let missing = (pair[0].code.0 + 1..pair[1].code.0)
                    .map(NameCode)
                    .filter(|c| !markers.values().any(|m| m == c))
                    .find(|&c| !table.reserved.iter().any(|r| r.contains(c)));
                if let Some(missing) = missing {
                    return Err(IntegrityError::Gap {
                        after: pair[0].name,
                        before: pair[1].name,
                        missing,
                    });
                }
            }
        }

        debug!(
            "built name registry with {} names, {} markers, {} ranges",
            table.names.len(),
            table.markers.len(),
            ranges.len()
        );
        Ok(Registry {
            names: table.names,
            markers: table.markers,
            reserved: table.reserved,
            ranges,
            by_name,
            by_category,
        })
    }

    /// Find the code of a name or marker. The match is exact and case
    /// sensitive. Returns `None` if the name is not a standard name, which
    /// makes it a user identifier.
    pub fn lookup_code(&self, name: &str) -> Option<NameCode> {
        self.by_name.get(name).copied()
    }

    /// Find the name declared with a code. Markers are not considered.
    pub fn name_of(&self, code: NameCode) -> Option<&'static str> {
        self.names
            .binary_search_by_key(&code, |e| e.code)
            .ok()
            .map(|idx| self.names[idx].name)
    }

    /// Classify a code. The ranges are tried in priority order and the first
    /// one containing the code wins. Codes in a reservation gap or outside of
    /// all ranges are unclassified.
    pub fn category_of(&self, code: NameCode) -> Option<Category> {
        self.categories_of(code).next()
    }

    /// All categories whose range contains a code, most specific first.
    pub fn categories_of(&self, code: NameCode) -> impl Iterator<Item = Category> + '_ {
        let reserved = self.is_reserved(code);
        self.ranges
            .iter()
            .filter(move |r| !reserved && r.contains(code))
            .map(|r| r.category)
    }

    /// Check if a code lies within the range of a category.
    pub fn is_in_category(&self, code: NameCode, category: Category) -> bool {
        self.range_of(category).map_or(false, |r| r.contains(code))
    }

    /// Check if a code lies in a reservation gap.
    pub fn is_reserved(&self, code: NameCode) -> bool {
        self.reserved.iter().any(|r| r.contains(code))
    }

    /// The range of a category, if the table declares one.
    pub fn range_of(&self, category: Category) -> Option<&CategoryRange> {
        self.by_category.get(&category).map(|&idx| &self.ranges[idx])
    }

    /// All category ranges, in priority order.
    pub fn ranges(&self) -> &[CategoryRange] {
        &self.ranges
    }

    /// The reservation gaps of the table.
    pub fn reserved(&self) -> &'static [Reservation] {
        self.reserved
    }

    /// Iterate over all names and their codes, in declaration order.
    pub fn all_names(
        &self,
    ) -> impl ExactSizeIterator<Item = (&'static str, NameCode)> + Clone + 'static {
        let names: &'static [Entry] = self.names;
        names.iter().map(|e| (e.name, e.code))
    }

    /// Iterate over all markers and their codes, in declaration order.
    pub fn markers(
        &self,
    ) -> impl ExactSizeIterator<Item = (&'static str, NameCode)> + Clone + 'static {
        let markers: &'static [Entry] = self.markers;
        markers.iter().map(|e| (e.name, e.code))
    }

    /// The number of names, excluding markers.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn is_umbrella(category: Category) -> bool {
    Category::ALL.iter().any(|c| c.parent() == Some(category))
}

fn resolve_bound(
    category: Category,
    bound: Bound,
    markers: &HashMap<&'static str, NameCode>,
) -> Result<NameCode, IntegrityError> {
    let marker = bound.marker();
    let code = match markers.get(marker) {
        Some(&code) => code,
        None => return Err(IntegrityError::UnknownMarker { category, marker }),
    };
    let resolved = match bound {
        Bound::Marker(_) => Some(code.0),
        Bound::After(_) => code.0.checked_add(1),
        Bound::Before(_) => code.0.checked_sub(1).filter(|&c| c > 0),
    };
    resolved
        .map(NameCode)
        .ok_or(IntegrityError::BoundOutOfRange { category, marker })
}

/// Check if `code` lies within `first..=last`.
pub fn is_in_range(code: NameCode, first: NameCode, last: NameCode) -> bool {
    code.is_in(first, last)
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    match Registry::build(&table::STD_NAMES, &BuildOptions::default()) {
        Ok(registry) => registry,
        Err(err) => {
            error!("{}", err);
            panic!("{}", DiagBuilder2::from(err));
        }
    }
});

/// Get the process-wide registry of the standard names.
///
/// The registry is built and validated on first access. A corrupt table is a
/// compiler bug and aborts with a panic.
pub fn get_registry() -> &'static Registry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    static NAMES: &[Entry] = &[
        Entry::new("Foo", 10),
        Entry::new("Bar", 11),
        Entry::new("Baz", 12),
        Entry::new("Qux", 16),
    ];

    static MARKERS: &[Entry] = &[
        Entry::new("First_Psl", 10),
        Entry::new("Last_Psl", 12),
        Entry::new("First_Edif", 13),
        Entry::new("Last_Edif", 16),
    ];

    static RANGES: &[RangeDecl] = &[
        RangeDecl {
            category: Category::Psl,
            first: Bound::Marker("First_Psl"),
            last: Bound::Marker("Last_Psl"),
        },
        RangeDecl {
            category: Category::Edif,
            first: Bound::Marker("First_Edif"),
            last: Bound::Marker("Last_Edif"),
        },
    ];

    static RESERVED: &[Reservation] = &[Reservation {
        category: Category::Edif,
        first: NameCode(14),
        last: NameCode(15),
    }];

    fn table() -> Table {
        Table {
            names: NAMES,
            markers: MARKERS,
            ranges: RANGES,
            reserved: RESERVED,
        }
    }

    fn build(table: &Table) -> Result<Registry, IntegrityError> {
        Registry::build(table, &BuildOptions::default())
    }

    #[test]
    fn small_table() {
        let reg = build(&table()).unwrap();
        assert_eq!(reg.len(), 4);
        assert_eq!(reg.lookup_code("Bar"), Some(NameCode(11)));
        assert_eq!(reg.lookup_code("bar"), None);
        assert_eq!(reg.lookup_code("First_Edif"), Some(NameCode(13)));
        assert_eq!(reg.name_of(NameCode(16)), Some("Qux"));
        assert_eq!(reg.name_of(NameCode(13)), None);
        assert_eq!(reg.category_of(NameCode(12)), Some(Category::Psl));
        assert_eq!(reg.category_of(NameCode(13)), Some(Category::Edif));
        assert_eq!(reg.category_of(NameCode(14)), None);
        assert_eq!(reg.category_of(NameCode(16)), Some(Category::Edif));
        assert_eq!(reg.category_of(NameCode(17)), None);
        assert!(reg.is_in_category(NameCode(14), Category::Edif));
        assert!(reg.is_reserved(NameCode(14)));
    }

    #[test]
    fn duplicate_name() {
        static NAMES: &[Entry] = &[Entry::new("Foo", 10), Entry::new("Foo", 11)];
        let err = build(&Table {
            names: NAMES,
            ..table()
        })
        .unwrap_err();
        assert_eq!(err, IntegrityError::DuplicateName { name: "Foo" });
    }

    #[test]
    fn marker_clashing_with_name() {
        static MARKERS: &[Entry] = &[Entry::new("Bar", 11)];
        let err = build(&Table {
            markers: MARKERS,
            ranges: &[],
            ..table()
        })
        .unwrap_err();
        assert_eq!(err, IntegrityError::DuplicateName { name: "Bar" });
    }

    #[test]
    fn duplicate_code() {
        static NAMES: &[Entry] = &[
            Entry::new("Foo", 10),
            Entry::new("Bar", 11),
            Entry::new("Baz", 10),
        ];
        let err = build(&Table {
            names: NAMES,
            ..table()
        })
        .unwrap_err();
        assert_eq!(
            err,
            IntegrityError::DuplicateCode {
                code: NameCode(10),
                first: "Foo",
                second: "Baz",
            }
        );
    }

    #[test]
    fn out_of_order() {
        static NAMES: &[Entry] = &[Entry::new("Foo", 11), Entry::new("Bar", 10)];
        let err = build(&Table {
            names: NAMES,
            ..table()
        })
        .unwrap_err();
        assert_eq!(
            err,
            IntegrityError::OutOfOrder {
                name: "Bar",
                code: NameCode(10),
                previous: "Foo",
                previous_code: NameCode(11),
            }
        );
    }

    #[test]
    fn inverted_range() {
        static RANGES: &[RangeDecl] = &[RangeDecl {
            category: Category::Psl,
            first: Bound::Marker("Last_Psl"),
            last: Bound::Marker("First_Psl"),
        }];
        let err = build(&Table {
            ranges: RANGES,
            ..table()
        })
        .unwrap_err();
        assert_eq!(
            err,
            IntegrityError::InvertedRange {
                category: Category::Psl,
                first: NameCode(12),
                last: NameCode(10),
            }
        );
    }

    #[test]
    fn unknown_marker() {
        static RANGES: &[RangeDecl] = &[RangeDecl {
            category: Category::Psl,
            first: Bound::Marker("First_Psl"),
            last: Bound::Marker("Last_PSL"),
        }];
        let err = build(&Table {
            ranges: RANGES,
            ..table()
        })
        .unwrap_err();
        assert_eq!(
            err,
            IntegrityError::UnknownMarker {
                category: Category::Psl,
                marker: "Last_PSL",
            }
        );
    }

    #[test]
    fn bound_before_first_code() {
        static MARKERS: &[Entry] = &[Entry::new("First", 1)];
        static RANGES: &[RangeDecl] = &[RangeDecl {
            category: Category::Character,
            first: Bound::Before("First"),
            last: Bound::Marker("First"),
        }];
        let err = build(&Table {
            markers: MARKERS,
            ranges: RANGES,
            ..table()
        })
        .unwrap_err();
        assert_eq!(
            err,
            IntegrityError::BoundOutOfRange {
                category: Category::Character,
                marker: "First",
            }
        );
    }

    #[test]
    fn overlapping_ranges() {
        static RANGES: &[RangeDecl] = &[
            RangeDecl {
                category: Category::Psl,
                first: Bound::Marker("First_Psl"),
                last: Bound::After("Last_Psl"),
            },
            RangeDecl {
                category: Category::Edif,
                first: Bound::Marker("First_Edif"),
                last: Bound::Marker("Last_Edif"),
            },
        ];
        let err = build(&Table {
            ranges: RANGES,
            ..table()
        })
        .unwrap_err();
        assert_eq!(
            err,
            IntegrityError::OverlappingRanges {
                first: Category::Psl,
                second: Category::Edif,
            }
        );
    }

    #[test]
    fn duplicate_range() {
        static RANGES: &[RangeDecl] = &[
            RangeDecl {
                category: Category::Psl,
                first: Bound::Marker("First_Psl"),
                last: Bound::Marker("Last_Psl"),
            },
            RangeDecl {
                category: Category::Psl,
                first: Bound::Marker("First_Edif"),
                last: Bound::Marker("Last_Edif"),
            },
        ];
        let err = build(&Table {
            ranges: RANGES,
            ..table()
        })
        .unwrap_err();
        assert_eq!(
            err,
            IntegrityError::DuplicateRange {
                category: Category::Psl
            }
        );
    }

    #[test]
    fn escaped_range() {
        static MARKERS: &[Entry] = &[
            Entry::new("First_Keyword", 10),
            Entry::new("Last_Keyword", 11),
            Entry::new("Last_Vhdl87", 12),
        ];
        static RANGES: &[RangeDecl] = &[
            RangeDecl {
                category: Category::Vhdl87Keyword,
                first: Bound::Marker("First_Keyword"),
                last: Bound::Marker("Last_Vhdl87"),
            },
            RangeDecl {
                category: Category::Keyword,
                first: Bound::Marker("First_Keyword"),
                last: Bound::Marker("Last_Keyword"),
            },
        ];
        let err = build(&Table {
            markers: MARKERS,
            ranges: RANGES,
            ..table()
        })
        .unwrap_err();
        assert_eq!(
            err,
            IntegrityError::EscapedRange {
                category: Category::Vhdl87Keyword,
                parent: Category::Keyword,
            }
        );
    }

    #[test]
    fn umbrella_overlaps_its_children() {
        static MARKERS: &[Entry] = &[
            Entry::new("First_Keyword", 10),
            Entry::new("Last_Vhdl87", 11),
            Entry::new("Last_Keyword", 12),
            Entry::new("First_Edif", 13),
            Entry::new("Last_Edif", 16),
        ];
        static RANGES: &[RangeDecl] = &[
            RangeDecl {
                category: Category::Vhdl87Keyword,
                first: Bound::Marker("First_Keyword"),
                last: Bound::Marker("Last_Vhdl87"),
            },
            RangeDecl {
                category: Category::Vhdl93Keyword,
                first: Bound::After("Last_Vhdl87"),
                last: Bound::Marker("Last_Keyword"),
            },
            RangeDecl {
                category: Category::Edif,
                first: Bound::Marker("First_Edif"),
                last: Bound::Marker("Last_Edif"),
            },
            RangeDecl {
                category: Category::Keyword,
                first: Bound::Marker("First_Keyword"),
                last: Bound::Marker("Last_Keyword"),
            },
        ];
        let reg = build(&Table {
            markers: MARKERS,
            ranges: RANGES,
            ..table()
        })
        .unwrap();
        assert_eq!(reg.category_of(NameCode(12)), Some(Category::Vhdl93Keyword));
        assert_eq!(reg.category_of(NameCode(13)), Some(Category::Edif));
        assert_eq!(
            reg.categories_of(NameCode(11)).collect::<Vec<_>>(),
            vec![Category::Vhdl87Keyword, Category::Keyword]
        );
    }

    #[test]
    fn reservation_covering_a_marker() {
        static RESERVED: &[Reservation] = &[Reservation {
            category: Category::Psl,
            first: NameCode(13),
            last: NameCode(13),
        }];
        let err = build(&Table {
            reserved: RESERVED,
            ..table()
        })
        .unwrap_err();
        assert_eq!(
            err,
            IntegrityError::ReservedMarker {
                name: "First_Edif",
                code: NameCode(13),
            }
        );
    }

    #[test]
    fn reservation_outside_its_category() {
        static RESERVED: &[Reservation] = &[Reservation {
            category: Category::Psl,
            first: NameCode(14),
            last: NameCode(15),
        }];
        let err = build(&Table {
            reserved: RESERVED,
            ..table()
        })
        .unwrap_err();
        assert_eq!(
            err,
            IntegrityError::StrayReservation {
                category: Category::Psl,
                first: NameCode(14),
                last: NameCode(15),
            }
        );

        // A category without a range cannot hold reservations.
        static UNRANGED: &[Reservation] = &[Reservation {
            category: Category::Bsv,
            first: NameCode(14),
            last: NameCode(15),
        }];
        let err = build(&Table {
            reserved: UNRANGED,
            ..table()
        })
        .unwrap_err();
        assert!(matches!(err, IntegrityError::StrayReservation { .. }));
    }

    #[test]
    fn marker_codes_must_be_assigned() {
        static ZERO: &[Entry] = &[Entry::new("First_Psl", 0)];
        let err = build(&Table {
            markers: ZERO,
            ranges: &[],
            reserved: &[],
            ..table()
        })
        .unwrap_err();
        assert_eq!(
            err,
            IntegrityError::MarkerOutOfRange {
                name: "First_Psl",
                code: NameCode(0),
            }
        );

        static BEYOND: &[Entry] = &[Entry::new("Last_Edif", 17)];
        let err = build(&Table {
            markers: BEYOND,
            ranges: &[],
            reserved: &[],
            ..table()
        })
        .unwrap_err();
        assert_eq!(
            err,
            IntegrityError::MarkerOutOfRange {
                name: "Last_Edif",
                code: NameCode(17),
            }
        );
    }

    #[test]
    fn inverted_range_is_empty() {
        let range = CategoryRange {
            category: Category::Psl,
            first: NameCode(12),
            last: NameCode(10),
        };
        assert_eq!(range.len(), 0);
        assert!(range.is_empty());
        let range = CategoryRange {
            first: NameCode(10),
            last: NameCode(12),
            ..range
        };
        assert_eq!(range.len(), 3);
        assert!(!range.is_empty());
    }

    #[test]
    fn reserved_in_use() {
        static RESERVED: &[Reservation] = &[Reservation {
            category: Category::Psl,
            first: NameCode(11),
            last: NameCode(11),
        }];
        let err = build(&Table {
            reserved: RESERVED,
            ..table()
        })
        .unwrap_err();
        assert_eq!(
            err,
            IntegrityError::ReservedInUse {
                name: "Bar",
                code: NameCode(11),
            }
        );
    }

    #[test]
    fn gap_without_reservation() {
        let err = build(&Table {
            reserved: &[],
            ..table()
        })
        .unwrap_err();
        assert_eq!(
            err,
            IntegrityError::Gap {
                after: "Baz",
                before: "Qux",
                missing: NameCode(14),
            }
        );
        let lenient = BuildOptions {
            check_contiguity: false,
            ..BuildOptions::default()
        };
        let reg = Registry::build(
            &Table {
                reserved: &[],
                ..table()
            },
            &lenient,
        )
        .unwrap();
        assert_eq!(reg.category_of(NameCode(14)), Some(Category::Edif));
    }

    #[test]
    fn errors_become_bug_diagnostics() {
        let diag = DiagBuilder2::from(IntegrityError::DuplicateCode {
            code: NameCode(10),
            first: "Foo",
            second: "Baz",
        });
        assert_eq!(
            diag.get_severity(),
            crate::common::errors::Severity::Bug
        );
        assert_eq!(
            diag.get_message(),
            "corrupt name table: names `Foo` and `Baz` share code 10"
        );
        assert_eq!(diag.get_segments().len(), 3);
    }

    #[test]
    fn traced_build() {
        let opts = BuildOptions {
            trace: true,
            ..BuildOptions::default()
        };
        assert!(Registry::build(&table(), &opts).is_ok());
    }
}
