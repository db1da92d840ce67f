// Copyright (c) 2016-2020 Fabian Schuiki

//! Utilities to implement diagnostics and error reporting facilities.

use std::fmt;

/// A structured diagnostic message.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagBuilder2 {
    pub severity: Severity,
    pub message: String,
    pub segments: Vec<DiagSegment>,
}

/// An additional piece of information attached to a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagSegment {
    /// Points at a declaration in a name table.
    Entry(String, u32),
    Note(String),
}

impl DiagBuilder2 {
    pub fn new<S: Into<String>>(severity: Severity, message: S) -> DiagBuilder2 {
        DiagBuilder2 {
            severity: severity,
            message: message.into(),
            segments: Vec::new(),
        }
    }

    pub fn bug<S: Into<String>>(message: S) -> DiagBuilder2 {
        DiagBuilder2::new(Severity::Bug, message)
    }

    pub fn segment(self, segment: DiagSegment) -> DiagBuilder2 {
        let mut segments = self.segments;
        segments.push(segment);
        DiagBuilder2 {
            segments: segments,
            ..self
        }
    }

    /// Point the diagnostic at the declaration of `name` with code `code`.
    pub fn entry<S: Into<String>>(self, name: S, code: u32) -> DiagBuilder2 {
        self.segment(DiagSegment::Entry(name.into(), code))
    }

    pub fn add_note<S: Into<String>>(self, message: S) -> DiagBuilder2 {
        self.segment(DiagSegment::Note(message.into()))
    }

    pub fn get_severity(&self) -> Severity {
        self.severity
    }

    pub fn get_message(&self) -> &String {
        &self.message
    }

    pub fn get_segments(&self) -> &[DiagSegment] {
        &self.segments
    }
}

/// The severity of a diagnostic. Name table defects are internal errors and
/// are always reported as bugs.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Severity {
    Bug,
}

impl Severity {
    pub fn to_str(self) -> &'static str {
        match self {
            Severity::Bug => "compiler bug",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl fmt::Display for DiagBuilder2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let colorcode = match self.get_severity() {
            Severity::Bug => "\x1B[31;1m",
        };
        write!(
            f,
            "{}{}:\x1B[m\x1B[1m {}\x1B[m\n",
            colorcode,
            self.get_severity(),
            self.get_message()
        )?;

        for segment in &self.segments {
            match *segment {
                DiagSegment::Entry(ref name, code) => {
                    write!(f, "  --> {}{}\x1B[m = {}\n", colorcode, name, code)?
                }
                DiagSegment::Note(ref message) => {
                    write!(f, "   = \x1B[1mnote:\x1B[m {}\n", message)?
                }
            }
        }

        if self.get_severity() == Severity::Bug {
            write!(f, "\nYou have encountered a compiler bug. Sorry about that! We would appreciate if you open an issue [1] and describe how you triggered the bug. Thanks!\n")?;
            write!(f, "[1]: https://github.com/fabianschuiki/moore\n")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_segments() {
        let diag = DiagBuilder2::bug("duplicate name `Foo`")
            .entry("Foo", 12)
            .add_note("names must be unique");
        assert_eq!(diag.get_severity(), Severity::Bug);
        assert_eq!(Severity::Bug.to_str(), "compiler bug");
        assert_eq!(diag.get_message(), "duplicate name `Foo`");
        assert_eq!(
            diag.get_segments(),
            &[
                DiagSegment::Entry("Foo".into(), 12),
                DiagSegment::Note("names must be unique".into()),
            ]
        );
    }

    #[test]
    fn display_mentions_everything() {
        let text = DiagBuilder2::bug("range inverted")
            .entry("First_Foo", 20)
            .add_note("swap the markers")
            .to_string();
        assert!(text.contains("compiler bug"));
        assert!(text.contains("range inverted"));
        assert!(text.contains("First_Foo"));
        assert!(text.contains("= 20"));
        assert!(text.contains("swap the markers"));
        assert!(text.contains("open an issue"));
    }
}
