//! Live examples behind the Control Structures topic.
//!
//! Each example pairs a VB.NET snippet with the output the snippet would
//! print for the current input.

use std::fmt;
use std::str::FromStr;

pub const MAX_AGE: u8 = 120;
pub const DEFAULT_AGE: u8 = 20;

pub const MIN_LOOP_COUNT: u32 = 1;
pub const MAX_LOOP_COUNT: u32 = 10;
pub const DEFAULT_LOOP_COUNT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    IfThenElse,
    ForLoop,
    SelectCase,
}

impl DemoKind {
    pub const ALL: [DemoKind; 3] = [DemoKind::IfThenElse, DemoKind::ForLoop, DemoKind::SelectCase];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DemoKind::IfThenElse => "If-Then-Else",
            DemoKind::ForLoop => "For Loop",
            DemoKind::SelectCase => "Select Case",
        }
    }
}

//
// ─── IF-THEN-ELSE ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    Adult,
    Teenager,
    Child,
}

impl AgeGroup {
    #[must_use]
    pub fn classify(age: u8) -> Self {
        if age >= 18 {
            AgeGroup::Adult
        } else if age >= 13 {
            AgeGroup::Teenager
        } else {
            AgeGroup::Child
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::Adult => "Adult",
            AgeGroup::Teenager => "Teenager",
            AgeGroup::Child => "Child",
        }
    }

    #[must_use]
    pub fn range(self) -> &'static str {
        match self {
            AgeGroup::Adult => "18 or older",
            AgeGroup::Teenager => "13-17",
            AgeGroup::Child => "under 13",
        }
    }
}

/// Parse a raw age field, clamping to `0..=120`. Unparseable input yields `None`.
#[must_use]
pub fn parse_age(raw: &str) -> Option<u8> {
    let value: i64 = raw.trim().parse().ok()?;
    u8::try_from(value.clamp(0, i64::from(MAX_AGE))).ok()
}

#[must_use]
pub fn if_snippet(age: u8) -> String {
    format!(
        "' If-Then-Else Statement\n\
         Dim age As Integer = {age}\n\
         \n\
         If age >= 18 Then\n    Console.WriteLine(\"Adult\")\n\
         ElseIf age >= 13 Then\n    Console.WriteLine(\"Teenager\")\n\
         Else\n    Console.WriteLine(\"Child\")\n\
         End If"
    )
}

#[must_use]
pub fn if_explanation(age: u8) -> String {
    let group = AgeGroup::classify(age);
    format!(
        "Age {age} is classified as {} {} ({})",
        if group == AgeGroup::Adult { "an" } else { "a" },
        group.label(),
        group.range()
    )
}

//
// ─── FOR LOOP ──────────────────────────────────────────────────────────────────
//

#[must_use]
pub fn clamp_loop_count(count: u32) -> u32 {
    count.clamp(MIN_LOOP_COUNT, MAX_LOOP_COUNT)
}

/// Lines printed by `For i = 1 To count`.
#[must_use]
pub fn loop_output(count: u32) -> Vec<u32> {
    (1..=clamp_loop_count(count)).collect()
}

#[must_use]
pub fn for_snippet(count: u32) -> String {
    format!(
        "' For Loop Example\nFor i As Integer = 1 To {}\n    Console.WriteLine(i)\nNext",
        clamp_loop_count(count)
    )
}

//
// ─── SELECT CASE ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Grade {
    #[default]
    A,
    B,
    C,
    D,
}

impl Grade {
    pub const ALL: [Grade; 4] = [Grade::A, Grade::B, Grade::C, Grade::D];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Grade::A => "Excellent!",
            Grade::B => "Good job!",
            Grade::C => "Fair",
            Grade::D => "Need improvement",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .into_iter()
            .find(|grade| grade.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

#[must_use]
pub fn select_snippet(grade: Grade) -> String {
    let mut out = format!(
        "' Select Case Statement\nDim grade As String = \"{grade}\"\n\nSelect Case grade\n"
    );
    for case in Grade::ALL {
        out.push_str(&format!(
            "    Case \"{case}\"\n        Console.WriteLine(\"{}\")\n",
            case.message()
        ));
    }
    out.push_str("End Select");
    out
}
