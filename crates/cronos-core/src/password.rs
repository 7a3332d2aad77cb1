//! Password strength rating for the registration form.
//!
//! Five requirements are checked and the number met decides the level:
//! two or fewer is weak, three fair, four good, all five strong.

use std::fmt;

/// Special characters that count toward the special-character requirement
const SPECIAL_CHARS: &str = "@$!%*?&";

/// Minimum length for the length requirement
const STRONG_MIN_LENGTH: usize = 8;

pub struct Requirement {
    pub label: &'static str,
    test: fn(&str) -> bool,
}

impl Requirement {
    pub fn is_met(&self, password: &str) -> bool {
        (self.test)(password)
    }
}

pub const REQUIREMENTS: [Requirement; 5] = [
    Requirement {
        label: "At least 8 characters",
        test: |p| p.chars().count() >= STRONG_MIN_LENGTH,
    },
    Requirement {
        label: "One uppercase letter",
        test: |p| p.chars().any(|c| c.is_ascii_uppercase()),
    },
    Requirement {
        label: "One lowercase letter",
        test: |p| p.chars().any(|c| c.is_ascii_lowercase()),
    },
    Requirement {
        label: "One number",
        test: |p| p.chars().any(|c| c.is_ascii_digit()),
    },
    Requirement {
        label: "One special character (@$!%*?&)",
        test: |p| p.chars().any(|c| SPECIAL_CHARS.contains(c)),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl Strength {
    fn from_met(met: usize) -> Self {
        match met {
            0..=2 => Strength::Weak,
            3 => Strength::Fair,
            4 => Strength::Good,
            _ => Strength::Strong,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub strength: Strength,
    /// Each requirement's label and whether it is met, in display order
    pub checklist: Vec<(&'static str, bool)>,
}

impl StrengthReport {
    pub fn met(&self) -> usize {
        self.checklist.iter().filter(|(_, met)| *met).count()
    }
}

/// Rate a password. An empty password gets no rating at all.
pub fn evaluate(password: &str) -> Option<StrengthReport> {
    if password.is_empty() {
        return None;
    }
    let checklist: Vec<_> = REQUIREMENTS
        .iter()
        .map(|req| (req.label, req.is_met(password)))
        .collect();
    let met = checklist.iter().filter(|(_, met)| *met).count();
    Some(StrengthReport {
        strength: Strength::from_met(met),
        checklist,
    })
}
