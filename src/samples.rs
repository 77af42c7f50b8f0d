//! Built-in example patterns.

/// A ready-made pattern with a short title and summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub title: &'static str,
    pub pattern: &'static str,
    pub summary: &'static str,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        title: "Email Validation",
        pattern: r"^\w+@[a-zA-Z_]+?\.[a-zA-Z]{2,3}$",
        summary: "Matches standard email addresses",
    },
    Sample {
        title: "ID Number",
        pattern: r"^[A-Z]\d{8}$",
        summary: "Matches ID format with 1 letter and 8 digits",
    },
    Sample {
        title: "SSN Format",
        pattern: r"\d{3}-\d{2}-\d{4}",
        summary: "Matches Social Security Number format",
    },
    Sample {
        title: "Hex Color",
        pattern: r"^#?([a-fA-F0-9]{6}|[a-fA-F0-9]{3})$",
        summary: "Matches hex color codes with or without #",
    },
    Sample {
        title: "Password Strength",
        pattern: r"^(?=.*[A-Za-z])(?=.*\d)[A-Za-z\d]{8,}$",
        summary: "Matches passwords with letters and numbers",
    },
];
