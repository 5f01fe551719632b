//! Font descriptors read from system-font modifiers.

use nodelens_value::Value;

/// Font weight, parsed from the stored case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    UltraLight,
    Thin,
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl FontWeight {
    pub fn from_name(name: &str) -> Option<FontWeight> {
        match name {
            "ultraLight" => Some(FontWeight::UltraLight),
            "thin" => Some(FontWeight::Thin),
            "light" => Some(FontWeight::Light),
            "regular" => Some(FontWeight::Regular),
            "medium" => Some(FontWeight::Medium),
            "semibold" => Some(FontWeight::Semibold),
            "bold" => Some(FontWeight::Bold),
            "heavy" => Some(FontWeight::Heavy),
            "black" => Some(FontWeight::Black),
            _ => None,
        }
    }

    /// Parse from a stored `Weight` case value.
    pub fn from_value(value: &Value) -> Option<FontWeight> {
        match value {
            Value::Case(c) => FontWeight::from_name(&c.case_name),
            _ => None,
        }
    }
}

/// Font design, parsed from the stored case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontDesign {
    Default,
    Serif,
    Rounded,
    Monospaced,
}

impl FontDesign {
    pub fn from_name(name: &str) -> Option<FontDesign> {
        match name {
            "default" => Some(FontDesign::Default),
            "serif" => Some(FontDesign::Serif),
            "rounded" => Some(FontDesign::Rounded),
            "monospaced" => Some(FontDesign::Monospaced),
            _ => None,
        }
    }

    pub fn from_value(value: &Value) -> Option<FontDesign> {
        match value {
            Value::Case(c) => FontDesign::from_name(&c.case_name),
            _ => None,
        }
    }
}

/// A system-font descriptor: size, weight, design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontDescriptor {
    pub size: f64,
    pub weight: FontWeight,
    pub design: FontDesign,
}
