// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// The few user-facing strings the engine itself produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Tr,
    En,
}

impl Lang {
    /// Unknown codes fall back to Turkish.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "en" => Lang::En,
            _ => Lang::Tr,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Lang::Tr => "tr",
            Lang::En => "en",
        }
    }

    pub fn salary_title(&self) -> &'static str {
        match self {
            Lang::Tr => "Maaş",
            Lang::En => "Salary",
        }
    }

    pub fn payment_today(&self) -> &'static str {
        match self {
            Lang::Tr => "Bugün ödeme günü",
            Lang::En => "Payment due today",
        }
    }

    pub fn due_in_days(&self, days: u32) -> String {
        match self {
            Lang::Tr => format!("{} gün sonra ödeme", days),
            Lang::En => format!("due in {} days", days),
        }
    }

    pub fn overtime_title(&self, hours: u32, minutes: u32) -> String {
        let (label, h, m) = match self {
            Lang::Tr => ("Mesai", "s", "dk"),
            Lang::En => ("Overtime", "h", "m"),
        };
        if minutes > 0 {
            format!("{} ({}{} {}{})", label, hours, h, minutes, m)
        } else {
            format!("{} ({}{})", label, hours, h)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overtime_titles_embed_duration() {
        assert_eq!(Lang::Tr.overtime_title(2, 30), "Mesai (2s 30dk)");
        assert_eq!(Lang::Tr.overtime_title(3, 0), "Mesai (3s)");
        assert_eq!(Lang::En.overtime_title(1, 15), "Overtime (1h 15m)");
    }

    #[test]
    fn unknown_language_falls_back_to_turkish() {
        assert_eq!(Lang::from_code("de"), Lang::Tr);
        assert_eq!(Lang::from_code("EN"), Lang::En);
    }
}
