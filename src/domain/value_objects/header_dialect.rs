//! Which firmware framework the generated headers target.

use std::fmt;

/// C/C++ flavour of the generated asset headers
///
/// - `Arduino`: C++ with `PROGMEM` placement and `strcmp_P` lookups
/// - `EspIdf`: plain C (`struct EmbeddedFile`, `strcmp`, `NULL`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderDialect {
    #[default]
    Arduino,
    EspIdf,
}

impl HeaderDialect {
    pub fn from_idf_flag(idf: bool) -> Self {
        if idf {
            HeaderDialect::EspIdf
        } else {
            HeaderDialect::Arduino
        }
    }

    /// Detect the dialect from a PlatformIO `framework` value.
    ///
    /// `espidf` alone selects ESP-IDF; `arduino, espidf` still builds
    /// through the Arduino core.
    pub fn from_framework(framework: &str) -> Self {
        let frameworks: Vec<String> = framework
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_ascii_lowercase())
            .collect();

        let has = |name: &str| frameworks.iter().any(|f| f == name);
        if has("espidf") && !has("arduino") {
            HeaderDialect::EspIdf
        } else {
            HeaderDialect::Arduino
        }
    }

    pub fn is_idf(&self) -> bool {
        matches!(self, HeaderDialect::EspIdf)
    }
}

impl fmt::Display for HeaderDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderDialect::Arduino => f.write_str("arduino"),
            HeaderDialect::EspIdf => f.write_str("esp-idf"),
        }
    }
}
