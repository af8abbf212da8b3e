//! Parameter and element identifiers
//!
//! Keys use a slash-delimited canonical form: `system/element/parameter` with
//! an optional `/index` suffix for table cells. The index is everything after
//! the third slash, so it may itself contain slashes.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing a [`ParameterKey`] from its string form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    /// The input was empty or whitespace only
    #[error("Parameter key cannot be empty")]
    Empty,

    /// A required component was missing
    #[error("Parameter key '{key}' is missing the {component} id")]
    MissingComponent {
        /// The key as supplied
        key: String,
        /// Name of the missing component
        component: &'static str,
    },

    /// A numeric component could not be parsed
    #[error("Parameter key '{key}' has an invalid {component} id '{value}'")]
    InvalidComponent {
        /// The key as supplied
        key: String,
        /// Name of the offending component
        component: &'static str,
        /// The text that failed to parse
        value: String,
        /// Underlying integer parse failure
        #[source]
        source: ParseIntError,
    },
}

/// Identifies a monitored element: management-system id plus element id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementKey {
    /// Management-system identifier
    pub system_id: u32,
    /// Element identifier within the management system
    pub element_id: u32,
}

impl ElementKey {
    /// Create a new element key
    pub fn new(system_id: u32, element_id: u32) -> Self {
        Self {
            system_id,
            element_id,
        }
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.system_id, self.element_id)
    }
}

/// Identifies a monitored parameter
///
/// Equality is structural. An empty table index is normalized to `None`, so
/// `100/5/3` and `100/5/3/` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterKey {
    system_id: u32,
    element_id: u32,
    parameter_id: u32,
    table_index: Option<String>,
}

impl ParameterKey {
    /// Create a key for a standalone (non-table) parameter
    pub fn new(system_id: u32, element_id: u32, parameter_id: u32) -> Self {
        Self {
            system_id,
            element_id,
            parameter_id,
            table_index: None,
        }
    }

    /// Create a key for a table cell
    ///
    /// An empty index yields the same key as [`ParameterKey::new`].
    pub fn with_table_index(
        system_id: u32,
        element_id: u32,
        parameter_id: u32,
        table_index: impl Into<String>,
    ) -> Self {
        let table_index = table_index.into();
        Self {
            system_id,
            element_id,
            parameter_id,
            table_index: (!table_index.is_empty()).then_some(table_index),
        }
    }

    /// Parse a key from its canonical string form
    ///
    /// # Examples
    ///
    /// ```
    /// use tsr_domain::ParameterKey;
    ///
    /// let key = ParameterKey::parse("100/5/3").unwrap();
    /// assert_eq!(key.element_id(), 5);
    /// assert_eq!(key.table_index_or_empty(), "");
    /// ```
    pub fn parse(s: &str) -> Result<Self, KeyParseError> {
        let key = s.trim();
        if key.is_empty() {
            return Err(KeyParseError::Empty);
        }

        let mut parts = key.splitn(4, '/');
        let system_id = parse_component(key, parts.next(), "system")?;
        let element_id = parse_component(key, parts.next(), "element")?;
        let parameter_id = parse_component(key, parts.next(), "parameter")?;
        let table_index = parts.next().unwrap_or_default();

        Ok(Self::with_table_index(
            system_id,
            element_id,
            parameter_id,
            table_index,
        ))
    }

    /// Management-system identifier
    pub fn system_id(&self) -> u32 {
        self.system_id
    }

    /// Element identifier
    pub fn element_id(&self) -> u32 {
        self.element_id
    }

    /// Parameter identifier
    pub fn parameter_id(&self) -> u32 {
        self.parameter_id
    }

    /// Table-instance index, if this key addresses a table cell
    pub fn table_index(&self) -> Option<&str> {
        self.table_index.as_deref()
    }

    /// Table-instance index, or `""` when this is not a table cell
    pub fn table_index_or_empty(&self) -> &str {
        self.table_index().unwrap_or("")
    }

    /// The element hosting this parameter
    pub fn element(&self) -> ElementKey {
        ElementKey::new(self.system_id, self.element_id)
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.system_id, self.element_id, self.parameter_id
        )?;
        if let Some(index) = &self.table_index {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

impl FromStr for ParameterKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_component(
    key: &str,
    part: Option<&str>,
    component: &'static str,
) -> Result<u32, KeyParseError> {
    let value = match part.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => {
            return Err(KeyParseError::MissingComponent {
                key: key.to_string(),
                component,
            })
        }
    };

    value
        .parse::<u32>()
        .map_err(|source| KeyParseError::InvalidComponent {
            key: key.to_string(),
            component,
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_standalone_parameter() {
        let key = ParameterKey::parse("100/5/3").unwrap();
        assert_eq!(key.system_id(), 100);
        assert_eq!(key.element_id(), 5);
        assert_eq!(key.parameter_id(), 3);
        assert_eq!(key.table_index(), None);
        assert_eq!(key.to_string(), "100/5/3");
    }

    #[test]
    fn test_parse_table_cell_keeps_slashes_in_index() {
        let key = ParameterKey::parse("100/5/1003/eth0/1").unwrap();
        assert_eq!(key.parameter_id(), 1003);
        assert_eq!(key.table_index(), Some("eth0/1"));
        assert_eq!(key.to_string(), "100/5/1003/eth0/1");
    }

    #[test]
    fn test_empty_index_is_no_index() {
        let trailing = ParameterKey::parse("100/5/3/").unwrap();
        assert_eq!(trailing, ParameterKey::new(100, 5, 3));
        assert_eq!(
            ParameterKey::with_table_index(100, 5, 3, ""),
            ParameterKey::new(100, 5, 3)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(ParameterKey::parse("   "), Err(KeyParseError::Empty));

        assert!(matches!(
            ParameterKey::parse("100/5"),
            Err(KeyParseError::MissingComponent {
                component: "parameter",
                ..
            })
        ));

        let err = ParameterKey::parse("100/abc/3").unwrap_err();
        assert!(matches!(
            err,
            KeyParseError::InvalidComponent {
                component: "element",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Parameter key '100/abc/3' has an invalid element id 'abc'"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_element_of_parameter() {
        let key = ParameterKey::with_table_index(100, 7, 9, "row");
        assert_eq!(key.element(), ElementKey::new(100, 7));
        assert_eq!(key.element().to_string(), "100/7");
    }

    proptest! {
        #[test]
        fn canonical_form_parses_back(
            system in 0u32..100_000,
            element in 0u32..100_000,
            parameter in 0u32..100_000,
            index in "[a-z0-9./]{0,12}",
        ) {
            let key = ParameterKey::with_table_index(system, element, parameter, index);
            prop_assert_eq!(ParameterKey::parse(&key.to_string()).unwrap(), key);
        }
    }
}
