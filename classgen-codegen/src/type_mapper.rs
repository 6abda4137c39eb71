//! Type mapping between model attribute types and emitted type tokens.

/// Trait for mapping a raw model type name to a target-language type token.
///
/// Implement this for each target language. Returning `None` means the
/// attribute is emitted untyped.
pub trait TypeMapper {
    /// The target language name.
    fn language(&self) -> &'static str;

    /// Map a raw declared type name to an emitted type token.
    fn map_type(&self, type_name: Option<&str>) -> Option<String>;
}

/// Python type mapper.
///
/// Primitive names match case-insensitively; anything unrecognized passes
/// through verbatim on the assumption that it names another class defined
/// in the same output.
pub struct PythonTypeMapper;

impl TypeMapper for PythonTypeMapper {
    fn language(&self) -> &'static str {
        "python"
    }

    fn map_type(&self, type_name: Option<&str>) -> Option<String> {
        let raw = type_name?;
        // Booleans are stored as plain ints by the runtime properties.
        match raw.to_ascii_lowercase().as_str() {
            "boolean" | "integer" | "unlimitednatural" => Some("int".to_string()),
            "string" => Some("str".to_string()),
            _ if raw.ends_with("Kind") || raw.ends_with("Sort") => None,
            _ => Some(raw.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_types() {
        let mapper = PythonTypeMapper;

        assert_eq!(mapper.map_type(Some("String")).as_deref(), Some("str"));
        assert_eq!(mapper.map_type(Some("Integer")).as_deref(), Some("int"));
        assert_eq!(
            mapper.map_type(Some("UnlimitedNatural")).as_deref(),
            Some("int")
        );
        // Legacy quirk: booleans map to int, not bool.
        assert_eq!(mapper.map_type(Some("Boolean")).as_deref(), Some("int"));
    }

    #[test]
    fn test_primitives_match_case_insensitively() {
        let mapper = PythonTypeMapper;

        assert_eq!(mapper.map_type(Some("string")).as_deref(), Some("str"));
        assert_eq!(mapper.map_type(Some("BOOLEAN")).as_deref(), Some("int"));
    }

    #[test]
    fn test_enumeration_markers_are_unsupported() {
        let mapper = PythonTypeMapper;

        assert_eq!(mapper.map_type(Some("MoodKind")), None);
        assert_eq!(mapper.map_type(Some("FlowSort")), None);
    }

    #[test]
    fn test_absent_type() {
        assert_eq!(PythonTypeMapper.map_type(None), None);
    }

    #[test]
    fn test_class_names_pass_through() {
        let mapper = PythonTypeMapper;

        assert_eq!(
            mapper.map_type(Some("Property")).as_deref(),
            Some("Property")
        );
        // The enumeration suffix check is case-sensitive.
        assert_eq!(
            mapper.map_type(Some("Mankind")).as_deref(),
            Some("Mankind")
        );
    }
}
