/// Ordered metadata block writer — block-style key-value emission.
///
/// Key order is the slice order the caller hands in, never alphabetized
/// and never dependent on a map implementation.

/// A single metadata field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Plain scalar, emitted as `key: value`.
    Text(String),
    /// Sequence, emitted as `key:` followed by one `- item` line per
    /// element. An empty sequence collapses to `key: []`.
    List(Vec<String>),
    /// Boolean, emitted as `key: true` / `key: false`.
    Flag(bool),
}

/// Serialize ordered `(key, value)` pairs to a block-style mapping.
/// Every entry ends with a newline.
pub fn write_block(fields: &[(&str, FieldValue)]) -> String {
    let mut out = String::new();
    for (key, value) in fields {
        match value {
            FieldValue::Text(text) => {
                out.push_str(key);
                out.push_str(": ");
                out.push_str(text);
                out.push('\n');
            }
            FieldValue::List(items) if items.is_empty() => {
                out.push_str(key);
                out.push_str(": []\n");
            }
            FieldValue::List(items) => {
                out.push_str(key);
                out.push_str(":\n");
                for item in items {
                    out.push_str("- ");
                    out.push_str(item);
                    out.push('\n');
                }
            }
            FieldValue::Flag(flag) => {
                out.push_str(key);
                out.push_str(": ");
                out.push_str(if *flag { "true" } else { "false" });
                out.push('\n');
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_fields_keep_given_order() {
        let block = write_block(&[
            ("zebra", FieldValue::Text("last".to_string())),
            ("apple", FieldValue::Text("first".to_string())),
        ]);
        assert_eq!(block, "zebra: last\napple: first\n");
    }

    #[test]
    fn list_field_emits_dash_items() {
        let block = write_block(&[(
            "key_motifs",
            FieldValue::List(vec!["one".to_string(), "two".to_string()]),
        )]);
        assert_eq!(block, "key_motifs:\n- one\n- two\n");
    }

    #[test]
    fn empty_list_collapses_to_brackets() {
        let block = write_block(&[("key_motifs", FieldValue::List(Vec::new()))]);
        assert_eq!(block, "key_motifs: []\n");
    }

    #[test]
    fn flag_field_renders_bare_bool() {
        let block = write_block(&[
            ("srt_mode", FieldValue::Flag(true)),
            ("archived", FieldValue::Flag(false)),
        ]);
        assert_eq!(block, "srt_mode: true\narchived: false\n");
    }

    #[test]
    fn empty_slice_renders_empty_block() {
        assert_eq!(write_block(&[]), "");
    }
}
