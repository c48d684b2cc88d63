// Mon Aug 3 2026 - Alex

use once_cell::sync::Lazy;
use std::collections::HashMap;

static TYPE_ENCODING_MAP: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ('v', "void"),
        ('c', "char"),
        ('s', "short"),
        ('i', "int"),
        ('l', "long"),
        ('C', "unsigned char"),
        ('S', "unsigned short"),
        ('I', "unsigned int"),
        ('L', "unsigned long"),
        ('f', "float"),
        ('A', "uint8_t"),
        ('b', "BOOL"),
        ('B', "BOOL"),
        ('q', "NSInteger"),
        ('Q', "NSUInteger"),
        ('d', "CGFloat"),
        ('*', "char *"),
        ('@', "id"),
        (':', "SEL"),
        ('#', "objc_class_t"),
        ('?', "void*"),
        ('T', "void*"),
    ])
});

/// Decode an Objective-C method type-encoding string into C-style type names,
/// one per encoded type, in encounter order.
///
/// Frame-size and offset digits are skipped. Quoted type names and struct
/// bodies are consumed but currently collapse to a `void*` token; an
/// unrecognized character ends the scan with whatever was decoded so far.
pub fn parse_encoded_type(encoded_type: &str) -> Vec<String> {
    let chars: Vec<char> = encoded_type.chars().collect();
    let mut result = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        // Argument frame size and offset specifiers aren't relevant here.
        if c.is_ascii_digit() {
            i += 1;
            continue;
        }

        if let Some(name) = TYPE_ENCODING_MAP.get(&c) {
            result.push(name.to_string());
            i += 1;
            continue;
        }

        if c == '"' {
            i += 1;
            while i < chars.len() && chars[i] != '"' {
                i += 1;
            }
            if i >= chars.len() {
                break;
            }

            // TODO: Emit real type names.
            result.push("void*".to_string());
            i += 1;
            continue;
        }

        if c == '{' {
            let mut depth = 1;
            while depth != 0 {
                i += 1;
                if i >= chars.len() {
                    return result;
                }

                match chars[i] {
                    '{' => depth += 1,
                    '}' => depth -= 1,
                    _ => {}
                }
            }

            // TODO: Emit real struct types.
            result.push("void*".to_string());
            i += 1;
            continue;
        }

        break;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_method_signature() {
        assert_eq!(
            parse_encoded_type("v20@0:8@16"),
            vec!["void", "id", "SEL", "id"]
        );
    }

    #[test]
    fn test_wider_frame_annotations() {
        assert_eq!(
            parse_encoded_type("v24@0:8@16"),
            vec!["void", "id", "SEL", "id"]
        );
    }

    #[test]
    fn test_bare_signature() {
        assert_eq!(parse_encoded_type("i@:"), vec!["int", "id", "SEL"]);
    }

    #[test]
    fn test_scalar_types() {
        assert_eq!(
            parse_encoded_type("cslCSILfdqQ"),
            vec![
                "char",
                "short",
                "long",
                "unsigned char",
                "unsigned short",
                "unsigned int",
                "unsigned long",
                "float",
                "CGFloat",
                "NSInteger",
                "NSUInteger"
            ]
        );
    }

    #[test]
    fn test_struct_collapses_to_opaque_pointer() {
        assert_eq!(
            parse_encoded_type("{CGRect={CGPoint=dd}{CGSize=dd}}16@0:8"),
            vec!["void*", "id", "SEL"]
        );
    }

    #[test]
    fn test_quoted_name_collapses_to_opaque_pointer() {
        assert_eq!(
            parse_encoded_type("@\"NSString\"16@0:8"),
            vec!["id", "void*", "id", "SEL"]
        );
    }

    #[test]
    fn test_unknown_character_ends_scan() {
        assert_eq!(parse_encoded_type("i@:^v"), vec!["int", "id", "SEL"]);
    }

    #[test]
    fn test_unbalanced_struct_ends_scan() {
        assert_eq!(parse_encoded_type("v{CGPoint=dd"), vec!["void"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_encoded_type("").is_empty());
    }
}
