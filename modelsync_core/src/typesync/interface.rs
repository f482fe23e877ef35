//! TypeScript interface generation for a single model.

use super::normalize::declaration_line;
use crate::naming::pascal_case;
use crate::types::NormalizedField;
use tracing::debug;

/// Build the text of a new interface block for `model_name`.
///
/// Nothing checks whether the document already holds an interface of that
/// name; generating twice yields two blocks.
pub fn generate_interface_string(
    model_name: &str,
    fields: &[NormalizedField],
    export: bool,
) -> String {
    let interface_name = pascal_case(model_name);
    debug!(
        model = model_name,
        interface = %interface_name,
        field_count = fields.len(),
        "Generating TypeScript interface"
    );

    let mut output = String::new();
    output.push_str(&format!("// AUTO-GENERATED for {}\n", model_name));
    if export {
        output.push_str("export ");
    }
    output.push_str(&format!("interface {} {{\n", interface_name));
    for field in fields {
        output.push_str(&declaration_line(field));
        output.push('\n');
    }
    output.push_str("}\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typesync::normalize::normalize_fields;
    use crate::types::FieldSpec;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_post_with_title() {
        let fields = normalize_fields(&[FieldSpec::new("title", "string")]);
        let output = generate_interface_string("post", &fields, false);

        assert!(output.contains("interface Post {"));
        assert!(output.contains("title?: string;"));
    }

    #[test]
    fn test_complete_interface_text() {
        let fields = normalize_fields(&[
            FieldSpec::new("title", "string"),
            FieldSpec::new("views", "integer"),
            FieldSpec::reference("author"),
        ]);
        let output = generate_interface_string("blog_post", &fields, false);

        assert_eq!(
            output,
            "// AUTO-GENERATED for blog_post\n\
             interface BlogPost {\n\
             \x20 title?: string;\n\
             \x20 views?: number;\n\
             \x20 author_id: number;\n\
             \x20 author?: Author;\n\
             }\n"
        );
    }

    #[test]
    fn test_exported_interface_header() {
        let output = generate_interface_string("user", &[], true);
        assert_eq!(output, "// AUTO-GENERATED for user\nexport interface User {\n}\n");
    }
}
