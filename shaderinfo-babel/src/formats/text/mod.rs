//! Plain text layout report
//!
//! One block per layout, fields indented with tabs:
//!
//! ```text
//! LAYOUT INFO:
//!     LAYOUT TYPE: Shader Storage Buffer
//!     MEMORY QUALIFIERS:
//!         readonly
//!     TYPE QUALIFIER:
//!     VARIABLE NAME: Particles
//!     OPTIONS:
//!         std430 = 0
//!         binding = 1
//!     VARIABLES:
//!         positions: vec4[]
//! ```
//!
//! Options are listed in the order they were declared.

use crate::error::FormatError;
use crate::format::Format;
use shaderinfo_parser::shader::{ArraySize, Layout, Variable};

pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human readable report, one block per layout"
    }

    fn serialize(&self, layouts: &[Layout]) -> Result<String, FormatError> {
        let mut serializer = TextSerializer::new();
        for layout in layouts {
            serializer.layout(layout);
        }
        Ok(serializer.output)
    }
}

struct TextSerializer {
    output: String,
}

impl TextSerializer {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.output.push('\t');
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn layout(&mut self, layout: &Layout) {
        self.line(0, "LAYOUT INFO:");
        self.line(1, &format!("LAYOUT TYPE: {}", layout.layout_type.label()));

        self.line(1, "MEMORY QUALIFIERS:");
        for qualifier in &layout.memory_qualifiers {
            self.line(2, qualifier);
        }

        self.line(1, &format!("TYPE QUALIFIER: {}", layout.type_qualifier));
        self.line(1, &format!("VARIABLE NAME: {}", layout.name));

        self.line(1, "OPTIONS:");
        for (key, value) in layout.options.iter() {
            self.line(2, &format!("{} = {}", key, value));
        }

        self.line(1, "VARIABLES:");
        for variable in &layout.body {
            self.line(2, &member(variable));
        }
    }
}

fn member(variable: &Variable) -> String {
    match variable.size() {
        ArraySize::Scalar => format!("{}: {}", variable.name, variable.type_name),
        ArraySize::Unsized => format!("{}: {}[]", variable.name, variable.type_name),
        ArraySize::Fixed(n) => format!("{}: {}[{}]", variable.name, variable.type_name, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shaderinfo_parser::shader::LayoutType;

    #[test]
    fn test_attribute() {
        let layout = Layout {
            layout_type: LayoutType::AttribIn,
            options: [("location", 0)].into_iter().collect(),
            name: "position".to_string(),
            type_qualifier: "vec3".to_string(),
            ..Default::default()
        };

        let output = TextFormat.serialize(&[layout]).unwrap();
        assert_eq!(
            output,
            "LAYOUT INFO:\n\
             \tLAYOUT TYPE: Attribute In\n\
             \tMEMORY QUALIFIERS:\n\
             \tTYPE QUALIFIER: vec3\n\
             \tVARIABLE NAME: position\n\
             \tOPTIONS:\n\
             \t\tlocation = 0\n\
             \tVARIABLES:\n"
        );
    }

    #[test]
    fn test_block_members() {
        let layout = Layout {
            layout_type: LayoutType::ShaderStorageBuffer,
            options: [("std430", 0), ("binding", 1)].into_iter().collect(),
            memory_qualifiers: vec!["readonly".to_string()],
            name: "Particles".to_string(),
            instance_name: Some("particles".to_string()),
            body: vec![
                Variable::scalar("uint", "count"),
                Variable::array("float", "weights", 4),
                Variable::unsized_array("vec4", "positions"),
            ],
            ..Default::default()
        };

        let output = TextFormat.serialize(&[layout]).unwrap();
        assert_eq!(
            output,
            "LAYOUT INFO:\n\
             \tLAYOUT TYPE: Shader Storage Buffer\n\
             \tMEMORY QUALIFIERS:\n\
             \t\treadonly\n\
             \tTYPE QUALIFIER: \n\
             \tVARIABLE NAME: Particles\n\
             \tOPTIONS:\n\
             \t\tstd430 = 0\n\
             \t\tbinding = 1\n\
             \tVARIABLES:\n\
             \t\tcount: uint\n\
             \t\tweights: float[4]\n\
             \t\tpositions: vec4[]\n"
        );
    }

    #[test]
    fn test_no_layouts_is_empty() {
        assert_eq!(TextFormat.serialize(&[]).unwrap(), "");
    }
}
