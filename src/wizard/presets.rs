/// Input variables offered as one-click suggestions.
pub const COMMON_INPUTS: &[&str] = &["DOCUMENT", "QUESTION", "CONTEXT", "USER_INPUT", "DATA", "TOPIC"];

pub struct StructurePreset {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub body: &'static str,
}

pub const STRUCTURE_PRESETS: &[StructurePreset] = &[
    StructurePreset {
        id: "simple",
        title: "Simple",
        description: "Basic introduction and rules",
        body: "1. Role/Context explanation\n2. Key rules and constraints\n3. Example (if applicable)\n4. Output format",
    },
    StructurePreset {
        id: "detailed",
        title: "Detailed",
        description: "Step-by-step with scratchpad",
        body: "1. Role description\n2. Input variable placement\n3. Important rules\n4. Thinking process (scratchpad/inner monologue)\n5. Examples with edge cases\n6. Output format specification",
    },
    StructurePreset {
        id: "structured",
        title: "Structured",
        description: "XML tags and clear sections",
        body: "1. Context and role in <context>\n2. Input variables in <inputs>\n3. Rules and constraints in <rules>\n4. Examples in <examples>\n5. Output in <answer> or custom tags",
    },
];

pub fn structure_preset(id: &str) -> Option<&'static StructurePreset> {
    STRUCTURE_PRESETS.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}
