use crate::preview::placeholder;
use crate::wire::GenerationRequest;

pub fn system_prompt() -> &'static str {
r#"You are an expert prompt engineer. Your job is to write detailed, effective instructions for AI assistants based on task descriptions.

When given a task description, input variables, and optional structure preferences, create comprehensive prompt instructions that will help the AI assistant perform the task consistently and accurately.

Follow these guidelines:
1. Start with clear role/context setting
2. Include specific rules and constraints
3. Use the provided input variables in {$VARIABLE_NAME} format
4. Add examples when helpful
5. Specify output format clearly
6. Use XML tags for structure when appropriate
7. For complex reasoning tasks, include scratchpad/thinking sections

Your output should be the complete prompt template that can be used directly."#
}

const NO_INPUTS: &str = "No specific input variables defined - determine appropriate ones based on the task.";

/// User message asking the model to write the instructions.
pub fn user_prompt(req: &GenerationRequest) -> String {
    let inputs = if req.inputs.is_empty() {
        NO_INPUTS.to_string()
    } else {
        req.inputs.iter().map(|i| placeholder(i)).collect::<Vec<_>>().join("\n")
    };

    let mut out = format!(
        "Create detailed AI assistant instructions for the following task:\n\n<Task>\n{}\n</Task>\n\n<Inputs>\n{}\n</Inputs>\n\n",
        req.task, inputs
    );

    if !req.structure.is_empty() {
        out.push_str(&format!("<Preferred Structure>\n{}\n</Preferred Structure>\n\n", req.structure));
    }

    out.push_str(
        r#"Now write comprehensive instructions for an AI assistant to complete this task. Include:
1. Clear role definition and context
2. Important rules and constraints
3. Input variable placements
4. Examples if helpful
5. Output format specification

Write the complete prompt template:"#,
    );
    out
}

/// Template-based instructions used when no model can be reached.
pub fn fallback_prompt(task: &str, inputs: &[String]) -> String {
    let task = if task.trim().is_empty() { "the specified task" } else { task.trim() };
    let mut out = format!(
        "You will be acting as an AI assistant to help with the following task.\n\n<Task>\n{task}\n</Task>\n\n"
    );

    if !inputs.is_empty() {
        out.push_str("Here are the input variables you will work with:\n<Inputs>\n");
        for i in inputs {
            out.push_str(&placeholder(i));
            out.push('\n');
        }
        out.push_str("</Inputs>\n\n");
    }

    out.push_str(
        "Important rules for the interaction:\n\
         - Stay focused on the task at hand\n\
         - Be clear and precise in your responses\n\
         - If you're unsure about something, ask for clarification\n\
         - Follow any specific formatting requirements mentioned in the task\n\n",
    );

    if !inputs.is_empty() {
        out.push_str("When processing the inputs:\n");
        for i in inputs {
            out.push_str(&format!("- Use the {} value as provided\n", placeholder(i)));
        }
        out.push('\n');
    }

    out.push_str(
        "Think through your response carefully before providing it. If the task requires reasoning, show your work in <thinking></thinking> tags before giving your final answer.\n\n\
         Provide your response in a clear, structured format appropriate for the task.\n\n\
         BEGIN TASK\n\n",
    );

    for i in inputs {
        out.push_str(&placeholder(i));
        out.push_str("\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsRecord;

    fn request(inputs: &[&str], structure: &str) -> GenerationRequest {
        let inputs: Vec<String> = inputs.iter().map(|s| s.to_string()).collect();
        GenerationRequest::new("Review pull requests carefully", &inputs, structure, &SettingsRecord::default())
    }

    #[test]
    fn user_prompt_lists_inputs_as_placeholders() {
        let p = user_prompt(&request(&["CODE", "LANGUAGE"], ""));
        assert!(p.contains("<Task>\nReview pull requests carefully\n</Task>"));
        assert!(p.contains("<Inputs>\n{$CODE}\n{$LANGUAGE}\n</Inputs>"));
        assert!(!p.contains("<Preferred Structure>"));
        assert!(p.ends_with("Write the complete prompt template:"));
    }

    #[test]
    fn user_prompt_mentions_missing_inputs_and_structure() {
        let p = user_prompt(&request(&[], "1. Role"));
        assert!(p.contains(NO_INPUTS));
        assert!(p.contains("<Preferred Structure>\n1. Role\n</Preferred Structure>"));
    }

    #[test]
    fn fallback_repeats_each_input() {
        let p = fallback_prompt("Summarize documents", &["DOCUMENT".to_string()]);
        assert!(p.starts_with("You will be acting as an AI assistant"));
        assert!(p.contains("<Task>\nSummarize documents\n</Task>"));
        assert!(p.contains("- Use the {$DOCUMENT} value as provided"));
        assert!(p.ends_with("BEGIN TASK\n\n{$DOCUMENT}\n\n"));
    }

    #[test]
    fn fallback_without_inputs_has_no_input_sections() {
        let p = fallback_prompt("Summarize documents", &[]);
        assert!(!p.contains("<Inputs>"));
        assert!(!p.contains("When processing the inputs"));
        assert!(p.ends_with("BEGIN TASK\n\n"));
    }
}
