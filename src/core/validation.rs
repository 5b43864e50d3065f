use crate::core::node::NodeId;
use crate::core::step::Step;
use crate::input::Input;

pub fn validate_input(input: &dyn Input) -> Result<(), String> {
    let value = input.value();
    if value.is_empty() && !input.is_complete() {
        return Err("Incomplete value".to_string());
    }
    input.validate_internal()?;
    for validator in input.validators() {
        validator(&value)?;
    }
    Ok(())
}

pub fn validate_step(step: &Step) -> Vec<(NodeId, String)> {
    step.nodes
        .iter()
        .filter_map(|node| node.as_input())
        .filter_map(|input| {
            validate_input(input)
                .err()
                .map(|err| (input.id().clone(), err))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::node::Node;
    use crate::text_input::TextInput;
    use crate::validators;

    #[test]
    fn validate_step_collects_failures_in_node_order() {
        let step = Step {
            prompt: "form".to_string(),
            hint: None,
            nodes: vec![
                Node::input(
                    TextInput::new("name", "Name").with_validator(validators::required()),
                ),
                Node::input(
                    TextInput::new("email", "Email")
                        .with_value("not-an-email")
                        .with_validator(validators::email()),
                ),
                Node::input(TextInput::new("note", "Note")),
            ],
        };

        let errors = validate_step(&step);
        let ids: Vec<&str> = errors.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["name", "email"]);
    }

    #[test]
    fn valid_step_yields_no_errors() {
        let step = Step {
            prompt: "form".to_string(),
            hint: None,
            nodes: vec![Node::input(
                TextInput::new("email", "Email")
                    .with_value("snoop@dogg.pound")
                    .with_validator(validators::email()),
            )],
        };
        assert!(validate_step(&step).is_empty());
    }
}
