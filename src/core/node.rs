use crate::input::Input;

pub type NodeId = String;

/// A form entry: an interactive input or a static text line.
pub enum Node {
    Input(Box<dyn Input>),
    Text(String),
}

impl Node {
    pub fn input(input: impl Input + 'static) -> Self {
        Node::Input(Box::new(input))
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Node::Input(input) => Some(input.id().as_str()),
            Node::Text(_) => None,
        }
    }

    pub fn as_input(&self) -> Option<&dyn Input> {
        match self {
            Node::Input(input) => Some(input.as_ref()),
            Node::Text(_) => None,
        }
    }

    pub fn as_input_mut(&mut self) -> Option<&mut dyn Input> {
        match self {
            Node::Input(input) => Some(input.as_mut()),
            Node::Text(_) => None,
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Node::Input(_))
    }
}

pub fn find_input<'a>(nodes: &'a [Node], id: &str) -> Option<&'a dyn Input> {
    nodes
        .iter()
        .filter_map(Node::as_input)
        .find(|input| input.id() == id)
}

pub fn find_input_mut<'a>(nodes: &'a mut [Node], id: &str) -> Option<&'a mut dyn Input> {
    nodes
        .iter_mut()
        .filter_map(Node::as_input_mut)
        .find(|input| input.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_input::TextInput;

    #[test]
    fn find_input_locates_by_id() {
        let nodes = vec![
            Node::text("header"),
            Node::input(TextInput::new("name", "Name")),
            Node::input(TextInput::new("email", "Email")),
        ];
        assert!(find_input(&nodes, "email").is_some());
        assert!(find_input(&nodes, "missing").is_none());
        assert_eq!(nodes[0].id(), None);
        assert_eq!(nodes[1].id(), Some("name"));
    }
}
