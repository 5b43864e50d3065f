use crate::core::node::Node;

pub struct Step {
    pub prompt: String,
    pub hint: Option<String>,
    pub nodes: Vec<Node>,
}
