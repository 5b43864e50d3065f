use crate::core::node::NodeId;

#[derive(Debug, Clone)]
pub enum FormEvent {
    InputChanged {
        id: NodeId,
        value: String,
    },
    FocusChanged {
        from: Option<NodeId>,
        to: Option<NodeId>,
    },
    SubmitRequested,
    ErrorCancelled {
        id: NodeId,
    },
}
