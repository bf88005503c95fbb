use std::collections::BTreeMap;

pub type Object = BTreeMap<String, CanonicalNode>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalNode {
    Leaf(Option<String>),
    Object(Object),
    Sequence(Sequence),
}

impl CanonicalNode {
    pub fn kind(&self) -> &'static str {
        match self {
            CanonicalNode::Leaf(_) => "value",
            CanonicalNode::Object(_) => "object",
            CanonicalNode::Sequence(_) => "repeated group",
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            CanonicalNode::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            CanonicalNode::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    pub fn as_leaf(&self) -> Option<Option<&str>> {
        match self {
            CanonicalNode::Leaf(value) => Some(value.as_deref()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    item_name: String,
    slots: Vec<Object>,
}

impl Sequence {
    pub fn new(item_name: &str) -> Self {
        Self {
            item_name: item_name.to_string(),
            slots: Vec::new(),
        }
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn slots(&self) -> &[Object] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot_mut(&mut self, index: usize) -> &mut Object {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, Object::new);
        }
        &mut self.slots[index]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDocument {
    transactions: Vec<Object>,
}

impl RequestDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transactions(transactions: Vec<Object>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Object] {
        &self.transactions
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub(crate) fn first_transaction_mut(&mut self) -> &mut Object {
        if self.transactions.is_empty() {
            self.transactions.push(Object::new());
        }
        &mut self.transactions[0]
    }
}
