use crate::request::path::{parse_path, PathError, PathSegment};
use crate::request::serializer::{serialize, SerializationError};
use crate::request::tree::{CanonicalNode, Object, RequestDocument, Sequence};

#[derive(Debug, Default)]
pub struct RequestBuilder {
    document: RequestDocument,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: &str, value: Option<&str>) -> Result<&mut Self, PathError> {
        let segments = parse_path(path)?;
        let Some((head, rest)) = segments.split_first() else {
            return Err(PathError::Empty);
        };

        let transaction = self.document.first_transaction_mut();
        insert_at(transaction, head.name(), rest, value.map(str::to_string), path)?;
        Ok(self)
    }

    pub fn document(&self) -> &RequestDocument {
        &self.document
    }

    pub fn into_document(self) -> RequestDocument {
        self.document
    }

    pub fn build(&self) -> Result<String, SerializationError> {
        serialize(&self.document)
    }
}

fn insert_at(
    target: &mut Object,
    name: &str,
    rest: &[PathSegment],
    value: Option<String>,
    path: &str,
) -> Result<(), PathError> {
    match rest.split_first() {
        None => {
            target.insert(name.to_string(), CanonicalNode::Leaf(value));
            Ok(())
        }
        Some((PathSegment::Indexed { name: child, index }, tail)) => {
            let node = target
                .entry(name.to_string())
                .or_insert_with(|| CanonicalNode::Sequence(Sequence::new(child)));
            match node {
                CanonicalNode::Sequence(sequence) if sequence.item_name() != child.as_str() => {
                    Err(PathError::ItemNameConflict {
                        path: path.to_string(),
                        field: name.to_string(),
                        expected: sequence.item_name().to_string(),
                        found: child.to_string(),
                    })
                }
                CanonicalNode::Sequence(sequence) => {
                    insert_at(sequence.slot_mut(*index), child, tail, value, path)
                }
                other => Err(conflict(path, name, other, "repeated group")),
            }
        }
        Some((PathSegment::Field(next), tail)) => {
            let node = target
                .entry(name.to_string())
                .or_insert_with(|| CanonicalNode::Object(Object::new()));
            match node {
                CanonicalNode::Object(object) => insert_at(object, next, tail, value, path),
                other => Err(conflict(path, name, other, "object")),
            }
        }
    }
}

fn conflict(path: &str, field: &str, found: &CanonicalNode, wanted: &'static str) -> PathError {
    PathError::ShapeConflict {
        path: path.to_string(),
        field: field.to_string(),
        found: found.kind(),
        wanted,
    }
}
