use crate::request::path::is_element_name;
use crate::request::tree::{CanonicalNode, Object, RequestDocument, Sequence};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use thiserror::Error;

pub const ROOT_ELEMENT: &str = "transactions";
pub const TRANSACTION_ELEMENT: &str = "transaction";

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("`{0}` is not a valid element name")]
    InvalidElementName(String),
    #[error("xml write failed: {0}")]
    Write(String),
    #[error("serialized document is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub fn serialize(document: &RequestDocument) -> Result<String, SerializationError> {
    let mut writer = Writer::new(Vec::new());

    if document.is_empty() {
        empty(&mut writer, ROOT_ELEMENT)?;
    } else {
        start(&mut writer, ROOT_ELEMENT)?;
        for transaction in document.transactions() {
            write_object(&mut writer, TRANSACTION_ELEMENT, transaction)?;
        }
        end(&mut writer, ROOT_ELEMENT)?;
    }

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_object(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    object: &Object,
) -> Result<(), SerializationError> {
    if object.is_empty() {
        return empty(writer, name);
    }
    start(writer, name)?;
    write_fields(writer, object)?;
    end(writer, name)
}

fn write_fields(writer: &mut Writer<Vec<u8>>, object: &Object) -> Result<(), SerializationError> {
    for (name, node) in object {
        write_node(writer, name, node)?;
    }
    Ok(())
}

fn write_node(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    node: &CanonicalNode,
) -> Result<(), SerializationError> {
    match node {
        CanonicalNode::Leaf(Some(value)) => {
            start(writer, name)?;
            writer
                .write_event(Event::Text(BytesText::new(value)))
                .map_err(|e| SerializationError::Write(e.to_string()))?;
            end(writer, name)
        }
        CanonicalNode::Leaf(None) => empty(writer, name),
        CanonicalNode::Object(object) => write_object(writer, name, object),
        CanonicalNode::Sequence(sequence) => write_sequence(writer, name, sequence),
    }
}

fn write_sequence(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    sequence: &Sequence,
) -> Result<(), SerializationError> {
    if sequence.is_empty() {
        return empty(writer, name);
    }
    start(writer, name)?;
    for slot in sequence.slots() {
        if slot.is_empty() {
            empty(writer, sequence.item_name())?;
        } else {
            write_fields(writer, slot)?;
        }
    }
    end(writer, name)
}

fn start(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), SerializationError> {
    checked(name)?;
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(|e| SerializationError::Write(e.to_string()))
}

fn end(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), SerializationError> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(|e| SerializationError::Write(e.to_string()))
}

fn empty(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), SerializationError> {
    checked(name)?;
    writer
        .write_event(Event::Empty(BytesStart::new(name)))
        .map_err(|e| SerializationError::Write(e.to_string()))
}

fn checked(name: &str) -> Result<(), SerializationError> {
    if is_element_name(name) {
        Ok(())
    } else {
        Err(SerializationError::InvalidElementName(name.to_string()))
    }
}
