use thiserror::Error;

pub const PATH_DELIMITER: &str = "->";

pub const MAX_GROUP_INDEX: usize = 1_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Field(String),
    Indexed { name: String, index: usize },
}

impl PathSegment {
    pub fn name(&self) -> &str {
        match self {
            PathSegment::Field(name) => name,
            PathSegment::Indexed { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("empty path")]
    Empty,
    #[error("empty segment at position {position} in `{path}`")]
    EmptySegment { path: String, position: usize },
    #[error("malformed segment `{segment}` in `{path}`")]
    MalformedSegment { path: String, segment: String },
    #[error("index {index} in `{path}` exceeds the limit of {max}", max = MAX_GROUP_INDEX)]
    IndexTooLarge { path: String, index: usize },
    #[error("`{segment}` in `{path}` is not a valid element name")]
    InvalidName { path: String, segment: String },
    #[error("indexed segment `{segment}` in `{path}` is not preceded by a group name")]
    DanglingIndex { path: String, segment: String },
    #[error("`{field}` in `{path}` already holds a {found}, cannot use it as a {wanted}")]
    ShapeConflict {
        path: String,
        field: String,
        found: &'static str,
        wanted: &'static str,
    },
    #[error("group `{field}` in `{path}` holds `{expected}` items, not `{found}`")]
    ItemNameConflict {
        path: String,
        field: String,
        expected: String,
        found: String,
    },
}

/// Splits `path` on [`PATH_DELIMITER`] and classifies every segment.
///
/// `orderDetails->orderDetail[1]->shippingName` yields
/// `[Field(orderDetails), Indexed(orderDetail, 1), Field(shippingName)]`.
/// The first segment must be a plain field: an index is only meaningful when a
/// preceding segment names the group it belongs to.
pub fn parse_path(path: &str) -> Result<Vec<PathSegment>, PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    let mut segments = Vec::new();
    for (position, raw) in path.split(PATH_DELIMITER).enumerate() {
        if raw.is_empty() {
            return Err(PathError::EmptySegment {
                path: path.to_string(),
                position,
            });
        }
        segments.push(parse_segment(path, raw)?);
    }

    if let Some(PathSegment::Indexed { .. }) = segments.first() {
        return Err(PathError::DanglingIndex {
            path: path.to_string(),
            segment: path.split(PATH_DELIMITER).next().unwrap_or_default().to_string(),
        });
    }

    Ok(segments)
}

fn parse_segment(path: &str, raw: &str) -> Result<PathSegment, PathError> {
    let malformed = || PathError::MalformedSegment {
        path: path.to_string(),
        segment: raw.to_string(),
    };

    let Some(open) = raw.find('[') else {
        if raw.contains(']') {
            return Err(malformed());
        }
        return element_name(path, raw).map(|name| PathSegment::Field(name.to_string()));
    };

    let name = &raw[..open];
    let digits = raw[open + 1..].strip_suffix(']').ok_or_else(malformed)?;
    if name.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let index = digits.parse::<usize>().map_err(|_| PathError::IndexTooLarge {
        path: path.to_string(),
        index: usize::MAX,
    })?;
    if index > MAX_GROUP_INDEX {
        return Err(PathError::IndexTooLarge {
            path: path.to_string(),
            index,
        });
    }

    Ok(PathSegment::Indexed {
        name: element_name(path, name)?.to_string(),
        index,
    })
}

fn element_name<'a>(path: &str, name: &'a str) -> Result<&'a str, PathError> {
    if is_element_name(name) {
        Ok(name)
    } else {
        Err(PathError::InvalidName {
            path: path.to_string(),
            segment: name.to_string(),
        })
    }
}

pub fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
