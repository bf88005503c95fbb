use crate::domain::verdict::ScoringVerdict;
use crate::scoring::ScoringError;
use quick_xml::escape::unescape;
use quick_xml::events::Event;
use quick_xml::Reader;

const RESULTS_ROOT: &str = "transaction-results";

pub fn parse_verdict(body: &str) -> Result<ScoringVerdict, ScoringError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut root: Option<String> = None;
    let mut root_text: Option<String> = None;
    let mut children: Vec<(String, Option<String>)> = Vec::new();

    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if root.is_none() {
                    root = Some(name);
                } else {
                    let raw = reader.read_text(e.name()).map_err(parse_error)?;
                    children.push((name, Some(raw.trim().to_string())));
                }
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if root.is_none() {
                    root = Some(name);
                    break;
                }
                children.push((name, None));
            }
            Event::Text(t) if root.is_some() => {
                let text = t.unescape().map_err(parse_error)?;
                root_text = Some(text.trim().to_string());
            }
            Event::End(_) | Event::Eof => break,
            _ => {}
        }
    }

    match root.as_deref() {
        Some(RESULTS_ROOT) => verdict_from(children),
        Some(other) => {
            let message = children
                .into_iter()
                .find(|(name, _)| name == "message")
                .and_then(|(_, raw)| raw)
                .map(|raw| unescaped(&raw))
                .transpose()?
                .or(root_text)
                .filter(|m| !m.is_empty());
            match message {
                Some(message) => Err(ScoringError::Vendor(message)),
                None => Err(ScoringError::Parse(format!(
                    "unexpected root element `{other}`"
                ))),
            }
        }
        None => Err(ScoringError::Parse("empty response body".to_string())),
    }
}

fn verdict_from(children: Vec<(String, Option<String>)>) -> Result<ScoringVerdict, ScoringError> {
    let mut verdict = ScoringVerdict::default();
    for (name, raw) in children {
        let Some(raw) = raw.filter(|r| !r.is_empty()) else {
            continue;
        };
        match name.as_str() {
            "transaction-id" => verdict.transaction_id = Some(unescaped(&raw)?),
            "cross-reference" => verdict.cross_reference = Some(unescaped(&raw)?),
            "rules-tripped" => verdict.rules_tripped = Some(unescaped(&raw)?),
            "total-score" => verdict.total_score = Some(unescaped(&raw)?),
            "recommendation-code" => verdict.recommendation_code = Some(unescaped(&raw)?),
            "remarks" => verdict.remarks = Some(unescaped(&raw)?),
            "responseData" => verdict.response_data = Some(raw),
            _ => {}
        }
    }
    Ok(verdict)
}

fn unescaped(raw: &str) -> Result<String, ScoringError> {
    unescape(raw)
        .map(|s| s.into_owned())
        .map_err(parse_error)
}

fn parse_error(e: impl std::fmt::Display) -> ScoringError {
    ScoringError::Parse(e.to_string())
}
