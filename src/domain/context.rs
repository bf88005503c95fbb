use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Authorize,
    Capture,
    Chargeback,
    Credit,
    Purchase,
    Refund,
    Void,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Authorize => "AUTHORIZE",
            TransactionType::Capture => "CAPTURE",
            TransactionType::Chargeback => "CHARGEBACK",
            TransactionType::Credit => "CREDIT",
            TransactionType::Purchase => "PURCHASE",
            TransactionType::Refund => "REFUND",
            TransactionType::Void => "VOID",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AUTHORIZE" => Some(TransactionType::Authorize),
            "CAPTURE" => Some(TransactionType::Capture),
            "CHARGEBACK" => Some(TransactionType::Chargeback),
            "CREDIT" => Some(TransactionType::Credit),
            "PURCHASE" => Some(TransactionType::Purchase),
            "REFUND" => Some(TransactionType::Refund),
            "VOID" => Some(TransactionType::Void),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentControlContext {
    pub account_id: Uuid,
    pub payment_external_key: String,
    pub transaction_external_key: String,
    #[serde(default)]
    pub transaction_id: Option<Uuid>,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub currency: String,
    pub payment_method_id: Uuid,
    #[serde(default)]
    pub payment_method_plugin_name: Option<String>,
    pub tenant_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginProperty {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl PluginProperty {
    pub fn new(key: &str, value: Option<&str>) -> Self {
        Self {
            key: Some(key.to_string()),
            value: value.map(str::to_string),
        }
    }
}

pub fn scorer_entries<'a>(
    properties: &'a [PluginProperty],
    prefix: &'a str,
) -> impl Iterator<Item = (&'a str, Option<&'a str>)> + 'a {
    properties.iter().filter_map(move |p| {
        let path = p.key.as_deref()?.strip_prefix(prefix)?;
        Some((path, p.value.as_deref()))
    })
}
