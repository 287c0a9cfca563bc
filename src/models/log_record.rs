use serde::Deserialize;
use serde::de::IgnoredAny;

const CONTENT_TYPE_TEXT: &str = "text";

/// One line of a session log file.
///
/// Only the fields the extractor looks at are modelled; everything else on the line is
/// ignored by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct LogRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(rename = "isMeta", default)]
    pub is_meta: Option<bool>,
    #[serde(default)]
    pub cwd: Option<String>,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(
        default = "crate::parsers::deserializers::now_millis",
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_timestamp"
    )]
    pub timestamp: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: Option<MessageContent>,
}

/// Message content is either a bare string or a list of typed blocks
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

/// A single content block. Blocks that are not `{type, text}` shaped are kept as
/// [`ContentBlock::Other`] so one odd block does not reject the whole line.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContentBlock {
    Typed {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        text: Option<String>,
    },
    Other(IgnoredAny),
}

impl MessageContent {
    /// Text shown to the user: the string itself, or all `text` blocks joined by a space
    pub fn display_text(&self) -> String {
        match self {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Blocks(blocks) => blocks
                .iter()
                .filter_map(|block| match block {
                    ContentBlock::Typed { kind, text: Some(text) } if kind == CONTENT_TYPE_TEXT => {
                        Some(text.as_str())
                    }
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl LogRecord {
    /// Whether the line was typed by the user (as opposed to assistant, tool or system output)
    pub fn is_user_prompt(&self) -> bool {
        self.record_type == "user"
            && self.message.as_ref().is_some_and(|m| m.role == "user")
            && self.is_meta != Some(true)
    }
}
