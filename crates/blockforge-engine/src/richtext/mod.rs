//! Lexical rich-text document model and HTML serialization.

mod node;
mod serialize;

pub use node::{
    HeadingTag, LexicalDocument, LexicalNode, LexicalRoot, ListType, RichTextContent, TextFormat,
};
pub use serialize::serialize_rich_text;
