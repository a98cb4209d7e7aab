//! JSON dump of a parse tree.
//!
//! Each node becomes an object with `type`, `byteOffset`, `source`, and,
//! when the node has any, `children`:
//!
//! ```text
//! {"type":"CHOICE","byteOffset":0,"source":"{a,b}","children":[
//!   {"type":"LITERAL","byteOffset":1,"source":"a"},
//!   {"type":"LITERAL","byteOffset":3,"source":"b"}]}
//! ```

use brex_core::tree::ParseNode;

/// Serialize `tree` to JSON, optionally pretty-printed.
///
/// # Errors
///
/// Returns the serializer's error; this does not happen for trees produced
/// by the parser.
pub fn to_json(tree: &ParseNode, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(tree)
    } else {
        serde_json::to_string(tree)
    }
}
