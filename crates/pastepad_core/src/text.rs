//! Small text helpers shared by the clients.

/// True iff the editor buffer holds no text at all.
///
/// Whitespace-only content counts as non-empty; the server, not the client,
/// decides whether such a paste is worth keeping.
pub fn is_content_empty(text: &str) -> bool {
    text.is_empty()
}
