/// Shaping of collaborator payloads into scorer inputs.
///
/// Fetching is the caller's job; this layer only parses response bodies.
///
/// Submodules:
/// - `weather` — current-conditions and elevation JSON.

pub mod weather;
