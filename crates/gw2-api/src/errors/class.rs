/// Classification of a fetch failure.
///
/// Used by the load cycle to decide whether a failure means the credential
/// itself is unusable, whether the credential lacks a scope the resource
/// needs, or whether something else went wrong.
///
/// # Behavior Summary
///
/// | Class | HTTP | Load cycle reaction |
/// |-------|------|---------------------|
/// | `InvalidCredential` | 400, 401 | Abort, report "key not valid", clear everything |
/// | `InsufficientScope` | 403 | Abort, report as a permission/resource mismatch |
/// | `Other` | anything else | Abort, surface the error text verbatim |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureClass {
    /// The access token was rejected (malformed, revoked or unknown).
    InvalidCredential,

    /// The access token is valid but lacks a scope required by the resource.
    InsufficientScope,

    /// Network failures, 5xx responses, malformed bodies, and the rest.
    Other,
}
