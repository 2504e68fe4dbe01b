use thiserror::Error;

use crate::message::MessageKind;

/// Construction-time failures reported by [`MessageBuilder::build`].
///
/// [`MessageBuilder::build`]: crate::message::MessageBuilder::build
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No payload was set for the declared message kind
    #[error("message kind '{kind}' built without its payload")]
    MissingPayload { kind: MessageKind },

    /// A payload was set that does not match the declared message kind
    #[error("message kind '{kind}' carries a mismatched '{populated}' payload")]
    MismatchedPayload {
        kind: MessageKind,
        populated: MessageKind,
    },
}
