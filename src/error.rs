/*
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use thiserror::Error;

/// Fatal-tier failures.
///
/// Only whole-string codecs report errors through this type. Per-token
/// conditions inside the encoded-word decoder are recoverable and surface
/// through the warnings sink instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid base64 input: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded bytes are not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
