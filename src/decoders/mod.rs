/*
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

pub mod base64;
pub mod charsets;
pub mod encoded_word;
pub mod entity;
pub mod quoted_printable;
