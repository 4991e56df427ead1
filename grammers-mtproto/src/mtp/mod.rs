// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Implementation of the [Mobile Transport Protocol]. This layer is
//! responsible for converting zero or more input requests into outgoing
//! messages, and to process the response.
//!
//! Only the encrypted variant is implemented here: building and
//! authenticating the key that protects a session is out of scope for
//! this crate, which assumes a valid [`AuthKey`] is handed to it.
//!
//! [Mobile Transport Protocol]: https://core.telegram.org/mtproto/description
//! [`AuthKey`]: grammers_crypto::AuthKey

pub mod encrypted;

pub use crate::errors::{DeserializeError, RequestError};
pub use encrypted::Encrypted;

use crate::MsgId;

/// The outcome of processing a single server response: any RPC results
/// that were completed, and any updates that arrived along the way.
#[derive(Debug, Default)]
pub struct Deserialization {
    /// Results for requests sent by the user, matched against the
    /// `msg_id` they were assigned when pushed.
    pub rpc_results: Vec<(MsgId, Result<Vec<u8>, RequestError>)>,

    /// Update bodies that were not results for any request previously sent.
    pub updates: Vec<Vec<u8>>,
}

/// Implemented by any [Mobile Transport Protocol] flavour capable of
/// packing requests into outgoing messages and interpreting the server's
/// responses.
///
/// [Mobile Transport Protocol]: https://core.telegram.org/mtproto/description
pub trait Mtp {
    /// Pushes a request into the internal buffer, returning its assigned
    /// [`MsgId`] so that the caller can later match the server's response
    /// to it. Returns `None` if the buffer has no more room for it; the
    /// caller should [`Mtp::finalize`] first and push again afterwards.
    fn push(&mut self, request: &[u8]) -> Option<MsgId>;

    /// Finalizes the pending requests into a single, possibly encrypted,
    /// payload ready to be sent over the wire. Returns an empty buffer if
    /// there was nothing to send.
    fn finalize(&mut self) -> Vec<u8>;

    /// Processes a payload received from the server, updating the
    /// internal state and returning any RPC results and updates found.
    fn deserialize(&mut self, payload: &[u8]) -> Result<Deserialization, DeserializeError>;

    /// The authorization key currently in use.
    fn auth_key(&self) -> [u8; 256];
}
