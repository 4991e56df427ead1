// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module contains all of the bare types, each represented by a
//! `struct`. All of them implement [`Identifiable`], [`Serializable`]
//! and [`Deserializable`].
//!
//! [`Identifiable`]: ../trait.Identifiable.html
//! [`Serializable`]: ../trait.Serializable.html
//! [`Deserializable`]: ../trait.Deserializable.html
#![allow(clippy::unreadable_literal)]

use crate::{Cursor, Deserializable, Identifiable, RawVec, Serializable};

/// `rpc_error#2144ca19 error_code:int error_message:string = RpcError;`
#[derive(Debug, Clone, PartialEq)]
pub struct RpcError {
    pub error_code: i32,
    pub error_message: String,
}

impl Identifiable for RpcError {
    const CONSTRUCTOR_ID: u32 = 0x2144ca19;
}

impl Serializable for RpcError {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.error_code.serialize(buf);
        self.error_message.serialize(buf);
    }
}

impl Deserializable for RpcError {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            error_code: i32::deserialize(buf)?,
            error_message: String::deserialize(buf)?,
        })
    }
}

/// `rpc_answer_unknown#5e2ad36e = RpcDropAnswer;`
#[derive(Debug, Clone, PartialEq)]
pub struct RpcAnswerUnknown;

impl Identifiable for RpcAnswerUnknown {
    const CONSTRUCTOR_ID: u32 = 0x5e2ad36e;
}

/// `rpc_answer_dropped_running#cd78e586 = RpcDropAnswer;`
#[derive(Debug, Clone, PartialEq)]
pub struct RpcAnswerDroppedRunning;

impl Identifiable for RpcAnswerDroppedRunning {
    const CONSTRUCTOR_ID: u32 = 0xcd78e586;
}

/// `rpc_answer_dropped#a43ad8b7 msg_id:long seq_no:int bytes:int = RpcDropAnswer;`
#[derive(Debug, Clone, PartialEq)]
pub struct RpcAnswerDropped {
    pub msg_id: i64,
    pub seq_no: i32,
    pub bytes: i32,
}

impl Identifiable for RpcAnswerDropped {
    const CONSTRUCTOR_ID: u32 = 0xa43ad8b7;
}

/// `msgs_ack#62d6b459 msg_ids:Vector<long> = MsgsAck;`
#[derive(Debug, Clone, PartialEq)]
pub struct MsgsAck {
    pub msg_ids: Vec<i64>,
}

impl Identifiable for MsgsAck {
    const CONSTRUCTOR_ID: u32 = 0x62d6b459;
}

impl Serializable for MsgsAck {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.msg_ids.serialize(buf);
    }
}

impl Deserializable for MsgsAck {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            msg_ids: Vec::<i64>::deserialize(buf)?,
        })
    }
}

/// `bad_msg_notification#a7eff811 bad_msg_id:long bad_msg_seqno:int error_code:int = BadMsgNotification;`
#[derive(Debug, Clone, PartialEq)]
pub struct BadMsgNotification {
    pub bad_msg_id: i64,
    pub bad_msg_seqno: i32,
    pub error_code: i32,
}

impl Identifiable for BadMsgNotification {
    const CONSTRUCTOR_ID: u32 = 0xa7eff811;
}

impl Deserializable for BadMsgNotification {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            bad_msg_id: i64::deserialize(buf)?,
            bad_msg_seqno: i32::deserialize(buf)?,
            error_code: i32::deserialize(buf)?,
        })
    }
}

/// `bad_server_salt#edab447b bad_msg_id:long bad_msg_seqno:int error_code:int new_server_salt:long = BadMsgNotification;`
#[derive(Debug, Clone, PartialEq)]
pub struct BadServerSalt {
    pub bad_msg_id: i64,
    pub bad_msg_seqno: i32,
    pub error_code: i32,
    pub new_server_salt: i64,
}

impl Identifiable for BadServerSalt {
    const CONSTRUCTOR_ID: u32 = 0xedab447b;
}

impl Deserializable for BadServerSalt {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            bad_msg_id: i64::deserialize(buf)?,
            bad_msg_seqno: i32::deserialize(buf)?,
            error_code: i32::deserialize(buf)?,
            new_server_salt: i64::deserialize(buf)?,
        })
    }
}

/// `msgs_state_req#da69fb52 msg_ids:Vector<long> = MsgsStateReq;`
#[derive(Debug, Clone, PartialEq)]
pub struct MsgsStateReq {
    pub msg_ids: Vec<i64>,
}

impl Identifiable for MsgsStateReq {
    const CONSTRUCTOR_ID: u32 = 0xda69fb52;
}

impl Deserializable for MsgsStateReq {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            msg_ids: Vec::<i64>::deserialize(buf)?,
        })
    }
}

/// `msgs_state_info#04deb57d req_msg_id:long info:string = MsgsStateInfo;`
#[derive(Debug, Clone, PartialEq)]
pub struct MsgsStateInfo {
    pub req_msg_id: i64,
    pub info: Vec<u8>,
}

impl Identifiable for MsgsStateInfo {
    const CONSTRUCTOR_ID: u32 = 0x04deb57d;
}

impl Deserializable for MsgsStateInfo {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            req_msg_id: i64::deserialize(buf)?,
            info: Vec::<u8>::deserialize(buf)?,
        })
    }
}

/// `msgs_all_info#8cc0d131 msg_ids:Vector<long> info:string = MsgsAllInfo;`
#[derive(Debug, Clone, PartialEq)]
pub struct MsgsAllInfo {
    pub msg_ids: Vec<i64>,
    pub info: Vec<u8>,
}

impl Identifiable for MsgsAllInfo {
    const CONSTRUCTOR_ID: u32 = 0x8cc0d131;
}

impl Deserializable for MsgsAllInfo {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            msg_ids: Vec::<i64>::deserialize(buf)?,
            info: Vec::<u8>::deserialize(buf)?,
        })
    }
}

/// `msg_detailed_info#276d3ec6 msg_id:long answer_msg_id:long bytes:int status:int = MsgDetailedInfo;`
#[derive(Debug, Clone, PartialEq)]
pub struct MsgDetailedInfo {
    pub msg_id: i64,
    pub answer_msg_id: i64,
    pub bytes: i32,
    pub status: i32,
}

impl Identifiable for MsgDetailedInfo {
    const CONSTRUCTOR_ID: u32 = 0x276d3ec6;
}

impl Deserializable for MsgDetailedInfo {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            msg_id: i64::deserialize(buf)?,
            answer_msg_id: i64::deserialize(buf)?,
            bytes: i32::deserialize(buf)?,
            status: i32::deserialize(buf)?,
        })
    }
}

/// `msg_new_detailed_info#809db6df answer_msg_id:long bytes:int status:int = MsgDetailedInfo;`
#[derive(Debug, Clone, PartialEq)]
pub struct MsgNewDetailedInfo {
    pub answer_msg_id: i64,
    pub bytes: i32,
    pub status: i32,
}

impl Identifiable for MsgNewDetailedInfo {
    const CONSTRUCTOR_ID: u32 = 0x809db6df;
}

impl Deserializable for MsgNewDetailedInfo {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            answer_msg_id: i64::deserialize(buf)?,
            bytes: i32::deserialize(buf)?,
            status: i32::deserialize(buf)?,
        })
    }
}

/// `msg_resend_req#7d861a08 msg_ids:Vector<long> = MsgResendReq;`
#[derive(Debug, Clone, PartialEq)]
pub struct MsgResendReq {
    pub msg_ids: Vec<i64>,
}

impl Identifiable for MsgResendReq {
    const CONSTRUCTOR_ID: u32 = 0x7d861a08;
}

impl Deserializable for MsgResendReq {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            msg_ids: Vec::<i64>::deserialize(buf)?,
        })
    }
}

/// `msg_resend_ans_req#8610baeb msg_ids:Vector<long> = MsgResendReq;`
#[derive(Debug, Clone, PartialEq)]
pub struct MsgResendAnsReq {
    pub msg_ids: Vec<i64>,
}

impl Identifiable for MsgResendAnsReq {
    const CONSTRUCTOR_ID: u32 = 0x8610baeb;
}

impl Deserializable for MsgResendAnsReq {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            msg_ids: Vec::<i64>::deserialize(buf)?,
        })
    }
}

/// `future_salt#0949d9dc valid_since:int valid_until:int salt:long = FutureSalt;`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FutureSalt {
    pub valid_since: i32,
    pub valid_until: i32,
    pub salt: i64,
}

impl Identifiable for FutureSalt {
    const CONSTRUCTOR_ID: u32 = 0x0949d9dc;
}

impl Serializable for FutureSalt {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.valid_since.serialize(buf);
        self.valid_until.serialize(buf);
        self.salt.serialize(buf);
    }
}

impl Deserializable for FutureSalt {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            valid_since: i32::deserialize(buf)?,
            valid_until: i32::deserialize(buf)?,
            salt: i64::deserialize(buf)?,
        })
    }
}

/// `future_salts#ae500895 req_msg_id:long now:int salts:vector<future_salt> = FutureSalts;`
#[derive(Debug, Clone, PartialEq)]
pub struct FutureSalts {
    pub req_msg_id: i64,
    pub now: i32,
    pub salts: Vec<FutureSalt>,
}

impl Identifiable for FutureSalts {
    const CONSTRUCTOR_ID: u32 = 0xae500895;
}

impl Deserializable for FutureSalts {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            req_msg_id: i64::deserialize(buf)?,
            now: i32::deserialize(buf)?,
            salts: RawVec::<FutureSalt>::deserialize(buf)?.0,
        })
    }
}

/// `pong#347773c5 msg_id:long ping_id:long = Pong;`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pong {
    pub msg_id: i64,
    pub ping_id: i64,
}

impl Identifiable for Pong {
    const CONSTRUCTOR_ID: u32 = 0x347773c5;
}

impl Deserializable for Pong {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            msg_id: i64::deserialize(buf)?,
            ping_id: i64::deserialize(buf)?,
        })
    }
}

/// `destroy_session_ok#e22045fc session_id:long = DestroySessionRes;`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestroySessionOk {
    pub session_id: i64,
}

impl Identifiable for DestroySessionOk {
    const CONSTRUCTOR_ID: u32 = 0xe22045fc;
}

impl Deserializable for DestroySessionOk {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            session_id: i64::deserialize(buf)?,
        })
    }
}

/// `destroy_session_none#62d350c9 session_id:long = DestroySessionRes;`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestroySessionNone {
    pub session_id: i64,
}

impl Identifiable for DestroySessionNone {
    const CONSTRUCTOR_ID: u32 = 0x62d350c9;
}

impl Deserializable for DestroySessionNone {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            session_id: i64::deserialize(buf)?,
        })
    }
}

/// `new_session_created#9ec20908 first_msg_id:long unique_id:long server_salt:long = NewSession;`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewSessionCreated {
    pub first_msg_id: i64,
    pub unique_id: i64,
    pub server_salt: i64,
}

impl Identifiable for NewSessionCreated {
    const CONSTRUCTOR_ID: u32 = 0x9ec20908;
}

impl Deserializable for NewSessionCreated {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            first_msg_id: i64::deserialize(buf)?,
            unique_id: i64::deserialize(buf)?,
            server_salt: i64::deserialize(buf)?,
        })
    }
}

/// `http_wait#9299359f max_delay:int wait_after:int max_wait:int = HttpWait;`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpWait {
    pub max_delay: i32,
    pub wait_after: i32,
    pub max_wait: i32,
}

impl Identifiable for HttpWait {
    const CONSTRUCTOR_ID: u32 = 0x9299359f;
}

impl Deserializable for HttpWait {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        Ok(Self {
            max_delay: i32::deserialize(buf)?,
            wait_after: i32::deserialize(buf)?,
            max_wait: i32::deserialize(buf)?,
        })
    }
}

// The remaining types below are only ever classified by their
// `CONSTRUCTOR_ID`: their payload is forwarded to the caller as an
// opaque `updates` body rather than deserialized by this crate.

/// `updateShortMessage#313bc7f8 ... = Updates;`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateShortMessage;

impl Identifiable for UpdateShortMessage {
    const CONSTRUCTOR_ID: u32 = 0x313bc7f8;
}

/// `updateShortChatMessage#4d6deea5 ... = Updates;`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateShortChatMessage;

impl Identifiable for UpdateShortChatMessage {
    const CONSTRUCTOR_ID: u32 = 0x4d6deea5;
}

/// `updateShort#78d4dec1 update:Update date:int = Updates;`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateShort;

impl Identifiable for UpdateShort {
    const CONSTRUCTOR_ID: u32 = 0x78d4dec1;
}

/// `updatesCombined#725b04c3 ... = Updates;`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatesCombined;

impl Identifiable for UpdatesCombined {
    const CONSTRUCTOR_ID: u32 = 0x725b04c3;
}

/// `updates#74ae4240 ... = Updates;`
#[derive(Debug, Clone, PartialEq)]
pub struct Updates;

impl Identifiable for Updates {
    const CONSTRUCTOR_ID: u32 = 0x74ae4240;
}

/// `updateShortSentMessage#9015e101 ... = Updates;`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateShortSentMessage;

impl Identifiable for UpdateShortSentMessage {
    const CONSTRUCTOR_ID: u32 = 0x9015e101;
}

/// `updatesTooLong#e317af7e = Updates;`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatesTooLong;

impl Identifiable for UpdatesTooLong {
    const CONSTRUCTOR_ID: u32 = 0xe317af7e;
}
