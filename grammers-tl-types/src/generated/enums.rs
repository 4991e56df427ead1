// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module contains all of the boxed types, each represented by an
//! `enum`. All of them implement [`Deserializable`], and those that can
//! legitimately be sent back to Telegram also implement [`Serializable`].
//!
//! [`Serializable`]: ../trait.Serializable.html
//! [`Deserializable`]: ../trait.Deserializable.html
#![allow(clippy::unreadable_literal)]

use crate::generated::types;
use crate::{Cursor, Deserializable, Identifiable, Serializable};

/// `RpcError`
#[derive(Debug, Clone, PartialEq)]
pub enum RpcError {
    Error(types::RpcError),
}

impl Serializable for RpcError {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        match self {
            Self::Error(x) => {
                types::RpcError::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
        }
    }
}

impl Deserializable for RpcError {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::RpcError::CONSTRUCTOR_ID => Self::Error(types::RpcError::deserialize(buf)?),
            _ => return Err(crate::errors::DeserializeError::UnexpectedConstructor { id }),
        })
    }
}

/// `MsgsAck`
#[derive(Debug, Clone, PartialEq)]
pub enum MsgsAck {
    Ack(types::MsgsAck),
}

impl Serializable for MsgsAck {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        match self {
            Self::Ack(x) => {
                types::MsgsAck::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
        }
    }
}

impl Deserializable for MsgsAck {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::MsgsAck::CONSTRUCTOR_ID => Self::Ack(types::MsgsAck::deserialize(buf)?),
            _ => return Err(crate::errors::DeserializeError::UnexpectedConstructor { id }),
        })
    }
}

/// `BadMsgNotification`
#[derive(Debug, Clone, PartialEq)]
pub enum BadMsgNotification {
    Notification(types::BadMsgNotification),
    BadServerSalt(types::BadServerSalt),
}

impl Deserializable for BadMsgNotification {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::BadMsgNotification::CONSTRUCTOR_ID => {
                Self::Notification(types::BadMsgNotification::deserialize(buf)?)
            }
            types::BadServerSalt::CONSTRUCTOR_ID => {
                Self::BadServerSalt(types::BadServerSalt::deserialize(buf)?)
            }
            _ => return Err(crate::errors::DeserializeError::UnexpectedConstructor { id }),
        })
    }
}

/// `MsgDetailedInfo`
#[derive(Debug, Clone, PartialEq)]
pub enum MsgDetailedInfo {
    Info(types::MsgDetailedInfo),
    MsgNewDetailedInfo(types::MsgNewDetailedInfo),
}

impl Deserializable for MsgDetailedInfo {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::MsgDetailedInfo::CONSTRUCTOR_ID => {
                Self::Info(types::MsgDetailedInfo::deserialize(buf)?)
            }
            types::MsgNewDetailedInfo::CONSTRUCTOR_ID => {
                Self::MsgNewDetailedInfo(types::MsgNewDetailedInfo::deserialize(buf)?)
            }
            _ => return Err(crate::errors::DeserializeError::UnexpectedConstructor { id }),
        })
    }
}

/// `FutureSalts`
#[derive(Debug, Clone, PartialEq)]
pub enum FutureSalts {
    Salts(types::FutureSalts),
}

impl Deserializable for FutureSalts {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::FutureSalts::CONSTRUCTOR_ID => {
                Self::Salts(types::FutureSalts::deserialize(buf)?)
            }
            _ => return Err(crate::errors::DeserializeError::UnexpectedConstructor { id }),
        })
    }
}

/// `Pong`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pong {
    Pong(types::Pong),
}

impl Deserializable for Pong {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::Pong::CONSTRUCTOR_ID => Self::Pong(types::Pong::deserialize(buf)?),
            _ => return Err(crate::errors::DeserializeError::UnexpectedConstructor { id }),
        })
    }
}

/// `DestroySessionRes`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestroySessionRes {
    Ok(types::DestroySessionOk),
    None(types::DestroySessionNone),
}

impl Deserializable for DestroySessionRes {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::DestroySessionOk::CONSTRUCTOR_ID => {
                Self::Ok(types::DestroySessionOk::deserialize(buf)?)
            }
            types::DestroySessionNone::CONSTRUCTOR_ID => {
                Self::None(types::DestroySessionNone::deserialize(buf)?)
            }
            _ => return Err(crate::errors::DeserializeError::UnexpectedConstructor { id }),
        })
    }
}

/// `NewSession`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewSession {
    Created(types::NewSessionCreated),
}

impl Deserializable for NewSession {
    fn deserialize(buf: &mut Cursor) -> Result<Self, crate::errors::DeserializeError> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::NewSessionCreated::CONSTRUCTOR_ID => {
                Self::Created(types::NewSessionCreated::deserialize(buf)?)
            }
            _ => return Err(crate::errors::DeserializeError::UnexpectedConstructor { id }),
        })
    }
}
