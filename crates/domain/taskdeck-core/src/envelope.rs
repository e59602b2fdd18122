//! The uniform wrapper every server call resolves to.
//!
//! On the wire the server answers with a flat `ResponseEnvelope` and a numeric
//! `resultCode`. Callers never branch on the code directly: the envelope is turned
//! into a [`ServerReply`] at the transport boundary, so success and failure are
//! matched exhaustively.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod result_code {
    pub const SUCCESS: i32 = 0;
    pub const ERROR: i32 = 1;
    pub const CAPTCHA: i32 = 10;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub error: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            error: error.into(),
        }
    }
}

/// Payload of calls that answer with `data: {}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// Payload of create calls: `data: { item: ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedItem<T> {
    pub item: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<D = Empty> {
    pub result_code: i32,
    #[serde(default)]
    pub messages: Vec<String>,
    pub data: D,
    #[serde(default, alias = "fieldsErrors")]
    pub fields_error: Vec<FieldError>,
}

impl<D> ResponseEnvelope<D> {
    pub fn success(data: D) -> Self {
        Self {
            result_code: result_code::SUCCESS,
            messages: Vec::new(),
            data,
            fields_error: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result_code == result_code::SUCCESS
    }

    /// `data` is only kept when the server reported success.
    pub fn into_reply(self) -> ServerReply<D> {
        if self.is_success() {
            ServerReply::Success(self.data)
        } else {
            ServerReply::Failure(ServerFailure {
                result_code: self.result_code,
                messages: self.messages,
                fields_error: self.fields_error,
            })
        }
    }
}

impl ResponseEnvelope<serde_json::Value> {
    /// Decodes `data` into `D` only for successful envelopes; failed ones usually
    /// carry `data: {}` which would not fit the success shape.
    pub fn decode<D: DeserializeOwned>(self) -> Result<ServerReply<D>, serde_json::Error> {
        match self.into_reply() {
            ServerReply::Success(value) => serde_json::from_value(value).map(ServerReply::Success),
            ServerReply::Failure(failure) => Ok(ServerReply::Failure(failure)),
        }
    }
}

impl<D> From<ResponseEnvelope<D>> for ServerReply<D> {
    fn from(envelope: ResponseEnvelope<D>) -> Self {
        envelope.into_reply()
    }
}

/// Everything a failed envelope tells the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerFailure {
    pub result_code: i32,
    pub messages: Vec<String>,
    pub fields_error: Vec<FieldError>,
}

impl ServerFailure {
    pub fn new(messages: Vec<String>) -> Self {
        Self {
            result_code: result_code::ERROR,
            messages,
            fields_error: Vec::new(),
        }
    }

    pub fn with_field_errors(mut self, fields_error: Vec<FieldError>) -> Self {
        self.fields_error = fields_error;
        self
    }

    pub fn first_message(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }

    pub fn has_field_errors(&self) -> bool {
        !self.fields_error.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ServerReply<D> {
    Success(D),
    Failure(ServerFailure),
}

impl<D> ServerReply<D> {
    pub fn map<U>(self, f: impl FnOnce(D) -> U) -> ServerReply<U> {
        match self {
            ServerReply::Success(data) => ServerReply::Success(f(data)),
            ServerReply::Failure(failure) => ServerReply::Failure(failure),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ServerReply::Success(_))
    }
}
