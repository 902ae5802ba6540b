use chrono::{DateTime, Utc};

use crate::{
    model::withdraw::{WithdrawRequestDto, WithdrawStatus},
    server::error::internal::InternalError,
};

impl WithdrawStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Succeeded => "succeeded",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "processing" => Ok(Self::Processing),
            "succeeded" => Ok(Self::Succeeded),
            "rejected" => Ok(Self::Rejected),
            other => Err(InternalError::UnknownStatus {
                kind: "withdraw status",
                value: other.to_string(),
            }),
        }
    }
}

/// A seller payout request awaiting or past admin review.
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawRequest {
    pub id: i32,
    pub shop_id: i32,
    pub amount: i64,
    pub status: WithdrawStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WithdrawRequest {
    pub fn from_entity(entity: entity::withdraw_request::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            shop_id: entity.shop_id,
            amount: entity.amount,
            status: WithdrawStatus::parse(&entity.status)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> WithdrawRequestDto {
        WithdrawRequestDto {
            id: self.id,
            shop_id: self.shop_id,
            amount: self.amount,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
