//! Coupon domain model and discount rule.

use chrono::{DateTime, Utc};

use crate::model::coupon::{CouponDto, CreateCouponDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Coupon {
    pub id: i32,
    pub shop_id: i32,
    pub code: String,
    /// Discount percentage, 1 to 100.
    pub value: i32,
    pub min_amount: Option<i64>,
    pub max_amount: Option<i64>,
    /// When set, only this product's lines count towards the discount.
    pub product_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// One priced cart line as seen by a coupon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedLine {
    pub product_id: i32,
    /// `unit_price * quantity`, in cents.
    pub amount: i64,
}

/// Why a supplied coupon cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponRejection {
    /// The eligible amount is below `min_amount`.
    BelowMinimum(i64),
    /// The coupon is restricted to a product that is not in the order.
    ProductNotInOrder,
}

impl Coupon {
    pub fn from_entity(entity: entity::coupon::Model) -> Self {
        Self {
            id: entity.id,
            shop_id: entity.shop_id,
            code: entity.code,
            value: entity.value,
            min_amount: entity.min_amount,
            max_amount: entity.max_amount,
            product_id: entity.product_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CouponDto {
        CouponDto {
            id: self.id,
            shop_id: self.shop_id,
            code: self.code,
            value: self.value,
            min_amount: self.min_amount,
            max_amount: self.max_amount,
            product_id: self.product_id,
            created_at: self.created_at,
        }
    }

    /// Sum of the lines this coupon applies to.
    ///
    /// `lines` must already be restricted to the coupon's shop.
    pub fn eligible_amount(&self, lines: &[PricedLine]) -> i64 {
        lines
            .iter()
            .filter(|line| self.product_id.is_none_or(|id| id == line.product_id))
            .map(|line| line.amount)
            .sum()
    }

    /// Discount in cents for the given shop lines.
    ///
    /// `eligible * value / 100`, rounded down, capped at `max_amount`.
    pub fn discount_for(&self, lines: &[PricedLine]) -> Result<i64, CouponRejection> {
        if let Some(product_id) = self.product_id {
            if !lines.iter().any(|line| line.product_id == product_id) {
                return Err(CouponRejection::ProductNotInOrder);
            }
        }

        let eligible = self.eligible_amount(lines);

        if let Some(min_amount) = self.min_amount {
            if eligible < min_amount {
                return Err(CouponRejection::BelowMinimum(min_amount));
            }
        }

        let discount = eligible * self.value as i64 / 100;

        Ok(match self.max_amount {
            Some(max_amount) => discount.min(max_amount),
            None => discount,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateCouponParams {
    pub shop_id: i32,
    pub code: String,
    pub value: i32,
    pub min_amount: Option<i64>,
    pub max_amount: Option<i64>,
    pub product_id: Option<i32>,
}

impl CreateCouponParams {
    pub fn from_dto(shop_id: i32, dto: CreateCouponDto) -> Self {
        Self {
            shop_id,
            code: dto.code.trim().to_string(),
            value: dto.value,
            min_amount: dto.min_amount,
            max_amount: dto.max_amount,
            product_id: dto.product_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(value: i32) -> Coupon {
        Coupon {
            id: 1,
            shop_id: 1,
            code: "SAVE".to_string(),
            value,
            min_amount: None,
            max_amount: None,
            product_id: None,
            created_at: Utc::now(),
        }
    }

    fn line(product_id: i32, amount: i64) -> PricedLine {
        PricedLine { product_id, amount }
    }

    #[test]
    fn percentage_rounds_down() {
        let coupon = coupon(15);

        assert_eq!(coupon.discount_for(&[line(1, 999)]), Ok(149));
    }

    #[test]
    fn below_minimum_is_rejected() {
        let coupon = Coupon {
            min_amount: Some(5_000),
            ..coupon(10)
        };

        assert_eq!(
            coupon.discount_for(&[line(1, 4_999)]),
            Err(CouponRejection::BelowMinimum(5_000))
        );
        assert_eq!(coupon.discount_for(&[line(1, 5_000)]), Ok(500));
    }

    #[test]
    fn discount_is_capped_at_max_amount() {
        let coupon = Coupon {
            max_amount: Some(300),
            ..coupon(50)
        };

        assert_eq!(coupon.discount_for(&[line(1, 10_000)]), Ok(300));
    }

    #[test]
    fn product_restriction_only_counts_that_product() {
        let coupon = Coupon {
            product_id: Some(7),
            ..coupon(10)
        };

        assert_eq!(coupon.discount_for(&[line(7, 2_000), line(8, 8_000)]), Ok(200));
        assert_eq!(
            coupon.discount_for(&[line(8, 8_000)]),
            Err(CouponRejection::ProductNotInOrder)
        );
    }

    #[test]
    fn minimum_applies_to_eligible_lines_only() {
        let coupon = Coupon {
            product_id: Some(7),
            min_amount: Some(1_000),
            ..coupon(10)
        };

        assert_eq!(
            coupon.discount_for(&[line(7, 500), line(8, 9_000)]),
            Err(CouponRejection::BelowMinimum(1_000))
        );
    }
}
