//! Common Types Module
//!
//! 애플리케이션 전반에서 사용되는 공통 타입 정의

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// 응답 메시지 (삭제 성공 등)
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 인증된 사용자 식별자
///
/// owner로 제한된 모든 쿼리는 이 타입을 필수 인자로 받음
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct UserId(pub i64);

/// 금액 타입 (소수점 2자리, 내부적으로 cent 단위 정수)
///
/// JSON에서는 숫자 (예: `12.5`), DB에서는 `amount_cents INTEGER`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, sqlx::Type)]
#[sqlx(transparent)]
pub struct Money(i64);

impl Money {
    /// 허용하는 최대 절대값 (cent 변환 시 오버플로우 방지)
    const MAX_ABS: f64 = 1e13;

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// 소수 금액을 가장 가까운 cent로 반올림
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() || value.abs() >= Self::MAX_ABS {
            return None;
        }
        Some(Self((value * 100.0).round() as i64))
    }

    /// DB 집계 결과 (REAL) 를 cent로 변환. i64 범위를 넘으면 포화
    pub fn from_total_cents(total: f64) -> Self {
        Self(total.round() as i64)
    }

    pub fn to_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value)
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_rounds_to_cents() {
        assert_eq!(Money::from_decimal(100.0), Some(Money::from_cents(10_000)));
        assert_eq!(Money::from_decimal(19.999), Some(Money::from_cents(2_000)));
        assert_eq!(Money::from_decimal(0.014), Some(Money::from_cents(1)));
        assert_eq!(Money::from_decimal(f64::NAN), None);
        assert_eq!(Money::from_decimal(1e14), None);
    }

    #[test]
    fn test_money_from_total_saturates() {
        assert_eq!(Money::from_total_cents(14_000.0).cents(), 14_000);
        assert_eq!(Money::from_total_cents(2.0 * i64::MAX as f64).cents(), i64::MAX);
    }

    #[test]
    fn test_money_json() {
        let money: Money = serde_json::from_str("42").unwrap();
        assert_eq!(money.cents(), 4_200);

        let money: Money = serde_json::from_str("10.5").unwrap();
        assert_eq!(serde_json::to_value(money).unwrap(), serde_json::json!(10.5));

        assert!(serde_json::from_str::<Money>("\"ten\"").is_err());
    }

    #[test]
    fn test_money_sign() {
        let net = Money::from_cents(4_000) - Money::from_cents(10_000);
        assert_eq!(net.cents(), -6_000);
        assert!(net.is_negative());
        assert!(!Money::default().is_positive());
    }

    #[test]
    fn test_user_id_is_transparent() {
        assert_eq!(serde_json::to_string(&UserId(7)).unwrap(), "7");
    }
}
