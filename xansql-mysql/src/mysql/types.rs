//! Type conversion utilities for MySQL

use crate::error::{Error, Result};
use crate::value::Value;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use mysql_async::consts::{ColumnFlags, ColumnType};
use mysql_async::Value as MySqlValue;

/// Convert a text-protocol cell using the type the server reported for its
/// column.
///
/// Integers, floating point and temporal columns become typed values. DECIMAL,
/// JSON and character columns stay text, and binary columns stay bytes.
/// Text the column type cannot account for (zero dates, out-of-day times)
/// is kept as-is.
pub fn from_column_value(
    value: MySqlValue,
    column_type: ColumnType,
    flags: ColumnFlags,
) -> Result<Value> {
    let MySqlValue::Bytes(bytes) = value else {
        return from_mysql_value(value);
    };
    let text = match std::str::from_utf8(&bytes) {
        Ok(text) => text,
        Err(_) => return Ok(Value::Bytes(bytes)),
    };

    let decoded = match column_type {
        ColumnType::MYSQL_TYPE_TINY
        | ColumnType::MYSQL_TYPE_SHORT
        | ColumnType::MYSQL_TYPE_INT24
        | ColumnType::MYSQL_TYPE_LONG
        | ColumnType::MYSQL_TYPE_LONGLONG
        | ColumnType::MYSQL_TYPE_YEAR => {
            if flags.contains(ColumnFlags::UNSIGNED_FLAG) {
                text.parse().ok().map(Value::UInt)
            } else {
                text.parse().ok().map(Value::Int)
            }
        }
        ColumnType::MYSQL_TYPE_FLOAT => text.parse().ok().map(Value::Float),
        ColumnType::MYSQL_TYPE_DOUBLE => text.parse().ok().map(Value::Double),
        ColumnType::MYSQL_TYPE_DATE | ColumnType::MYSQL_TYPE_NEWDATE => {
            NaiveDate::parse_from_str(text, "%Y-%m-%d").ok().map(Value::Date)
        }
        ColumnType::MYSQL_TYPE_DATETIME
        | ColumnType::MYSQL_TYPE_DATETIME2
        | ColumnType::MYSQL_TYPE_TIMESTAMP
        | ColumnType::MYSQL_TYPE_TIMESTAMP2 => {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
                .ok()
                .map(Value::DateTime)
        }
        ColumnType::MYSQL_TYPE_TIME | ColumnType::MYSQL_TYPE_TIME2 => {
            NaiveTime::parse_from_str(text, "%H:%M:%S%.f").ok().map(Value::Time)
        }
        _ => None,
    };

    match decoded {
        Some(value) => Ok(value),
        None => Ok(Value::String(text.to_string())),
    }
}

/// Convert mysql_async Value to a dialect Value
pub fn from_mysql_value(value: MySqlValue) -> Result<Value> {
    match value {
        MySqlValue::NULL => Ok(Value::Null),
        MySqlValue::Bytes(v) => match String::from_utf8(v) {
            Ok(s) => Ok(Value::String(s)),
            Err(e) => Ok(Value::Bytes(e.into_bytes())),
        },
        MySqlValue::Int(v) => Ok(Value::Int(v)),
        MySqlValue::UInt(v) => Ok(Value::UInt(v)),
        MySqlValue::Float(v) => Ok(Value::Float(v)),
        MySqlValue::Double(v) => Ok(Value::Double(v)),
        MySqlValue::Date(year, month, day, hour, min, sec, micro) => {
            let date = NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
                .ok_or_else(|| Error::TypeConversion {
                    expected: "date",
                    actual: format!("{}-{}-{}", year, month, day),
                })?;
            if hour == 0 && min == 0 && sec == 0 && micro == 0 {
                return Ok(Value::Date(date));
            }
            let time = NaiveTime::from_hms_micro_opt(hour as u32, min as u32, sec as u32, micro)
                .ok_or_else(|| Error::TypeConversion {
                    expected: "time",
                    actual: format!("{}:{}:{}.{}", hour, min, sec, micro),
                })?;
            Ok(Value::DateTime(NaiveDateTime::new(date, time)))
        }
        MySqlValue::Time(is_neg, days, hours, mins, secs, micro) => {
            // Durations outside a single day have no NaiveTime; keep MySQL's text form.
            if is_neg || days > 0 || hours >= 24 {
                let sign = if is_neg { "-" } else { "" };
                let total_hours = days * 24 + hours as u32;
                return Ok(Value::String(format!(
                    "{}{:02}:{:02}:{:02}",
                    sign, total_hours, mins, secs
                )));
            }
            let time = NaiveTime::from_hms_micro_opt(hours as u32, mins as u32, secs as u32, micro)
                .ok_or_else(|| Error::TypeConversion {
                    expected: "time",
                    actual: format!("{}:{}:{}.{}", hours, mins, secs, micro),
                })?;
            Ok(Value::Time(time))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> MySqlValue {
        MySqlValue::Bytes(s.as_bytes().to_vec())
    }

    #[test]
    fn test_integer_columns_decode_as_numbers() {
        let signed =
            from_column_value(text("-42"), ColumnType::MYSQL_TYPE_LONG, ColumnFlags::empty())
                .unwrap();
        assert_eq!(signed, Value::Int(-42));

        let unsigned = from_column_value(
            text("18446744073709551615"),
            ColumnType::MYSQL_TYPE_LONGLONG,
            ColumnFlags::UNSIGNED_FLAG,
        )
        .unwrap();
        assert_eq!(unsigned, Value::UInt(u64::MAX));
        assert_eq!(serde_json::to_string(&signed).unwrap(), "-42");
    }

    #[test]
    fn test_floating_columns_decode_as_numbers() {
        let value =
            from_column_value(text("1.5"), ColumnType::MYSQL_TYPE_DOUBLE, ColumnFlags::empty())
                .unwrap();
        assert_eq!(value, Value::Double(1.5));
    }

    #[test]
    fn test_decimal_and_text_columns_stay_text() {
        let decimal = from_column_value(
            text("1.50"),
            ColumnType::MYSQL_TYPE_NEWDECIMAL,
            ColumnFlags::empty(),
        )
        .unwrap();
        assert_eq!(decimal, Value::String("1.50".to_string()));

        let varchar = from_column_value(
            text("42"),
            ColumnType::MYSQL_TYPE_VAR_STRING,
            ColumnFlags::empty(),
        )
        .unwrap();
        assert_eq!(varchar, Value::String("42".to_string()));
    }

    #[test]
    fn test_temporal_columns_decode() {
        let date = from_column_value(
            text("2024-01-02"),
            ColumnType::MYSQL_TYPE_DATE,
            ColumnFlags::empty(),
        )
        .unwrap();
        assert_eq!(date, Value::Date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()));

        let datetime = from_column_value(
            text("2024-01-02 03:04:05.250000"),
            ColumnType::MYSQL_TYPE_DATETIME,
            ColumnFlags::empty(),
        )
        .unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_micro_opt(3, 4, 5, 250_000)
            .unwrap();
        assert_eq!(datetime, Value::DateTime(expected));

        let time =
            from_column_value(text("08:30:00"), ColumnType::MYSQL_TYPE_TIME, ColumnFlags::empty())
                .unwrap();
        assert_eq!(time, Value::Time(NaiveTime::from_hms_opt(8, 30, 0).unwrap()));
    }

    #[test]
    fn test_unrepresentable_temporal_text_kept() {
        let zero = from_column_value(
            text("0000-00-00 00:00:00"),
            ColumnType::MYSQL_TYPE_DATETIME,
            ColumnFlags::empty(),
        )
        .unwrap();
        assert_eq!(zero, Value::String("0000-00-00 00:00:00".to_string()));

        let long =
            from_column_value(text("-26:03:04"), ColumnType::MYSQL_TYPE_TIME, ColumnFlags::empty())
                .unwrap();
        assert_eq!(long, Value::String("-26:03:04".to_string()));
    }

    #[test]
    fn test_binary_column_stays_bytes() {
        let value = from_column_value(
            MySqlValue::Bytes(vec![0xc3, 0x28]),
            ColumnType::MYSQL_TYPE_BLOB,
            ColumnFlags::BINARY_FLAG,
        )
        .unwrap();
        assert_eq!(value, Value::Bytes(vec![0xc3, 0x28]));
    }

    #[test]
    fn test_null_cell_is_null() {
        let value =
            from_column_value(MySqlValue::NULL, ColumnType::MYSQL_TYPE_LONG, ColumnFlags::empty())
                .unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn test_utf8_bytes_become_string() {
        let value = from_mysql_value(MySqlValue::Bytes(b"varchar(255)".to_vec())).unwrap();
        assert_eq!(value, Value::String("varchar(255)".to_string()));
    }

    #[test]
    fn test_binary_bytes_stay_bytes() {
        let value = from_mysql_value(MySqlValue::Bytes(vec![0xc3, 0x28])).unwrap();
        assert_eq!(value, Value::Bytes(vec![0xc3, 0x28]));
    }

    #[test]
    fn test_pure_date() {
        let value = from_mysql_value(MySqlValue::Date(2023, 12, 1, 0, 0, 0, 0)).unwrap();
        assert_eq!(
            value,
            Value::Date(NaiveDate::from_ymd_opt(2023, 12, 1).unwrap())
        );
    }

    #[test]
    fn test_datetime() {
        let value = from_mysql_value(MySqlValue::Date(2023, 12, 1, 8, 30, 0, 250)).unwrap();
        let expected = NaiveDate::from_ymd_opt(2023, 12, 1)
            .unwrap()
            .and_hms_micro_opt(8, 30, 0, 250)
            .unwrap();
        assert_eq!(value, Value::DateTime(expected));
    }

    #[test]
    fn test_long_time_kept_as_text() {
        let value = from_mysql_value(MySqlValue::Time(true, 1, 2, 3, 4, 0)).unwrap();
        assert_eq!(value, Value::String("-26:03:04".to_string()));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let err = from_mysql_value(MySqlValue::Date(2023, 2, 30, 0, 0, 0, 0)).unwrap_err();
        assert!(matches!(err, Error::TypeConversion { expected: "date", .. }));
    }
}
