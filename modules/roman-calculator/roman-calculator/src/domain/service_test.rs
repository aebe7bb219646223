use std::sync::Arc;
use std::time::Duration;

use roman_calculator_sdk::{ConverterError, Operator};

use super::error::DomainError;
use super::service::Service;
use crate::testing::FakeConverter;

fn service_with(converter: &Arc<FakeConverter>) -> Service {
    Service::new(converter.clone())
}

#[tokio::test]
async fn test_add_converts_each_operand_in_order() {
    let converter = Arc::new(FakeConverter::new().with_numbers(&[
        ("I", 1),
        ("IV", 4),
        ("X", 10),
        ("XX", 20),
    ]));
    let service = service_with(&converter);

    let result = service.calculate(Operator::Add, "I, IV, X,XX").await.unwrap();

    assert_eq!(result, "XXXV");
    assert_eq!(converter.to_number_calls(), vec!["I", "IV", "X", "XX"]);
    assert_eq!(converter.to_roman_calls(), vec![35]);
}

#[tokio::test]
async fn test_single_operand_returned_unchanged() {
    let converter = Arc::new(FakeConverter::new().with_numbers(&[("XX", 20)]));
    let service = service_with(&converter);

    for op in Operator::ALL {
        assert_eq!(service.calculate(op, "XX").await.unwrap(), "XX", "{op}");
    }
    assert_eq!(converter.to_roman_calls(), vec![20, 20, 20, 20]);
}

#[tokio::test]
async fn test_empty_operands_rejected_without_conversion() {
    let converter = Arc::new(FakeConverter::new());
    let service = service_with(&converter);

    for op in Operator::ALL {
        for text in ["", "   "] {
            let err = service.calculate(op, text).await.unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)));
        }
    }
    assert!(converter.to_number_calls().is_empty());
    assert!(converter.to_roman_calls().is_empty());
}

#[tokio::test]
async fn test_add_above_max_is_out_of_range() {
    let converter = Arc::new(FakeConverter::new().with_numbers(&[("I", 1), ("MMMCMXCIX", 3999)]));
    let service = service_with(&converter);

    let err = service
        .calculate(Operator::Add, "I,MMMCMXCIX")
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::OutOfRange { ref value, .. } if value == "4000"));
    assert_eq!(converter.to_number_calls(), vec!["I", "MMMCMXCIX"]);
    assert!(converter.to_roman_calls().is_empty());
}

#[tokio::test]
async fn test_malformed_numeral_is_invalid_input() {
    let converter = Arc::new(
        FakeConverter::new()
            .with_number_error("XIIII", ConverterError::InvalidInput("XIIII".to_owned())),
    );
    let service = service_with(&converter);

    let err = service.calculate(Operator::Add, "XIIII").await.unwrap_err();

    assert_eq!(err, DomainError::RejectedNumeral("XIIII".to_owned()));
    assert_eq!(converter.to_number_calls(), vec!["XIIII"]);
}

#[tokio::test]
async fn test_interior_empty_token_reaches_converter() {
    let converter = Arc::new(FakeConverter::new().with_numbers(&[("I", 1), ("II", 2)]));
    let service = service_with(&converter);

    let err = service.calculate(Operator::Add, "I,,II").await.unwrap_err();

    assert!(matches!(err, DomainError::RejectedNumeral(_)));
    assert!(converter.to_number_calls().contains(&String::new()));
}

#[tokio::test]
async fn test_converter_outage_is_upstream_failure() {
    let converter = Arc::new(
        FakeConverter::new()
            .with_numbers(&[("I", 1)])
            .with_number_error("X", ConverterError::Upstream("connection refused".to_owned())),
    );
    let service = service_with(&converter);

    let err = service.calculate(Operator::Multiply, "I, X").await.unwrap_err();

    assert_eq!(err, DomainError::Upstream("connection refused".to_owned()));
}

#[tokio::test]
async fn test_subtract_left_fold() {
    let converter = Arc::new(FakeConverter::new().with_numbers(&[
        ("L", 50),
        ("III", 3),
        ("X", 10),
        ("VI", 6),
        ("I", 1),
        ("IX", 9),
    ]));
    let service = service_with(&converter);

    let result = service
        .calculate(Operator::Subtract, "L, III, X, VI, I,IX")
        .await
        .unwrap();

    assert_eq!(result, "XXI");
}

#[tokio::test]
async fn test_subtract_bounds() {
    let converter = Arc::new(FakeConverter::new().with_numbers(&[("I", 1), ("II", 2)]));
    let service = service_with(&converter);

    assert_eq!(service.calculate(Operator::Subtract, "I,I").await.unwrap(), "N");

    let err = service.calculate(Operator::Subtract, "I,II").await.unwrap_err();
    assert!(matches!(err, DomainError::OutOfRange { ref value, .. } if value == "-1"));
}

#[tokio::test]
async fn test_multiply() {
    let converter = Arc::new(FakeConverter::new().with_numbers(&[("II", 2), ("III", 3), ("VII", 7)]));
    let service = service_with(&converter);

    let result = service
        .calculate(Operator::Multiply, "II,III,VII")
        .await
        .unwrap();

    assert_eq!(result, "XLII");
}

#[tokio::test]
async fn test_divide_exact_has_no_fraction() {
    let converter = Arc::new(FakeConverter::new().with_numbers(&[("LX", 60), ("III", 3), ("II", 2)]));
    let service = service_with(&converter);

    let result = service.calculate(Operator::Divide, "LX, III, II").await.unwrap();

    assert_eq!(result, "X");
    assert_eq!(converter.to_roman_calls(), vec![10]);
}

#[tokio::test]
async fn test_divide_appends_reduced_fraction() {
    let converter = Arc::new(FakeConverter::new().with_numbers(&[("X", 10), ("IV", 4)]));
    let service = service_with(&converter);

    let result = service.calculate(Operator::Divide, "X,IV").await.unwrap();

    assert_eq!(result, "II (I/II)");
}

#[tokio::test]
async fn test_divide_below_one() {
    let converter = Arc::new(FakeConverter::new().with_numbers(&[("I", 1), ("MMMCMXCIX", 3999)]));
    let service = service_with(&converter);

    let result = service
        .calculate(Operator::Divide, "I,MMMCMXCIX")
        .await
        .unwrap();

    assert_eq!(result, "N (I/MMMCMXCIX)");
    let mut rendered = converter.to_roman_calls();
    rendered.sort_unstable();
    assert_eq!(rendered, vec![0, 1, 3999]);
}

#[tokio::test]
async fn test_fraction_rendering_failure_propagates() {
    let converter = Arc::new(
        FakeConverter::new()
            .with_numbers(&[("X", 10), ("III", 3)])
            .with_roman_error(3, ConverterError::Upstream("bad gateway".to_owned())),
    );
    let service = service_with(&converter);

    let err = service.calculate(Operator::Divide, "X,III").await.unwrap_err();

    assert_eq!(err, DomainError::Upstream("bad gateway".to_owned()));
}

#[tokio::test]
async fn test_operand_order_independent_of_completion_order() {
    let converter = Arc::new(
        FakeConverter::new()
            .with_numbers(&[("C", 100), ("X", 10), ("II", 2)])
            .with_delay("C", Duration::from_millis(40))
            .with_delay("X", Duration::from_millis(20)),
    );
    let service = service_with(&converter);

    // 100 - 10 - 2; a completion-ordered join would compute 2 - 10 - 100
    let result = service.calculate(Operator::Subtract, "C,X,II").await.unwrap();

    assert_eq!(result, "LXXXVIII");
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let converter = Arc::new(FakeConverter::new().with_numbers(&[("VII", 7), ("II", 2)]));
    let service = service_with(&converter);

    let first = service.calculate(Operator::Divide, "VII,II").await.unwrap();
    let second = service.calculate(Operator::Divide, "VII,II").await.unwrap();

    assert_eq!(first, "III (I/II)");
    assert_eq!(first, second);
}
