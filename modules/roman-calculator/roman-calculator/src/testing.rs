//! Scripted numeral converter used by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use roman_calculator_sdk::{ConverterError, NumeralConverterClient};

/// In-memory converter that answers from scripted tables and records calls.
///
/// `to_number` fails with `InvalidInput` for unscripted text. `to_roman`
/// renders standard numerals (`0` as `"N"`) unless a response is scripted.
#[derive(Default)]
pub struct FakeConverter {
    numbers: HashMap<String, Result<i64, ConverterError>>,
    romans: HashMap<i64, Result<String, ConverterError>>,
    delays: HashMap<String, Duration>,
    to_number_calls: Mutex<Vec<String>>,
    to_roman_calls: Mutex<Vec<i64>>,
}

impl FakeConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `to_number` results for `(text, value)` pairs.
    pub fn with_numbers(mut self, pairs: &[(&str, i64)]) -> Self {
        for (text, value) in pairs {
            self.numbers.insert((*text).to_owned(), Ok(*value));
        }
        self
    }

    pub fn with_number_error(mut self, text: &str, err: ConverterError) -> Self {
        self.numbers.insert(text.to_owned(), Err(err));
        self
    }

    pub fn with_roman_error(mut self, value: i64, err: ConverterError) -> Self {
        self.romans.insert(value, Err(err));
        self
    }

    /// Delay the `to_number` answer for `text`.
    pub fn with_delay(mut self, text: &str, delay: Duration) -> Self {
        self.delays.insert(text.to_owned(), delay);
        self
    }

    pub fn to_number_calls(&self) -> Vec<String> {
        self.to_number_calls.lock().unwrap().clone()
    }

    pub fn to_roman_calls(&self) -> Vec<i64> {
        self.to_roman_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NumeralConverterClient for FakeConverter {
    async fn to_number(&self, text: &str) -> Result<i64, ConverterError> {
        self.to_number_calls.lock().unwrap().push(text.to_owned());

        if let Some(delay) = self.delays.get(text) {
            tokio::time::sleep(*delay).await;
        }

        self.numbers
            .get(text)
            .cloned()
            .unwrap_or_else(|| Err(ConverterError::InvalidInput(text.to_owned())))
    }

    async fn to_roman(&self, value: i64) -> Result<String, ConverterError> {
        self.to_roman_calls.lock().unwrap().push(value);

        match self.romans.get(&value) {
            Some(scripted) => scripted.clone(),
            None => render_roman(value)
                .ok_or_else(|| ConverterError::InvalidInput(value.to_string())),
        }
    }
}

/// Standard Roman numeral rendering for `0..=3999`; `0` renders as `"N"`.
pub fn render_roman(value: i64) -> Option<String> {
    const TABLE: [(i64, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    if !(0..=3999).contains(&value) {
        return None;
    }
    if value == 0 {
        return Some("N".to_owned());
    }

    let mut rest = value;
    let mut out = String::new();
    for (weight, symbol) in TABLE {
        while rest >= weight {
            out.push_str(symbol);
            rest -= weight;
        }
    }
    Some(out)
}
