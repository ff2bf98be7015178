//! Calculator expression evaluator.
//!
//! A small recursive-descent parser over the four operators with standard
//! precedence and unary minus. The input alphabet is exactly what the
//! calculator buffer can contain: ASCII digits, `+ - * /`, and `.` from a
//! previously formatted non-integral result. Anything else — including the
//! error marker itself being re-evaluated — is a typed error, never a panic
//! and never an `Infinity`/`NaN` string.

// Expression arithmetic is the point of this module. All operands are f64;
// every operation's result is checked with is_finite before it is returned.
#![allow(clippy::arithmetic_side_effects)]

use core::fmt::Write as _;

/// Maximum length of the calculator buffer, in bytes.
pub const BUFFER_CAP: usize = 24;

/// Why an expression failed to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// Empty input.
    Empty,
    /// A character outside the calculator alphabet, or one out of place.
    UnexpectedChar(char),
    /// Input ended where an operand was required (e.g. `5+`).
    UnexpectedEnd,
    /// Right-hand side of `/` was zero (covers `0/0` as well).
    DivideByZero,
    /// The result is not a finite number or does not fit the buffer.
    Overflow,
}

impl core::fmt::Display for CalcError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CalcError::Empty => write!(f, "empty expression"),
            CalcError::UnexpectedChar(c) => write!(f, "unexpected character '{c}'"),
            CalcError::UnexpectedEnd => write!(f, "expression ends mid-operand"),
            CalcError::DivideByZero => write!(f, "division by zero"),
            CalcError::Overflow => write!(f, "result out of range"),
        }
    }
}

/// Evaluate `expr` as an arithmetic expression.
///
/// # Errors
///
/// Returns a [`CalcError`] for anything that is not a well-formed, finite
/// computation over digits and `+ - * /`.
pub fn evaluate(expr: &str) -> Result<f64, CalcError> {
    let mut p = Parser {
        chars: expr.chars().peekable(),
    };
    if p.chars.peek().is_none() {
        return Err(CalcError::Empty);
    }
    let value = p.expression()?;
    match p.chars.next() {
        Some(c) => Err(CalcError::UnexpectedChar(c)),
        None if value.is_finite() => Ok(value),
        None => Err(CalcError::Overflow),
    }
}

/// Render an evaluation result the way the display shows it: integral values
/// without a fractional part (`8`, not `8.0`), everything else in plain
/// decimal.
///
/// # Errors
///
/// Returns [`CalcError::Overflow`] when the rendering does not fit the
/// calculator buffer.
pub fn format_result(value: f64) -> Result<heapless::String<BUFFER_CAP>, CalcError> {
    let mut s = heapless::String::new();
    // i64 covers every integral f64 the 24-byte buffer could have produced.
    #[allow(clippy::cast_possible_truncation)]
    let rendered = if value.abs() < 1e15 && value == (value as i64) as f64 {
        write!(s, "{}", value as i64)
    } else {
        write!(s, "{value}")
    };
    match rendered {
        Ok(()) => Ok(s),
        Err(_) => Err(CalcError::Overflow),
    }
}

struct Parser<'a> {
    chars: core::iter::Peekable<core::str::Chars<'a>>,
}

impl Parser<'_> {
    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<f64, CalcError> {
        let mut acc = self.term()?;
        loop {
            match self.chars.peek() {
                Some('+') => {
                    self.chars.next();
                    acc += self.term()?;
                }
                Some('-') => {
                    self.chars.next();
                    acc -= self.term()?;
                }
                _ => return Ok(acc),
            }
        }
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<f64, CalcError> {
        let mut acc = self.factor()?;
        loop {
            match self.chars.peek() {
                Some('*') => {
                    self.chars.next();
                    acc *= self.factor()?;
                }
                Some('/') => {
                    self.chars.next();
                    let rhs = self.factor()?;
                    if rhs == 0.0 {
                        return Err(CalcError::DivideByZero);
                    }
                    acc /= rhs;
                }
                _ => return Ok(acc),
            }
        }
    }

    // factor := '-' factor | number
    fn factor(&mut self) -> Result<f64, CalcError> {
        match self.chars.peek() {
            Some('-') => {
                self.chars.next();
                Ok(-self.factor()?)
            }
            Some(c) if c.is_ascii_digit() => self.number(),
            Some(&c) => Err(CalcError::UnexpectedChar(c)),
            None => Err(CalcError::UnexpectedEnd),
        }
    }

    // number := digits ('.' digits)?
    //
    // Accumulated manually; keypad-length operands stay well inside f64's
    // exact-integer range.
    fn number(&mut self) -> Result<f64, CalcError> {
        let mut value = 0.0_f64;
        while let Some(d) = self.chars.peek().and_then(|c| c.to_digit(10)) {
            self.chars.next();
            value = value * 10.0 + f64::from(d);
        }
        if self.chars.peek() == Some(&'.') {
            self.chars.next();
            let mut scale = 0.1_f64;
            let mut any = false;
            while let Some(d) = self.chars.peek().and_then(|c| c.to_digit(10)) {
                self.chars.next();
                value += f64::from(d) * scale;
                scale /= 10.0;
                any = true;
            }
            if !any {
                // "5." — a dot with nothing after it.
                return Err(CalcError::UnexpectedEnd);
            }
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::{evaluate, format_result, CalcError};

    #[test]
    fn test_single_number() {
        assert_eq!(evaluate("5").unwrap(), 5.0);
    }

    #[test]
    fn test_addition() {
        assert_eq!(evaluate("5+3").unwrap(), 8.0);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
        assert_eq!(evaluate("20-6/2").unwrap(), 17.0);
    }

    #[test]
    fn test_left_associative_subtraction() {
        assert_eq!(evaluate("10-3-2").unwrap(), 5.0);
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(evaluate("-5+8").unwrap(), 3.0);
        assert_eq!(evaluate("5*-3").unwrap(), -15.0);
    }

    #[test]
    fn test_decimal_reentry() {
        // A prior result like "2.5" gets operated on again.
        assert_eq!(evaluate("2.5+1").unwrap(), 3.5);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(evaluate("0/0"), Err(CalcError::DivideByZero));
        assert_eq!(evaluate("5/0"), Err(CalcError::DivideByZero));
    }

    #[test]
    fn test_empty() {
        assert_eq!(evaluate(""), Err(CalcError::Empty));
    }

    #[test]
    fn test_trailing_operator() {
        assert_eq!(evaluate("5+"), Err(CalcError::UnexpectedEnd));
        assert_eq!(evaluate("7*"), Err(CalcError::UnexpectedEnd));
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(evaluate("Ошибка"), Err(CalcError::UnexpectedChar('О')));
        assert_eq!(evaluate("5#3"), Err(CalcError::UnexpectedChar('#')));
    }

    #[test]
    fn test_double_operator_via_unary_minus_only() {
        // "5+-3" reads as 5 + (-3); "5+*3" has no reading.
        assert_eq!(evaluate("5+-3").unwrap(), 2.0);
        assert_eq!(evaluate("5+*3"), Err(CalcError::UnexpectedChar('*')));
    }

    #[test]
    fn test_dangling_dot() {
        assert_eq!(evaluate("5."), Err(CalcError::UnexpectedEnd));
    }

    #[test]
    fn test_format_integral() {
        assert_eq!(format_result(8.0).unwrap().as_str(), "8");
        assert_eq!(format_result(-15.0).unwrap().as_str(), "-15");
    }

    #[test]
    fn test_format_fractional() {
        assert_eq!(format_result(2.5).unwrap().as_str(), "2.5");
    }

    #[test]
    fn test_format_overflowing_rendering() {
        // 1e30 would print as 31 digits — more than the buffer holds.
        assert_eq!(format_result(1e30), Err(CalcError::Overflow));
    }

    #[test]
    fn test_eval_then_format_round() {
        let v = evaluate("1/4").unwrap();
        assert_eq!(format_result(v).unwrap().as_str(), "0.25");
    }
}
