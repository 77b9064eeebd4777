//! The parameter validator.

use crate::violation::ParameterViolation;
use ipx_diagnostics::DiagnosticSink;
use ipx_expr::{
    is_array_literal, parse_based_literal, split_array, starts_with_based_literal,
    ExpressionParser, Base, ValueFormatter,
};
use ipx_model::{Choice, Parameter, ParameterType, Resolve};
use std::cmp::Ordering;

/// Checks parameters for consistency of name, type, value, bounds, choice,
/// resolve, value ID and vectors.
///
/// The validator borrows an expression parser to validate and evaluate
/// value expressions, and the registry of choices that `choice_ref` may name.
/// It never fails: every check answers with a `bool` or a list.
pub struct ParameterValidator<'a> {
    parser: &'a dyn ExpressionParser,
    choices: &'a [Choice],
}

/// An evaluated boundary or value, compared with the semantics of its type.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
enum Number {
    Int(i128),
    Real(f64),
}

impl<'a> ParameterValidator<'a> {
    /// Creates a validator using `parser` for expressions and `choices` for choice lookups.
    pub fn new(parser: &'a dyn ExpressionParser, choices: &'a [Choice]) -> Self {
        Self { parser, choices }
    }

    /// Returns `true` if the parameter has no violations.
    pub fn validate(&self, parameter: &Parameter) -> bool {
        self.violations(parameter).is_empty()
    }

    /// Lists every violation of the parameter.
    ///
    /// Order: name, value (missing, or type, minimum, maximum and choice
    /// checks of a present value), type, minimum, maximum, choice, resolve,
    /// value ID, vector. Every check runs regardless of earlier failures.
    pub fn violations(&self, parameter: &Parameter) -> Vec<ParameterViolation> {
        let mut found: Vec<ParameterViolation> = Vec::new();
        let mut check = |ok: bool, violation: ParameterViolation| {
            if !ok {
                found.push(violation);
            }
        };

        check(self.has_valid_name(parameter), ParameterViolation::Name);
        if parameter.value.trim().is_empty() {
            check(false, ParameterViolation::MissingValue);
        } else {
            check(
                self.has_valid_value_for_type(&parameter.value, &parameter.ty),
                ParameterViolation::ValueForType,
            );
            check(
                !self.value_is_less_than_minimum(parameter),
                ParameterViolation::BelowMinimum,
            );
            check(
                !self.value_is_greater_than_maximum(parameter),
                ParameterViolation::AboveMaximum,
            );
            check(
                self.has_valid_value_for_choice(parameter),
                ParameterViolation::UnknownEnumeration,
            );
        }
        check(self.has_valid_type(parameter), ParameterViolation::Type);
        check(
            self.has_valid_minimum_value(parameter),
            ParameterViolation::MinimumForType,
        );
        check(
            self.has_valid_maximum_value(parameter),
            ParameterViolation::MaximumForType,
        );
        check(self.has_valid_choice(parameter), ParameterViolation::UnknownChoice);
        check(self.has_valid_resolve(parameter), ParameterViolation::Resolve);
        check(self.has_valid_value_id(parameter), ParameterViolation::ValueId);
        check(self.has_valid_vector(parameter), ParameterViolation::Vector);

        if !found.is_empty() {
            log::debug!(
                "parameter '{}' has {} violation(s): {:?}",
                parameter.name,
                found.len(),
                found
            );
        }
        found
    }

    /// Returns the message of every violation, in [`violations`](Self::violations) order.
    pub fn find_errors_in(&self, parameter: &Parameter, context: &str) -> Vec<String> {
        self.violations(parameter)
            .into_iter()
            .map(|v| v.message(parameter, context))
            .collect()
    }

    /// Emits one diagnostic per violation into `sink`.
    pub fn report(&self, parameter: &Parameter, context: &str, sink: &mut DiagnosticSink) {
        for violation in self.violations(parameter) {
            sink.emit(violation.to_diagnostic(parameter, context));
        }
    }

    /// The name must contain something other than whitespace.
    pub fn has_valid_name(&self, parameter: &Parameter) -> bool {
        !parameter.name.trim().is_empty()
    }

    /// The value must be present, fit the type, respect both bounds and match the choice.
    pub fn has_valid_value(&self, parameter: &Parameter) -> bool {
        !parameter.value.trim().is_empty()
            && self.has_valid_value_for_type(&parameter.value, &parameter.ty)
            && !self.value_is_less_than_minimum(parameter)
            && !self.value_is_greater_than_maximum(parameter)
            && self.has_valid_value_for_choice(parameter)
    }

    /// The type must be empty or one of the SystemVerilog parameter types.
    pub fn has_valid_type(&self, parameter: &Parameter) -> bool {
        parameter.ty.is_known()
    }

    /// Returns `true` if `value` is a valid expression whose result fits `ty`.
    pub fn has_valid_value_for_type(&self, value: &str, ty: &ParameterType) -> bool {
        if !self.parser.is_valid_expression(value) {
            return false;
        }
        if *ty == ParameterType::Untyped {
            return self.parser.parse_expression(value) != "x";
        }
        if self.parser.is_array_expression(value) {
            return self.is_array_valid_for_type(value, ty);
        }

        let solved = self.parser.parse_expression(value);
        let solved = solved.trim();
        match ty {
            ParameterType::Bit => self.is_valid_bit_value(value, solved),
            ParameterType::Byte => int_in_range(solved, i8::MIN.into(), i8::MAX.into()),
            ParameterType::Shortint => int_in_range(solved, i16::MIN.into(), i16::MAX.into()),
            ParameterType::Int => int_in_range(solved, i32::MIN.into(), i32::MAX.into()),
            ParameterType::Longint => {
                if solved.starts_with('-') {
                    int_in_range(solved, i64::MIN.into(), i64::MAX.into())
                } else {
                    int_in_range(solved, 0, u64::MAX.into())
                }
            }
            ParameterType::Shortreal => solved
                .parse::<f64>()
                .is_ok_and(|f| f.is_finite() && f.abs() <= f64::from(f32::MAX)),
            ParameterType::Real => solved.parse::<f64>().is_ok_and(f64::is_finite),
            ParameterType::String => {
                solved.len() >= 2 && solved.starts_with('"') && solved.ends_with('"')
            }
            ParameterType::Untyped | ParameterType::Unknown(_) => false,
        }
    }

    /// A `bit` value is `0`, `1`, a fill literal, or a based binary or hex
    /// literal denoting a value of its declared width. A lone literal is
    /// judged on its text alone; other expressions by their evaluated form
    /// (in binary when the text starts with a based literal).
    fn is_valid_bit_value(&self, value: &str, solved: &str) -> bool {
        let value = value.trim();
        if is_bit_literal(value) {
            return true;
        }
        if parse_based_literal(value).is_some() {
            return false;
        }
        if starts_with_based_literal(value) {
            is_bit_literal(&ValueFormatter::format(solved, 2))
        } else {
            is_bit_literal(solved)
        }
    }

    fn is_array_valid_for_type(&self, value: &str, ty: &ParameterType) -> bool {
        let elements: Vec<String> = split_array(value)
            .into_iter()
            .map(|e| e.replace(' ', ""))
            .collect();
        if *ty == ParameterType::Bit && !self.bit_elements_have_same_width(&elements) {
            return false;
        }
        elements
            .iter()
            .all(|element| self.has_valid_value_for_type(element, ty))
    }

    fn bit_elements_have_same_width(&self, elements: &[String]) -> bool {
        let mut widths = elements.iter().map(|e| self.bit_width_of(e));
        match widths.next() {
            Some(first) => widths.all(|w| w == first),
            None => true,
        }
    }

    /// The declared size of a sized literal, otherwise the digit count of
    /// the evaluated value in binary.
    fn bit_width_of(&self, element: &str) -> usize {
        if let Some(size) = parse_based_literal(element).and_then(|l| l.size) {
            return size as usize;
        }
        let binary = ValueFormatter::format(&self.parser.parse_expression(element), 2);
        match binary.split_once("'b") {
            Some((_, digits)) => digits.len(),
            None => binary.len(),
        }
    }

    /// A boundary is only compared when it is a valid expression and the
    /// type is numeric (not `bit`, `string`, or untyped).
    pub fn should_compare_value_and_boundary(&self, boundary: &str, ty: &ParameterType) -> bool {
        self.parser.is_valid_expression(boundary)
            && !matches!(
                ty,
                ParameterType::Bit | ParameterType::String | ParameterType::Untyped
            )
    }

    /// The minimum, when compared at all, must itself be valid for the type.
    pub fn has_valid_minimum_value(&self, parameter: &Parameter) -> bool {
        !self.should_compare_value_and_boundary(&parameter.minimum, &parameter.ty)
            || self.has_valid_value_for_type(&parameter.minimum, &parameter.ty)
    }

    /// The maximum, when compared at all, must itself be valid for the type.
    pub fn has_valid_maximum_value(&self, parameter: &Parameter) -> bool {
        !self.should_compare_value_and_boundary(&parameter.maximum, &parameter.ty)
            || self.has_valid_value_for_type(&parameter.maximum, &parameter.ty)
    }

    /// Returns `true` if the value, or any element of an array value, is below the minimum.
    pub fn value_is_less_than_minimum(&self, parameter: &Parameter) -> bool {
        self.boundary_is_crossed(parameter, &parameter.minimum, Ordering::Less)
    }

    /// Returns `true` if the value, or any element of an array value, is above the maximum.
    pub fn value_is_greater_than_maximum(&self, parameter: &Parameter) -> bool {
        self.boundary_is_crossed(parameter, &parameter.maximum, Ordering::Greater)
    }

    fn boundary_is_crossed(&self, parameter: &Parameter, boundary: &str, crossing: Ordering) -> bool {
        let ty = &parameter.ty;
        if !self.should_compare_value_and_boundary(boundary, ty) {
            return false;
        }
        let Some(bound) = number_of(&self.parser.parse_expression(boundary), ty) else {
            return false;
        };
        let solved = self.parser.parse_expression(&parameter.value);
        let values = if is_array_literal(&solved) {
            split_array(&solved)
        } else {
            vec![solved]
        };
        values
            .iter()
            .filter_map(|v| number_of(v, ty))
            .any(|n| n.partial_cmp(&bound) == Some(crossing))
    }

    /// A non-empty choice reference must name a choice in the registry.
    pub fn has_valid_choice(&self, parameter: &Parameter) -> bool {
        parameter.choice_ref.is_empty() || self.find_choice(&parameter.choice_ref).is_some()
    }

    /// With a choice reference, the value (or every element of a brace list)
    /// must be one of the choice's enumerations.
    pub fn has_valid_value_for_choice(&self, parameter: &Parameter) -> bool {
        if parameter.choice_ref.is_empty() {
            return true;
        }
        let Some(choice) = self.find_choice(&parameter.choice_ref) else {
            return false;
        };
        if parameter.value.contains('{') && parameter.value.contains('}') {
            split_array(&parameter.value)
                .iter()
                .all(|element| choice.has_enumeration(element.trim()))
        } else {
            choice.has_enumeration(&parameter.value)
        }
    }

    /// The resolve attribute must be empty, `immediate`, `user` or `generated`.
    pub fn has_valid_resolve(&self, parameter: &Parameter) -> bool {
        !matches!(parameter.resolve, Resolve::Unknown(_))
    }

    /// `user` and `generated` parameters need a value ID.
    pub fn has_valid_value_id(&self, parameter: &Parameter) -> bool {
        !parameter.resolve.requires_value_id() || !parameter.value_id.trim().is_empty()
    }

    /// Only `bit` parameters may have vectors.
    pub fn has_valid_vector(&self, parameter: &Parameter) -> bool {
        parameter.vectors.is_empty() || parameter.ty == ParameterType::Bit
    }

    fn find_choice(&self, name: &str) -> Option<&'a Choice> {
        self.choices.iter().find(|c| c.name == name)
    }
}

/// Returns `true` for `0`, `1`, `'0`, `'1`, or a based binary/hex literal
/// whose digits match its declared width (a single bit when unsized).
fn is_bit_literal(text: &str) -> bool {
    if matches!(text, "0" | "1" | "'0" | "'1") {
        return true;
    }
    let Some(literal) = parse_based_literal(text) else {
        return false;
    };
    if literal.signed || literal.has_unknown_bits() {
        return false;
    }
    match (literal.base, literal.size) {
        (Base::Binary, Some(size)) => literal.digit_count() == size as usize,
        (Base::Hex, Some(size)) => {
            literal.digit_count() == size.div_ceil(4) as usize && literal.fits_in(size)
        }
        (Base::Binary | Base::Hex, None) => matches!(literal.raw_value(), Some(0 | 1)),
        _ => false,
    }
}

fn int_in_range(text: &str, min: i128, max: i128) -> bool {
    text.parse::<i128>()
        .is_ok_and(|n| (min..=max).contains(&n))
}

fn number_of(text: &str, ty: &ParameterType) -> Option<Number> {
    let text = text.trim();
    if ty.is_real() {
        text.parse::<f64>().ok().filter(|f| f.is_finite()).map(Number::Real)
    } else {
        text.parse::<i128>().ok().map(Number::Int)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipx_expr::SystemVerilogExpressionParser;
    use ipx_model::{ElementKind, Vector};

    fn typed(ty: &str, value: &str) -> Parameter {
        Parameter {
            ty: ty.parse().unwrap(),
            ..Parameter::new("param", value)
        }
    }

    fn value_ok(ty: &str, value: &str) -> bool {
        let parser = SystemVerilogExpressionParser::new();
        let validator = ParameterValidator::new(&parser, &[]);
        validator.has_valid_value_for_type(value, &ty.parse().unwrap())
    }

    fn errors(parameter: &Parameter, choices: &[Choice]) -> Vec<String> {
        let parser = SystemVerilogExpressionParser::new();
        ParameterValidator::new(&parser, choices).find_errors_in(parameter, "test")
    }

    #[test]
    fn bit_values() {
        for value in [
            "0", "1", "'1", "'b0", "'b1", "2'b11", "'h1", "8'h11", "16'h1289", "8'haf", "8'hED",
            "'h1 + 'h1 - 'b1",
        ] {
            assert!(value_ok("bit", value), "{value} should be a valid bit");
        }
        for value in [
            "'b11", "3'b13", "3'b3f", "'h11", "2", "-1", "some text", "\"some other text\"",
        ] {
            assert!(!value_ok("bit", value), "{value} should not be a valid bit");
        }
    }

    #[test]
    fn bit_literal_widths() {
        assert!(is_bit_literal("4'b10_10"));
        assert!(!is_bit_literal("4'b101"));
        assert!(is_bit_literal("3'h7"));
        assert!(!is_bit_literal("3'hf"));
        assert!(!is_bit_literal("8'h1"));
        assert!(!is_bit_literal("4'sb1010"));
        assert!(!is_bit_literal("4'bxx01"));
        assert!(!is_bit_literal("4'd3"));
    }

    #[test]
    fn wrongly_sized_literal_is_not_rescued_by_its_value() {
        for value in ["4'b1", "8'b1", "3'b0", "3'b10", "4'b101"] {
            assert!(!value_ok("bit", value), "{value} should not be a valid bit");
        }
        assert!(value_ok("bit", "4'b0001"));
    }

    #[test]
    fn bit_arrays_need_equal_widths() {
        assert!(value_ok("bit", "{'b1, 'b0}"));
        assert!(!value_ok("bit", "{2'b11, 'b1}"));
        assert!(!value_ok("bit", "'{1, 2}"));
    }

    #[test]
    fn bit_array_widths_follow_declared_size() {
        assert!(value_ok("bit", "{2'b01, 2'b11}"));
        assert!(value_ok("bit", "{4'b0001, 4'b1000}"));
        assert!(!value_ok("bit", "{2'b01, 4'b0001}"));
    }

    #[test]
    fn byte_values() {
        assert!(value_ok("byte", "127"));
        assert!(value_ok("byte", "-128"));
        assert!(value_ok("byte", "'h01 + 'h0E"));
        assert!(!value_ok("byte", "128"));
        assert!(!value_ok("byte", "-129"));
        assert!(!value_ok("byte", "-9999999999"));
        assert!(!value_ok("byte", "1.5"));
    }

    #[test]
    fn shortint_and_int_values() {
        assert!(value_ok("shortint", "32767"));
        assert!(value_ok("shortint", "-32768"));
        assert!(!value_ok("shortint", "32768"));
        assert!(!value_ok("shortint", "-32769"));
        assert!(value_ok("int", "2147483647"));
        assert!(value_ok("int", "-2147483648"));
        assert!(!value_ok("int", "2147483648"));
        assert!(!value_ok("int", "-2147483649"));
    }

    #[test]
    fn longint_values() {
        assert!(value_ok("longint", "2147483648"));
        assert!(value_ok("longint", "-2147483649"));
        assert!(value_ok("longint", "-9223372036854775808"));
        assert!(value_ok("longint", "18446744073709551615"));
        assert!(value_ok("longint", "12 + 12"));
        assert!(!value_ok("longint", "18446744073709551616"));
        assert!(!value_ok("longint", "-9223372036854775809"));
    }

    #[test]
    fn real_values() {
        assert!(value_ok("real", "1.5"));
        assert!(value_ok("real", "3"));
        assert!(value_ok("shortreal", "-2.25e3"));
        assert!(!value_ok("shortreal", "1e39"));
        assert!(value_ok("real", "1e39"));
        assert!(!value_ok("real", "\"1.5\""));
    }

    #[test]
    fn string_values() {
        assert!(!value_ok("string", ""));
        assert!(!value_ok("string", "text"));
        assert!(value_ok("string", "\"\""));
        assert!(value_ok("string", "\"text\""));
        assert!(!value_ok("string", "1"));
        assert!(!value_ok("string", "12 + 12"));
    }

    #[test]
    fn untyped_values() {
        assert!(value_ok("", "12 + 12"));
        assert!(value_ok("", "\"text\""));
        assert!(!value_ok("", "unknown_name"));
        assert!(!value_ok("", "1 +"));
    }

    #[test]
    fn array_values_check_every_element() {
        assert!(value_ok("int", "'{1, 2, 3}"));
        assert!(!value_ok("byte", "{1, 200}"));
        assert!(value_ok("string", "{\"a\", \"b\"}"));
    }

    #[test]
    fn valid_parameter_has_no_errors() {
        let p = Parameter {
            minimum: "0".to_string(),
            maximum: "16".to_string(),
            ..typed("int", "8")
        };
        assert!(errors(&p, &[]).is_empty());
    }

    #[test]
    fn value_type_error_message() {
        assert_eq!(
            errors(&typed("byte", "128"), &[]),
            vec!["Value 128 is not valid for type byte in parameter param within test"]
        );
    }

    #[test]
    fn missing_value_replaces_value_checks() {
        let p = Parameter {
            minimum: "4".to_string(),
            ..typed("int", "")
        };
        assert_eq!(
            errors(&p, &[]),
            vec!["No value specified for parameter param within test"]
        );
    }

    #[test]
    fn bounds_are_compared() {
        let p = Parameter {
            minimum: "4".to_string(),
            maximum: "8".to_string(),
            ..typed("int", "2")
        };
        assert_eq!(
            errors(&p, &[]),
            vec!["Value 2 violates minimum value 4 in parameter param within test"]
        );
        let p = Parameter {
            value: "9".to_string(),
            ..p
        };
        assert_eq!(
            errors(&p, &[]),
            vec!["Value 9 violates maximum value 8 in parameter param within test"]
        );
    }

    #[test]
    fn bounds_use_real_semantics_for_real_types() {
        let p = Parameter {
            minimum: "1.5".to_string(),
            ..typed("real", "1.25")
        };
        let parser = SystemVerilogExpressionParser::new();
        let validator = ParameterValidator::new(&parser, &[]);
        assert!(validator.value_is_less_than_minimum(&p));
        let p = Parameter {
            value: "1.75".to_string(),
            ..p
        };
        assert!(!validator.value_is_less_than_minimum(&p));
    }

    #[test]
    fn bounds_use_exact_64_bit_integers() {
        let p = Parameter {
            maximum: "9223372036854775807".to_string(),
            ..typed("longint", "9223372036854775808")
        };
        assert_eq!(
            errors(&p, &[]),
            vec![
                "Value 9223372036854775808 violates maximum value 9223372036854775807 in parameter param within test"
            ]
        );
    }

    #[test]
    fn array_elements_are_checked_against_bounds() {
        let p = Parameter {
            maximum: "10".to_string(),
            ..typed("int", "{1, 20, 3}")
        };
        let parser = SystemVerilogExpressionParser::new();
        let validator = ParameterValidator::new(&parser, &[]);
        assert!(validator.value_is_greater_than_maximum(&p));
        assert!(!validator.value_is_less_than_minimum(&p));
    }

    #[test]
    fn bounds_skipped_for_bit_string_and_untyped() {
        for ty in ["bit", "string", ""] {
            let parser = SystemVerilogExpressionParser::new();
            let validator = ParameterValidator::new(&parser, &[]);
            assert!(!validator.should_compare_value_and_boundary("4", &ty.parse().unwrap()));
        }
    }

    #[test]
    fn non_numeric_bound_is_reported_by_type_rule_only() {
        let p = Parameter {
            minimum: "\"low\"".to_string(),
            ..typed("int", "5")
        };
        assert_eq!(
            errors(&p, &[]),
            vec!["Minimum value \"low\" is not valid for type int in parameter param within test"]
        );
    }

    #[test]
    fn invalid_maximum_for_type() {
        let p = Parameter {
            maximum: "300".to_string(),
            ..typed("byte", "5")
        };
        assert_eq!(
            errors(&p, &[]),
            vec!["Maximum value 300 is not valid for type byte in parameter param within test"]
        );
    }

    #[test]
    fn invalid_type_reports_both_value_and_type() {
        let p = typed("integer", "1");
        assert_eq!(
            errors(&p, &[]),
            vec![
                "Value 1 is not valid for type integer in parameter param within test",
                "Invalid type integer specified for parameter param within test",
            ]
        );
    }

    #[test]
    fn choice_checks() {
        let choices = [Choice::new("widths", ["8", "16", "32"])];
        let p = Parameter {
            choice_ref: "widths".to_string(),
            ..typed("int", "16")
        };
        assert!(errors(&p, &choices).is_empty());

        let p = Parameter {
            value: "'{8, 32}".to_string(),
            ..p
        };
        assert!(errors(&p, &choices).is_empty());

        let p = Parameter {
            value: "12".to_string(),
            ..p
        };
        assert_eq!(
            errors(&p, &choices),
            vec!["Value 12 references unknown enumeration for choice widths in parameter param within test"]
        );
    }

    #[test]
    fn missing_choice_reports_enumeration_and_choice() {
        let p = Parameter {
            choice_ref: "nowhere".to_string(),
            ..typed("int", "1")
        };
        assert_eq!(
            errors(&p, &[]),
            vec![
                "Value 1 references unknown enumeration for choice nowhere in parameter param within test",
                "Choice nowhere referenced in parameter param is not specified within test",
            ]
        );
    }

    #[test]
    fn choice_lookup_takes_first_match() {
        let choices = [Choice::new("c", ["1"]), Choice::new("c", ["2"])];
        let p = Parameter {
            choice_ref: "c".to_string(),
            ..typed("int", "2")
        };
        assert_eq!(errors(&p, &choices).len(), 1);
    }

    #[test]
    fn resolve_and_value_id() {
        let p = Parameter {
            resolve: Resolve::Generated,
            ..typed("int", "1")
        };
        assert_eq!(
            errors(&p, &[]),
            vec!["No value ID specified for parameter param with resolve generated within test"]
        );

        let p = Parameter {
            value_id: "id_1".to_string(),
            ..p
        };
        assert!(errors(&p, &[]).is_empty());

        let p = Parameter {
            resolve: Resolve::User,
            ..typed("int", "1")
        };
        assert_eq!(
            errors(&p, &[]),
            vec!["No value ID specified for parameter param with resolve user within test"]
        );
        let p = Parameter {
            value_id: "id_2".to_string(),
            ..p
        };
        assert!(errors(&p, &[]).is_empty());

        let p = Parameter {
            resolve: Resolve::Immediate,
            ..typed("int", "1")
        };
        assert!(errors(&p, &[]).is_empty());

        let p = Parameter {
            resolve: Resolve::Unknown("dependent".to_string()),
            ..typed("int", "1")
        };
        assert_eq!(
            errors(&p, &[]),
            vec!["Invalid resolve dependent specified for parameter param within test"]
        );
    }

    #[test]
    fn vectors_only_on_bit() {
        let vectors = vec![Vector {
            left: "7".to_string(),
            right: "0".to_string(),
        }];
        let p = Parameter {
            vectors: vectors.clone(),
            ..typed("int", "1")
        };
        assert_eq!(
            errors(&p, &[]),
            vec!["Invalid vector specified for parameter param within test"]
        );
        let p = Parameter {
            vectors,
            ..typed("bit", "1")
        };
        assert!(errors(&p, &[]).is_empty());
    }

    #[test]
    fn every_violation_is_accumulated_in_order() {
        let p = Parameter {
            name: " ".to_string(),
            element: ElementKind::ModuleParameter,
            ty: ParameterType::Unknown("float".to_string()),
            value: String::new(),
            choice_ref: "none".to_string(),
            resolve: Resolve::User,
            vectors: vec![Vector::default()],
            ..Parameter::default()
        };
        let parser = SystemVerilogExpressionParser::new();
        let validator = ParameterValidator::new(&parser, &[]);
        assert_eq!(
            validator.violations(&p),
            vec![
                ParameterViolation::Name,
                ParameterViolation::MissingValue,
                ParameterViolation::Type,
                ParameterViolation::UnknownChoice,
                ParameterViolation::ValueId,
                ParameterViolation::Vector,
            ]
        );
        assert!(!validator.validate(&p));
        assert_eq!(
            validator.find_errors_in(&p, "ctx")[0],
            "No valid name specified for module parameter   within ctx"
        );
    }

    #[test]
    fn validate_agrees_with_errors() {
        let parser = SystemVerilogExpressionParser::new();
        let validator = ParameterValidator::new(&parser, &[]);
        for p in [typed("int", "1"), typed("byte", "300"), typed("bit", "2'b11")] {
            assert_eq!(
                validator.validate(&p),
                validator.find_errors_in(&p, "c").is_empty()
            );
        }
    }

    #[test]
    fn report_emits_coded_diagnostics() {
        let parser = SystemVerilogExpressionParser::new();
        let validator = ParameterValidator::new(&parser, &[]);
        let mut sink = DiagnosticSink::new();
        validator.report(&typed("shortint", "40000"), "top", &mut sink);
        let diags = sink.take_all();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code.to_string(), "P103");
    }

    #[test]
    fn identifiers_resolve_through_the_parser() {
        let parser = SystemVerilogExpressionParser::with_symbols([("WIDTH", "8")]);
        let validator = ParameterValidator::new(&parser, &[]);
        assert!(validator.validate(&typed("byte", "WIDTH * 15")));
        assert!(!validator.validate(&typed("byte", "WIDTH * 16")));
    }
}
