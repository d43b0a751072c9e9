use proptest::prelude::*;
use reckon::{error::EvalError, evaluate};

/// Well-formed expressions over small non-negative integers.
fn expression() -> impl Strategy<Value = String> {
    let leaf = (0_u32..100).prop_map(|n| n.to_string());
    leaf.prop_recursive(4, 32, 2, |inner| {
            let operator = prop::sample::select(vec!['+', '-', '*', '/']);
            prop_oneof![(inner.clone(), operator, inner.clone())
                            .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
                        inner.clone().prop_map(|e| format!("({e})")),
                        inner.prop_map(|e| format!("-({e})"))]
        })
}

proptest! {
    #[test]
    fn multiplication_binds_tighter(a in 0_u32..1000, b in 0_u32..1000, c in 0_u32..1000) {
        let (x, y, z) = (f64::from(a), f64::from(b), f64::from(c));
        prop_assert_eq!(evaluate(&format!("{a}+{b}*{c}")), Ok(x + y * z));
        prop_assert_eq!(evaluate(&format!("{a}*{b}-{c}")), Ok(x * y - z));
        prop_assert_eq!(evaluate(&format!("({a}+{b})*{c}")), Ok((x + y) * z));
    }

    #[test]
    fn subtraction_folds_left(terms in prop::collection::vec(0_u32..1000, 1..8)) {
        let src = terms.iter().map(u32::to_string).collect::<Vec<_>>().join(" - ");
        let expected = terms[1..].iter()
                                 .fold(f64::from(terms[0]), |acc, &t| acc - f64::from(t));
        prop_assert_eq!(evaluate(&src), Ok(expected));
    }

    #[test]
    fn division_folds_left(terms in prop::collection::vec(1_u32..50, 1..8)) {
        let src = terms.iter().map(u32::to_string).collect::<Vec<_>>().join("/");
        let expected = terms[1..].iter()
                                 .fold(f64::from(terms[0]), |acc, &t| acc / f64::from(t));
        prop_assert_eq!(evaluate(&src), Ok(expected));
    }

    #[test]
    fn grouping_does_not_change_value(src in expression()) {
        let plain = evaluate(&src);
        let grouped = evaluate(&format!("({src})"));
        let negated_twice = evaluate(&format!("-(-({src}))"));
        match (plain, grouped, negated_twice) {
            (Ok(a), Ok(b), Ok(c)) => {
                prop_assert_eq!(a, b);
                prop_assert_eq!(a, c);
            },
            (Err(EvalError::DivisionByZero { .. }),
             Err(EvalError::DivisionByZero { .. }),
             Err(EvalError::DivisionByZero { .. })) => {},
            other => prop_assert!(false, "{src:?} disagreed: {other:?}"),
        }
    }

    #[test]
    fn results_are_always_finite(src in expression()) {
        if let Ok(value) = evaluate(&src) {
            prop_assert!(value.is_finite(), "{src:?} = {value}");
        }
    }

    #[test]
    fn fractions_of_any_length_stay_in_range(digits in "[0-9]{1,600}") {
        let value = evaluate(&format!("0.{digits}")).unwrap();
        prop_assert!(value.is_finite());
        prop_assert!((0.0..=1.0 + 1e-12).contains(&value), "0.{digits} = {value}");
    }

    #[test]
    fn zero_divisor_is_reported(a in 0_u32..1_000_000, spaces in 0_usize..3) {
        let pad = " ".repeat(spaces);
        let src = format!("{a}{pad}/{pad}0");
        let position = a.to_string().len() + spaces;
        prop_assert_eq!(evaluate(&src), Err(EvalError::DivisionByZero { position }));
    }

    #[test]
    fn unclosed_group_is_reported(src in expression()) {
        prop_assume!(evaluate(&src).is_ok());
        prop_assert_eq!(evaluate(&format!("({src}")),
                        Err(EvalError::UnmatchedParenthesis { position: 0 }));
    }
}
