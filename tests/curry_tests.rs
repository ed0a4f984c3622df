//! Unit tests for the currying engine and the arity wrappers.

use std::cell::Cell;
use std::rc::Rc;

use pointfree::compose::{ArityMode, curry, curry_n, fix_arity, n_ary, relabel};
use pointfree::value::{CallError, Function, Value};
use pointfree::{function, values};
use rstest::rstest;

fn add() -> Function {
    function!("add", |left, right| {
        left.as_number().zip(right.as_number()).map(|(left, right)| left + right)
    })
}

fn collect() -> Function {
    Function::new(0, |_, arguments| Value::list(arguments.iter().cloned()))
}

// =============================================================================
// curry
// =============================================================================

mod curry_tests {
    use super::*;

    #[test]
    fn test_curry_empty_call_then_one_by_one() -> Result<(), CallError> {
        let curried = curry(&add());
        let result = curried.call(&[]).call(&values![1])?.call(&values![2])?;
        assert_eq!(result, Value::from(3));
        Ok(())
    }

    #[test]
    fn test_curry_all_at_once() {
        assert_eq!(curry(&add()).call(&values![1, 2]), Value::from(3));
    }

    #[test]
    fn test_curry_partial_application_is_reusable() -> Result<(), CallError> {
        let add_five = curry(&add()).call(&values![5]);
        for index in 0..100 {
            assert_eq!(add_five.call(&values![index])?, Value::from(5 + index));
        }
        Ok(())
    }

    #[test]
    fn test_curry_keeps_name() {
        assert_eq!(curry(&add()).name(), Some("add"));
    }

    #[test]
    fn test_curry_of_relabeled_variadic() -> Result<(), CallError> {
        let three = curry(&relabel(3, &collect()));
        let result = three.call(&values![1]).call(&values![2])?.call(&values![3, 4]);
        assert_eq!(result, Ok(Value::list(values![1, 2, 3, 4])));
        Ok(())
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(4)]
    fn test_curry_n_declares_target_arity(#[case] arity: usize) {
        assert_eq!(curry_n(&collect(), arity).arity(), arity);
    }

    #[test]
    fn test_curry_invokes_once_per_chain() -> Result<(), CallError> {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let counted = Function::new(2, move |_, _| {
            counter.set(counter.get() + 1);
            Value::Null
        });
        let curried = curry(&counted);

        let partial = curried.call(&values![1]);
        assert_eq!(calls.get(), 0);

        partial.call(&values![2])?;
        partial.call(&values![3])?;
        assert_eq!(calls.get(), 2);
        Ok(())
    }

    #[test]
    fn test_calling_a_completed_result_is_an_error() {
        let result = curry(&add()).call(&values![1, 2]);
        assert_eq!(
            result.call(&values![3]),
            Err(CallError::NotCallable { found: "number" })
        );
    }

    #[test]
    fn test_long_chain_fed_one_argument_at_a_time() -> Result<(), CallError> {
        const ARITY: usize = 2000;
        let count = Function::new(0, |_, arguments| Value::from(arguments.len()));
        let mut partial = Value::from(curry_n(&count, ARITY));
        for _ in 1..ARITY {
            partial = partial.call(&values![0])?;
            assert!(partial.as_function().is_some());
        }
        assert_eq!(partial.call(&values![0])?, Value::from(ARITY));
        Ok(())
    }
}

// =============================================================================
// fix_arity
// =============================================================================

mod fix_arity_tests {
    use super::*;

    #[test]
    fn test_truncate_calls_with_first_n() {
        let binary = fix_arity(2, &collect(), ArityMode::Truncate);
        assert_eq!(binary.arity(), 2);
        assert_eq!(binary.call(&values![1, 2, 3]), Value::list(values![1, 2]));
    }

    #[test]
    fn test_relabel_accepts_huge_arity() {
        let relabeled = relabel(1 << 40, &collect());
        assert_eq!(relabeled.arity(), 1 << 40);
        assert_eq!(relabeled.call(&values![1]), Value::list(values![1]));
    }

    #[test]
    fn test_relabel_calls_with_everything() {
        let binary = fix_arity(2, &collect(), ArityMode::Relabel);
        assert_eq!(binary.arity(), 2);
        assert_eq!(binary.call(&values![1, 2, 3]), Value::list(values![1, 2, 3]));
    }

    #[test]
    fn test_default_mode_truncates() {
        assert_eq!(ArityMode::default(), ArityMode::Truncate);
    }

    #[test]
    fn test_n_ary_then_curry_waits_for_n() -> Result<(), CallError> {
        let unary_add = n_ary(1, &add());
        let curried = curry(&unary_add);
        // The second argument never reaches `add`.
        assert_eq!(curried.call(&values![1, 2]), Value::Undefined);

        let widened = curry(&n_ary(2, &collect()));
        let waiting = widened.call(&values![1]);
        assert_eq!(waiting.call(&values![2])?, Value::list(values![1, 2]));
        Ok(())
    }
}
