//! Property-based tests for the currying engine.
//!
//! This module verifies that curried functions satisfy:
//!
//! - **Partition**: any split of the arguments into ordered groups gives the
//!   same result as a direct call
//! - **Single invocation**: the underlying function runs exactly once per
//!   completed chain
//! - **Independence**: chains started from the same function never share
//!   accumulated arguments
//! - **Empty step**: a zero-argument call before the threshold changes
//!   nothing

use std::cell::Cell;
use std::rc::Rc;

use pointfree::compose::{curry, curry_n, relabel};
use pointfree::value::{CallError, Function, Value};
use proptest::prelude::*;

fn collect() -> Function {
    Function::new(0, |_, arguments| Value::list(arguments.iter().cloned()))
}

fn counting(calls: &Rc<Cell<usize>>) -> Function {
    let calls = Rc::clone(calls);
    Function::new(0, move |_, arguments| {
        calls.set(calls.get() + 1);
        Value::list(arguments.iter().cloned())
    })
}

/// Splits `arguments` before every index whose flag is set.
fn partition(arguments: &[Value], cuts: &[bool]) -> Vec<Vec<Value>> {
    let mut groups = vec![Vec::new()];
    for (index, argument) in arguments.iter().enumerate() {
        if index > 0 && cuts.get(index - 1).copied().unwrap_or(false) {
            groups.push(Vec::new());
        }
        if let Some(group) = groups.last_mut() {
            group.push(argument.clone());
        }
    }
    groups
}

fn apply_groups(function: &Function, groups: &[Vec<Value>]) -> Result<Value, CallError> {
    let mut current = Value::Function(function.clone());
    for group in groups {
        current = current.call(group)?;
    }
    Ok(current)
}

fn arguments_strategy() -> impl Strategy<Value = (Vec<Value>, Vec<bool>)> {
    (1usize..7).prop_flat_map(|arity| {
        (
            prop::collection::vec(any::<i32>().prop_map(Value::from), arity),
            prop::collection::vec(any::<bool>(), arity - 1),
        )
    })
}

// =============================================================================
// Partition Law
// =============================================================================

proptest! {
    /// Partition: curry(f)(g1)...(gm) == f(a1, ..., an)
    #[test]
    fn prop_curry_partition((arguments, cuts) in arguments_strategy()) {
        let function = relabel(arguments.len(), &collect());
        let curried = curry(&function);

        let groups = partition(&arguments, &cuts);
        let result = apply_groups(&curried, &groups);

        prop_assert_eq!(result, Ok(function.call(&arguments)));
    }
}

// =============================================================================
// Single Invocation
// =============================================================================

proptest! {
    /// One argument per call and all at once both invoke the function once.
    #[test]
    fn prop_curry_invokes_once(arguments in prop::collection::vec(any::<i32>().prop_map(Value::from), 1..7)) {
        let arity = arguments.len();

        let one_at_a_time_calls = Rc::new(Cell::new(0));
        let one_at_a_time = curry_n(&counting(&one_at_a_time_calls), arity);
        let singletons: Vec<Vec<Value>> = arguments.iter().cloned().map(|argument| vec![argument]).collect();
        let stepwise = apply_groups(&one_at_a_time, &singletons);

        let all_at_once_calls = Rc::new(Cell::new(0));
        let all_at_once = curry_n(&counting(&all_at_once_calls), arity);
        let direct = all_at_once.call(&arguments);

        prop_assert_eq!(stepwise, Ok(direct));
        prop_assert_eq!(one_at_a_time_calls.get(), 1);
        prop_assert_eq!(all_at_once_calls.get(), 1);
    }
}

// =============================================================================
// Independence
// =============================================================================

proptest! {
    /// Chains started from the same partial application do not interfere.
    #[test]
    fn prop_curry_chains_are_independent(
        shared in any::<i32>(),
        first in any::<i32>(),
        second in any::<i32>(),
        last in any::<i32>(),
    ) {
        let curried = curry_n(&collect(), 3);
        let base = curried.call(&[Value::from(shared)]);

        let chain_a = base.call(&[Value::from(first)]).and_then(|value| value.call(&[Value::from(last)]));
        let chain_b = base.call(&[Value::from(second)]).and_then(|value| value.call(&[Value::from(last)]));

        prop_assert_eq!(
            chain_a,
            Ok(Value::list([Value::from(shared), Value::from(first), Value::from(last)]))
        );
        prop_assert_eq!(
            chain_b,
            Ok(Value::list([Value::from(shared), Value::from(second), Value::from(last)]))
        );
    }
}

// =============================================================================
// Empty Step
// =============================================================================

proptest! {
    /// curry(f)() behaves as curry(f)
    #[test]
    fn prop_curry_empty_step(left in any::<i32>(), right in any::<i32>()) {
        let curried = curry_n(&collect(), 2);
        let stepped = curried.call(&[]);
        let expected = curried.call(&[Value::from(left), Value::from(right)]);

        prop_assert_eq!(stepped.call(&[Value::from(left), Value::from(right)]), Ok(expected));
    }
}
