//! Native list methods: `slice`, `join`, `indexOf`.

use super::{rebox, relative_index};
use crate::value::{Function, Object, Value};

fn list_items(receiver: Option<&Value>) -> Option<&[Value]> {
    receiver?.unboxed().as_list()
}

pub(super) fn install(prototype: &Object) {
    prototype.define(Function::named("slice", 2, |receiver, arguments| {
        let (Some(receiver), Some(items)) = (receiver, list_items(receiver)) else {
            return Value::Undefined;
        };
        let start = relative_index(arguments.first().unwrap_or(&Value::Undefined), items.len(), 0);
        let end = relative_index(
            arguments.get(1).unwrap_or(&Value::Undefined),
            items.len(),
            items.len(),
        );
        let sliced = items.get(start..end.max(start)).unwrap_or_default();
        rebox(receiver, Value::list(sliced.iter().cloned()))
    }));

    prototype.define(Function::named("join", 1, |receiver, arguments| {
        let Some(items) = list_items(receiver) else {
            return Value::Undefined;
        };
        let separator = match arguments.first() {
            None | Some(Value::Undefined) => ",".to_string(),
            Some(separator) => separator.to_string(),
        };
        let rendered: Vec<String> = items
            .iter()
            .map(|item| if item.is_nullish() { String::new() } else { item.to_string() })
            .collect();
        Value::from(rendered.join(&separator))
    }));

    prototype.define(Function::named("indexOf", 1, |receiver, arguments| {
        let Some(items) = list_items(receiver) else {
            return Value::Undefined;
        };
        let needle = arguments.first().unwrap_or(&Value::Undefined);
        items
            .iter()
            .position(|item| item == needle)
            .map_or(Value::from(-1), Value::from)
    }));
}
