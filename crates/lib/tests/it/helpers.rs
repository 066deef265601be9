use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use dark_fns::{Function, Value};
use serde_json::json;

/// Build a Value from a JSON literal
pub fn val(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Build a sequence Value from numbers
pub fn nums(items: &[f64]) -> Vec<Value> {
    items.iter().copied().map(Value::from).collect()
}

/// Extract the numbers of a sequence Value, panicking on anything else
pub fn as_numbers(value: &Value) -> Vec<f64> {
    value
        .as_array()
        .unwrap_or_else(|| panic!("Expected a sequence, got {value:?}"))
        .iter()
        .map(|item| {
            item.as_number()
                .unwrap_or_else(|| panic!("Expected a number, got {item:?}"))
        })
        .collect()
}

/// A function summing its numeric arguments
pub fn sum_fn() -> Function {
    Function::from_fn(|args| Value::from(args.iter().filter_map(Value::as_number).sum::<f64>()))
}

/// A function returning its argument at `index`
pub fn arg_fn(index: usize) -> Function {
    Function::from_fn(move |args| args.get(index).cloned().unwrap_or_default())
}

/// A function prefixing its first argument with `greeting`
pub fn greeter(greeting: &'static str) -> Function {
    Function::from_fn(move |args| {
        Value::from(format!("{greeting} {}", args.first().cloned().unwrap_or_default()))
    })
}

/// A function counting how often it ran, returning the count before the call
pub fn counting_fn() -> (Function, Arc<AtomicUsize>) {
    let counter = Arc::new(AtomicUsize::new(0));
    let f = {
        let counter = Arc::clone(&counter);
        Function::from_fn(move |_| Value::from(counter.fetch_add(1, Ordering::SeqCst)))
    };
    (f, counter)
}

/// A nested configuration-shaped mapping
pub fn setup_config() -> Value {
    val(json!({
        "server": {
            "host": "localhost",
            "port": 80,
            "tags": ["a"],
            "tls": {"enabled": false}
        },
        "workers": [{"name": "w0"}, {"name": "w1"}]
    }))
}
