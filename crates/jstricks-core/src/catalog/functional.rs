//! Functional programming tricks

use crate::types::TrickExample;

pub static EXAMPLES: &[TrickExample] = &[
    TrickExample {
        id: "functional-function-composition",
        title: "Function Composition",
        description: "Combine functions right to left",
        code: r#"const compose = (...fns) => x => fns.reduceRight((acc, fn) => fn(acc), x);
const addThenDouble = compose(x => x * 2, x => x + 1);
const result = addThenDouble(5)"#,
        result: Some("12"),
        explanation: "reduceRight() applies functions from right to left, each receiving the previous result",
    },
    TrickExample {
        id: "functional-pipe",
        title: "Pipe",
        description: "Combine functions left to right",
        code: r#"const pipe = (...fns) => x => fns.reduce((acc, fn) => fn(acc), x);
const doubleThenAdd = pipe(x => x * 2, x => x + 1);
const result = doubleThenAdd(5)"#,
        result: Some("11"),
        explanation: "reduce() applies functions left to right - the readable twin of compose",
    },
    TrickExample {
        id: "functional-curry-function",
        title: "Curry Function",
        description: "Transform multi-argument function into chained calls",
        code: r#"const curry = fn => (...args) =>
  args.length >= fn.length
    ? fn(...args)
    : curry(fn.bind(null, ...args));
const add = curry((a, b, c) => a + b + c);
const result = add(1)(2)(3)"#,
        result: Some("6"),
        explanation: "Collects arguments across calls until the original function's arity is satisfied",
    },
    TrickExample {
        id: "functional-run-once",
        title: "Run Once",
        description: "Ensure a function executes only one time",
        code: r#"const once = fn => {
  let done = false, result;
  return (...args) => {
    if (!done) {
      done = true;
      result = fn(...args);
    }
    return result;
  };
};
const init = once(() => 'initialized')"#,
        result: Some("'initialized'"),
        explanation: "Closure captures a flag and the first result, later calls return the cached value",
    },
];
